pub mod min_queue;

pub use min_queue::MinQueue;
