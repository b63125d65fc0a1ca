pub mod builder;
pub mod description;
pub mod named;
pub mod traits;

pub use builder::GraphBuilder;
pub use description::{EdgeDescription, GraphDescription};
pub use named::NamedGraph;
pub use traits::Graph;
