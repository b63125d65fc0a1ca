use std::fmt::{self, Debug, Display};

use num_traits::{PrimInt, Unsigned};

use crate::algorithm::ShortestPaths;

/// Renders the distance and predecessor tables of a solve as text
///
/// Every vertex appears in the distance section, with the infinity
/// sentinel printed as `INF`; the predecessor section lists only vertices
/// that have a recorded predecessor.
pub struct Tables<'a, W>
where
    W: PrimInt + Unsigned + Debug + Display,
{
    paths: &'a ShortestPaths<W>,
}

impl<'a, W> Tables<'a, W>
where
    W: PrimInt + Unsigned + Debug + Display,
{
    pub fn new(paths: &'a ShortestPaths<W>) -> Self {
        Tables { paths }
    }
}

impl<W> Display for Tables<'_, W>
where
    W: PrimInt + Unsigned + Debug + Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Distance Table:")?;
        for (vertex, distance) in &self.paths.distances {
            if *distance == W::max_value() {
                writeln!(f, "vertex: {}\t| distance: INF", vertex)?;
            } else {
                writeln!(f, "vertex: {}\t| distance: {}", vertex, distance)?;
            }
        }

        writeln!(f)?;
        writeln!(f, "Predecessor Table:")?;
        for (vertex, predecessor) in &self.paths.predecessors {
            writeln!(f, "vertex: {}\t| predecessor: {}", vertex, predecessor)?;
        }

        Ok(())
    }
}
