use crate::Centroid;
use crate::Fault;
use crate::Result;

/// What to do with a cluster that received no points in a round.
/// The mean of nothing is undefined, so one of these has to be chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Vacancy {
    /// Fail the run.
    #[default]
    Abort,
    /// Keep the centroid from the previous round.
    Retain,
}

impl Vacancy {
    /// Resolve the centroid of an empty `cluster` during `round`.
    pub fn resolve(&self, cluster: usize, round: usize, previous: &Centroid) -> Result<Centroid> {
        match self {
            Self::Abort => Err(Fault::Degenerate { cluster, round }),
            Self::Retain => {
                log::debug!(
                    "cluster {} empty in round {}, keeping {}",
                    cluster + 1,
                    round,
                    previous
                );
                Ok(previous.clone())
            }
        }
    }
}

impl From<bool> for Vacancy {
    fn from(retain: bool) -> Self {
        if retain { Self::Retain } else { Self::Abort }
    }
}
