use crate::Assignment;
use crate::Centroid;
use crate::Energy;
use crate::Fault;
use crate::Initializer;
use crate::MIN_K;
use crate::Point;
use crate::Position;
use crate::ROUNDS;
use crate::Result;
use crate::Vacancy;
use rand::Rng;

/// One assignment/recomputation step: the partition computed against the
/// incoming centroids, and the centroids recomputed from that partition.
#[derive(Debug, Clone)]
pub struct Round {
    pub assignment: Assignment,
    pub centroids: Vec<Centroid>,
}

/// Final state of a run. The assignment is the one consumed by the last
/// round's recomputation, not a fresh pass against the final centroids.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub assignment: Assignment,
    pub centroids: Vec<Centroid>,
    pub rounds: usize,
}

/// Lloyd's k-means with a fixed round budget. No convergence check:
/// the loop always runs every round it is given.
#[derive(Debug, Clone)]
pub struct Lloyd {
    points: Vec<Point>,
    centroids: Vec<Centroid>,
    vacancy: Vacancy,
    rounds: usize,
}

impl Lloyd {
    /// Seed k centroids at random inside the bounding box of the points.
    pub fn new<R: Rng>(points: Vec<Point>, k: usize, rng: &mut R) -> Result<Self> {
        Self::check(k)?;
        let centroids = Initializer::new(&points)?.centroids(k, rng);
        Self::from_centroids(points, centroids)
    }

    /// Start from explicit centroids. k is the number of centroids given,
    /// and every centroid must share the dimensionality of the points.
    pub fn from_centroids(points: Vec<Point>, centroids: Vec<Centroid>) -> Result<Self> {
        Self::check(centroids.len())?;
        let expected = points.first().ok_or(Fault::Empty)?.dimensions();
        let found = points
            .iter()
            .map(|p| p.dimensions())
            .chain(centroids.iter().map(|c| c.dimensions()))
            .find(|&d| d != expected);
        match found {
            Some(found) => Err(Fault::Dimension { expected, found }),
            None => Ok(Self {
                points,
                centroids,
                vacancy: Vacancy::default(),
                rounds: ROUNDS,
            }),
        }
    }

    fn check(k: usize) -> Result<()> {
        match k {
            k if k < MIN_K => Err(Fault::Usage(format!(
                "k must be at least {}, found {}",
                MIN_K, k
            ))),
            _ => Ok(()),
        }
    }

    pub fn vacancy(mut self, vacancy: Vacancy) -> Self {
        self.vacancy = vacancy;
        self
    }
    /// At least one round always runs.
    pub fn rounds(mut self, rounds: usize) -> Self {
        self.rounds = rounds.max(1);
        self
    }

    pub fn k(&self) -> usize {
        self.centroids.len()
    }
    pub fn points(&self) -> &[Point] {
        &self.points
    }
    pub fn centroids(&self) -> &[Centroid] {
        &self.centroids
    }

    /// Assign against `centroids`, then recompute them from that assignment.
    /// `round` is 1-based and only used for reporting.
    pub fn round(&self, centroids: &[Centroid], round: usize) -> Result<Round> {
        let assignment = Assignment::new(self.points(), centroids);
        let centroids = assignment.centroids(centroids, self.vacancy, round)?;
        Ok(Round {
            assignment,
            centroids,
        })
    }

    /// Run every round and report the last assignment with its centroids.
    /// Any fault aborts the whole run.
    pub fn run(self) -> Result<Outcome> {
        log::info!(
            "clustering {} points into {} clusters over {} rounds",
            self.points().len(),
            self.k(),
            self.rounds
        );
        self.centroids()
            .iter()
            .enumerate()
            .for_each(|(j, c)| log::debug!("initial centroid {:>3} {}", j + 1, c));
        let mut last = self.round(self.centroids(), 1)?;
        self.trace(1, &last);
        for r in 2..=self.rounds {
            last = self.round(&last.centroids, r)?;
            self.trace(r, &last);
        }
        let Round {
            assignment,
            centroids,
        } = last;
        Ok(Outcome {
            assignment,
            centroids,
            rounds: self.rounds,
        })
    }

    fn trace(&self, r: usize, round: &Round) {
        let rms: Energy = round.assignment.rms(&round.centroids);
        log::debug!(
            "round {:>3}   rms {:>12.4}   sizes {:?}",
            r,
            rms,
            round.assignment.sizes()
        );
    }
}
