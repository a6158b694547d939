use crate::Dataset;
use crate::Fault;
use crate::Lloyd;
use crate::MIN_K;
use crate::OUTPUT;
use crate::Outcome;
use crate::ROUNDS;
use crate::Report;
use crate::Result;
use crate::Vacancy;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Cluster integer points with fixed-round Lloyd k-means",
    long_about = None
)]
pub struct Args {
    /// Number of clusters, at least 2
    #[arg(value_parser = clusters)]
    pub k: usize,
    /// Whitespace-separated integer points, one per line
    pub input: PathBuf,
    /// Where to write labelled points
    #[arg(short, long, default_value = OUTPUT)]
    pub output: PathBuf,
    /// Seed for centroid initialization; drawn from the OS if absent
    #[arg(short, long)]
    pub seed: Option<u64>,
    /// Assignment/recomputation rounds to run
    #[arg(short, long, default_value_t = ROUNDS, value_parser = rounds)]
    pub rounds: usize,
    /// Keep the previous centroid of an empty cluster instead of failing
    #[arg(long)]
    pub retain_empty: bool,
    /// Log every round
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parse a cluster count: an integer no smaller than [`MIN_K`].
pub fn clusters(s: &str) -> Result<usize> {
    let k = s
        .trim()
        .parse::<i64>()
        .map_err(|_| Fault::Usage(format!("k must be an integer, found {:?}", s)))?;
    match usize::try_from(k) {
        Ok(k) if k >= MIN_K => Ok(k),
        _ => Err(Fault::Usage(format!("k must be at least {}, found {}", MIN_K, k))),
    }
}

/// Parse a round count: a positive integer.
pub fn rounds(s: &str) -> Result<usize> {
    match s.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(Fault::Usage(format!("rounds must be a positive integer, found {:?}", s))),
    }
}

/// Run parameters separated from where they came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub k: usize,
    pub rounds: usize,
    pub vacancy: Vacancy,
    pub seed: Option<u64>,
}

impl Settings {
    pub fn rng(&self) -> SmallRng {
        match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        }
    }

    /// Cluster a dataset under these settings.
    pub fn cluster(&self, dataset: Dataset) -> Result<Outcome> {
        match self.seed {
            Some(seed) => log::info!("seeding initialization with {}", seed),
            None => log::debug!("seeding initialization from the OS"),
        }
        Lloyd::new(dataset.into(), self.k, &mut self.rng())?
            .vacancy(self.vacancy)
            .rounds(self.rounds)
            .run()
    }
}

impl From<&Args> for Settings {
    fn from(args: &Args) -> Self {
        Self {
            k: args.k,
            rounds: args.rounds,
            vacancy: Vacancy::from(args.retain_empty),
            seed: args.seed,
        }
    }
}

impl Args {
    pub fn level(&self) -> log::LevelFilter {
        if self.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        }
    }

    /// Read, cluster, write. Nothing is written unless clustering succeeds.
    pub fn run(&self) -> Result<Outcome> {
        let dataset = Dataset::read(&self.input)?;
        let outcome = Settings::from(self).cluster(dataset)?;
        Report::from(&outcome.assignment).save(&self.output)?;
        Ok(outcome)
    }
}
