//! Fixed-round Lloyd k-means over integer point sets.
//!
//! Points are read from whitespace-separated integer lines, seeded with
//! random centroids inside their bounding box, and refined by alternating
//! nearest-centroid assignment and mean recomputation for a fixed number
//! of rounds.
//!
//! ## Core Types
//!
//! - [`Point`]: immutable integer coordinates read from input
//! - [`Centroid`]: floating point cluster representative
//! - [`Assignment`]: partition of points by nearest centroid
//! - [`Lloyd`]: the fixed-round driver
//!
//! ## Collaborators
//!
//! - [`Dataset`]: reads points from a text source
//! - [`Report`]: writes labelled assignments to a text sink
//! - [`Args`]: command line surface
pub mod assignment;
pub mod bbox;
pub mod centroid;
pub mod cli;
pub mod dataset;
pub mod distance;
pub mod driver;
pub mod fault;
pub mod initializer;
pub mod point;
pub mod report;
pub mod vacancy;

pub use assignment::*;
pub use bbox::*;
pub use centroid::*;
pub use cli::*;
pub use dataset::*;
pub use distance::*;
pub use driver::*;
pub use fault::*;
pub use initializer::*;
pub use point::*;
pub use report::*;
pub use vacancy::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Raw input coordinates.
pub type Coordinate = i64;
/// Distances, means, and anything else computed over coordinates.
pub type Energy = f64;

// ============================================================================
// DEFAULTS
// ============================================================================
/// Number of assignment/recomputation rounds in a run.
pub const ROUNDS: usize = 10;
/// Smallest cluster count accepted.
pub const MIN_K: usize = 2;
/// Smallest dimensionality accepted for a point.
pub const MIN_DIMENSIONS: usize = 2;
/// Output file written when none is given.
pub const OUTPUT: &str = "output.txt";

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging on stderr at the given level.
/// Location, target and thread prefixes are suppressed.
pub fn log(level: log::LevelFilter) -> Result<()> {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
    .map_err(|e| Fault::Logger(e.to_string()))
}
