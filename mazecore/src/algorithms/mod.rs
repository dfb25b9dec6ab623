mod automata;
mod depth_first_search;
mod recursive_division;

use std::{fmt, str::FromStr};

use log::debug;
use rand::{thread_rng, Rng as _, SeedableRng as _};
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{error::Result, grid::Grid};
pub use automata::Automata;
pub use depth_first_search::DepthFirstSearch;
pub use recursive_division::RecursiveDivision;

/// Random number generator used for anything, where determinism is required.
pub type Random = rand_xoshiro::Xoshiro256StarStar;

/// Serialized grid state captured while a maze is being built.
pub type Snapshot = Vec<Vec<u8>>;

/// Strategy that turns a freshly walled grid into a finished maze.
///
/// Implementations must only use `rng` for randomness so that a seed fully
/// determines the result, and must keep every passage symmetric.
pub trait MazeAlgorithm: fmt::Debug + Sync + Send {
    fn build(&self, grid: &mut Grid, rng: &mut Random, steps: &mut Steps);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Algorithm {
    #[default]
    DepthFirst,
    Automata,
    RecursiveDivision,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [
        Algorithm::DepthFirst,
        Algorithm::Automata,
        Algorithm::RecursiveDivision,
    ];

    pub fn generator(self) -> &'static dyn MazeAlgorithm {
        match self {
            Algorithm::DepthFirst => &DepthFirstSearch,
            Algorithm::Automata => &Automata,
            Algorithm::RecursiveDivision => &RecursiveDivision,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::DepthFirst => "dfs",
            Algorithm::Automata => "automata",
            Algorithm::RecursiveDivision => "recursive division",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown maze algorithm '{0}', expected one of: dfs, automata, recursive division")]
pub struct UnknownAlgorithm(pub String);

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dfs" | "depth-first" | "depth first" | "depthfirst" => Ok(Algorithm::DepthFirst),
            "automata" | "prim" => Ok(Algorithm::Automata),
            "recursive division" | "recursive-division" | "division" => {
                Ok(Algorithm::RecursiveDivision)
            }
            _ => Err(UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Observer of intermediate grid states.
///
/// Counting is always on; snapshots are only kept when recording.
#[derive(Debug, Default)]
pub struct Steps {
    count: usize,
    snapshots: Option<Vec<Snapshot>>,
}

impl Steps {
    pub fn disabled() -> Self {
        Self::default()
    }

    pub fn recording() -> Self {
        Self {
            count: 0,
            snapshots: Some(Vec::new()),
        }
    }

    pub fn record(&mut self, grid: &Grid) {
        self.count += 1;
        if let Some(snapshots) = self.snapshots.as_mut() {
            snapshots.push(grid.to_matrix());
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn into_snapshots(self) -> Vec<Snapshot> {
        self.snapshots.unwrap_or_default()
    }
}

pub fn random_from_seed(seed: Option<u64>) -> Random {
    Random::seed_from_u64(seed.unwrap_or_else(|| thread_rng().gen()))
}

/// Builds a maze with an explicit random stream and step observer.
///
/// Fails only for `size < 1`, before any work is done.
pub fn generate_with(
    size: i32,
    algorithm: Algorithm,
    rng: &mut Random,
    steps: &mut Steps,
) -> Result<Grid> {
    let mut grid = Grid::new(size)?;

    debug!("generating {0}x{0} maze with {1}", size, algorithm);
    algorithm.generator().build(&mut grid, rng, steps);
    debug!(
        "{} maze finished after {} steps, {} passages",
        algorithm,
        steps.count(),
        grid.edge_count()
    );

    Ok(grid)
}

/// Generates a maze; the same `seed` always gives the same maze.
pub fn generate(size: i32, algorithm: Algorithm, seed: Option<u64>) -> Result<Grid> {
    let mut rng = random_from_seed(seed);
    generate_with(size, algorithm, &mut rng, &mut Steps::disabled())
}

/// Like [`generate`], also returning every intermediate state, starting with
/// the initial one and ending with the finished maze.
pub fn generate_steps(
    size: i32,
    algorithm: Algorithm,
    seed: Option<u64>,
) -> Result<(Grid, Vec<Snapshot>)> {
    let mut rng = random_from_seed(seed);
    let mut steps = Steps::recording();
    let grid = generate_with(size, algorithm, &mut rng, &mut steps)?;
    Ok((grid, steps.into_snapshots()))
}

/// Generates `count` independent mazes in parallel.
///
/// Every maze gets its own stream, jumped off the seeded one, so the batch
/// does not depend on scheduling.
pub fn generate_many(
    size: i32,
    algorithm: Algorithm,
    seed: Option<u64>,
    count: usize,
) -> Result<Vec<Grid>> {
    Grid::new(size)?;

    let mut rng = random_from_seed(seed);
    let rngs = (0..count)
        .map(|_| {
            rng.jump();
            rng.clone()
        })
        .collect::<Vec<_>>();

    rngs.into_par_iter()
        .map(|mut rng| generate_with(size, algorithm, &mut rng, &mut Steps::disabled()))
        .collect()
}
