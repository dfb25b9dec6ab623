use std::path::Path;

use log::{info, warn};
use mazecore::{
    generate, generate_many, generate_steps, path_from_marks, report, solve, Algorithm, Coord,
    Grid, Snapshot, SolutionReport,
};
use rayon::prelude::*;
use serde::Serialize;

use crate::{
    error::CliError,
    format,
    settings::{OutputFormat, Settings},
};

/// Generation request after settings were applied.
#[derive(Debug, Clone, Copy)]
pub struct Request {
    pub size: i32,
    pub algorithm: Algorithm,
    pub seed: Option<u64>,
}

impl Request {
    pub fn resolve(
        settings: &Settings,
        size: Option<i32>,
        algorithm: Option<Algorithm>,
        seed: Option<u64>,
    ) -> Result<Self, CliError> {
        let size = size.unwrap_or_else(|| settings.get_default_size() as i32);
        let max = settings.get_max_size();
        if size > max as i32 {
            return Err(CliError::SizeTooLarge { size, max });
        }

        Ok(Request {
            size,
            algorithm: algorithm.unwrap_or_else(|| settings.get_default_algorithm()),
            seed,
        })
    }
}

#[derive(Debug, Serialize)]
struct GeneratedSteps {
    algorithm: Algorithm,
    maze: Grid,
    steps: Vec<Snapshot>,
}

pub fn generate_cmd(request: Request, steps: bool, output: OutputFormat) -> Result<(), CliError> {
    info!(
        "generating {0}x{0} maze with {1}",
        request.size, request.algorithm
    );

    if steps {
        let (maze, steps) = generate_steps(request.size, request.algorithm, request.seed)?;
        format::print(
            &GeneratedSteps {
                algorithm: request.algorithm,
                maze,
                steps,
            },
            output,
        )
    } else {
        let maze = generate(request.size, request.algorithm, request.seed)?;
        format::print(&maze, output)
    }
}

/// Checks a path file, or a matrix of marked cells with `marks`.
pub fn check(maze: &Path, path: &Path, marks: bool) -> Result<SolutionReport, CliError> {
    let grid: Grid = format::read(maze)?;

    let attempt = if marks {
        let marks: Vec<Vec<bool>> = format::read(path)?;
        path_from_marks(&grid, &marks)
    } else {
        Ok(format::read::<Vec<Coord>>(path)?)
    };

    Ok(match attempt {
        Ok(route) => report(&grid, &route),
        Err(err) => {
            warn!("attempt could not be traced; {}", err);
            SolutionReport::from_error(&grid, &err)
        }
    })
}

pub fn solve_cmd(maze: &Path, output: OutputFormat) -> Result<(), CliError> {
    let grid: Grid = format::read(maze)?;
    format::print(&solve(&grid), output)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stats {
    pub algorithm: Algorithm,
    pub size: i32,
    pub count: usize,
    pub average_route: f64,
    pub shortest_route: usize,
    pub longest_route: usize,
    pub average_dead_ends: f64,
}

pub fn stats(request: Request, count: usize) -> Result<Stats, CliError> {
    let grids = generate_many(request.size, request.algorithm, request.seed, count)?;

    let measured = grids
        .par_iter()
        .map(|grid| {
            let route = solve(grid).map_or(0, |route| route.len() - 1);
            (route, grid.dead_ends())
        })
        .collect::<Vec<_>>();

    let count = measured.len();
    let total_route: usize = measured.iter().map(|(route, _)| route).sum();
    let total_dead_ends: usize = measured.iter().map(|(_, dead_ends)| dead_ends).sum();
    let average = |total: usize| {
        if count == 0 {
            0.0
        } else {
            total as f64 / count as f64
        }
    };

    Ok(Stats {
        algorithm: request.algorithm,
        size: request.size,
        count,
        average_route: average(total_route),
        shortest_route: measured.iter().map(|(route, _)| *route).min().unwrap_or(0),
        longest_route: measured.iter().map(|(route, _)| *route).max().unwrap_or(0),
        average_dead_ends: average(total_dead_ends),
    })
}
