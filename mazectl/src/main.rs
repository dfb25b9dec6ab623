mod commands;
mod error;
mod format;
mod settings;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use mazecore::Algorithm;

use commands::Request;
use error::CliError;
use settings::{OutputFormat, Settings};

#[derive(Parser, Debug)]
#[clap(version, about, name = "mazectl")]
struct Args {
    #[clap(short, long, global = true, help = "Settings file to use instead of the default one")]
    config: Option<PathBuf>,
    #[clap(long, value_enum, global = true, help = "Output format, overrides settings")]
    format: Option<OutputFormat>,
    #[clap(short, long, action, global = true, help = "Enable debug messages")]
    verbose: bool,
    #[clap(long, action, help = "Show config path and quit")]
    show_config_path: bool,
    #[clap(long, action, help = "Reset config to default and quit")]
    reset_config: bool,
    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a maze and print its cell bitmasks
    Generate {
        #[clap(short, long)]
        size: Option<i32>,
        #[clap(short, long, help = "dfs, automata or recursive division")]
        algorithm: Option<Algorithm>,
        #[clap(long)]
        seed: Option<u64>,
        #[clap(long, action, help = "Also print every intermediate state")]
        steps: bool,
    },
    /// Check a proposed solution against a maze file
    Check {
        maze: PathBuf,
        path: PathBuf,
        #[clap(long, action, help = "Path file is a matrix of marked cells")]
        marks: bool,
    },
    /// Print the shortest route through a maze file
    Solve { maze: PathBuf },
    /// Generate many mazes in parallel and summarize them
    Stats {
        #[clap(short, long)]
        size: Option<i32>,
        #[clap(short, long)]
        algorithm: Option<Algorithm>,
        #[clap(long)]
        seed: Option<u64>,
        #[clap(short = 'n', long, default_value_t = 100)]
        count: usize,
    },
}

fn main() -> Result<(), CliError> {
    let args = Args::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if args.verbose { "debug" } else { "warn" }),
    )
    .init();

    let settings_path = args.config.clone().unwrap_or_else(Settings::default_path);

    if args.show_config_path {
        if let Some(s) = settings_path.to_str() {
            println!("{}", s);
        } else {
            println!("{:?}", settings_path);
        }
        return Ok(());
    }

    if args.reset_config {
        return Settings::reset_config(&settings_path);
    }

    let settings = Settings::load(&settings_path)?;
    let output = args.format.unwrap_or_else(|| settings.get_output());

    match args.command {
        Some(Command::Generate {
            size,
            algorithm,
            seed,
            steps,
        }) => {
            let request = Request::resolve(&settings, size, algorithm, seed)?;
            commands::generate_cmd(request, steps, output)
        }
        Some(Command::Check { maze, path, marks }) => {
            format::print(&commands::check(&maze, &path, marks)?, output)
        }
        Some(Command::Solve { maze }) => commands::solve_cmd(&maze, output),
        Some(Command::Stats {
            size,
            algorithm,
            seed,
            count,
        }) => {
            let request = Request::resolve(&settings, size, algorithm, seed)?;
            format::print(&commands::stats(request, count)?, output)
        }
        None => {
            let request = Request::resolve(&settings, None, None, None)?;
            commands::generate_cmd(request, false, output)
        }
    }
}
