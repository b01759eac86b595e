use anyhow::{bail, Context};
use ball_path::input::{self, Problem};
use ball_path::output;
use ball_path::solver::{astar::AstarSolver, GridSolver};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

/// Finds the shortest way to move a ball to an empty cell of the board.
///
/// Exit code is 0 on success (including when there is no path) and 1 if an error occurred.
#[derive(Parser, Debug)]
#[command(name = "ballpath", version)]
struct Args {
    /// Input file holding the board dimensions, start and finish points and the board itself.
    input: PathBuf,
    /// Log search details to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn run(args: &Args) -> anyhow::Result<()> {
    let Problem {
        mut grid,
        start,
        finish,
    } = input::read_file(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;

    if !grid.is_wall(start) {
        bail!("Start point must be a ball");
    }
    if grid.is_wall(finish) {
        bail!("Finish point must be empty (not a ball)");
    }

    let path = AstarSolver::new().find_path(&mut grid, start, finish)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    output::write_result(&mut out, &grid, &path).context("Error occurred when writing result")?;
    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    let level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
