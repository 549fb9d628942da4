use std::{
    fs,
    io::{self, BufRead, Write},
    path::PathBuf,
    process::ExitCode,
    time::Instant,
};

use clap::Parser;
use log::{info, warn};
use npuzzle_solver::{
    goal_board, parse_board, reference, size_for_tiles, solve, Board, Goal, GoalBlank, Outcome,
    PuzzleResult,
};

// Anything not given on the command line is asked for on stdin, in order:
// tile count, goal blank position, then one line per board row.
#[derive(Parser, Debug)]
#[command(
    name = "npuzzle-solver",
    version,
    about = "Find a shortest solution to a sliding tile puzzle"
)]
struct Cli {
    /// Number of numbered tiles (8 for 3x3, 15 for 4x4, ...)
    #[arg(long)]
    tiles: Option<usize>,
    /// Row-major index of the blank in the goal, -1 for bottom right
    #[arg(long, value_name = "INDEX", allow_hyphen_values = true)]
    goal_blank: Option<i64>,
    /// Read the start board from a file instead of stdin
    #[arg(long, value_name = "FILE")]
    board: Option<PathBuf>,
    /// Cross-check the solution length with an A* search (small boards only)
    #[arg(long)]
    verify: bool,
}

fn prompt(input: &mut impl BufRead, text: &str) -> PuzzleResult<String> {
    print!("{}", text);
    io::stdout().flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_owned())
}

fn verify(start: &Board, goal: &Board, len: usize) {
    match reference::astar_len(start, &Goal::new(goal.clone())) {
        Some(cost) if cost as usize == len => info!("verified: {} moves is optimal", len),
        Some(cost) => warn!("verification failed: found {} moves, A* found {}", len, cost),
        None => warn!("verification failed: A* found no solution"),
    }
}

fn run(cli: Cli) -> PuzzleResult<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    let tiles = match cli.tiles {
        Some(tiles) => tiles,
        None => prompt(&mut input, "Tiles: ")?.parse()?,
    };
    let size = size_for_tiles(tiles)?;

    let index = match cli.goal_blank {
        Some(index) => index,
        None => {
            let line = prompt(
                &mut input,
                "Enter the goal zero position (default -1 for bottom right): ",
            )?;
            if line.is_empty() {
                -1
            } else {
                line.parse()?
            }
        }
    };
    let goal = goal_board(size, GoalBlank::from_index(index, size)?);

    let start = match cli.board {
        Some(path) => parse_board(&fs::read_to_string(path)?)?,
        None => {
            println!("Enter the board configuration as a square matrix:");
            let mut text = String::new();
            for _ in 0..size {
                input.read_line(&mut text)?;
            }
            parse_board(&text)?
        }
    };

    let started = Instant::now();
    let outcome = solve(&start, &goal)?;
    let elapsed = started.elapsed();

    match outcome {
        Outcome::Unsolvable => println!("-1"),
        Outcome::Solved(solution) => {
            println!("{}", solution.len());
            for m in &solution.moves {
                println!("{}", m);
            }
            println!("Time: {} seconds", elapsed.as_secs_f64());

            if cli.verify {
                verify(&start, &goal, solution.len());
            }
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
