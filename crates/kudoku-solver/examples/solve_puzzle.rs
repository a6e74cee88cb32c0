//! Example demonstrating the solve entry point.
//!
//! Reads a puzzle as the first argument (or from stdin when omitted),
//! solves it, and prints the completed board.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example solve_puzzle -- \
//!     "53__7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79"
//! ```
//!
//! Or pipe a board in:
//!
//! ```sh
//! cargo run --example solve_puzzle < puzzle.txt
//! ```
//!
//! Cells are digits 1-9; `_`, `.`, or `0` mark empty cells; whitespace is
//! ignored. Exits with status 1 when the puzzle has no solution and 2 when
//! the input is not a valid board.

use std::{
    io::{self, Read as _},
    process,
};

use clap::Parser;
use kudoku_core::Grid;
use kudoku_solver::{Solver, SolverError};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Puzzle text; read from stdin when omitted.
    #[arg(value_name = "GRID")]
    puzzle: Option<String>,
}

fn main() {
    let args = Args::parse();

    let text = match args.puzzle {
        Some(text) => text,
        None => {
            let mut buffer = String::new();
            if let Err(err) = io::stdin().read_to_string(&mut buffer) {
                eprintln!("failed to read stdin: {err}");
                process::exit(2);
            }
            buffer
        }
    };

    let grid: Grid = match text.parse() {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("invalid puzzle: {err}");
            process::exit(2);
        }
    };

    println!("Puzzle:");
    println!("{grid}");
    println!();

    match Solver::new().solve(&grid) {
        Ok(solution) => {
            println!("Solution:");
            println!("{solution}");
        }
        Err(SolverError::NoSolution) => {
            eprintln!("no solution");
            process::exit(1);
        }
    }
}
