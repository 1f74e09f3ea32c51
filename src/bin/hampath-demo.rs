//! Minimal text-mode demonstration: generates a puzzle and prints both the
//! clue grid and its solution. Not part of the specified core (see SPEC_FULL
//! §1) — just enough to exercise the crate end-to-end from a terminal.
//!
//! Usage: `hampath-demo [width] [height]` (defaults to 7x7).
//! Set `RUST_LOG=debug` to see generator retry/removal logging.

use hampath::{generate_puzzle, solve, CluePattern, Difficulty, GenerationParams, Grid};

fn print_grid(grid: &Grid) {
    let width = grid.width();
    for y in 0..grid.height() {
        let row: Vec<String> = (0..width)
            .map(|x| {
                let v = grid.get((x, y));
                if v == 0 {
                    ".".to_string()
                } else {
                    v.to_string()
                }
            })
            .collect();
        println!("{}", row.join("\t"));
    }
}

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let width: usize = args.next().and_then(|s| s.parse().ok()).unwrap_or(7);
    let height: usize = args.next().and_then(|s| s.parse().ok()).unwrap_or(7);

    let params = match GenerationParams::new(width, height, false, CluePattern::Rot2, false, Difficulty::Easy) {
        Ok(params) => params,
        Err(err) => {
            eprintln!("invalid puzzle dimensions: {err}");
            std::process::exit(1);
        }
    };

    let mut rng = rand::thread_rng();
    let puzzle = generate_puzzle(&params, &mut rng);

    println!("Puzzle ({width}x{height}, ROT2 clues):");
    print_grid(&puzzle);

    match solve(&puzzle, params.diagonal, None, Difficulty::Hard, None, true) {
        Some(solved) => {
            println!("\nSolution:");
            print_grid(&solved);
        }
        None => println!("\n(no unique solution found)"),
    }
}
