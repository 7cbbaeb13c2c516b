//! Interactive tic-tac-toe against the heuristic, plus a self-play mode.

use std::io::{self, BufRead, Write};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use tictactoe_engine::{
    Board, Coord, GameRng, GameStatus, MoveSource, Piece, SelfPlay, SelfPlayConfig, Session,
};

/// Play tic-tac-toe against the built-in heuristic.
#[derive(Parser)]
#[command(name = "tictactoe", about = "Play tic-tac-toe against the built-in heuristic")]
struct Cli {
    /// Run N rounds of random-vs-heuristic self-play and print the tally
    /// instead of playing interactively
    #[arg(long, value_name = "N")]
    self_play: Option<usize>,

    /// RNG seed; drawn from the operating system when omitted
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> io::Result<()> {
    let rng = match cli.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };

    match cli.self_play {
        Some(rounds) => {
            let config = SelfPlayConfig::new()
                .with_rounds(rounds)
                .with_seed(rng.seed());
            let report = SelfPlay::new(config).run();
            println!("{report}");
            if !report.strategy_unbeaten() {
                eprintln!("warning: the heuristic lost {} round(s)", report.x_wins);
            }
        }
        None => play_interactive(rng)?,
    }

    Ok(())
}

fn play_interactive(rng: GameRng) -> io::Result<()> {
    let mut session = Session::new(StdinSource::new(), Piece::X, rng);
    let status = session.play()?;

    println!("\nGAME OVER\n");
    print!("{}", session.board());
    match status {
        GameStatus::Won(piece) => println!("\nWinner: {piece}"),
        _ => println!("\nNo winner!"),
    }

    Ok(())
}

/// Reads 1-9 cell numbers from stdin, re-prompting on anything that is not
/// an open, in-range cell.
struct StdinSource {
    input: io::Stdin,
}

impl StdinSource {
    fn new() -> Self {
        Self { input: io::stdin() }
    }
}

impl MoveSource for StdinSource {
    fn next_move(&mut self, board: &Board, piece: Piece) -> io::Result<Coord> {
        print!("{board}");
        loop {
            print!("Your move as {piece} (1-9)? ");
            io::stdout().flush()?;

            let mut line = String::new();
            if self.input.lock().read_line(&mut line)? == 0 {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "input closed before the game ended",
                ));
            }

            let parsed = line
                .trim()
                .parse::<u32>()
                .ok()
                .and_then(|n| Coord::from_cell_number(n).ok());
            let Some(coord) = parsed else {
                println!("No such square.");
                continue;
            };

            if !board.is_empty(coord) {
                println!("Already a piece there.");
                continue;
            }

            return Ok(coord);
        }
    }
}
