//! Morris-Rust: a mill-game search engine.
//!
//! The binary is a thin file-driven front end around the library's search
//! strategies, in the classic "read board, search, write board" shape:
//!
//! - `morris-rust minimax <input> <output> <depth>` - exhaustive search
//! - `morris-rust alphabeta <input> <output> <depth>` - pruned search
//! - `morris-rust qlearn-opening` - train and emit the opening move
//! - `morris-rust qlearn <input> <output>` - train and emit a learned move
//!
//! Input files hold one 18-character board encoding (`x`/`W`/`B`); the
//! chosen one-ply-ahead board is written back in the same encoding.

use std::fs;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};

use morris_rust::board::{Board, Side};
use morris_rust::constants::EPISODES;
use morris_rust::eval::Variant;
use morris_rust::moves::Phase;
use morris_rust::qlearning::{self, QTable};
use morris_rust::search::{alphabeta, minimax, SearchLimits, SearchOutcome};

/// Morris-Rust: a mill-game search engine
#[derive(Parser)]
#[command(name = "morris-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Exhaustive minimax search
    Minimax(SearchArgs),
    /// Minimax with alpha-beta pruning
    Alphabeta(SearchArgs),
    /// Train the opening Q-table and emit White's move from the empty board
    QlearnOpening {
        /// Number of self-play training episodes
        #[arg(long, default_value_t = EPISODES)]
        episodes: usize,
    },
    /// Train the full-game Q-table from the input position and emit a move
    Qlearn {
        /// File holding the starting board encoding
        input: String,
        /// File the chosen board encoding is written to
        output: String,
        /// Side to move
        #[arg(long, value_enum, default_value = "white")]
        side: SideArg,
        /// Number of self-play training episodes
        #[arg(long, default_value_t = EPISODES)]
        episodes: usize,
    },
}

#[derive(Args)]
struct SearchArgs {
    /// File holding the starting board encoding
    input: String,
    /// File the chosen board encoding is written to
    output: String,
    /// Plies to look ahead (0 scores the root statically)
    depth: u32,
    /// Side to move
    #[arg(long, value_enum, default_value = "white")]
    side: SideArg,
    /// Game phase the generator and estimator assume
    #[arg(long, value_enum, default_value = "game")]
    phase: PhaseArg,
    /// Estimator flavor
    #[arg(long, value_enum, default_value = "improved")]
    eval: EvalArg,
    /// Optional cap on leaf evaluations
    #[arg(long)]
    max_nodes: Option<u64>,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum SideArg {
    White,
    Black,
}

impl From<SideArg> for Side {
    fn from(arg: SideArg) -> Side {
        match arg {
            SideArg::White => Side::White,
            SideArg::Black => Side::Black,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum PhaseArg {
    /// Placement phase (pieces are added)
    Opening,
    /// Sliding and flying phases (pieces are moved)
    Game,
}

impl From<PhaseArg> for Phase {
    fn from(arg: PhaseArg) -> Phase {
        match arg {
            PhaseArg::Opening => Phase::Opening,
            PhaseArg::Game => Phase::MidEndgame,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum EvalArg {
    Simple,
    Improved,
}

impl From<EvalArg> for Variant {
    fn from(arg: EvalArg) -> Variant {
        match arg {
            EvalArg::Simple => Variant::Simple,
            EvalArg::Improved => Variant::Improved,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Minimax(args) => run_search(&args, "MINIMAX", minimax),
        Commands::Alphabeta(args) => run_search(&args, "AB", alphabeta),
        Commands::QlearnOpening { episodes } => run_qlearn_opening(episodes),
        Commands::Qlearn {
            input,
            output,
            side,
            episodes,
        } => run_qlearn(&input, &output, side.into(), episodes),
    }
}

/// Read the board, run one search strategy, write and report the outcome.
fn run_search(
    args: &SearchArgs,
    label: &str,
    strategy: fn(&Board, Side, SearchLimits, Phase, Variant) -> SearchOutcome,
) -> Result<()> {
    let board = read_board(&args.input)?;
    let limits = SearchLimits {
        depth: args.depth,
        max_nodes: args.max_nodes,
    };
    let outcome = strategy(&board, args.side.into(), limits, args.phase.into(), args.eval.into());

    write_board(&args.output, &outcome.board)?;
    println!("Board Position: {}", outcome.board);
    println!(
        "Positions evaluated by static estimation: {}",
        outcome.evaluated
    );
    println!("{label} estimate: {}", outcome.score);
    Ok(())
}

fn run_qlearn_opening(episodes: usize) -> Result<()> {
    let mut table = QTable::new();
    qlearning::train_opening(&mut table, episodes);

    let board = Board::empty();
    let Some(chosen) = qlearning::find_best_move(&table, &board, Side::White, Phase::Opening)
    else {
        bail!("no legal opening move");
    };
    println!("Generated move for White: {chosen}");
    println!("States learned: {}", table.len());
    Ok(())
}

fn run_qlearn(input: &str, output: &str, side: Side, episodes: usize) -> Result<()> {
    let board = read_board(input)?;
    let mut table = QTable::new();
    qlearning::train_game(&mut table, &board, episodes);

    let Some(chosen) = qlearning::find_best_move(&table, &board, side, Phase::MidEndgame) else {
        bail!("no legal move for {side:?} from {board}");
    };
    write_board(output, &chosen)?;
    println!("Board Position: {chosen}");
    println!("States learned: {}", table.len());
    Ok(())
}

/// Read and validate the first line of a board file.
fn read_board(path: &str) -> Result<Board> {
    let text = fs::read_to_string(path).with_context(|| format!("reading board file {path}"))?;
    let line = text.lines().next().unwrap_or("");
    Board::parse(line).with_context(|| format!("parsing board from {path}"))
}

fn write_board(path: &str, board: &Board) -> Result<()> {
    fs::write(path, board.to_string()).with_context(|| format!("writing board file {path}"))
}
