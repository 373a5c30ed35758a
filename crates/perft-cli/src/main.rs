//! Command-line perft driver.
//!
//! Two modes: `--bench` runs the built-in validation suite against the
//! published reference counts, and `perft <FEN> <depth>` counts leaf nodes
//! for a single position, going multi-threaded from depth 3 up.

use std::process::ExitCode;
use std::time::Instant;

use clap::{ArgGroup, Parser};

use chess_movegen::{perft, tables, threaded_perft, Board};

#[derive(Parser)]
#[command(name = "perft")]
#[command(about = "Chess move generator validation via perft")]
#[command(group = ArgGroup::new("mode").required(true).args(["bench", "fen"]))]
struct Cli {
    /// Run the built-in test suite and report nodes per second
    #[arg(long)]
    bench: bool,

    /// Position to search, in Forsyth-Edwards Notation
    #[arg(requires = "depth")]
    fen: Option<String>,

    /// Non-negative search depth
    depth: Option<u32>,

    /// Number of worker threads (default: all hardware cores)
    #[arg(short, long)]
    threads: Option<usize>,
}

struct SuiteEntry {
    name: &'static str,
    fen: &'static str,
    depth: u32,
    expected: u64,
}

// Reference counts from https://www.chessprogramming.org/Perft_Results
const SUITE: &[SuiteEntry] = &[
    SuiteEntry {
        name: "startpos",
        fen: "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        depth: 6,
        expected: 119_060_324,
    },
    SuiteEntry {
        name: "kiwipete",
        fen: "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -",
        depth: 5,
        expected: 193_690_690,
    },
    SuiteEntry {
        name: "tricky en-passant",
        fen: "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - -",
        depth: 7,
        expected: 178_633_661,
    },
    SuiteEntry {
        name: "tricky castling",
        fen: "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq -",
        depth: 6,
        expected: 706_045_033,
    },
    SuiteEntry {
        name: "tricky castling rotated",
        fen: "r2q1rk1/pP1p2pp/Q4n2/bbp1p3/Np6/1B3NBn/pPPP1PPP/R3K2R b KQ -",
        depth: 6,
        expected: 706_045_033,
    },
    SuiteEntry {
        name: "talkchess",
        fen: "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ -",
        depth: 5,
        expected: 89_941_194,
    },
    SuiteEntry {
        name: "normal middlegame",
        fen: "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w - -",
        depth: 5,
        expected: 164_075_551,
    },
];

fn default_thread_count() -> usize {
    std::thread::available_parallelism().map_or(1, |n| n.get())
}

/// Counts nodes sequentially below depth 3, in parallel above.
fn run_perft(board: &Board, depth: u32, threads: usize) -> u64 {
    match depth {
        0 => 1,
        1 | 2 => perft(board, depth),
        _ => threaded_perft(board, depth, threads),
    }
}

fn bench(threads: usize) -> ExitCode {
    let mut total_nodes = 0u64;
    let mut total_seconds = 0f64;
    let mut failures = 0u32;

    println!("name                      depth       nodes");
    println!("===============================================");

    for test in SUITE {
        let (board, _) = Board::from_fen(test.fen).expect("suite FEN is valid");

        let start = Instant::now();
        let nodes = run_perft(&board, test.depth, threads);
        let seconds = start.elapsed().as_secs_f64();

        println!(
            "{:<25} {:<5} {:>13}\t\t({:6.3} Gnps)",
            test.name,
            test.depth,
            nodes,
            nodes as f64 / seconds / 1.0e9
        );

        if nodes != test.expected {
            tracing::error!(
                name = test.name,
                expected = test.expected,
                got = nodes,
                "perft mismatch"
            );
            failures += 1;
        }

        total_nodes += nodes;
        total_seconds += seconds;
    }

    println!(
        "\nAverage nodes per second: {:6.3} Gnps",
        total_nodes as f64 / total_seconds / 1.0e9
    );

    if failures > 0 {
        eprintln!("{failures} test(s) failed");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run(fen: &str, depth: u32, threads: usize) -> ExitCode {
    let board = match Board::from_fen(fen) {
        Ok((board, _)) => board,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if depth > 2 {
        tracing::info!(threads, "running multi-threaded perft");
    }

    let start = Instant::now();
    let nodes = run_perft(&board, depth, threads);
    let seconds = start.elapsed().as_secs_f64();

    let nodes_per_second = nodes as f64 / seconds;

    println!("Result:            {nodes}");
    println!("Time taken:        {seconds:.3} seconds");
    if nodes_per_second < 1.0e9 {
        println!("Nodes per second:  {:.0} million", nodes_per_second / 1.0e6);
    } else {
        println!("Nodes per second:  {:.3} billion", nodes_per_second / 1.0e9);
    }

    ExitCode::SUCCESS
}

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let threads = cli.threads.unwrap_or_else(default_thread_count);

    // Build the attack tables before any clock starts.
    tables();

    if cli.bench {
        return bench(threads);
    }

    // The arg group guarantees a FEN here, and the FEN requires a depth.
    let fen = cli.fen.expect("clap enforces the mode group");
    let depth = cli.depth.expect("clap enforces fen/depth pairing");

    run(&fen, depth, threads)
}
