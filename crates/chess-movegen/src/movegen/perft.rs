//! Perft (performance test) drivers for move generator validation.
//!
//! Perft counts the leaf positions of the full legal move tree at a fixed
//! depth; comparing the totals against published reference values exercises
//! every corner of the generator. At the leaves only the number of moves
//! matters, so the last ply uses [`count_moves`] instead of materializing a
//! buffer.

use super::{count_moves, generate_moves, make_move, make_pawn_push};
use crate::Board;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::thread;

/// Upper bound on worker threads accepted by [`threaded_perft`].
pub const MAX_THREADS: usize = 256;

// Seeds are taken two plies below the root; no position in the test suite
// fans out to more than this many grandchildren.
const SEED_DEPTH: u32 = 2;
const SEED_POOL_CAPACITY: usize = 1 << 14;

/// Counts leaf nodes at the given depth. Requires `depth >= 1`; by
/// convention a depth-0 perft is 1 and is the caller's short-circuit.
pub fn perft(board: &Board, depth: u32) -> u64 {
    debug_assert!(depth >= 1);

    if depth == 1 {
        return count_moves(board);
    }

    let buffer = generate_moves(board);
    let mut total = 0;

    for m in &buffer {
        total += perft(&make_move(board, *m), depth - 1);
    }
    for dest in buffer.pawn_pushes {
        total += perft(&make_pawn_push(board, dest), depth - 1);
    }

    total
}

/// Collects every position reachable in exactly `depth` plies into `pool`.
///
/// Transpositions are collected once per path, matching what perft counts.
pub fn populate_position_pool(board: &Board, depth: u32, pool: &mut Vec<Board>) {
    if depth == 0 {
        pool.push(*board);
        return;
    }

    let buffer = generate_moves(board);

    for m in &buffer {
        populate_position_pool(&make_move(board, *m), depth - 1, pool);
    }
    for dest in buffer.pawn_pushes {
        populate_position_pool(&make_pawn_push(board, dest), depth - 1, pool);
    }
}

/// Multi-threaded perft. Requires `depth > 2`.
///
/// A shallow enumeration first collects every depth-2 position into a seed
/// pool; `threads` workers then drain the pool by atomically claiming the
/// next index and fold their subtree counts into a shared accumulator. The
/// total is deterministic and equals the sequential [`perft`]: every seed is
/// processed exactly once and addition commutes, so relaxed ordering on both
/// counters is all the synchronization the workers need.
pub fn threaded_perft(board: &Board, depth: u32, threads: usize) -> u64 {
    assert!(depth > SEED_DEPTH, "threaded perft needs depth > 2");
    assert!(
        threads > 0 && threads <= MAX_THREADS,
        "worker count must be in 1..={MAX_THREADS}"
    );

    let mut pool = Vec::with_capacity(SEED_POOL_CAPACITY);
    populate_position_pool(board, SEED_DEPTH, &mut pool);

    let next = AtomicUsize::new(0);
    let total = AtomicU64::new(0);

    thread::scope(|scope| {
        for _ in 0..threads {
            scope.spawn(|| {
                let mut claimed = 0u64;
                loop {
                    let index = next.fetch_add(1, Ordering::Relaxed);
                    let Some(seed) = pool.get(index) else { break };

                    let nodes = perft(seed, depth - SEED_DEPTH);
                    total.fetch_add(nodes, Ordering::Relaxed);
                    claimed += nodes;
                }
                tracing::debug!(nodes = claimed, "perft worker drained the seed pool");
            });
        }
    });

    total.load(Ordering::Relaxed)
}
