//! Iterative deepening negamax with fail-hard alpha-beta pruning, time
//! bounded by a cooperatively-polled abort flag, and repetition handled
//! by treating any position already on the line of play as terminal.

use std::collections::HashSet;
use std::hash::Hash;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use oware_core::{Game, Move, Side, NULL_MOVE};

/// Heuristic-score bound. Terminal scores are ±10000, well past this, so
/// a terminal always dominates a heuristic one in comparisons.
pub const INFINITY: i32 = 1000;
/// Initial and minimum iterative-deepening depth, in plies.
pub const MIN_DEPTH: u32 = 4;

/// A write-once-per-call abort signal, shared between the searcher and
/// its timer. The write "happens-before" any subsequent read under
/// acquire/release ordering, so no lock is needed.
#[derive(Clone)]
pub struct CancellationToken(Arc<AtomicBool>);

impl CancellationToken {
    pub fn new() -> Self {
        CancellationToken(Arc::new(AtomicBool::new(false)))
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn reset(&self) {
        self.0.store(false, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

impl Default for CancellationToken {
    fn default() -> Self {
        Self::new()
    }
}

/// A one-shot timer that cancels `token` after `duration`, unless it is
/// told to stand down first. Cancelling it on the normal-return path
/// means a completed search never leaves a pending timer to misfire
/// against a later, unrelated call.
struct Timer {
    stand_down: mpsc::Sender<()>,
    handle: thread::JoinHandle<()>,
}

impl Timer {
    fn start(duration: Duration, token: CancellationToken) -> Timer {
        let (stand_down, wait) = mpsc::channel();
        let handle = thread::spawn(move || {
            if wait.recv_timeout(duration).is_err() {
                token.cancel();
            }
        });
        Timer { stand_down, handle }
    }

    fn cancel(self) {
        let _ = self.stand_down.send(());
        let _ = self.handle.join();
    }
}

/// Clamp to at least `MIN_DEPTH`, then round up to the next even depth.
pub fn normalize_depth(depth: u32) -> u32 {
    let depth = depth.max(MIN_DEPTH);
    if depth % 2 == 0 {
        depth
    } else {
        depth + 1
    }
}

/// A negamax searcher, generic over any two-player zero-sum [`Game`] so
/// the iterative-deepening and alpha-beta machinery is reusable beyond
/// Oware.
pub struct Search<G: Game> {
    game: G,
}

impl<G> Search<G>
where
    G: Game,
    G::Position: Clone + Eq + Hash,
{
    pub fn new(game: G) -> Self {
        Search { game }
    }

    /// Returns the best move found for `turn` within `depth` plies and
    /// `move_time`, or `NULL_MOVE` if `board` has no legal moves.
    /// `history` seeds the line-of-play set with positions already
    /// reached earlier in the game, each paired with the side that was
    /// to move there.
    pub fn compute_best_move(
        &self,
        board: &G::Position,
        turn: Side,
        history: &[(G::Position, Side)],
        depth: u32,
        move_time: Duration,
        token: &CancellationToken,
    ) -> Move {
        token.reset();
        let depth = normalize_depth(depth);
        let timer = Timer::start(move_time, token.clone());

        let root_moves = self.game.xlegal_moves(board, turn);
        if root_moves.is_empty() {
            timer.cancel();
            return NULL_MOVE;
        }

        let mut line_of_play: HashSet<(G::Position, Side)> = history.iter().cloned().collect();

        let mut best_move = root_moves[0];
        let mut last_move = best_move;
        let mut last_score = -INFINITY;
        let mut depth_cursor = MIN_DEPTH;

        loop {
            let mut iter_best_move = root_moves[0];
            let mut iter_best_score = -INFINITY;
            let mut aborted = false;

            for &mv in &root_moves {
                let child = self.game.compute_board(board, mv);
                let score = -self.search(
                    &child,
                    -turn,
                    -INFINITY,
                    -iter_best_score,
                    depth_cursor,
                    token,
                    &mut line_of_play,
                );
                // Checked *after* the search returns, before its score is
                // recorded: a move the timer cut off mid-evaluation carries
                // a bogus -INFINITY-derived score and must never be allowed
                // to win against iter_best_score/last_score below.
                if token.is_cancelled() {
                    if depth_cursor > MIN_DEPTH {
                        aborted = true;
                    }
                    break;
                }
                if score > iter_best_score {
                    iter_best_score = score;
                    iter_best_move = mv;
                }
            }

            if aborted {
                best_move = if last_score >= iter_best_score {
                    last_move
                } else {
                    iter_best_move
                };
                break;
            }

            best_move = iter_best_move;
            if depth_cursor >= depth {
                break;
            }
            last_move = iter_best_move;
            last_score = iter_best_score;
            depth_cursor += 2;
        }

        timer.cancel();
        best_move
    }

    fn search(
        &self,
        board: &G::Position,
        turn: Side,
        alpha: i32,
        beta: i32,
        depth: u32,
        token: &CancellationToken,
        line_of_play: &mut HashSet<(G::Position, Side)>,
    ) -> i32 {
        if token.is_cancelled() {
            return -INFINITY;
        }

        let key = (board.clone(), turn);
        if line_of_play.contains(&key) || self.game.is_end(board, turn) {
            return turn.sign() * self.game.get_final_score(board);
        }
        if depth == 0 {
            return turn.sign() * self.game.get_score(board);
        }

        line_of_play.insert(key.clone());
        let mut alpha = alpha;
        for mv in self.game.xlegal_moves(board, turn) {
            let child = self.game.compute_board(board, mv);
            let score = -self.search(&child, -turn, -beta, -alpha, depth - 1, token, line_of_play);
            if score >= beta {
                alpha = beta;
                break;
            }
            if score > alpha {
                alpha = score;
            }
        }
        line_of_play.remove(&key);

        alpha
    }
}
