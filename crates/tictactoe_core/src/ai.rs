//! Random computer opponent.

use derive_new::new;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::{Board, Position};

/// Identity of one pending computer turn.
///
/// `ply` is the number of occupied cells when the turn came due, so two
/// tickets differ whenever the board or the generation moved on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct AiTicket {
    /// Generation of the state the turn belongs to.
    pub generation: u64,
    /// Occupied cells when the turn came due.
    pub ply: usize,
}

/// Picks an empty cell uniformly at random. `None` on a full board.
#[instrument(skip(board, rng))]
pub fn choose_random_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Position> {
    let choice = Position::valid_moves(board).choose(rng).copied();
    debug!(?choice, "Computer chose position");
    choice
}
