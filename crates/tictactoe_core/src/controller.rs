//! Game controller: the current snapshot plus the computer's RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, instrument};

use crate::{Action, AiTicket, GameState, choose_random_move};

/// Owns the current [`GameState`] and resolves computer turns against it.
///
/// The controller never sleeps. Whoever drives it asks
/// [`pending_computer_turn`](Self::pending_computer_turn) after each
/// dispatch, waits however long it likes, then calls
/// [`fire_computer_turn`](Self::fire_computer_turn) with the ticket.
#[derive(Debug)]
pub struct GameController<R = StdRng> {
    state: GameState,
    rng: R,
}

impl GameController<StdRng> {
    /// Creates a controller. A seed makes the computer's choices repeatable.
    #[instrument]
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(rng)
    }
}

impl<R: Rng> GameController<R> {
    /// Creates a controller with a caller-supplied RNG.
    pub fn with_rng(rng: R) -> Self {
        Self {
            state: GameState::new(),
            rng,
        }
    }

    /// The current snapshot.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Feeds an action through the reducer.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, action: Action) {
        let current = std::mem::take(&mut self.state);
        self.state = current.apply(action);
    }

    /// The computer turn owed by the current state, if any.
    pub fn pending_computer_turn(&self) -> Option<AiTicket> {
        self.state
            .awaiting_computer()
            .then(|| AiTicket::new(self.state.generation(), self.state.board().occupied()))
    }

    /// Plays a deferred computer turn against the state as it is now.
    ///
    /// Returns `false` without touching anything when the ticket no longer
    /// matches: a reset or return home happened, or the turn was already
    /// played. Empty cells are read from the current board.
    #[instrument(skip(self))]
    pub fn fire_computer_turn(&mut self, ticket: AiTicket) -> bool {
        if self.pending_computer_turn() != Some(ticket) {
            debug!(
                current_generation = self.state.generation(),
                "Stale computer turn dropped"
            );
            return false;
        }

        let Some(position) = choose_random_move(self.state.board(), &mut self.rng) else {
            return false;
        };

        info!(%position, "Computer plays");
        self.dispatch(Action::ComputerMove {
            generation: ticket.generation,
            position,
        });
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameMode, Mark, Position};

    #[test]
    fn test_no_pending_turn_in_multiplayer() {
        let mut controller = GameController::new(Some(3));
        controller.dispatch(Action::SelectMode(GameMode::Multiplayer));
        controller.dispatch(Action::Place(Position::Center));
        assert_eq!(controller.state().to_move(), Mark::O);
        assert_eq!(controller.pending_computer_turn(), None);
    }

    #[test]
    fn test_ticket_fires_once() {
        let mut controller = GameController::new(Some(3));
        controller.dispatch(Action::SelectMode(GameMode::SinglePlayer));
        controller.dispatch(Action::Place(Position::Center));

        let ticket = controller.pending_computer_turn().unwrap();
        assert_eq!(ticket.ply, 1);
        assert!(controller.fire_computer_turn(ticket));
        assert!(!controller.fire_computer_turn(ticket));
        assert_eq!(controller.state().board().occupied(), 2);
    }
}
