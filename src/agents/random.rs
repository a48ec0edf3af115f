//! Uniformly random baseline opponent

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::agents::Agent;
use crate::game::Game;
use crate::state::{GameState, Player};

/// An agent that picks a uniformly random legal move.
///
/// Seed it for reproducible games; test suites rely on that.
#[derive(Debug, Clone)]
pub struct RandomAgent {
    player: Player,
    rng: StdRng,
}

impl RandomAgent {
    pub fn new(player: Player) -> Self {
        RandomAgent {
            player,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic variant with a fixed seed.
    pub fn seeded(player: Player, seed: u64) -> Self {
        RandomAgent {
            player,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// The side this agent plays.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Pick a random legal action.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NoAvailableActions`] when the current state
    /// has no legal actions.
    pub fn decide<S: GameState>(&mut self, game: &Game<S>) -> crate::Result<S::Action> {
        game.state()
            .actions()
            .choose(&mut self.rng)
            .copied()
            .ok_or(crate::Error::NoAvailableActions)
    }
}

impl<S: GameState> Agent<S> for RandomAgent {
    fn player(&self) -> Player {
        RandomAgent::player(self)
    }

    fn decide(&mut self, game: &Game<S>) -> crate::Result<S::Action> {
        RandomAgent::decide(self, game)
    }
}
