pub mod core {
	pub mod engine;
	pub mod game;
	pub mod rng;
	pub mod terminal;
}

pub mod games;

// Re-export for convenience
pub use crate::core::engine::{Finished, GameLoop};
pub use crate::core::game::{Game, Message, Step};
pub use crate::games::rand_num::{run_game, GameSummary, NumberGame};
