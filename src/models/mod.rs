pub mod board;
pub mod engine;
mod game;
pub mod input;
pub mod notifier;
pub mod promotion;
pub mod turn_loop;
mod turn_driver;

pub use game::{GameModel, SubmitOutcome};
