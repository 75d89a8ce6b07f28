pub mod game;
pub mod ai;
pub mod render;
pub mod error;
pub mod config;

pub use error::{GameError, AIError, Result};
pub use config::Config;
pub use game::{GameMode, MoveOutcome, ReversyLogic};
pub use render::Renderer;
