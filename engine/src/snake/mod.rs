mod game_state;
mod input;
mod settings;
mod snake;
mod types;

pub use game_state::{SnakeGameState, OFF_FIELD_APPLE};
pub use input::{Key, SnakeCommand};
pub use settings::{SnakeSessionSettings, DEFAULT_INITIAL_LENGTH};
pub use snake::{Snake, MAX_INITIAL_LENGTH};
pub use types::{DeathReason, Direction, FieldSize, Point, TickOutcome};
