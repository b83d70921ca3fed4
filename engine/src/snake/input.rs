use super::game_state::SnakeGameState;
use super::types::Direction;

/// Abstract keys a front end can report, one per compass point plus the two
/// mode switches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Up,
    Right,
    Down,
    Left,
    Pause,
    Auto,
}

impl Key {
    /// Maps a typed character for text front ends: `wasd` or `khjl` to steer,
    /// `p` to pause, `o` for auto mode.
    pub fn from_char(c: char) -> Option<Key> {
        match c.to_ascii_lowercase() {
            'w' | 'k' => Some(Key::Up),
            'd' | 'l' => Some(Key::Right),
            's' | 'j' => Some(Key::Down),
            'a' | 'h' => Some(Key::Left),
            'p' => Some(Key::Pause),
            'o' => Some(Key::Auto),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SnakeCommand {
    Turn(Direction),
    TogglePause,
    ToggleAutoMode,
}

impl SnakeCommand {
    pub fn from_key(key: Key) -> SnakeCommand {
        match key {
            Key::Up => SnakeCommand::Turn(Direction::North),
            Key::Right => SnakeCommand::Turn(Direction::East),
            Key::Down => SnakeCommand::Turn(Direction::South),
            Key::Left => SnakeCommand::Turn(Direction::West),
            Key::Pause => SnakeCommand::TogglePause,
            Key::Auto => SnakeCommand::ToggleAutoMode,
        }
    }
}

impl From<Key> for SnakeCommand {
    fn from(key: Key) -> Self {
        SnakeCommand::from_key(key)
    }
}

impl SnakeGameState {
    pub fn apply_command(&mut self, command: SnakeCommand) {
        match command {
            SnakeCommand::Turn(direction) => self.request_direction(direction),
            SnakeCommand::TogglePause => self.toggle_pause(),
            SnakeCommand::ToggleAutoMode => self.toggle_auto_mode(),
        }
    }
}
