use crate::maze::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Escape,
    Char(char),
}

impl Key {
    /// Arrow keys steer the player; anything else has no direction.
    pub fn direction(self) -> Option<Direction> {
        match self {
            Key::ArrowUp => Some(Direction::North),
            Key::ArrowDown => Some(Direction::South),
            Key::ArrowLeft => Some(Direction::West),
            Key::ArrowRight => Some(Direction::East),
            Key::Escape | Key::Char(_) => None,
        }
    }
}
