use glam::Vec2;
use strum_macros::AsRefStr;

/// A movement direction. `None` carries no movement and leaves a heading unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    #[default]
    None,
}

impl Direction {
    /// The four cardinal directions.
    /// This is just a convenience constant for iterating over (or sampling) the directions.
    pub const DIRECTIONS: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// Returns the unit vector of the direction in screen space (y grows downwards).
    pub fn as_vec2(self) -> Vec2 {
        self.into()
    }
}

impl From<Direction> for Vec2 {
    fn from(dir: Direction) -> Self {
        match dir {
            Direction::Up => Vec2::NEG_Y,
            Direction::Down => Vec2::Y,
            Direction::Left => Vec2::NEG_X,
            Direction::Right => Vec2::X,
            Direction::None => Vec2::ZERO,
        }
    }
}
