use glam::IVec2;
use strum::{Display, EnumIter};

/// A grid coordinate. Signed so that a step off the edge is still representable.
pub type Position = IVec2;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[repr(u8)]
pub enum Direction {
    Up = 0,
    Down = 1,
    Left = 2,
    #[default]
    Right = 3,
}

impl Direction {
    pub const COUNT: usize = 4;

    /// Unit step in screen coordinates (y grows downwards).
    #[inline(always)]
    pub fn offset(self) -> IVec2 {
        match self {
            Direction::Up => IVec2::NEG_Y,
            Direction::Down => IVec2::Y,
            Direction::Left => IVec2::NEG_X,
            Direction::Right => IVec2::X,
        }
    }

    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// A beam at one instant: where it is and where it is heading.
///
/// The default state is the conventional entry, the top-left cell heading right.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BeamState {
    pub position: Position,
    pub direction: Direction,
}

impl BeamState {
    pub fn new(position: Position, direction: Direction) -> Self {
        Self {
            position,
            direction,
        }
    }

    /// The state one step further along `direction`, which may lie outside the grid.
    #[inline(always)]
    pub fn step(self, direction: Direction) -> Self {
        Self::new(self.position + direction.offset(), direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use strum::IntoEnumIterator;

    #[test]
    fn indices_are_dense() {
        let indices: Vec<usize> = Direction::iter().map(Direction::index).collect();
        assert_eq!(indices, (0..Direction::COUNT).collect::<Vec<_>>());
    }

    #[test]
    fn step_moves_one_cell() {
        let state = BeamState::new(IVec2::new(2, 2), Direction::Right);
        assert_eq!(state.step(Direction::Up).position, IVec2::new(2, 1));
        assert_eq!(state.step(Direction::Down).position, IVec2::new(2, 3));
        assert_eq!(state.step(Direction::Left).position, IVec2::new(1, 2));
        assert_eq!(state.step(Direction::Right).position, IVec2::new(3, 2));
    }

    #[test]
    fn default_is_top_left_heading_right() {
        let state = BeamState::default();
        assert_eq!(state.position, IVec2::ZERO);
        assert_eq!(state.direction, Direction::Right);
    }
}
