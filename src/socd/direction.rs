// Cardinal directions and per-tick direction state

use std::fmt;

/// One of the four cardinal directions.
///
/// Declaration order matters: it is the sampling order (which decides the
/// last-input signal) and the display order of the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// All directions in declaration order
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Human-readable name used on the console
    pub fn name(&self) -> &'static str {
        match self {
            Self::Left => "Left",
            Self::Right => "Right",
            Self::Up => "Up",
            Self::Down => "Down",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which directions are considered held during one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DirectionState {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl DirectionState {
    /// No direction held
    pub const NEUTRAL: DirectionState = DirectionState {
        left: false,
        right: false,
        up: false,
        down: false,
    };

    /// Build a state from a list of held directions
    #[cfg(test)]
    pub fn from_held(held: &[Direction]) -> Self {
        let mut state = Self::default();
        for &direction in held {
            state.set(direction, true);
        }
        state
    }

    /// Check whether a direction is held
    pub fn is_held(&self, direction: Direction) -> bool {
        match direction {
            Direction::Left => self.left,
            Direction::Right => self.right,
            Direction::Up => self.up,
            Direction::Down => self.down,
        }
    }

    /// Set the held flag for a direction
    pub fn set(&mut self, direction: Direction, held: bool) {
        match direction {
            Direction::Left => self.left = held,
            Direction::Right => self.right = held,
            Direction::Up => self.up = held,
            Direction::Down => self.down = held,
        }
    }

    /// Held directions in declaration order
    pub fn held(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::ALL
            .into_iter()
            .filter(move |d| self.is_held(*d))
    }

    /// Check if nothing is held
    pub fn is_neutral(&self) -> bool {
        *self == Self::NEUTRAL
    }

    /// Left and Right both held
    pub fn horizontal_conflict(&self) -> bool {
        self.left && self.right
    }

    /// Up and Down both held
    pub fn vertical_conflict(&self) -> bool {
        self.up && self.down
    }
}

/// Space-joined held direction names, or `Neutral` when nothing is held
impl fmt::Display for DirectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_neutral() {
            return f.write_str("Neutral");
        }
        for (i, direction) in self.held().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(direction.name())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_neutral() {
        assert!(DirectionState::default().is_neutral());
        assert_eq!(DirectionState::default(), DirectionState::NEUTRAL);
    }

    #[test]
    fn test_from_held() {
        let state = DirectionState::from_held(&[Direction::Left, Direction::Down]);
        assert!(state.left);
        assert!(state.down);
        assert!(!state.right);
        assert!(!state.up);
    }

    #[test]
    fn test_set_and_is_held() {
        let mut state = DirectionState::default();
        for direction in Direction::ALL {
            assert!(!state.is_held(direction));
            state.set(direction, true);
            assert!(state.is_held(direction));
        }
        state.set(Direction::Up, false);
        assert!(!state.up);
    }

    #[test]
    fn test_conflicts() {
        let state = DirectionState::from_held(&[Direction::Left, Direction::Right]);
        assert!(state.horizontal_conflict());
        assert!(!state.vertical_conflict());

        let state = DirectionState::from_held(&[Direction::Up, Direction::Down]);
        assert!(!state.horizontal_conflict());
        assert!(state.vertical_conflict());
    }

    #[test]
    fn test_display_neutral() {
        assert_eq!(DirectionState::default().to_string(), "Neutral");
    }

    #[test]
    fn test_display_uses_declaration_order() {
        let state = DirectionState::from_held(&[Direction::Up, Direction::Left]);
        assert_eq!(state.to_string(), "Left Up");

        let state = DirectionState::from_held(&Direction::ALL);
        assert_eq!(state.to_string(), "Left Right Up Down");
    }
}
