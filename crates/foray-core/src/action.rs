//! Discrete agent actions.
//!
//! The simulator's action space is two branches of three choices each.
//! Branch 0 moves the agent along its facing axis; branch 1 turns it.
//! Only the turn branch affects heading tracking.

use crate::error::ActionError;

/// Forward/back component of an action (branch 0).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Move {
    /// No translation.
    #[default]
    Stay = 0,
    /// Move along the facing direction.
    Forward = 1,
    /// Move against the facing direction.
    Backward = 2,
}

/// Turn component of an action (branch 1).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Turn {
    /// Heading unchanged.
    #[default]
    None = 0,
    /// Rotate left; heading decreases.
    Left = 1,
    /// Rotate right; heading increases.
    Right = 2,
}

impl Turn {
    /// Heading change in degrees for a turn step of `step_deg`.
    pub fn heading_delta(self, step_deg: f64) -> f64 {
        match self {
            Turn::None => 0.0,
            Turn::Left => -step_deg,
            Turn::Right => step_deg,
        }
    }
}

impl TryFrom<u8> for Move {
    type Error = ActionError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Move::Stay),
            1 => Ok(Move::Forward),
            2 => Ok(Move::Backward),
            _ => Err(ActionError::InvalidMove { code }),
        }
    }
}

impl TryFrom<u8> for Turn {
    type Error = ActionError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Turn::None),
            1 => Ok(Turn::Left),
            2 => Ok(Turn::Right),
            _ => Err(ActionError::InvalidTurn { code }),
        }
    }
}

/// One agent's action for one simulator step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Action {
    /// Branch 0.
    pub movement: Move,
    /// Branch 1.
    pub turn: Turn,
}

impl Action {
    /// The do-nothing action.
    pub const NOOP: Self = Self::new(Move::Stay, Turn::None);

    /// Construct an action from its two branches.
    pub const fn new(movement: Move, turn: Turn) -> Self {
        Self { movement, turn }
    }

    /// Decode the simulator's `[move, turn]` code pair.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError`] if either code is outside `0..=2`.
    pub fn from_codes(codes: [u8; 2]) -> Result<Self, ActionError> {
        Ok(Self {
            movement: Move::try_from(codes[0])?,
            turn: Turn::try_from(codes[1])?,
        })
    }

    /// Encode as the simulator's `[move, turn]` code pair.
    pub fn codes(self) -> [u8; 2] {
        [self.movement as u8, self.turn as u8]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_all_valid_codes() {
        for m in 0..3u8 {
            for t in 0..3u8 {
                let a = Action::from_codes([m, t]).unwrap();
                assert_eq!(a.codes(), [m, t]);
            }
        }
    }

    #[test]
    fn reject_out_of_range_codes() {
        assert_eq!(
            Action::from_codes([3, 0]),
            Err(ActionError::InvalidMove { code: 3 })
        );
        assert_eq!(
            Action::from_codes([0, 9]),
            Err(ActionError::InvalidTurn { code: 9 })
        );
    }

    #[test]
    fn left_decreases_right_increases() {
        assert_eq!(Turn::Left.heading_delta(7.0), -7.0);
        assert_eq!(Turn::Right.heading_delta(7.0), 7.0);
        assert_eq!(Turn::None.heading_delta(7.0), 0.0);
    }
}
