//! Tri-state contact and heading vectors.
//!
//! Every axis reading is one of exactly three values. Encoding that in
//! [`Sign`] keeps the direction table exhaustive at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Neg;

/// Tri-state axis value: `-1`, `0` or `+1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(i8)]
pub enum Sign {
    /// Negative direction along the axis
    Negative = -1,
    /// No reading
    #[default]
    Zero = 0,
    /// Positive direction along the axis
    Positive = 1,
}

impl Sign {
    /// All three values, in ascending order.
    pub const ALL: [Sign; 3] = [Sign::Negative, Sign::Zero, Sign::Positive];

    /// Sign of an integer (zero stays zero).
    #[inline]
    pub fn of(value: i32) -> Self {
        match value.signum() {
            1 => Sign::Positive,
            -1 => Sign::Negative,
            _ => Sign::Zero,
        }
    }

    /// Integer value in `{-1, 0, 1}`.
    #[inline]
    pub fn value(self) -> i32 {
        self as i32
    }

    /// Is this axis reading non-zero?
    #[inline]
    pub fn is_set(self) -> bool {
        self != Sign::Zero
    }
}

impl Neg for Sign {
    type Output = Sign;

    #[inline]
    fn neg(self) -> Sign {
        match self {
            Sign::Negative => Sign::Positive,
            Sign::Zero => Sign::Zero,
            Sign::Positive => Sign::Negative,
        }
    }
}

/// Wall contacts along the four detection axes.
///
/// Coordinates follow the grid convention (x right, y down):
/// - `horizontal`: positive = wall to the right
/// - `vertical`: positive = wall below
/// - `diagonal`: axis through `(+1, +1)`, positive = wall below-right
/// - `anti_diagonal`: axis through `(+1, -1)`, positive = wall above-right
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ContactVector {
    /// Left/right contact
    pub horizontal: Sign,
    /// Top/bottom contact
    pub vertical: Sign,
    /// Top-left/bottom-right contact
    pub diagonal: Sign,
    /// Bottom-left/top-right contact
    pub anti_diagonal: Sign,
}

impl ContactVector {
    /// No contact on any axis.
    pub const CLEAR: ContactVector = ContactVector {
        horizontal: Sign::Zero,
        vertical: Sign::Zero,
        diagonal: Sign::Zero,
        anti_diagonal: Sign::Zero,
    };

    /// Create a contact vector.
    pub fn new(horizontal: Sign, vertical: Sign, diagonal: Sign, anti_diagonal: Sign) -> Self {
        Self {
            horizontal,
            vertical,
            diagonal,
            anti_diagonal,
        }
    }

    /// Build from raw integers, clamping each to its sign.
    pub fn from_values(values: [i32; 4]) -> Self {
        Self::new(
            Sign::of(values[0]),
            Sign::of(values[1]),
            Sign::of(values[2]),
            Sign::of(values[3]),
        )
    }

    /// Axis readings in `[horizontal, vertical, diagonal, anti_diagonal]` order.
    #[inline]
    pub fn axes(&self) -> [Sign; 4] {
        [self.horizontal, self.vertical, self.diagonal, self.anti_diagonal]
    }

    /// Number of axes reporting a wall.
    #[inline]
    pub fn hits(&self) -> usize {
        self.axes().iter().filter(|s| s.is_set()).count()
    }

    /// True when no axis reports a wall.
    #[inline]
    pub fn is_clear(&self) -> bool {
        self.hits() == 0
    }

    /// Every possible contact vector (3^4 values).
    pub fn all() -> impl Iterator<Item = ContactVector> {
        Sign::ALL.into_iter().flat_map(|h| {
            Sign::ALL.into_iter().flat_map(move |v| {
                Sign::ALL.into_iter().flat_map(move |d| {
                    Sign::ALL
                        .into_iter()
                        .map(move |a| ContactVector::new(h, v, d, a))
                })
            })
        })
    }
}

impl fmt::Display for ContactVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}, {}, {}]",
            self.horizontal.value(),
            self.vertical.value(),
            self.diagonal.value(),
            self.anti_diagonal.value()
        )
    }
}

/// Heading relative to detected walls, one [`Sign`] per axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct DirectionVector {
    /// X weight
    pub x: Sign,
    /// Y weight
    pub y: Sign,
}

impl DirectionVector {
    /// Default heading with no walls in view: glide along +y.
    pub const GLIDE: DirectionVector = DirectionVector {
        x: Sign::Zero,
        y: Sign::Positive,
    };

    /// Degenerate heading.
    pub const ZERO: DirectionVector = DirectionVector {
        x: Sign::Zero,
        y: Sign::Zero,
    };

    /// Create a direction vector.
    #[inline]
    pub fn new(x: Sign, y: Sign) -> Self {
        Self { x, y }
    }

    /// Build from raw weights, clamping each with `signum`.
    #[inline]
    pub fn from_weights(x: i32, y: i32) -> Self {
        Self::new(Sign::of(x), Sign::of(y))
    }

    /// Is this the degenerate `(0, 0)` heading?
    #[inline]
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

impl fmt::Display for DirectionVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x.value(), self.y.value())
    }
}

/// Wall-following convention.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RotationalSense {
    /// Clockwise traversal
    #[default]
    Clockwise,
    /// Counter-clockwise traversal
    CounterClockwise,
}

impl RotationalSense {
    /// The opposite sense.
    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            RotationalSense::Clockwise => RotationalSense::CounterClockwise,
            RotationalSense::CounterClockwise => RotationalSense::Clockwise,
        }
    }

    /// Lateral unit step used to move off a wall: left when clockwise,
    /// right when counter-clockwise.
    #[inline]
    pub fn lateral_step(self) -> i32 {
        match self {
            RotationalSense::Clockwise => -1,
            RotationalSense::CounterClockwise => 1,
        }
    }
}
