//! Contact vector to wall-relative heading.
//!
//! ## Resolution table
//!
//! | previous hits | current hits | result |
//! |---------------|--------------|--------|
//! | 0 | 0 | glide `(0, +1)` |
//! | any | ≥ 1 | sum of axis contributions, clamped per component |
//! | ≥ 1 | 0 | no rule, zero heading (motion takes its escape step) |
//!
//! Axis contributions:
//!
//! | axis | x | y |
//! |------|---|---|
//! | horizontal | `s` | |
//! | vertical | | `s` |
//! | diagonal | `s` | `s` |
//! | anti_diagonal | `s` | `-s` |

use crate::core::{ContactVector, DirectionVector};

/// Result of feeding one contact vector to a [`DirectionResolver`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resolution {
    /// Heading to follow this tick
    pub direction: DirectionVector,
    /// Did the contact vector differ from the previous one?
    pub changed: bool,
}

/// Resolves contact vectors into headings, tracking the previous contact.
///
/// A changed contact is resolved against the previous one. An unchanged
/// contact is resolved against itself, so a robot that stays clear glides
/// instead of repeating the heading it had when it lost the wall.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirectionResolver {
    previous: ContactVector,
    direction: DirectionVector,
}

impl Default for DirectionResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl DirectionResolver {
    /// Fresh resolver: previous contact clear, heading glide.
    pub fn new() -> Self {
        Self {
            previous: ContactVector::CLEAR,
            direction: DirectionVector::GLIDE,
        }
    }

    /// Resolve a contact against the previous one.
    ///
    /// Returns `None` when the walls just disappeared and no rule applies.
    pub fn resolve(contact: ContactVector, previous: ContactVector) -> Option<DirectionVector> {
        match (previous.hits(), contact.hits()) {
            (0, 0) => Some(DirectionVector::GLIDE),
            (_, 0) => None,
            _ => {
                let h = contact.horizontal.value();
                let v = contact.vertical.value();
                let d = contact.diagonal.value();
                let a = contact.anti_diagonal.value();
                Some(DirectionVector::from_weights(h + d + a, v + d - a))
            }
        }
    }

    /// Resolve, falling back to `fallback` when no rule applies.
    pub fn resolve_or(
        contact: ContactVector,
        previous: ContactVector,
        fallback: DirectionVector,
    ) -> DirectionVector {
        Self::resolve(contact, previous).unwrap_or(fallback)
    }

    /// Feed the current contact vector.
    pub fn update(&mut self, contact: ContactVector) -> Resolution {
        let changed = contact != self.previous;
        self.direction = Self::resolve_or(contact, self.previous, DirectionVector::ZERO);
        self.previous = contact;

        Resolution {
            direction: self.direction,
            changed,
        }
    }

    /// Last contact vector seen
    #[inline]
    pub fn previous(&self) -> ContactVector {
        self.previous
    }

    /// Heading from the last update
    #[inline]
    pub fn direction(&self) -> DirectionVector {
        self.direction
    }

    /// Forget the history.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
