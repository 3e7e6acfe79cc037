//! Parties and ideological positions.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{CoalitionError, Result};

/// Lower bound of both ideological axes.
pub const AXIS_MIN: f64 = -1.0;

/// Upper bound of both ideological axes.
pub const AXIS_MAX: f64 = 1.0;

/// Clamps a coordinate into `[-1, 1]`.
///
/// NaN collapses to the centre of the axis.
///
/// # Examples
///
/// ```
/// use coalition_core::clamp_axis;
///
/// assert_eq!(clamp_axis(5.0), 1.0);
/// assert_eq!(clamp_axis(-3.5), -1.0);
/// assert_eq!(clamp_axis(0.25), 0.25);
/// ```
#[inline]
pub fn clamp_axis(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(AXIS_MIN, AXIS_MAX)
    }
}

/// A point in the (economic, social) plane.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    /// Economic axis: -1 (left) to 1 (right).
    pub economic: f64,
    /// Social axis: -1 (conservative) to 1 (progressive).
    pub social: f64,
}

impl Position {
    /// Creates a position, clamping both coordinates into `[-1, 1]`.
    pub fn new(economic: f64, social: f64) -> Self {
        Self {
            economic: clamp_axis(economic),
            social: clamp_axis(social),
        }
    }

    /// Validates raw coordinates and clamps them.
    ///
    /// Out-of-range values are corrected; non-finite values are rejected
    /// except for infinities, which clamp to the nearest bound.
    pub fn checked(economic: f64, social: f64) -> Result<Self> {
        if economic.is_nan() || social.is_nan() {
            return Err(CoalitionError::InvalidInput(
                "coordinates must be numeric".to_string(),
            ));
        }
        Ok(Self::new(economic, social))
    }

    /// Euclidean distance to another position.
    #[inline]
    pub fn distance(&self, other: &Position) -> f64 {
        (self.economic - other.economic).hypot(self.social - other.social)
    }
}

/// A political party in a dataset.
///
/// Coordinates are kept inside `[-1, 1]` by every constructor and mutator.
///
/// # Examples
///
/// ```
/// use coalition_core::Party;
///
/// let party = Party::new("VVD", 24).with_position(0.7, 0.3);
/// assert_eq!(party.name(), "VVD");
/// assert!(party.is_eligible());
///
/// let clamped = Party::new("X", 1).with_position(5.0, -9.0);
/// assert_eq!(clamped.economic(), 1.0);
/// assert_eq!(clamped.social(), -1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Party {
    name: String,
    seats: u32,
    economic: f64,
    social: f64,
}

impl Party {
    /// Creates a party at the centre of both axes.
    pub fn new(name: impl Into<String>, seats: u32) -> Self {
        Self {
            name: name.into(),
            seats,
            economic: 0.0,
            social: 0.0,
        }
    }

    /// Creates a party after validating name and coordinates.
    pub fn try_new(name: impl Into<String>, seats: u32, economic: f64, social: f64) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CoalitionError::InvalidInput(
                "party name must not be empty".to_string(),
            ));
        }
        let position = Position::checked(economic, social)?;
        Ok(Self::new(name, seats).with_position(position.economic, position.social))
    }

    /// Moves the party, clamping both coordinates.
    pub fn with_position(mut self, economic: f64, social: f64) -> Self {
        self.economic = clamp_axis(economic);
        self.social = clamp_axis(social);
        self
    }

    /// Updates the position in place.
    ///
    /// # Errors
    ///
    /// Returns [`CoalitionError::InvalidInput`] for NaN coordinates.
    pub fn set_position(&mut self, economic: f64, social: f64) -> Result<()> {
        let position = Position::checked(economic, social)?;
        self.economic = position.economic;
        self.social = position.social;
        Ok(())
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn seats(&self) -> u32 {
        self.seats
    }

    #[inline]
    pub fn economic(&self) -> f64 {
        self.economic
    }

    #[inline]
    pub fn social(&self) -> f64 {
        self.social
    }

    #[inline]
    pub fn position(&self) -> Position {
        Position {
            economic: self.economic,
            social: self.social,
        }
    }

    /// Parties without seats never take part in enumeration.
    #[inline]
    pub fn is_eligible(&self) -> bool {
        self.seats > 0
    }
}

impl fmt::Display for Party {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} seats, {:+.2}/{:+.2})",
            self.name, self.seats, self.economic, self.social
        )
    }
}
