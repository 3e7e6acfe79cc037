//! Exclusion and inclusion rules.
//!
//! Rules reference parties by name and keep names in canonical (sorted)
//! order so that `[A, B]` and `[B, A]` denote the same rule.

use std::fmt;

use crate::error::{CoalitionError, Result};

/// An unordered pair of distinct party names, stored sorted.
///
/// # Examples
///
/// ```
/// use coalition_core::PartyPair;
///
/// let ab = PartyPair::new("B", "A").unwrap();
/// assert_eq!(ab.first(), "A");
/// assert_eq!(ab.second(), "B");
/// assert_eq!(ab, PartyPair::new("A", "B").unwrap());
/// assert!(PartyPair::new("A", "A").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PartyPair {
    first: String,
    second: String,
}

impl PartyPair {
    pub fn new(a: impl Into<String>, b: impl Into<String>) -> Result<Self> {
        let (a, b) = (a.into(), b.into());
        if a == b {
            return Err(CoalitionError::InvalidInput(format!(
                "rule names party '{}' twice",
                a
            )));
        }
        let (first, second) = if a <= b { (a, b) } else { (b, a) };
        Ok(Self { first, second })
    }

    #[inline]
    pub fn first(&self) -> &str {
        &self.first
    }

    #[inline]
    pub fn second(&self) -> &str {
        &self.second
    }

    pub fn contains(&self, name: &str) -> bool {
        self.first == name || self.second == name
    }
}

impl fmt::Display for PartyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {}", self.first, self.second)
    }
}

/// Forbids one party outright, or two parties from co-occurring.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Exclusion {
    /// The party may never be part of a coalition.
    Party(String),
    /// The two parties may not sit in the same coalition.
    Pair(PartyPair),
}

impl Exclusion {
    pub fn party(name: impl Into<String>) -> Self {
        Exclusion::Party(name.into())
    }

    pub fn pair(a: impl Into<String>, b: impl Into<String>) -> Result<Self> {
        PartyPair::new(a, b).map(Exclusion::Pair)
    }

    /// Builds an exclusion from a request list of one or two names.
    ///
    /// # Examples
    ///
    /// ```
    /// use coalition_core::Exclusion;
    ///
    /// let single = Exclusion::from_names(&["PVV".to_string()]).unwrap();
    /// assert_eq!(single, Exclusion::party("PVV"));
    /// assert!(Exclusion::from_names(&[]).is_err());
    /// ```
    pub fn from_names(names: &[String]) -> Result<Self> {
        match names {
            [only] => Ok(Exclusion::party(only.clone())),
            [a, b] => Exclusion::pair(a.clone(), b.clone()),
            _ => Err(CoalitionError::InvalidInput(format!(
                "an exclusion names one or two parties, got {}",
                names.len()
            ))),
        }
    }

    /// Party names covered by the rule, in canonical order.
    pub fn names(&self) -> Vec<&str> {
        match self {
            Exclusion::Party(name) => vec![name.as_str()],
            Exclusion::Pair(pair) => vec![pair.first(), pair.second()],
        }
    }
}

impl fmt::Display for Exclusion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Exclusion::Party(name) => write!(f, "exclude {}", name),
            Exclusion::Pair(pair) => write!(f, "exclude {}", pair),
        }
    }
}

/// Requires two parties to appear together or not at all.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Inclusion(PartyPair);

impl Inclusion {
    pub fn new(a: impl Into<String>, b: impl Into<String>) -> Result<Self> {
        PartyPair::new(a, b).map(Inclusion)
    }

    /// Builds an inclusion from a request list of exactly two names.
    pub fn from_names(names: &[String]) -> Result<Self> {
        match names {
            [a, b] => Inclusion::new(a.clone(), b.clone()),
            _ => Err(CoalitionError::InvalidInput(format!(
                "an inclusion names exactly two parties, got {}",
                names.len()
            ))),
        }
    }

    #[inline]
    pub fn pair(&self) -> &PartyPair {
        &self.0
    }

    pub fn names(&self) -> Vec<&str> {
        vec![self.0.first(), self.0.second()]
    }
}

impl fmt::Display for Inclusion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "include {}", self.0)
    }
}
