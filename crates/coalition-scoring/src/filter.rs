//! Constraint filter.
//!
//! The filter runs after enumeration so that enumerators stay
//! constraint-agnostic. [`ConstraintFilter`] resolves rule names to roster
//! indices once per query; [`admissible`] is the name-level form of the
//! same check.

use coalition_core::{Dataset, Exclusion, Result};

use crate::constraint_set::ConstraintSet;

/// Checks a coalition, given by member names, against every rule.
///
/// - A single-party exclusion rejects any coalition containing that party.
/// - A pair exclusion rejects coalitions containing both parties.
/// - An inclusion rejects coalitions containing exactly one of its pair.
///
/// # Examples
///
/// ```
/// use coalition_core::{Exclusion, Inclusion};
/// use coalition_scoring::{admissible, ConstraintSet};
///
/// let mut rules = ConstraintSet::new();
/// rules.add_exclusion(Exclusion::pair("A", "B").unwrap()).unwrap();
/// rules.add_inclusion(Inclusion::new("C", "D").unwrap()).unwrap();
///
/// assert!(admissible(["A", "C", "D"], &rules));
/// assert!(!admissible(["A", "B"], &rules));
/// assert!(!admissible(["A", "C"], &rules));
/// assert!(admissible(["B"], &rules));
/// ```
pub fn admissible<'a>(members: impl IntoIterator<Item = &'a str>, rules: &ConstraintSet) -> bool {
    let members: Vec<&str> = members.into_iter().collect();
    let has = |name: &str| members.contains(&name);

    let excluded = rules.exclusions().iter().any(|rule| match rule {
        Exclusion::Party(name) => has(name),
        Exclusion::Pair(pair) => has(pair.first()) && has(pair.second()),
    });
    if excluded {
        return false;
    }

    rules
        .inclusions()
        .iter()
        .all(|inc| has(inc.pair().first()) == has(inc.pair().second()))
}

/// Rules resolved against a roster, checking subsets of roster indices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstraintFilter {
    banned: Vec<usize>,
    apart: Vec<(usize, usize)>,
    together: Vec<(usize, usize)>,
}

impl ConstraintFilter {
    /// A filter that admits every subset.
    pub fn none() -> Self {
        Self::default()
    }

    /// Compiles the rules against `dataset`.
    ///
    /// # Errors
    ///
    /// [`coalition_core::CoalitionError::PartyNotFound`] if a rule names a
    /// party missing from the dataset.
    pub fn compile(rules: &ConstraintSet, dataset: &Dataset) -> Result<Self> {
        rules.validate_parties(dataset)?;
        // validate_parties guarantees every lookup below succeeds
        let index = |name: &str| dataset.index_of(name).unwrap_or(usize::MAX);

        let mut filter = Self::none();
        for rule in rules.exclusions() {
            match rule {
                Exclusion::Party(name) => filter.banned.push(index(name)),
                Exclusion::Pair(pair) => filter
                    .apart
                    .push((index(pair.first()), index(pair.second()))),
            }
        }
        for inc in rules.inclusions() {
            filter
                .together
                .push((index(inc.pair().first()), index(inc.pair().second())));
        }
        Ok(filter)
    }

    /// Whether no rule is active.
    pub fn is_empty(&self) -> bool {
        self.banned.is_empty() && self.apart.is_empty() && self.together.is_empty()
    }

    /// Checks a subset of roster indices against every rule.
    pub fn admissible(&self, subset: &[usize]) -> bool {
        let has = |i: &usize| subset.contains(i);

        if self.banned.iter().any(has) {
            return false;
        }
        if self.apart.iter().any(|(a, b)| has(a) && has(b)) {
            return false;
        }
        self.together.iter().all(|(a, b)| has(a) == has(b))
    }
}
