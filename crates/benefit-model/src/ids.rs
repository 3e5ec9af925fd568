//! Identifier newtypes
//!
//! Scope, tier and goal ids arrive from the host platform as strings. The
//! newtypes keep them from being mixed up and carry the two interpretation
//! rules the core relies on: portfolio detection by prefix and numeric goal
//! ordering.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Prefix marking a scope id as a portfolio
pub const PORTFOLIO_PREFIX: &str = "pf";

/// Scope identifier (project, portfolio or portfolio item)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScopeId(String);

impl ScopeId {
    /// Create new scope id
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Raw id
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this id names a portfolio rather than a project
    #[inline]
    #[must_use]
    pub fn is_portfolio(&self) -> bool {
        self.0.starts_with(PORTFOLIO_PREFIX)
    }
}

impl fmt::Display for ScopeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ScopeId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ScopeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Goal tier identifier
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GoalTierId(String);

impl GoalTierId {
    /// Create new tier id
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Raw id
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GoalTierId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for GoalTierId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for GoalTierId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Goal identifier
///
/// Goal ids are numeric strings. Ordering is numeric (`"2" < "10"`); ids
/// that do not parse as integers sort after every numeric id and lexically
/// among themselves, so the order stays total.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GoalId(String);

impl GoalId {
    /// Create new goal id
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Raw id
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value, if the id is an integer
    #[inline]
    #[must_use]
    pub fn numeric(&self) -> Option<u64> {
        self.0.trim().parse().ok()
    }
}

impl Ord for GoalId {
    fn cmp(&self, other: &Self) -> Ordering {
        let (a, b) = (self.numeric(), other.numeric());
        a.is_none()
            .cmp(&b.is_none())
            .then(a.cmp(&b))
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for GoalId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for GoalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for GoalId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for GoalId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn portfolio_prefix_detection() {
        assert!(ScopeId::new("pf-12").is_portfolio());
        assert!(ScopeId::new("pf1").is_portfolio());
        assert!(!ScopeId::new("10001").is_portfolio());
        assert!(!ScopeId::new("P1").is_portfolio());
    }

    #[test]
    fn goal_ids_sort_numerically() {
        let mut ids: Vec<GoalId> = ["10", "2", "1"].into_iter().map(GoalId::from).collect();
        ids.sort();
        let sorted: Vec<&str> = ids.iter().map(GoalId::as_str).collect();
        assert_eq!(sorted, vec!["1", "2", "10"]);
    }

    #[test]
    fn non_numeric_ids_sort_last() {
        let mut ids: Vec<GoalId> = ["b", "7", "a", "3"].into_iter().map(GoalId::from).collect();
        ids.sort();
        let sorted: Vec<&str> = ids.iter().map(GoalId::as_str).collect();
        assert_eq!(sorted, vec!["3", "7", "a", "b"]);
    }

    #[test]
    fn equal_numeric_value_still_ordered() {
        let a = GoalId::new("01");
        let b = GoalId::new("1");
        assert_ne!(a, b);
        assert_eq!(a.cmp(&b), Ordering::Less);
        assert_eq!(b.cmp(&a), Ordering::Greater);
    }

    #[test]
    fn ids_serialize_as_plain_strings() {
        let json = serde_json::to_string(&GoalId::new("42")).unwrap();
        assert_eq!(json, "\"42\"");
    }

    proptest! {
        #[test]
        fn prop_numeric_order_matches_integers(a in 0u64..1_000_000, b in 0u64..1_000_000) {
            let ga = GoalId::new(a.to_string());
            let gb = GoalId::new(b.to_string());
            prop_assert_eq!(ga.cmp(&gb), a.cmp(&b));
        }
    }
}
