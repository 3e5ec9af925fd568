//! Organizational scopes

use crate::ids::ScopeId;
use serde::{Deserialize, Serialize};

/// Kind of organizational unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScopeKind {
    /// Issue-tracking project
    Project,
    /// Portfolio grouping projects and portfolio items
    Portfolio,
    /// Item inside a portfolio, with its own goal tiers
    PortfolioItem,
}

/// A project, portfolio or portfolio item that owns goals
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scope {
    /// Scope id
    pub id: ScopeId,
    /// Display name
    pub name: String,
    /// What kind of unit this is
    pub kind: ScopeKind,
}

impl Scope {
    /// Create new scope
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<ScopeId>, name: impl Into<String>, kind: ScopeKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
        }
    }

    /// Create project scope
    #[inline]
    #[must_use]
    pub fn project(id: impl Into<ScopeId>, name: impl Into<String>) -> Self {
        Self::new(id, name, ScopeKind::Project)
    }

    /// Create portfolio scope
    #[inline]
    #[must_use]
    pub fn portfolio(id: impl Into<ScopeId>, name: impl Into<String>) -> Self {
        Self::new(id, name, ScopeKind::Portfolio)
    }

    /// Create portfolio item scope
    #[inline]
    #[must_use]
    pub fn portfolio_item(id: impl Into<ScopeId>, name: impl Into<String>) -> Self {
        Self::new(id, name, ScopeKind::PortfolioItem)
    }
}
