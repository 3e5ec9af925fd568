//! Error types for the estimation core
//!
//! Every failure is surfaced to the caller:
//! - Dangling scope ids
//! - Tiers without goals
//! - Collaborator (upstream) failures
//! - Invalid configuration

use benefit_model::ScopeId;

/// Result alias for estimation operations
pub type EstimationResult<T> = Result<T, EstimationError>;

/// Main estimation error type
#[derive(Debug, thiserror::Error)]
pub enum EstimationError {
    /// A scope id resolved to neither a portfolio nor a project
    #[error("Scope {scope_id} not found")]
    ScopeNotFound {
        /// The dangling id
        scope_id: ScopeId,
    },

    /// A tier has no goals to estimate or estimate against
    #[error("{tier_name} has no goals")]
    EmptyGoalSet {
        /// Name of the offending tier
        tier_name: String,
    },

    /// The tier has no parent tier to estimate against
    #[error("{tier_name} has no upper goal tier")]
    NoUpperTier {
        /// Name of the orphan tier
        tier_name: String,
    },

    /// A collaborator fetch failed
    #[error("upstream failure: {0}")]
    Upstream(#[from] UpstreamError),

    /// Configuration rejected
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl EstimationError {
    /// Create empty goal set error for a tier
    #[inline]
    pub fn empty_goal_set(tier_name: impl Into<String>) -> Self {
        Self::EmptyGoalSet {
            tier_name: tier_name.into(),
        }
    }

    /// Check if a scope lookup failed
    #[inline]
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ScopeNotFound { .. })
    }

    /// Check if a tier had no goals
    #[inline]
    #[must_use]
    pub fn is_empty_goal_set(&self) -> bool {
        matches!(self, Self::EmptyGoalSet { .. })
    }

    /// Check if a collaborator failed
    #[inline]
    #[must_use]
    pub fn is_upstream(&self) -> bool {
        matches!(self, Self::Upstream(_))
    }
}

/// Failure reported by a collaborator (tier directory, scope resolver, goal source)
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{collaborator} failed: {message}")]
pub struct UpstreamError {
    /// Which collaborator failed
    pub collaborator: &'static str,
    /// What went wrong
    pub message: String,
}

impl UpstreamError {
    /// Create new upstream error
    #[inline]
    pub fn new(collaborator: &'static str, message: impl Into<String>) -> Self {
        Self {
            collaborator,
            message: message.into(),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A value is out of range
    #[error("invalid {field}: {reason}")]
    Invalid {
        /// Offending field
        field: &'static str,
        /// Why it was rejected
        reason: String,
    },

    /// TOML could not be parsed
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
}
