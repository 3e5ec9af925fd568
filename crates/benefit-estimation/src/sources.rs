//! Collaborator capabilities consumed by the estimation core
//!
//! Tier metadata, scope lookup and goal retrieval live outside this crate.
//! Hosts implement these traits over their own storage and issue APIs.

use crate::error::UpstreamError;
use async_trait::async_trait;
use benefit_model::{Goal, GoalTier, GoalTierId, Scope, ScopeId};
use std::fmt;
use std::sync::Arc;

/// Result alias for collaborator calls
pub type SourceResult<T> = Result<T, UpstreamError>;

/// Goal tier metadata and linkage
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GoalTierDirectory: Send + Sync {
    /// Highest-ranked child tier configured for a scope, if any
    async fn top_ranked_child_tier(&self, scope_id: &ScopeId) -> SourceResult<Option<GoalTier>>;

    /// Parent tier of a tier, if any
    async fn upper_tier(&self, tier: &GoalTier) -> SourceResult<Option<GoalTier>>;
}

/// Scope lookup
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ScopeResolver: Send + Sync {
    /// Project by id
    async fn project(&self, id: &ScopeId) -> SourceResult<Option<Scope>>;

    /// Portfolio by id
    async fn portfolio(&self, id: &ScopeId) -> SourceResult<Option<Scope>>;

    /// Portfolio items under a scope, in the order the host keeps them
    async fn portfolio_items(&self, scope_id: &ScopeId) -> SourceResult<Vec<Scope>>;
}

/// Raw goal retrieval
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GoalSource: Send + Sync {
    /// Goals of a tier within a scope
    async fn goals_for_tier(&self, scope_id: &ScopeId, tier_id: &GoalTierId) -> SourceResult<Vec<Goal>>;

    /// Issues of a scope read as goals
    async fn issues_as_goals(&self, scope_id: &ScopeId) -> SourceResult<Vec<Goal>>;
}

/// The set of collaborators an estimation build talks to
#[derive(Clone)]
pub struct EstimationSources {
    /// Tier directory
    pub tiers: Arc<dyn GoalTierDirectory>,
    /// Scope resolver
    pub scopes: Arc<dyn ScopeResolver>,
    /// Goal source
    pub goals: Arc<dyn GoalSource>,
}

impl EstimationSources {
    /// Create from separate collaborators
    #[inline]
    #[must_use]
    pub fn new(
        tiers: Arc<dyn GoalTierDirectory>,
        scopes: Arc<dyn ScopeResolver>,
        goals: Arc<dyn GoalSource>,
    ) -> Self {
        Self {
            tiers,
            scopes,
            goals,
        }
    }

    /// Create from one backend implementing every capability
    #[must_use]
    pub fn from_backend<B>(backend: Arc<B>) -> Self
    where
        B: GoalTierDirectory + ScopeResolver + GoalSource + 'static,
    {
        Self {
            tiers: backend.clone(),
            scopes: backend.clone(),
            goals: backend,
        }
    }
}

impl fmt::Debug for EstimationSources {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EstimationSources").finish_non_exhaustive()
    }
}
