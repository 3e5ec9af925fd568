//! Estimation target resolution
//!
//! Turns a goal tier into the concrete targets estimated against the parent
//! tier. Dispatch is by tier type:
//!
//! - `PortfolioItem`: one target per portfolio item of the tier's scope that
//!   has a top-ranked goal tier; items without one are skipped
//! - `GoalCollection` / `IssueType`: a single target for the tier's own scope
//!
//! Any failed fetch fails the whole resolution. There is no partial result.

use crate::error::{EstimationError, EstimationResult};
use crate::sources::EstimationSources;
use benefit_model::{
    EstimationTarget, EstimationTargets, Goal, GoalTier, GoalTierType, PortfolioItemGoal, Scope,
    ScopeId,
};
use futures::stream::{self, StreamExt, TryStreamExt};

/// Resolves the estimation targets of a goal tier
#[derive(Debug, Clone)]
pub struct TargetResolver {
    sources: EstimationSources,
    fan_out_concurrency: usize,
}

impl TargetResolver {
    /// Create new resolver
    #[inline]
    #[must_use]
    pub fn new(sources: EstimationSources, fan_out_concurrency: usize) -> Self {
        Self {
            sources,
            fan_out_concurrency: fan_out_concurrency.max(1),
        }
    }

    /// Resolve all targets of `goal_tier`
    ///
    /// # Errors
    /// - `EstimationError::ScopeNotFound` if the tier's scope does not resolve
    /// - `EstimationError::Upstream` if any collaborator fails
    #[tracing::instrument(
        skip(self, goal_tier),
        fields(tier = %goal_tier.name, tier_type = ?goal_tier.tier_type, scope = %goal_tier.scope_id)
    )]
    pub async fn resolve_targets(&self, goal_tier: &GoalTier) -> EstimationResult<EstimationTargets> {
        let targets = match goal_tier.tier_type {
            GoalTierType::PortfolioItem => {
                EstimationTargets::PortfolioItems(self.portfolio_item_targets(goal_tier).await?)
            }
            GoalTierType::GoalCollection | GoalTierType::IssueType => {
                EstimationTargets::Standard(vec![self.scope_target(goal_tier).await?])
            }
        };
        tracing::debug!(targets = targets.len(), "Resolved estimation targets");
        Ok(targets)
    }

    /// Fan out across the portfolio items of the tier's scope
    async fn portfolio_item_targets(
        &self,
        goal_tier: &GoalTier,
    ) -> EstimationResult<Vec<EstimationTarget<PortfolioItemGoal>>> {
        let items = self.sources.scopes.portfolio_items(&goal_tier.scope_id).await?;
        tracing::debug!(portfolio_items = items.len(), "Fetched portfolio items");

        // buffered() keeps item order regardless of completion order
        let targets: Vec<Option<EstimationTarget<PortfolioItemGoal>>> = stream::iter(items)
            .map(|item| self.portfolio_item_target(item))
            .buffered(self.fan_out_concurrency)
            .try_collect()
            .await?;

        Ok(targets.into_iter().flatten().collect())
    }

    async fn portfolio_item_target(
        &self,
        item: Scope,
    ) -> EstimationResult<Option<EstimationTarget<PortfolioItemGoal>>> {
        let Some(tier) = self.sources.tiers.top_ranked_child_tier(&item.id).await? else {
            tracing::debug!(portfolio_item = %item.id, "No goal tier configured, skipping");
            return Ok(None);
        };

        let goals = self
            .fetch_target_goals(&tier)
            .await?
            .into_iter()
            .map(PortfolioItemGoal::unallocated)
            .collect();

        Ok(Some(EstimationTarget::new(item, tier, goals)))
    }

    /// Single target for a scope-bound tier
    async fn scope_target(&self, goal_tier: &GoalTier) -> EstimationResult<EstimationTarget<Goal>> {
        let scope = self.resolve_scope(&goal_tier.scope_id).await?;
        let goals = self.fetch_target_goals(goal_tier).await?;
        Ok(EstimationTarget::new(scope, goal_tier.clone(), goals))
    }

    /// Look up a portfolio or project depending on the id prefix
    async fn resolve_scope(&self, scope_id: &ScopeId) -> EstimationResult<Scope> {
        let scope = if scope_id.is_portfolio() {
            self.sources.scopes.portfolio(scope_id).await?
        } else {
            self.sources.scopes.project(scope_id).await?
        };

        scope.ok_or_else(|| {
            tracing::warn!(scope = %scope_id, "Scope not found");
            EstimationError::ScopeNotFound {
                scope_id: scope_id.clone(),
            }
        })
    }

    #[tracing::instrument(level = "debug", skip(self, tier), fields(tier = %tier.name))]
    async fn fetch_target_goals(&self, tier: &GoalTier) -> EstimationResult<Vec<Goal>> {
        let goals = if tier.tier_type.is_issue_backed() {
            self.sources.goals.issues_as_goals(&tier.scope_id).await?
        } else {
            self.sources.goals.goals_for_tier(&tier.scope_id, &tier.id).await?
        };
        Ok(goals)
    }
}
