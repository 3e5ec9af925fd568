//! Estimation Props Builder
//!
//! Orchestrates one estimation request:
//! 1. Resolve child targets and fetch parent goals concurrently
//! 2. Reject empty parent goal sets and child tiers without goals
//! 3. Compute the relation once from the parent goals
//! 4. Sort and distribute every target, keeping the largest baseline
//! 5. Shape the result by mode

use crate::config::EstimationConfig;
use crate::distribution::PointsDistributor;
use crate::error::{EstimationError, EstimationResult};
use crate::relation::compute_relation;
use crate::sources::EstimationSources;
use crate::targets::TargetResolver;
use benefit_model::{
    EstimationGoal, EstimationProps, EstimationTarget, EstimationTargets, Goal, GoalTier,
    PortfolioItemGoal, Relation,
};
use tracing::Instrument;
use ulid::Ulid;

/// Builds [`EstimationProps`] for a child tier against its parent tier
#[derive(Debug, Clone)]
pub struct EstimationPropsBuilder {
    sources: EstimationSources,
    resolver: TargetResolver,
    distributor: PointsDistributor,
}

impl EstimationPropsBuilder {
    /// Create builder with default configuration
    #[inline]
    #[must_use]
    pub fn new(sources: EstimationSources) -> Self {
        let config = EstimationConfig::default();
        Self {
            resolver: TargetResolver::new(sources.clone(), config.fan_out_concurrency),
            distributor: PointsDistributor::new(&config),
            sources,
        }
    }

    /// Create builder with explicit configuration
    ///
    /// # Errors
    /// `EstimationError::Config` if the configuration is out of range
    pub fn with_config(sources: EstimationSources, config: &EstimationConfig) -> EstimationResult<Self> {
        config.validate()?;
        Ok(Self {
            resolver: TargetResolver::new(sources.clone(), config.fan_out_concurrency),
            distributor: PointsDistributor::new(config),
            sources,
        })
    }

    /// Build estimation props for `goal_tier` against `upper_goal_tier`
    ///
    /// This is the main entry point for estimation requests.
    ///
    /// # Errors
    /// - `EstimationError::EmptyGoalSet` naming the upper tier if it has no goals
    /// - `EstimationError::EmptyGoalSet` naming the child tier if no target has goals
    /// - `EstimationError::ScopeNotFound` if the child tier's scope is dangling
    /// - `EstimationError::Upstream` if any collaborator fails
    pub async fn build(
        &self,
        goal_tier: &GoalTier,
        upper_goal_tier: &GoalTier,
    ) -> EstimationResult<EstimationProps> {
        let span = tracing::info_span!(
            "estimation_props",
            request_id = %Ulid::new(),
            tier = %goal_tier.name,
            upper_tier = %upper_goal_tier.name,
            mode = ?goal_tier.mode(),
        );
        self.build_in_span(goal_tier, upper_goal_tier).instrument(span).await
    }

    /// Build estimation props for `goal_tier` against its directory parent
    ///
    /// # Errors
    /// - `EstimationError::NoUpperTier` if the directory knows no parent tier
    /// - everything [`build`](Self::build) returns
    pub async fn build_for_tier(&self, goal_tier: &GoalTier) -> EstimationResult<EstimationProps> {
        let upper_goal_tier = self
            .sources
            .tiers
            .upper_tier(goal_tier)
            .await?
            .ok_or_else(|| EstimationError::NoUpperTier {
                tier_name: goal_tier.name.clone(),
            })?;
        self.build(goal_tier, &upper_goal_tier).await
    }

    async fn build_in_span(
        &self,
        goal_tier: &GoalTier,
        upper_goal_tier: &GoalTier,
    ) -> EstimationResult<EstimationProps> {
        tracing::info!("Building estimation props");

        let (mut targets, upper_goals) = tokio::try_join!(
            self.resolver.resolve_targets(goal_tier),
            self.fetch_upper_goals(upper_goal_tier),
        )
        .map_err(|e| {
            tracing::error!(error = %e, "Estimation fetch failed");
            e
        })?;

        if upper_goals.is_empty() {
            return Err(EstimationError::empty_goal_set(&upper_goal_tier.name));
        }

        targets.retain_with_goals();
        if targets.is_empty() {
            return Err(EstimationError::empty_goal_set(&goal_tier.name));
        }

        let relation = compute_relation(&upper_goals);
        let mut points_to_distribute = self.distributor.base_points();

        let estimation_targets = match targets {
            EstimationTargets::Standard(targets) => EstimationTargets::Standard(self.distribute_targets(
                targets,
                &relation,
                &mut points_to_distribute,
            )),
            EstimationTargets::PortfolioItems(targets) => EstimationTargets::PortfolioItems(
                self.distribute_targets(targets, &relation, &mut points_to_distribute)
                    .into_iter()
                    .map(|target| target.map_goals(PortfolioItemGoal::cleared))
                    .collect(),
            ),
        };

        tracing::info!(
            targets = estimation_targets.len(),
            points_to_distribute,
            cardinality = ?relation.cardinality,
            "Estimation props ready"
        );

        Ok(EstimationProps {
            upper_goal_tier: upper_goal_tier.clone(),
            upper_goals,
            relation,
            points_to_distribute,
            estimation_targets,
        })
    }

    #[tracing::instrument(level = "debug", skip(self, upper_goal_tier), fields(tier = %upper_goal_tier.name))]
    async fn fetch_upper_goals(&self, upper_goal_tier: &GoalTier) -> EstimationResult<Vec<Goal>> {
        let goals = self
            .sources
            .goals
            .goals_for_tier(&upper_goal_tier.scope_id, &upper_goal_tier.id)
            .await?;
        Ok(goals)
    }

    /// Sort and distribute each target, raising `points_to_distribute` to the
    /// largest requirement seen
    fn distribute_targets<G: EstimationGoal>(
        &self,
        targets: Vec<EstimationTarget<G>>,
        relation: &Relation,
        points_to_distribute: &mut u32,
    ) -> Vec<EstimationTarget<G>> {
        targets
            .into_iter()
            .map(|mut target| {
                target.sort_goals();
                let goals = std::mem::take(&mut target.goals);
                let distribution = self.distributor.distribute_with_relation(goals, relation);
                tracing::debug!(
                    scope = %target.scope.id,
                    goals = distribution.goals.len(),
                    required = distribution.points_to_distribute,
                    "Distributed target"
                );
                *points_to_distribute = (*points_to_distribute).max(distribution.points_to_distribute);
                target.goals = distribution.goals;
                target
            })
            .collect()
    }
}
