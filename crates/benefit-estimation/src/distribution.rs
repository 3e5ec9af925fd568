//! Point distribution
//!
//! Computes the minimum total a target needs so every child/parent pairing
//! can receive a whole-number share of at least `min_share`, rounded up to a
//! whole multiple of the base (100 by default). Each child goal then gets an
//! even slice of that total in its `distributed_points`; leftover points go
//! one at a time to the first goals, so the slices always sum to the total.

use crate::config::EstimationConfig;
use crate::relation::compute_relation;
use benefit_model::{EstimationGoal, Goal, Relation};

/// Outcome of distributing one target's goals
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Distribution<G> {
    /// Minimum total points this target requires
    pub points_to_distribute: u32,
    /// Goals with `distributed_points` populated
    pub goals: Vec<G>,
}

/// Computes per-target baselines and goal shares
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointsDistributor {
    base_points: u32,
    min_share: u32,
}

impl PointsDistributor {
    /// Create distributor from configuration
    #[inline]
    #[must_use]
    pub fn new(config: &EstimationConfig) -> Self {
        Self {
            base_points: config.base_points.max(1),
            min_share: config.min_share.max(1),
        }
    }

    /// Baseline every target starts from
    #[inline]
    #[must_use]
    pub fn base_points(&self) -> u32 {
        self.base_points
    }

    /// Minimum total for `child_count` goals under `relation`
    #[must_use]
    pub fn required_points(&self, child_count: usize, relation: &Relation) -> u32 {
        let pairings = child_count.saturating_mul(relation.pairings_per_goal()) as u64;
        let needed = pairings.saturating_mul(u64::from(self.min_share));
        let base = u64::from(self.base_points);
        let blocks = needed.div_ceil(base).max(1);
        u32::try_from(blocks.saturating_mul(base)).unwrap_or(u32::MAX)
    }

    /// Distribute against a parent goal set
    #[must_use]
    pub fn distribute<G: EstimationGoal>(&self, goals: Vec<G>, upper_goals: &[Goal]) -> Distribution<G> {
        self.distribute_with_relation(goals, &compute_relation(upper_goals))
    }

    /// Distribute against an already computed relation
    ///
    /// Goals are expected in their final (sorted) order; shares are assigned
    /// positionally.
    #[must_use]
    pub fn distribute_with_relation<G: EstimationGoal>(
        &self,
        mut goals: Vec<G>,
        relation: &Relation,
    ) -> Distribution<G> {
        let total = self.required_points(goals.len(), relation);
        if goals.is_empty() {
            return Distribution {
                points_to_distribute: total,
                goals,
            };
        }

        let count = goals.len() as u64;
        let share = u64::from(total) / count;
        let remainder = u64::from(total) % count;
        for (index, goal) in goals.iter_mut().enumerate() {
            let bonus = u64::from((index as u64) < remainder);
            // share + bonus <= total, so it fits
            goal.goal_mut().distributed_points = u32::try_from(share + bonus).unwrap_or(u32::MAX);
        }

        Distribution {
            points_to_distribute: total,
            goals,
        }
    }
}

impl Default for PointsDistributor {
    fn default() -> Self {
        Self::new(&EstimationConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use benefit_model::PortfolioItemGoal;
    use proptest::prelude::*;

    fn goals(n: usize) -> Vec<Goal> {
        (1..=n).map(|i| Goal::new(i.to_string(), format!("G-{i}"), "")).collect()
    }

    #[test]
    fn small_groups_use_base() {
        let distributor = PointsDistributor::default();
        let result = distributor.distribute(goals(3), &goals(2));
        assert_eq!(result.points_to_distribute, 100);
        let shares: Vec<u32> = result.goals.iter().map(|g| g.distributed_points).collect();
        assert_eq!(shares, vec![34, 33, 33]);
    }

    #[test]
    fn dense_pairings_raise_total() {
        let distributor = PointsDistributor::default();
        // 30 child goals x 4 parents = 120 pairings
        let result = distributor.distribute(goals(30), &goals(4));
        assert_eq!(result.points_to_distribute, 200);
    }

    #[test]
    fn one_to_one_counts_children_only() {
        let distributor = PointsDistributor::default();
        let result = distributor.distribute(goals(150), &goals(1));
        assert_eq!(result.points_to_distribute, 200);
        assert!(result.goals.iter().all(|g| g.distributed_points >= 1));
    }

    #[test]
    fn min_share_scales_requirement() {
        let config = EstimationConfig::new().with_min_share(10);
        let distributor = PointsDistributor::new(&config);
        // 6 x 2 pairings x 10 points each = 120
        assert_eq!(distributor.distribute(goals(6), &goals(2)).points_to_distribute, 200);
    }

    #[test]
    fn empty_group_returns_base() {
        let distributor = PointsDistributor::default();
        let result: Distribution<Goal> = distributor.distribute(Vec::new(), &goals(3));
        assert_eq!(result.points_to_distribute, 100);
        assert!(result.goals.is_empty());
    }

    #[test]
    fn portfolio_points_untouched() {
        let distributor = PointsDistributor::default();
        let wrapped: Vec<PortfolioItemGoal> = goals(4).into_iter().map(PortfolioItemGoal::from).collect();
        let result = distributor.distribute(wrapped, &goals(2));
        assert!(result.goals.iter().all(|g| g.portfolio_item_points == 0));
        assert!(result.goals.iter().all(|g| g.goal.distributed_points == 25));
    }

    #[test]
    fn deterministic() {
        let distributor = PointsDistributor::default();
        let a = distributor.distribute(goals(7), &goals(3));
        let b = distributor.distribute(goals(7), &goals(3));
        assert_eq!(a, b);
    }

    proptest! {
        #[test]
        fn prop_never_below_base(children in 0usize..400, parents in 1usize..40) {
            let distributor = PointsDistributor::default();
            let result = distributor.distribute(goals(children), &goals(parents));
            prop_assert!(result.points_to_distribute >= 100);
            prop_assert_eq!(result.points_to_distribute % 100, 0);
        }

        #[test]
        fn prop_shares_sum_to_total(children in 1usize..400, parents in 1usize..40) {
            let distributor = PointsDistributor::default();
            let result = distributor.distribute(goals(children), &goals(parents));
            let sum: u64 = result.goals.iter().map(|g| u64::from(g.distributed_points)).sum();
            prop_assert_eq!(sum, u64::from(result.points_to_distribute));
            prop_assert!(result.goals.iter().all(|g| g.distributed_points >= 1));
        }
    }
}
