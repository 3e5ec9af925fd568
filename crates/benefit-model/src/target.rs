//! Estimation targets

use crate::goal::{sort_by_numeric_id, EstimationGoal};
use crate::scope::Scope;
use crate::tier::GoalTier;
use serde::{Deserialize, Serialize};

/// One scope + tier + goal list unit participating in an estimation
///
/// The target owns its goal list for the duration of the computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimationTarget<G> {
    /// Scope the goals belong to
    pub scope: Scope,
    /// Tier the goals were fetched from
    pub goal_tier: GoalTier,
    /// Goals to estimate
    pub goals: Vec<G>,
}

impl<G> EstimationTarget<G> {
    /// Create new target
    #[inline]
    #[must_use]
    pub fn new(scope: Scope, goal_tier: GoalTier, goals: Vec<G>) -> Self {
        Self {
            scope,
            goal_tier,
            goals,
        }
    }

    /// Whether the target has any goals
    #[inline]
    #[must_use]
    pub fn has_goals(&self) -> bool {
        !self.goals.is_empty()
    }

    /// Transform every goal, keeping scope and tier
    #[must_use]
    pub fn map_goals<H>(self, f: impl FnMut(G) -> H) -> EstimationTarget<H> {
        EstimationTarget {
            scope: self.scope,
            goal_tier: self.goal_tier,
            goals: self.goals.into_iter().map(f).collect(),
        }
    }
}

impl<G: EstimationGoal> EstimationTarget<G> {
    /// Sort goals by ascending numeric id
    #[inline]
    pub fn sort_goals(&mut self) {
        sort_by_numeric_id(&mut self.goals);
    }
}
