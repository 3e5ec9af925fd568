//! Goals and portfolio item goals

use crate::ids::GoalId;
use serde::{Deserialize, Serialize};

/// A goal belonging to a scope and tier
///
/// For issue-backed tiers this is an issue record read as a goal, with the
/// issue key in [`Goal::key`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    /// Goal id (numeric string)
    pub id: GoalId,
    /// Display key, e.g. `G-3` or an issue key
    #[serde(default)]
    pub key: String,
    /// Free-text description
    #[serde(default)]
    pub description: String,
    /// Baseline share of the target's points, written by point distribution
    #[serde(default)]
    pub distributed_points: u32,
}

impl Goal {
    /// Create new goal with no distributed points
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<GoalId>, key: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            key: key.into(),
            description: description.into(),
            distributed_points: 0,
        }
    }

    /// With distributed points
    #[inline]
    #[must_use]
    pub fn with_distributed_points(mut self, points: u32) -> Self {
        self.distributed_points = points;
        self
    }
}

/// A goal estimated inside a portfolio item
///
/// Carries the user-editable `portfolio_item_points` allocation, which
/// starts at zero.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioItemGoal {
    /// The underlying goal
    #[serde(flatten)]
    pub goal: Goal,
    /// Points allocated to this goal within the portfolio item
    #[serde(default)]
    pub portfolio_item_points: u32,
}

impl PortfolioItemGoal {
    /// Wrap goal with zero portfolio item points
    #[inline]
    #[must_use]
    pub fn unallocated(goal: Goal) -> Self {
        Self {
            goal,
            portfolio_item_points: 0,
        }
    }

    /// Same goal with the portfolio item allocation cleared
    #[inline]
    #[must_use]
    pub fn cleared(self) -> Self {
        Self::unallocated(self.goal)
    }
}

impl From<Goal> for PortfolioItemGoal {
    fn from(goal: Goal) -> Self {
        Self::unallocated(goal)
    }
}

/// Goal shapes that can populate an estimation target
pub trait EstimationGoal {
    /// Underlying goal
    fn goal(&self) -> &Goal;

    /// Underlying goal, mutably
    fn goal_mut(&mut self) -> &mut Goal;

    /// Goal id
    #[inline]
    fn id(&self) -> &GoalId {
        &self.goal().id
    }
}

impl EstimationGoal for Goal {
    #[inline]
    fn goal(&self) -> &Goal {
        self
    }

    #[inline]
    fn goal_mut(&mut self) -> &mut Goal {
        self
    }
}

impl EstimationGoal for PortfolioItemGoal {
    #[inline]
    fn goal(&self) -> &Goal {
        &self.goal
    }

    #[inline]
    fn goal_mut(&mut self) -> &mut Goal {
        &mut self.goal
    }
}

/// Sort goals by ascending numeric id
pub fn sort_by_numeric_id<G: EstimationGoal>(goals: &mut [G]) {
    goals.sort_by(|a, b| a.id().cmp(b.id()));
}
