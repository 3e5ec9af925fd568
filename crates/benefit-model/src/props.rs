//! Estimation props: the aggregate result of an estimation build

use crate::goal::{Goal, PortfolioItemGoal};
use crate::relation::Relation;
use crate::scope::Scope;
use crate::target::EstimationTarget;
use crate::tier::GoalTier;
use serde::{Deserialize, Serialize};

/// Which goal shape populates the estimation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EstimationMode {
    /// Plain goals, one target per scope
    Standard,
    /// Portfolio item goals, one target per portfolio item
    PortfolioItems,
}

/// Estimation targets tagged by mode
///
/// The mode tag and the goal shape live in one enum so they cannot disagree.
/// Serialized as `{"mode": ..., "estimationTargets": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    tag = "mode",
    content = "estimationTargets",
    rename_all = "SCREAMING_SNAKE_CASE"
)]
pub enum EstimationTargets {
    /// Targets holding plain goals
    Standard(Vec<EstimationTarget<Goal>>),
    /// Targets holding portfolio item goals
    PortfolioItems(Vec<EstimationTarget<PortfolioItemGoal>>),
}

impl EstimationTargets {
    /// Mode tag
    #[inline]
    #[must_use]
    pub fn mode(&self) -> EstimationMode {
        match self {
            Self::Standard(_) => EstimationMode::Standard,
            Self::PortfolioItems(_) => EstimationMode::PortfolioItems,
        }
    }

    /// Number of targets
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Standard(targets) => targets.len(),
            Self::PortfolioItems(targets) => targets.len(),
        }
    }

    /// Whether there are no targets
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop targets whose goal list is empty
    pub fn retain_with_goals(&mut self) {
        match self {
            Self::Standard(targets) => targets.retain(EstimationTarget::has_goals),
            Self::PortfolioItems(targets) => targets.retain(EstimationTarget::has_goals),
        }
    }

    /// Scopes of all targets, in target order
    #[must_use]
    pub fn scopes(&self) -> Vec<&Scope> {
        match self {
            Self::Standard(targets) => targets.iter().map(|t| &t.scope).collect(),
            Self::PortfolioItems(targets) => targets.iter().map(|t| &t.scope).collect(),
        }
    }

    /// Goal counts per target, in target order
    #[must_use]
    pub fn goal_counts(&self) -> Vec<usize> {
        match self {
            Self::Standard(targets) => targets.iter().map(|t| t.goals.len()).collect(),
            Self::PortfolioItems(targets) => targets.iter().map(|t| t.goals.len()).collect(),
        }
    }
}

/// Everything an allocation editor needs for one child tier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimationProps {
    /// Parent tier
    pub upper_goal_tier: GoalTier,
    /// Goals of the parent tier, never empty
    pub upper_goals: Vec<Goal>,
    /// Mapping shape of the parent goals
    pub relation: Relation,
    /// Total points per target, at least the base of 100
    pub points_to_distribute: u32,
    /// Mode-tagged targets
    #[serde(flatten)]
    pub estimation_targets: EstimationTargets,
}

impl EstimationProps {
    /// Mode tag
    #[inline]
    #[must_use]
    pub fn mode(&self) -> EstimationMode {
        self.estimation_targets.mode()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relation::Cardinality;
    use crate::tier::GoalTierType;

    fn target<G>(scope: &str, goals: Vec<G>) -> EstimationTarget<G> {
        EstimationTarget::new(
            Scope::portfolio_item(scope, scope),
            GoalTier::new("t", "Tier", GoalTierType::GoalCollection, scope),
            goals,
        )
    }

    #[test]
    fn retain_drops_empty_targets() {
        let mut targets = EstimationTargets::PortfolioItems(vec![
            target("a", vec![PortfolioItemGoal::from(Goal::new("1", "G-1", ""))]),
            target("b", Vec::new()),
        ]);
        targets.retain_with_goals();
        assert_eq!(targets.len(), 1);
        assert_eq!(targets.scopes()[0].id.as_str(), "a");
    }

    #[test]
    fn props_serialize_with_mode_tag() {
        let props = EstimationProps {
            upper_goal_tier: GoalTier::new("u", "Company goals", GoalTierType::GoalCollection, "pf1"),
            upper_goals: vec![Goal::new("1", "C-1", "")],
            relation: Relation {
                cardinality: Cardinality::OneToOne,
                upper_goal_ids: vec!["1".into()],
            },
            points_to_distribute: 100,
            estimation_targets: EstimationTargets::PortfolioItems(vec![target(
                "a",
                vec![PortfolioItemGoal::from(Goal::new("4", "G-4", ""))],
            )]),
        };

        let value = serde_json::to_value(&props).unwrap();
        assert_eq!(value["mode"], "PORTFOLIO_ITEMS");
        assert_eq!(value["pointsToDistribute"], 100);
        assert_eq!(value["relation"]["cardinality"], "ONE_TO_ONE");
        assert_eq!(
            value["estimationTargets"][0]["goals"][0]["portfolioItemPoints"],
            0
        );
    }

    #[test]
    fn props_json_round_trip() {
        let props = EstimationProps {
            upper_goal_tier: GoalTier::new("u", "Company goals", GoalTierType::GoalCollection, "pf1"),
            upper_goals: vec![Goal::new("1", "C-1", "Grow"), Goal::new("2", "C-2", "Retain")],
            relation: Relation {
                cardinality: Cardinality::OneToMany,
                upper_goal_ids: vec!["1".into(), "2".into()],
            },
            points_to_distribute: 200,
            estimation_targets: EstimationTargets::Standard(vec![target(
                "P1",
                vec![Goal::new("3", "G-3", "").with_distributed_points(200)],
            )]),
        };

        let json = serde_json::to_string(&props).unwrap();
        let back: EstimationProps = serde_json::from_str(&json).unwrap();
        assert_eq!(back, props);
        assert_eq!(back.mode(), EstimationMode::Standard);
    }

    #[test]
    fn portfolio_targets_json_round_trip() {
        let mut wrapped = PortfolioItemGoal::from(Goal::new("4", "G-4", "").with_distributed_points(100));
        wrapped.portfolio_item_points = 30;
        let targets = EstimationTargets::PortfolioItems(vec![target("a", vec![wrapped])]);

        let json = serde_json::to_string(&targets).unwrap();
        let back: EstimationTargets = serde_json::from_str(&json).unwrap();
        assert_eq!(back, targets);
    }
}
