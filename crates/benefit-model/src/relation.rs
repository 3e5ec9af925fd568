//! Relation between child goals and parent goals

use crate::ids::GoalId;
use serde::{Deserialize, Serialize};

/// Expected mapping between one child goal and the parent goals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Cardinality {
    /// A single parent goal: every child goal maps onto it
    OneToOne,
    /// Several parent goals: every child goal relates to each of them
    OneToMany,
}

/// Shape of the parent goal set, consumed by allocation editors
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relation {
    /// Mapping cardinality
    pub cardinality: Cardinality,
    /// Parent goal ids in numeric order
    pub upper_goal_ids: Vec<GoalId>,
}

impl Relation {
    /// Number of parent goals
    #[inline]
    #[must_use]
    pub fn upper_goal_count(&self) -> usize {
        self.upper_goal_ids.len()
    }

    /// Number of child/parent pairings a single child goal takes part in
    #[inline]
    #[must_use]
    pub fn pairings_per_goal(&self) -> usize {
        match self.cardinality {
            Cardinality::OneToOne => 1,
            Cardinality::OneToMany => self.upper_goal_count(),
        }
    }
}
