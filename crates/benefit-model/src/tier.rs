//! Goal tiers

use crate::ids::{GoalTierId, ScopeId};
use crate::props::EstimationMode;
use serde::{Deserialize, Serialize};

/// What kind of objects act as goals at a tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GoalTierType {
    /// Goals stored in a goal collection owned by the scope
    GoalCollection,
    /// Issues of the scope reinterpreted as goals
    IssueType,
    /// One target per portfolio item of the scope
    PortfolioItem,
}

impl GoalTierType {
    /// Whether goals at this tier are fetched as issues
    #[inline]
    #[must_use]
    pub fn is_issue_backed(self) -> bool {
        matches!(self, Self::IssueType)
    }

    /// Estimation mode used when this tier is the child tier
    #[inline]
    #[must_use]
    pub fn estimation_mode(self) -> EstimationMode {
        match self {
            Self::PortfolioItem => EstimationMode::PortfolioItems,
            Self::GoalCollection | Self::IssueType => EstimationMode::Standard,
        }
    }
}

/// A named level in the goal hierarchy, bound to the scope that owns it
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalTier {
    /// Tier id
    pub id: GoalTierId,
    /// Display name, used in error messages
    pub name: String,
    /// Goal source kind
    #[serde(rename = "type")]
    pub tier_type: GoalTierType,
    /// Owning scope
    pub scope_id: ScopeId,
}

impl GoalTier {
    /// Create new goal tier
    #[inline]
    #[must_use]
    pub fn new(
        id: impl Into<GoalTierId>,
        name: impl Into<String>,
        tier_type: GoalTierType,
        scope_id: impl Into<ScopeId>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            tier_type,
            scope_id: scope_id.into(),
        }
    }

    /// Estimation mode when this tier is estimated against its parent
    #[inline]
    #[must_use]
    pub fn mode(&self) -> EstimationMode {
        self.tier_type.estimation_mode()
    }
}
