//! Benefit Model
//!
//! Data types shared by the estimation core and its collaborators:
//!
//! - [`Scope`]: project, portfolio or portfolio item owning goals
//! - [`GoalTier`]: a level in the goal hierarchy bound to a scope
//! - [`Goal`] / [`PortfolioItemGoal`]: the objects benefit points flow through
//! - [`EstimationTarget`]: one scope + tier + goal list unit
//! - [`Relation`]: mapping shape between child goals and parent goals
//! - [`EstimationProps`]: the mode-tagged aggregate handed to editing flows
//!
//! # Example
//!
//! ```rust
//! use benefit_model::{GoalId, GoalTier, GoalTierType, EstimationMode};
//!
//! let tier = GoalTier::new("t1", "Project goals", GoalTierType::GoalCollection, "P1");
//! assert_eq!(tier.mode(), EstimationMode::Standard);
//!
//! let mut ids = vec![GoalId::new("10"), GoalId::new("2"), GoalId::new("1")];
//! ids.sort();
//! assert_eq!(ids, vec![GoalId::new("1"), GoalId::new("2"), GoalId::new("10")]);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod goal;
mod ids;
mod props;
mod relation;
mod scope;
mod target;
mod tier;

pub use goal::{sort_by_numeric_id, EstimationGoal, Goal, PortfolioItemGoal};
pub use ids::{GoalId, GoalTierId, ScopeId, PORTFOLIO_PREFIX};
pub use props::{EstimationMode, EstimationProps, EstimationTargets};
pub use relation::{Cardinality, Relation};
pub use scope::{Scope, ScopeKind};
pub use target::EstimationTarget;
pub use tier::{GoalTier, GoalTierType};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
