//! Benefit Estimation Core
//!
//! Computes how benefit points assigned at one goal tier distribute down to
//! the estimation targets of the tier below:
//! - Resolves targets per tier type (single scope or portfolio item fan-out)
//! - Classifies the parent goal set into a [`Relation`](benefit_model::Relation)
//! - Computes a points baseline of at least 100 that serves every target
//!
//! Collaborators (tier directory, scope resolver, goal source) are injected
//! as trait objects through [`EstimationSources`].
//!
//! # Example
//!
//! ```rust,ignore
//! use benefit_estimation::{EstimationPropsBuilder, EstimationSources};
//!
//! # async fn example(backend: std::sync::Arc<MyBackend>) -> Result<(), Box<dyn std::error::Error>> {
//! let builder = EstimationPropsBuilder::new(EstimationSources::from_backend(backend));
//! let props = builder.build(&project_tier, &company_tier).await?;
//!
//! println!("{} targets, {} points", props.estimation_targets.len(), props.points_to_distribute);
//! # Ok(())
//! # }
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod builder;
pub mod config;
pub mod distribution;
pub mod error;
pub mod relation;
pub mod sources;
pub mod targets;
pub mod telemetry;

// Re-exports for convenience
pub use builder::EstimationPropsBuilder;
pub use config::{EstimationConfig, DEFAULT_BASE_POINTS};
pub use distribution::{Distribution, PointsDistributor};
pub use error::{ConfigError, EstimationError, EstimationResult, UpstreamError};
pub use relation::compute_relation;
pub use sources::{EstimationSources, GoalSource, GoalTierDirectory, ScopeResolver, SourceResult};
pub use targets::TargetResolver;
pub use telemetry::{init_tracing, LogFormat};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the estimation core
    pub use crate::{
        EstimationConfig, EstimationError, EstimationPropsBuilder, EstimationResult,
        EstimationSources, GoalSource, GoalTierDirectory, ScopeResolver, SourceResult,
        UpstreamError,
    };
    pub use benefit_model::{
        EstimationMode, EstimationProps, EstimationTarget, EstimationTargets, Goal, GoalId,
        GoalTier, GoalTierId, GoalTierType, PortfolioItemGoal, Scope, ScopeId, ScopeKind,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
