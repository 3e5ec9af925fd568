//! Testing utilities for the benefit estimation workspace
//!
//! An in-memory backend implementing every collaborator trait, plus fixture
//! helpers for goals and tiers.

#![allow(missing_docs)]

use async_trait::async_trait;
use benefit_estimation::{
    EstimationPropsBuilder, EstimationSources, GoalSource, GoalTierDirectory, ScopeResolver,
    SourceResult, UpstreamError,
};
use benefit_model::{Goal, GoalTier, GoalTierId, GoalTierType, Scope, ScopeId};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// In-memory collaborator backend
///
/// Scopes listed in `failing` make every lookup keyed by them fail with an
/// upstream error. Scopes with a delay hold their lookups open for that long.
#[derive(Debug, Default)]
pub struct InMemoryBackend {
    projects: HashMap<ScopeId, Scope>,
    portfolios: HashMap<ScopeId, Scope>,
    portfolio_items: HashMap<ScopeId, Vec<Scope>>,
    top_ranked: HashMap<ScopeId, GoalTier>,
    upper_tiers: HashMap<GoalTierId, GoalTier>,
    goals: HashMap<(ScopeId, GoalTierId), Vec<Goal>>,
    issues: HashMap<ScopeId, Vec<Goal>>,
    failing: HashSet<ScopeId>,
    delays: HashMap<ScopeId, Duration>,
    fetches: AtomicUsize,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_project(mut self, id: &str, name: &str) -> Self {
        self.projects.insert(ScopeId::new(id), Scope::project(id, name));
        self
    }

    pub fn with_portfolio(mut self, id: &str, name: &str) -> Self {
        self.portfolios.insert(ScopeId::new(id), Scope::portfolio(id, name));
        self
    }

    pub fn with_portfolio_item(mut self, portfolio_id: &str, item_id: &str, name: &str) -> Self {
        self.portfolio_items
            .entry(ScopeId::new(portfolio_id))
            .or_default()
            .push(Scope::portfolio_item(item_id, name));
        self
    }

    pub fn with_top_ranked_tier(mut self, scope_id: &str, tier: GoalTier) -> Self {
        self.top_ranked.insert(ScopeId::new(scope_id), tier);
        self
    }

    pub fn with_upper_tier(mut self, tier: &GoalTier, upper: GoalTier) -> Self {
        self.upper_tiers.insert(tier.id.clone(), upper);
        self
    }

    pub fn with_goals(mut self, tier: &GoalTier, goals: Vec<Goal>) -> Self {
        self.goals
            .insert((tier.scope_id.clone(), tier.id.clone()), goals);
        self
    }

    pub fn with_issues(mut self, scope_id: &str, issues: Vec<Goal>) -> Self {
        self.issues.insert(ScopeId::new(scope_id), issues);
        self
    }

    pub fn failing_on(mut self, scope_id: &str) -> Self {
        self.failing.insert(ScopeId::new(scope_id));
        self
    }

    pub fn delaying(mut self, scope_id: &str, delay: Duration) -> Self {
        self.delays.insert(ScopeId::new(scope_id), delay);
        self
    }

    /// Number of collaborator calls served so far
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    /// Most collaborator calls that were open at the same time
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    async fn enter(&self, scope_id: &ScopeId, collaborator: &'static str) -> SourceResult<()> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        let open = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(open, Ordering::SeqCst);
        if let Some(delay) = self.delays.get(scope_id) {
            tokio::time::sleep(*delay).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        if self.failing.contains(scope_id) {
            return Err(UpstreamError::new(
                collaborator,
                format!("lookup for {scope_id} failed"),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl GoalTierDirectory for InMemoryBackend {
    async fn top_ranked_child_tier(&self, scope_id: &ScopeId) -> SourceResult<Option<GoalTier>> {
        self.enter(scope_id, "tier directory").await?;
        Ok(self.top_ranked.get(scope_id).cloned())
    }

    async fn upper_tier(&self, tier: &GoalTier) -> SourceResult<Option<GoalTier>> {
        self.enter(&tier.scope_id, "tier directory").await?;
        Ok(self.upper_tiers.get(&tier.id).cloned())
    }
}

#[async_trait]
impl ScopeResolver for InMemoryBackend {
    async fn project(&self, id: &ScopeId) -> SourceResult<Option<Scope>> {
        self.enter(id, "scope resolver").await?;
        Ok(self.projects.get(id).cloned())
    }

    async fn portfolio(&self, id: &ScopeId) -> SourceResult<Option<Scope>> {
        self.enter(id, "scope resolver").await?;
        Ok(self.portfolios.get(id).cloned())
    }

    async fn portfolio_items(&self, scope_id: &ScopeId) -> SourceResult<Vec<Scope>> {
        self.enter(scope_id, "scope resolver").await?;
        Ok(self.portfolio_items.get(scope_id).cloned().unwrap_or_default())
    }
}

#[async_trait]
impl GoalSource for InMemoryBackend {
    async fn goals_for_tier(&self, scope_id: &ScopeId, tier_id: &GoalTierId) -> SourceResult<Vec<Goal>> {
        self.enter(scope_id, "goal source").await?;
        Ok(self
            .goals
            .get(&(scope_id.clone(), tier_id.clone()))
            .cloned()
            .unwrap_or_default())
    }

    async fn issues_as_goals(&self, scope_id: &ScopeId) -> SourceResult<Vec<Goal>> {
        self.enter(scope_id, "goal source").await?;
        Ok(self.issues.get(scope_id).cloned().unwrap_or_default())
    }
}

pub fn goal(id: &str) -> Goal {
    Goal::new(id, format!("G-{id}"), format!("Goal {id}"))
}

pub fn goals(ids: &[&str]) -> Vec<Goal> {
    ids.iter().map(|id| goal(id)).collect()
}

pub fn collection_tier(id: &str, name: &str, scope_id: &str) -> GoalTier {
    GoalTier::new(id, name, GoalTierType::GoalCollection, scope_id)
}

pub fn issue_tier(id: &str, name: &str, scope_id: &str) -> GoalTier {
    GoalTier::new(id, name, GoalTierType::IssueType, scope_id)
}

pub fn portfolio_item_tier(id: &str, name: &str, scope_id: &str) -> GoalTier {
    GoalTier::new(id, name, GoalTierType::PortfolioItem, scope_id)
}

pub fn setup_builder(backend: InMemoryBackend) -> (Arc<InMemoryBackend>, EstimationPropsBuilder) {
    let backend = Arc::new(backend);
    let builder = EstimationPropsBuilder::new(EstimationSources::from_backend(backend.clone()));
    (backend, builder)
}
