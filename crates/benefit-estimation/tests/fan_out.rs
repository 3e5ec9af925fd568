use benefit_estimation::{EstimationSources, TargetResolver};
use benefit_model::GoalTier;
use benefit_test_utils::{collection_tier, goals, portfolio_item_tier, InMemoryBackend};
use pretty_assertions::assert_eq;
use std::sync::Arc;
use std::time::Duration;

fn items_tier() -> GoalTier {
    portfolio_item_tier("items", "Portfolio items", "pf-1")
}

/// Three configured items, each with one goal
fn three_items() -> InMemoryBackend {
    ["i1", "i2", "i3"].into_iter().fold(InMemoryBackend::new(), |backend, item| {
        let tier = collection_tier(&format!("{item}-goals"), "Item goals", item);
        backend
            .with_portfolio_item("pf-1", item, item)
            .with_top_ranked_tier(item, tier.clone())
            .with_goals(&tier, goals(&["1"]))
    })
}

fn resolver(backend: &Arc<InMemoryBackend>, concurrency: usize) -> TargetResolver {
    TargetResolver::new(EstimationSources::from_backend(backend.clone()), concurrency)
}

#[tokio::test]
async fn targets_keep_item_order_when_first_item_is_slowest() {
    let backend = Arc::new(
        three_items()
            .delaying("i1", Duration::from_millis(80))
            .delaying("i2", Duration::from_millis(1))
            .delaying("i3", Duration::from_millis(1)),
    );

    let targets = resolver(&backend, 3).resolve_targets(&items_tier()).await.unwrap();

    let scopes: Vec<&str> = targets.scopes().iter().map(|s| s.id.as_str()).collect();
    assert_eq!(scopes, vec!["i1", "i2", "i3"]);
}

#[tokio::test]
async fn fan_out_runs_items_concurrently_up_to_limit() {
    let backend = Arc::new(
        three_items()
            .delaying("i1", Duration::from_millis(20))
            .delaying("i2", Duration::from_millis(20))
            .delaying("i3", Duration::from_millis(20)),
    );

    let targets = resolver(&backend, 3).resolve_targets(&items_tier()).await.unwrap();

    assert_eq!(targets.len(), 3);
    assert_eq!(backend.max_in_flight(), 3);
}

#[tokio::test]
async fn fan_out_concurrency_of_one_is_sequential() {
    let backend = Arc::new(
        three_items()
            .delaying("i1", Duration::from_millis(20))
            .delaying("i2", Duration::from_millis(20))
            .delaying("i3", Duration::from_millis(20)),
    );

    let targets = resolver(&backend, 1).resolve_targets(&items_tier()).await.unwrap();

    assert_eq!(targets.len(), 3);
    assert_eq!(backend.max_in_flight(), 1);
    // portfolio items lookup plus a tier and a goal fetch per item
    assert_eq!(backend.fetch_count(), 7);
}
