//! Relation calculation over the parent goal set

use benefit_model::{Cardinality, Goal, GoalId, Relation};

/// Classify the parent goal set
///
/// Pure: depends only on the set of upper goals, not on their order or on
/// any child target.
#[must_use]
pub fn compute_relation(upper_goals: &[Goal]) -> Relation {
    let mut upper_goal_ids: Vec<GoalId> = upper_goals.iter().map(|g| g.id.clone()).collect();
    upper_goal_ids.sort();
    upper_goal_ids.dedup();

    let cardinality = if upper_goal_ids.len() == 1 {
        Cardinality::OneToOne
    } else {
        Cardinality::OneToMany
    };

    Relation {
        cardinality,
        upper_goal_ids,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn goals(ids: &[&str]) -> Vec<Goal> {
        ids.iter().map(|id| Goal::new(*id, format!("G-{id}"), "")).collect()
    }

    #[test]
    fn single_parent_is_one_to_one() {
        let relation = compute_relation(&goals(&["5"]));
        assert_eq!(relation.cardinality, Cardinality::OneToOne);
        assert_eq!(relation.pairings_per_goal(), 1);
    }

    #[test]
    fn several_parents_are_one_to_many() {
        let relation = compute_relation(&goals(&["3", "1", "2"]));
        assert_eq!(relation.cardinality, Cardinality::OneToMany);
        assert_eq!(relation.pairings_per_goal(), 3);
        let ids: Vec<&str> = relation.upper_goal_ids.iter().map(GoalId::as_str).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn repeated_calls_agree() {
        let upper = goals(&["10", "2"]);
        assert_eq!(compute_relation(&upper), compute_relation(&upper));
    }

    proptest! {
        #[test]
        fn prop_order_independent(ids in prop::collection::hash_set(0u32..500, 1..20)) {
            let forward: Vec<Goal> = ids.iter().map(|i| Goal::new(i.to_string(), "", "")).collect();
            let mut backward = forward.clone();
            backward.reverse();
            prop_assert_eq!(compute_relation(&forward), compute_relation(&backward));
        }
    }
}
