//! Property tests for scoring, ordering and repositioning.

use std::sync::Arc;

use proptest::prelude::*;
use u_shelf::affinity::AffinityScorer;
use u_shelf::arrangement::Arrangement;
use u_shelf::model::{ContextAttribute, Item, TypeAttribute};
use u_shelf::strategy::{
    ExactSearch, GreedySearch, LocalSearch, LocalSearchConfig, OrderingStrategy,
};
use u_shelf::table::CompatibilityTable;

const CONTEXTS: [&str; 3] = ["Desayuno+Merienda", "Aperitivo", "Fresco"];

fn table_strategy() -> impl Strategy<Value = CompatibilityTable> {
    (1usize..=4).prop_flat_map(|k| {
        prop::collection::vec(prop::collection::vec(0i32..=100, k), k)
            .prop_map(|rows| CompatibilityTable::new(rows).unwrap())
    })
}

/// A table plus `1..=max_items` items whose type ids fit it.
fn problem(max_items: usize) -> impl Strategy<Value = (CompatibilityTable, Vec<Item>)> {
    table_strategy().prop_flat_map(move |table| {
        let k = table.size();
        let item = (
            prop::collection::vec(0..k, 1..=2),
            prop::collection::vec(0..CONTEXTS.len(), 0..=2),
        );
        (Just(table), prop::collection::vec(item, 1..=max_items)).prop_map(|(table, specs)| {
            let items = specs
                .into_iter()
                .enumerate()
                .map(|(i, (types, contexts))| {
                    Item::from_parts(
                        format!("item-{i}"),
                        types
                            .into_iter()
                            .map(|id| TypeAttribute::new(format!("T{id}"), id))
                            .collect(),
                        contexts
                            .into_iter()
                            .map(|c| ContextAttribute::new(CONTEXTS[c]))
                            .collect(),
                    )
                    .unwrap()
                })
                .collect();
            (table, items)
        })
    })
}

fn scorer(table: CompatibilityTable) -> AffinityScorer {
    AffinityScorer::new(Arc::new(table))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_scores_are_non_negative((table, items) in problem(4)) {
        let scorer = scorer(table);
        for a in &items {
            for b in &items {
                prop_assert!(scorer.score(a, b).is_ok());
            }
        }
    }

    #[test]
    fn prop_exact_dominates((table, items) in problem(6), seed in any::<u64>()) {
        let scorer = scorer(table);
        let exact = ExactSearch.run(&scorer, &items).unwrap();
        let greedy = GreedySearch.run(&scorer, &items).unwrap();
        let local = LocalSearch::new(LocalSearchConfig::default().with_seed(seed))
            .unwrap()
            .run(&scorer, &items)
            .unwrap();

        prop_assert!(exact.total >= greedy.total);
        prop_assert!(exact.total >= local.total);
    }

    #[test]
    fn prop_results_are_permutations((table, items) in problem(6)) {
        let scorer = scorer(table);
        for result in [
            ExactSearch.run(&scorer, &items).unwrap(),
            GreedySearch.run(&scorer, &items).unwrap(),
            LocalSearch::default().run(&scorer, &items).unwrap(),
        ] {
            let mut order = result.order.clone();
            order.sort_unstable();
            prop_assert_eq!(order, (0..items.len()).collect::<Vec<_>>());
            let seq = result.order.iter().map(|&i| &items[i]);
            prop_assert_eq!(result.total, scorer.cyclic_total(seq).unwrap());
        }
    }

    #[test]
    fn prop_exact_total_ignores_input_order(
        (table, items, shuffled) in problem(5).prop_flat_map(|(table, items)| {
            let shuffled = Just(items.clone()).prop_shuffle();
            (Just(table), Just(items), shuffled)
        })
    ) {
        let scorer = scorer(table);
        let a = ExactSearch.run(&scorer, &items).unwrap();
        let b = ExactSearch.run(&scorer, &shuffled).unwrap();
        prop_assert_eq!(a.total, b.total);
    }

    #[test]
    fn prop_move_to_round_trip(
        (table, items) in problem(6),
        pick in any::<prop::sample::Index>(),
        target in any::<prop::sample::Index>(),
    ) {
        let n = items.len();
        let check = scorer(table.clone());
        let mut shelf = Arrangement::new("prop", items, scorer(table)).unwrap();
        shelf.order(3).unwrap();

        let name = shelf.sequence_names()[pick.index(n)].to_string();
        let position = target.index(n) + 1;
        shelf.move_to(&name, position).unwrap();

        prop_assert_eq!(shelf.position_of(&name), Some(position));
        let mut names: Vec<String> = shelf.sequence().iter().map(|i| i.name().to_string()).collect();
        names.sort();
        let mut expected: Vec<String> = shelf.items().iter().map(|i| i.name().to_string()).collect();
        expected.sort();
        prop_assert_eq!(names, expected);

        let sequence = shelf.sequence();
        prop_assert_eq!(shelf.total_affinity(), check.cyclic_total(&sequence).unwrap());
    }

    #[test]
    fn prop_single_item_total_is_zero((table, items) in problem(1), code in 1i64..=3) {
        let mut shelf = Arrangement::new("one", items, scorer(table)).unwrap();
        shelf.order(code).unwrap();
        prop_assert_eq!(shelf.total_affinity(), 0);
    }
}
