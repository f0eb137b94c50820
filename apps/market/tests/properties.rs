use car_market::{
    company_of, count_by_company, count_by_model, filter_by_name, CarRecord, HighlightStore,
    MemoryStore, HIGHLIGHT_STORAGE_KEY,
};
use proptest::prelude::*;

fn car_strategy() -> impl Strategy<Value = CarRecord> {
    (
        0_i64..40,
        "[A-Za-z]{0,6}( [A-Za-z0-9]{1,6}){0,2}",
        "[A-Z][a-z]{0,4}",
    )
        .prop_map(|(id, name, model)| CarRecord::new(id, &name, &model))
}

proptest! {
    #[test]
    fn model_counts_sum_to_listing_count(cars in prop::collection::vec(car_strategy(), 0..40)) {
        let counts = count_by_model(&cars);
        prop_assert_eq!(counts.total(), cars.len() as u64);
    }

    #[test]
    fn company_counts_sum_to_listing_count(cars in prop::collection::vec(car_strategy(), 0..40)) {
        let counts = count_by_company(&cars);
        prop_assert_eq!(counts.total(), cars.len() as u64);
    }

    #[test]
    fn company_key_is_first_token(first in "[A-Za-z-]{0,8}", rest in "( [A-Za-z0-9]{1,5}){0,3}") {
        let name = format!("{first}{rest}");
        prop_assert_eq!(company_of(&name), first.as_str());
    }

    #[test]
    fn company_labels_follow_first_seen_order(cars in prop::collection::vec(car_strategy(), 0..40)) {
        let mut expected: Vec<&str> = Vec::new();
        for car in &cars {
            let company = company_of(&car.display_name);
            if !expected.contains(&company) {
                expected.push(company);
            }
        }

        let counts = count_by_company(&cars);
        prop_assert_eq!(counts.labels().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn empty_query_keeps_every_listing(cars in prop::collection::vec(car_strategy(), 0..40)) {
        let found = filter_by_name(&cars, "");
        prop_assert_eq!(found.len(), cars.len());
        prop_assert!(found.iter().zip(&cars).all(|(a, b)| *a == b));
    }

    #[test]
    fn filtering_is_idempotent(
        cars in prop::collection::vec(car_strategy(), 0..40),
        query in "[A-Za-z ]{0,3}",
    ) {
        let once: Vec<CarRecord> = filter_by_name(&cars, &query).into_iter().cloned().collect();
        let twice: Vec<CarRecord> = filter_by_name(&once, &query).into_iter().cloned().collect();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn highlights_reload_exactly(
        ops in prop::collection::vec((any::<bool>(), car_strategy()), 0..30),
    ) {
        let mut store = HighlightStore::load(MemoryStore::new());
        for (add, car) in ops {
            if add {
                let before = store.len();
                let added = store.add(car.clone()).map_err(|e| TestCaseError::fail(e.to_string()))?;
                prop_assert_eq!(store.len(), before + usize::from(added));
                prop_assert!(store.contains(&car.id));
            } else {
                store.remove(&car.id).map_err(|e| TestCaseError::fail(e.to_string()))?;
                prop_assert!(!store.contains(&car.id));
            }
        }

        let expected = store.cars().to_vec();
        let storage = store.into_storage();
        prop_assert!(car_market::KeyValueStore::get(&storage, HIGHLIGHT_STORAGE_KEY).is_some() || expected.is_empty());

        let reloaded = HighlightStore::load(storage);
        prop_assert_eq!(reloaded.cars(), expected.as_slice());
    }
}
