use crate::domain::CarRecord;

/// Listings whose display name contains `query`, ignoring case.
///
/// Always run this against the full dataset; the result keeps source order
/// and an empty query matches everything.
pub fn filter_by_name<'a>(cars: &'a [CarRecord], query: &str) -> Vec<&'a CarRecord> {
    let needle = query.to_lowercase();
    cars.iter()
        .filter(|car| matches_name(car, &needle))
        .collect()
}

/// `needle` must already be lowercased.
fn matches_name(car: &CarRecord, needle: &str) -> bool {
    needle.is_empty() || car.display_name.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CarId;

    fn fixture() -> Vec<CarRecord> {
        vec![
            CarRecord::new(1, "Toyota Camry", "Camry"),
            CarRecord::new(2, "Toyota Corolla", "Corolla"),
            CarRecord::new(3, "Honda Civic", "Civic"),
        ]
    }

    fn ids(cars: &[&CarRecord]) -> Vec<CarId> {
        cars.iter().map(|car| car.id.clone()).collect()
    }

    #[test]
    fn matches_case_insensitively_in_source_order() {
        let cars = fixture();

        let found = filter_by_name(&cars, "toyota");
        assert_eq!(ids(&found), vec![CarId::Number(1), CarId::Number(2)]);

        let found = filter_by_name(&cars, "CIV");
        assert_eq!(ids(&found), vec![CarId::Number(3)]);
    }

    #[test]
    fn empty_query_returns_everything() {
        let cars = fixture();
        let found = filter_by_name(&cars, "");

        assert_eq!(found.len(), cars.len());
        assert!(found.iter().zip(&cars).all(|(a, b)| *a == b));
    }

    #[test]
    fn no_match_returns_nothing() {
        assert!(filter_by_name(&fixture(), "porsche").is_empty());
    }

    #[test]
    fn matches_inside_words_and_across_the_space() {
        let cars = fixture();
        let found = filter_by_name(&cars, "ta c");
        assert_eq!(ids(&found), vec![CarId::Number(1), CarId::Number(2)]);
        assert_eq!(filter_by_name(&cars, "a c").len(), 3);
        assert_eq!(filter_by_name(&cars, "oroll").len(), 1);
    }
}
