//! Count-by-key aggregation feeding the Home charts.

use indexmap::IndexMap;
use serde::Serialize;

use crate::domain::CarRecord;

/// Colors cycled over chart categories, by category index.
pub const SERIES_PALETTE: [Rgb; 6] = [
    Rgb(0xFF, 0x63, 0x84),
    Rgb(0x36, 0xA2, 0xEB),
    Rgb(0xFF, 0xCE, 0x56),
    Rgb(0x4B, 0xC0, 0xC0),
    Rgb(0x99, 0x66, 0xFF),
    Rgb(0xFF, 0x9F, 0x40),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

pub const fn series_color(index: usize) -> Rgb {
    SERIES_PALETTE[index % SERIES_PALETTE.len()]
}

/// Category key to listing count, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CountMapping(IndexMap<String, u64>);

impl CountMapping {
    pub fn new() -> Self {
        Self::default()
    }

    fn increment(&mut self, key: &str) {
        if let Some(count) = self.0.get_mut(key) {
            *count += 1;
        } else {
            self.0.insert(key.to_string(), 1);
        }
    }

    pub fn get(&self, key: &str) -> Option<u64> {
        self.0.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn total(&self) -> u64 {
        self.0.values().sum()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.keys().map(String::as_str)
    }

    pub fn values(&self) -> impl Iterator<Item = u64> + '_ {
        self.0.values().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.0.iter().map(|(key, count)| (key.as_str(), *count))
    }

    /// Share of `count` in the mapping total, in percent.
    #[allow(clippy::cast_precision_loss)]
    pub fn percent_of_total(&self, count: u64) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        (count as f64 / total as f64) * 100.0
    }

    /// Chart points for every category, colored by index.
    pub fn series(&self) -> Vec<SeriesPoint> {
        self.iter()
            .enumerate()
            .map(|(index, (label, count))| SeriesPoint {
                label: label.to_string(),
                value: count,
                color: Some(series_color(index)),
            })
            .collect()
    }
}

impl<'a> FromIterator<&'a str> for CountMapping {
    fn from_iter<I: IntoIterator<Item = &'a str>>(keys: I) -> Self {
        let mut mapping = Self::new();
        for key in keys {
            mapping.increment(key);
        }
        mapping
    }
}

/// One bar or slice as handed to a chart widget. `color: None` draws the
/// category transparent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesPoint {
    pub label: String,
    pub value: u64,
    pub color: Option<Rgb>,
}

/// Listings per `model`.
pub fn count_by_model(cars: &[CarRecord]) -> CountMapping {
    cars.iter().map(|car| car.model.as_str()).collect()
}

/// Listings per company, the first token of the display name.
pub fn count_by_company(cars: &[CarRecord]) -> CountMapping {
    cars.iter().map(CarRecord::company).collect()
}

/// Display name up to, not including, its first whitespace character.
pub fn company_of(display_name: &str) -> &str {
    display_name
        .find(char::is_whitespace)
        .map_or(display_name, |end| &display_name[..end])
}
