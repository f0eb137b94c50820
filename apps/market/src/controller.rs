//! Page state for the Home and Dashboard screens.
//!
//! Both pages start in [`LoadState::Loading`] and move to
//! [`LoadState::Ready`] once the dataset load settles, successfully or not.
//! A failed load leaves an empty dataset behind; there is no retry.

use std::collections::BTreeSet;

use crate::aggregate::{count_by_company, count_by_model, CountMapping, SeriesPoint};
use crate::dataset::DatasetError;
use crate::domain::{CarId, CarRecord};
use crate::filter::filter_by_name;
use crate::highlight::HighlightStore;
use crate::storage::{KeyValueStore, StoreError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Ready,
}

fn settle(result: Result<Vec<CarRecord>, DatasetError>, page: &str) -> Vec<CarRecord> {
    match result {
        Ok(cars) => {
            tracing::info!(page, count = cars.len(), "car data loaded");
            cars
        }
        Err(error) => {
            tracing::warn!(page, %error, "error loading car data, showing empty dataset");
            Vec::new()
        }
    }
}

const fn wrap_increment(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (index + 1) % len
}

const fn wrap_decrement(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    if index == 0 {
        len - 1
    } else {
        index - 1
    }
}

/// Aggregate charts with a legend that can hide model bars.
#[derive(Debug, Default)]
pub struct HomeController {
    state: LoadState,
    models: CountMapping,
    companies: CountMapping,
    hidden_series: BTreeSet<usize>,
    selected_series: usize,
}

impl HomeController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finish_loading(&mut self, result: Result<Vec<CarRecord>, DatasetError>) {
        let cars = settle(result, "home");
        self.models = count_by_model(&cars);
        self.companies = count_by_company(&cars);
        self.hidden_series.clear();
        self.selected_series = 0;
        self.state = LoadState::Ready;
    }

    pub const fn state(&self) -> LoadState {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == LoadState::Loading
    }

    pub const fn models(&self) -> &CountMapping {
        &self.models
    }

    pub const fn companies(&self) -> &CountMapping {
        &self.companies
    }

    pub fn is_hidden(&self, index: usize) -> bool {
        self.hidden_series.contains(&index)
    }

    /// Flips the visibility of the model at `index`. Out of range indices
    /// are ignored.
    pub fn toggle_series(&mut self, index: usize) {
        if index >= self.models.len() {
            return;
        }
        if !self.hidden_series.remove(&index) {
            self.hidden_series.insert(index);
        }
    }

    pub const fn selected_series(&self) -> usize {
        self.selected_series
    }

    pub fn select_next(&mut self) {
        self.selected_series = wrap_increment(self.selected_series, self.models.len());
    }

    pub fn select_prev(&mut self) {
        self.selected_series = wrap_decrement(self.selected_series, self.models.len());
    }

    pub fn toggle_selected(&mut self) {
        self.toggle_series(self.selected_series);
    }

    /// Model bars as displayed: hidden models keep their slot with a zero
    /// value and no color.
    pub fn model_series(&self) -> Vec<SeriesPoint> {
        self.models
            .series()
            .into_iter()
            .enumerate()
            .map(|(index, point)| {
                if self.is_hidden(index) {
                    SeriesPoint {
                        value: 0,
                        color: None,
                        ..point
                    }
                } else {
                    point
                }
            })
            .collect()
    }

    pub fn company_series(&self) -> Vec<SeriesPoint> {
        self.companies.series()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardPane {
    Highlights,
    #[default]
    Listings,
}

/// Search, listing grid and highlight list.
#[derive(Debug)]
pub struct DashboardController<S> {
    state: LoadState,
    cars: Vec<CarRecord>,
    query: String,
    highlights: HighlightStore<S>,
    pane: DashboardPane,
    selected_listing: usize,
    selected_highlight: usize,
    search_active: bool,
}

impl<S: KeyValueStore> DashboardController<S> {
    /// Highlights are read from `storage` right away, before any listing
    /// data arrives.
    pub fn new(storage: S) -> Self {
        Self {
            state: LoadState::Loading,
            cars: Vec::new(),
            query: String::new(),
            highlights: HighlightStore::load(storage),
            pane: DashboardPane::Listings,
            selected_listing: 0,
            selected_highlight: 0,
            search_active: false,
        }
    }

    pub fn finish_loading(&mut self, result: Result<Vec<CarRecord>, DatasetError>) {
        self.cars = settle(result, "dashboard");
        self.state = LoadState::Ready;
        self.clamp_selection();
    }

    pub const fn state(&self) -> LoadState {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == LoadState::Loading
    }

    pub fn all_cars(&self) -> &[CarRecord] {
        &self.cars
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Listings matching the current query, evaluated on the full dataset.
    pub fn visible_cars(&self) -> Vec<&CarRecord> {
        filter_by_name(&self.cars, &self.query)
    }

    pub fn set_query(&mut self, query: &str) {
        query.clone_into(&mut self.query);
        self.clamp_selection();
    }

    pub fn push_query_char(&mut self, ch: char) {
        self.query.push(ch);
        self.clamp_selection();
    }

    pub fn pop_query_char(&mut self) {
        self.query.pop();
        self.clamp_selection();
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
        self.clamp_selection();
    }

    pub const fn search_active(&self) -> bool {
        self.search_active
    }

    pub fn set_search_active(&mut self, active: bool) {
        self.search_active = active;
    }

    pub const fn highlights(&self) -> &HighlightStore<S> {
        &self.highlights
    }

    pub fn is_highlighted(&self, id: &CarId) -> bool {
        self.highlights.contains(id)
    }

    pub fn add_highlight(&mut self, car: CarRecord) -> Result<bool, StoreError> {
        self.highlights.add(car)
    }

    pub fn remove_highlight(&mut self, id: &CarId) -> Result<bool, StoreError> {
        let removed = self.highlights.remove(id);
        self.clamp_selection();
        removed
    }

    pub const fn pane(&self) -> DashboardPane {
        self.pane
    }

    pub fn set_pane(&mut self, pane: DashboardPane) {
        self.pane = pane;
        self.clamp_selection();
    }

    pub fn toggle_pane(&mut self) {
        let pane = match self.pane {
            DashboardPane::Highlights => DashboardPane::Listings,
            DashboardPane::Listings => DashboardPane::Highlights,
        };
        self.set_pane(pane);
    }

    pub const fn selected_listing(&self) -> usize {
        self.selected_listing
    }

    pub const fn selected_highlight(&self) -> usize {
        self.selected_highlight
    }

    pub fn select_next(&mut self) {
        match self.pane {
            DashboardPane::Listings => {
                let len = self.visible_cars().len();
                self.selected_listing = wrap_increment(self.selected_listing, len);
            }
            DashboardPane::Highlights => {
                let len = self.highlights.len();
                self.selected_highlight = wrap_increment(self.selected_highlight, len);
            }
        }
    }

    pub fn select_prev(&mut self) {
        match self.pane {
            DashboardPane::Listings => {
                let len = self.visible_cars().len();
                self.selected_listing = wrap_decrement(self.selected_listing, len);
            }
            DashboardPane::Highlights => {
                let len = self.highlights.len();
                self.selected_highlight = wrap_decrement(self.selected_highlight, len);
            }
        }
    }

    /// The listing under the cursor in the focused pane.
    pub fn selected_car(&self) -> Option<&CarRecord> {
        match self.pane {
            DashboardPane::Listings => self.visible_cars().get(self.selected_listing).copied(),
            DashboardPane::Highlights => self.highlights.cars().get(self.selected_highlight),
        }
    }

    /// Adds the selected listing to the highlights, or removes it when it is
    /// already there. In the highlight pane this always removes.
    pub fn toggle_selected(&mut self) -> Result<HighlightChange, StoreError> {
        let Some(car) = self.selected_car().cloned() else {
            return Ok(HighlightChange::Nothing);
        };

        if self.highlights.contains(&car.id) {
            self.remove_highlight(&car.id)?;
            Ok(HighlightChange::Removed(car))
        } else {
            self.add_highlight(car.clone())?;
            Ok(HighlightChange::Added(car))
        }
    }

    fn clamp_selection(&mut self) {
        let listings = self.visible_cars().len();
        self.selected_listing = self.selected_listing.min(listings.saturating_sub(1));
        let highlights = self.highlights.len();
        self.selected_highlight = self.selected_highlight.min(highlights.saturating_sub(1));
    }
}

/// Outcome of [`DashboardController::toggle_selected`].
#[derive(Debug, Clone, PartialEq)]
pub enum HighlightChange {
    Added(CarRecord),
    Removed(CarRecord),
    Nothing,
}
