// Shared model and logic for the Car Market dashboard front-ends
pub mod aggregate;
pub mod controller;
pub mod dataset;
pub mod domain;
pub mod filter;
pub mod highlight;
pub mod route;
pub mod storage;

pub use aggregate::{company_of, count_by_company, count_by_model, CountMapping, SeriesPoint};
pub use controller::{DashboardController, DashboardPane, HighlightChange, HomeController, LoadState};
pub use dataset::{decode_dataset, DatasetError};
pub use domain::{CarId, CarRecord};
pub use filter::filter_by_name;
pub use highlight::{HighlightStore, HIGHLIGHT_STORAGE_KEY};
pub use route::Route;
pub use storage::{KeyValueStore, MemoryStore, StoreError};
