//! App crate for the Bikini Bottom Portal.
//!
//! This crate contains the `Portal` composition root that wires the remote
//! clients, state stores, and the filter-and-paginate pipeline into the
//! operations a front-end consumes.

pub mod dashboard;
pub mod format;
pub mod portal;
pub mod sources;
pub mod views;

pub use dashboard::{CategoryCount, Dashboard, TaskSummary};
pub use format::{DATE_FORMAT_CACHE_LIMIT, DateFormatCache};
pub use portal::Portal;
pub use sources::RemoteSources;
pub use views::{CollectionPage, MealFilterOptions, MealPage, ResidentPage};
