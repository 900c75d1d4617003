//! # Directory Core
//!
//! Client-side state machine of the doctor directory.
//!
//! This crate keeps four filter dimensions, the derived result list and the page URL
//! consistent with each other:
//! - `url_state`: query-string codec for the filter state
//! - `filter`: pure filter/sort engine and the specialty universe
//! - `autocomplete`: search-box suggestions
//! - `controller`: load lifecycle and filter events, recompute-then-write
//! - `session`: the controller and search box composed behind one view snapshot
//!
//! **No rendering concerns**: terminals, browsers and other front ends consume
//! [`ListingView`] and call the [`ListingSession`] methods.

pub mod autocomplete;
pub mod config;
pub mod constants;
pub mod controller;
pub mod error;
pub mod filter;
pub mod location;
pub mod session;
pub mod url_state;

pub use autocomplete::{suggest, AutocompletePanel, Suggestion};
pub use config::CoreConfig;
pub use controller::{ListingController, ListingEvent, ListingStatus, LoadTicket};
pub use error::{DirectoryError, DirectoryResult};
pub use filter::{apply, specialty_universe, FilterState};
pub use location::{Location, MemoryLocation};
pub use session::{DoctorCard, ListingSession, ListingView, SpecialtyOption};

pub use directory_types::{ConsultationMode, ConsultationType, Doctor, SortOption};
