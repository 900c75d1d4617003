//! Constants used throughout the directory core crate.
//!
//! Query keys, defaults and user-facing copy live here so the codec, the controller and
//! the renderers agree on them.

/// Upstream feed read when no endpoint is configured.
pub const DEFAULT_ENDPOINT: &str = "https://srijandubey.github.io/campus-api-mock/SRM-C1-25.json";

/// Per-request timeout applied to the feed fetch, in seconds.
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;

/// Path component of the listing page URL.
pub const DEFAULT_BASE_PATH: &str = "/";

/// Query key holding the free-text name search.
pub const SEARCH_KEY: &str = "search";

/// Query key holding the consultation mode literal.
pub const CONSULTATION_KEY: &str = "consultation";

/// Query key holding the selected specialties.
pub const SPECIALTIES_KEY: &str = "specialties";

/// Query key holding the sort option literal.
pub const SORT_KEY: &str = "sort";

/// Separator between specialties inside the `specialties` value.
pub const SPECIALTY_DELIMITER: &str = ",";

/// Maximum number of autocomplete suggestions.
pub const MAX_SUGGESTIONS: usize = 3;

/// Error banner shown when the feed answered with no doctors.
pub const EMPTY_FEED_MESSAGE: &str = "No doctors are available right now. Please try again.";

/// Empty-state title shown when the filters exclude every doctor.
pub const NO_RESULTS_TITLE: &str = "No doctors found";

/// Empty-state hint shown under [`NO_RESULTS_TITLE`].
pub const NO_RESULTS_HINT: &str = "Try adjusting your search or filters to find more results.";
