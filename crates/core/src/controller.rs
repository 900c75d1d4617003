//! Listing controller.
//!
//! The controller owns the full doctor set, the [`FilterState`], the derived display
//! list and the load status. It moves through
//! `Idle → Loading → {Ready, Failed}` and reacts to discrete events:
//!
//! - **Load finished** with doctors: store them, derive the specialty universe, seed the
//!   filters from the current location (the only time filters come from the URL), then
//!   recompute and write the URL.
//! - **Load finished** empty: `Failed` with a user-facing message. The URL is ignored.
//! - **Filter events** while `Ready`: compute the next [`FilterState`], recompute the
//!   display list from the full set, then write the URL. The write always follows the
//!   recompute, so the address reflects the list on screen.
//! - **Retry** from `Failed`: back to `Loading`.
//!
//! Loads are identified by a [`LoadTicket`]. A result delivered for a stale ticket, or
//! after [`ListingController::teardown`], is discarded.

use crate::constants::EMPTY_FEED_MESSAGE;
use crate::filter::{apply, specialty_universe, FilterState};
use crate::location::Location;
use crate::url_state::{decode, encode};
use directory_feed::DoctorSource;
use directory_types::{ConsultationMode, Doctor, SortOption};

/// Where the controller is in its load lifecycle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListingStatus {
    Idle,
    Loading,
    Ready,
    Failed { message: String },
}

/// Identifies one load attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// A user action that changes the [`FilterState`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListingEvent {
    SearchSubmitted(String),
    /// Pick a consultation mode, or clear it with `None`.
    ConsultationSelected(Option<ConsultationMode>),
    /// Add the specialty if absent, remove it if present.
    SpecialtyToggled(String),
    SpecialtiesCleared,
    /// Pick a sort option, or clear it with `None`.
    SortSelected(Option<SortOption>),
}

/// Compute the filter state that follows `event`.
pub fn next_filters(current: &FilterState, event: ListingEvent) -> FilterState {
    let mut next = current.clone();
    match event {
        ListingEvent::SearchSubmitted(term) => next.search_term = term,
        ListingEvent::ConsultationSelected(mode) => next.consultation = mode,
        // A blank label cannot be written to the URL, so it is never selected.
        ListingEvent::SpecialtyToggled(specialty) if specialty.trim().is_empty() => {}
        ListingEvent::SpecialtyToggled(specialty) => {
            if let Some(pos) = next.specialties.iter().position(|s| *s == specialty) {
                next.specialties.remove(pos);
            } else {
                next.specialties.push(specialty);
            }
        }
        ListingEvent::SpecialtiesCleared => next.specialties.clear(),
        ListingEvent::SortSelected(sort) => next.sort = sort,
    }
    next
}

#[derive(Debug)]
pub struct ListingController<L> {
    location: L,
    status: ListingStatus,
    doctors: Vec<Doctor>,
    specialties: Vec<String>,
    filters: FilterState,
    display: Vec<Doctor>,
    issued_tickets: u64,
    torn_down: bool,
}

impl<L: Location> ListingController<L> {
    pub fn new(location: L) -> Self {
        Self {
            location,
            status: ListingStatus::Idle,
            doctors: Vec::new(),
            specialties: Vec::new(),
            filters: FilterState::default(),
            display: Vec::new(),
            issued_tickets: 0,
            torn_down: false,
        }
    }

    pub fn status(&self) -> &ListingStatus {
        &self.status
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// The filtered and sorted list currently on screen.
    pub fn display(&self) -> &[Doctor] {
        &self.display
    }

    /// The full doctor set as fetched.
    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    pub fn specialty_universe(&self) -> &[String] {
        &self.specialties
    }

    pub fn location(&self) -> &L {
        &self.location
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Enter `Loading` on mount. Returns `None` unless the controller is `Idle`.
    pub fn begin_load(&mut self) -> Option<LoadTicket> {
        if self.torn_down || self.status != ListingStatus::Idle {
            return None;
        }
        Some(self.issue_ticket())
    }

    /// Re-enter `Loading` after a failure. Returns `None` unless the controller is `Failed`.
    pub fn retry(&mut self) -> Option<LoadTicket> {
        if self.torn_down || !matches!(self.status, ListingStatus::Failed { .. }) {
            return None;
        }
        tracing::info!("retrying doctor load");
        Some(self.issue_ticket())
    }

    /// Deliver the result of the load identified by `ticket`.
    ///
    /// Returns `false` (and changes nothing) when the ticket is stale, the controller is
    /// not loading, or it has been torn down.
    pub fn finish_load(&mut self, ticket: LoadTicket, doctors: Vec<Doctor>) -> bool {
        if self.torn_down
            || self.status != ListingStatus::Loading
            || ticket.0 != self.issued_tickets
        {
            tracing::debug!("discarding late doctor load result");
            return false;
        }

        if doctors.is_empty() {
            tracing::warn!("doctor feed returned no records");
            self.status = ListingStatus::Failed {
                message: EMPTY_FEED_MESSAGE.to_string(),
            };
            return true;
        }

        self.specialties = specialty_universe(&doctors);
        self.doctors = doctors;
        self.status = ListingStatus::Ready;

        let seeded = decode(&self.location.current_query());
        tracing::debug!(?seeded, "filters seeded from location");
        self.commit(seeded);
        true
    }

    /// Run one full load against `source`: begin, fetch, finish.
    ///
    /// Starts from `Idle` or, as a retry, from `Failed`. Returns whether a result was applied.
    pub async fn load(&mut self, source: &dyn DoctorSource) -> bool {
        let ticket = match self.status {
            ListingStatus::Failed { .. } => self.retry(),
            _ => self.begin_load(),
        };
        let Some(ticket) = ticket else {
            return false;
        };

        let doctors = source.fetch().await;
        self.finish_load(ticket, doctors)
    }

    /// Apply a filter event. Ignored (returns `false`) unless `Ready`.
    pub fn handle(&mut self, event: ListingEvent) -> bool {
        if self.torn_down || self.status != ListingStatus::Ready {
            tracing::debug!(?event, "ignoring filter event outside ready state");
            return false;
        }

        let next = next_filters(&self.filters, event);
        self.commit(next);
        true
    }

    /// Mark the controller dead. Pending and future load results are discarded.
    pub fn teardown(&mut self) {
        self.torn_down = true;
    }

    fn issue_ticket(&mut self) -> LoadTicket {
        self.issued_tickets += 1;
        self.status = ListingStatus::Loading;
        LoadTicket(self.issued_tickets)
    }

    // Recompute first, then write the URL for the state that produced the list.
    fn commit(&mut self, filters: FilterState) {
        self.display = apply(&self.doctors, &filters);
        self.filters = filters;

        let query = encode(&self.filters);
        if query != self.location.current_query() {
            self.location.replace_query(&query);
        }
        tracing::debug!(
            shown = self.display.len(),
            total = self.doctors.len(),
            "listing recomputed"
        );
    }
}
