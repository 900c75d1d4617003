//! Browsing session.
//!
//! [`ListingSession`] wires the search box ([`AutocompletePanel`]) to the
//! [`ListingController`] and exposes one method per user-facing control. Renderers read
//! a [`ListingView`] snapshot and hold no state of their own.

use crate::autocomplete::{AutocompletePanel, Suggestion};
use crate::constants::{NO_RESULTS_HINT, NO_RESULTS_TITLE};
use crate::controller::{ListingController, ListingEvent, ListingStatus, LoadTicket};
use crate::location::Location;
use directory_feed::DoctorSource;
use directory_types::{ConsultationMode, Doctor, SortOption};

/// Card data for one doctor in the result list.
#[derive(Clone, Debug, PartialEq)]
pub struct DoctorCard {
    pub id: String,
    pub name: String,
    /// First letter of every word of the name, shown when there is no photo.
    pub initials: String,
    pub specialties: String,
    pub qualifications: String,
    pub experience: String,
    pub clinic_name: String,
    pub location: String,
    pub fee: String,
    pub rating: Option<f32>,
    pub image_url: Option<String>,
}

impl From<&Doctor> for DoctorCard {
    fn from(doctor: &Doctor) -> Self {
        Self {
            id: doctor.id.clone(),
            name: doctor.name.clone(),
            initials: doctor
                .name
                .split_whitespace()
                .filter_map(|part| part.chars().next())
                .collect(),
            specialties: doctor.specialties.join(", "),
            qualifications: doctor.qualifications.join(", "),
            experience: format!("{} yrs exp.", doctor.experience),
            clinic_name: doctor.clinic_name.clone(),
            location: doctor.location.clone(),
            fee: format!("₹ {}", doctor.fee),
            rating: doctor.rating,
            image_url: doctor.image_url.clone(),
        }
    }
}

/// One entry of the specialty checklist.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpecialtyOption {
    pub name: String,
    pub checked: bool,
}

/// Shown in place of the list when the filters exclude every doctor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmptyState {
    pub title: &'static str,
    pub hint: &'static str,
}

/// Shown when loading failed; the renderer offers a retry control.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ErrorBanner {
    pub message: String,
}

/// Everything a renderer needs, derived from the session on demand.
#[derive(Clone, Debug, PartialEq)]
pub struct ListingView {
    pub status: ListingStatus,
    /// "N Doctors Available", present once ready.
    pub header: Option<String>,
    pub cards: Vec<DoctorCard>,
    pub empty_state: Option<EmptyState>,
    pub error: Option<ErrorBanner>,
    /// Whether the retry control is offered.
    pub can_retry: bool,
    pub search_term: String,
    pub suggestions: Vec<Suggestion>,
    pub consultation: Option<ConsultationMode>,
    pub sort: Option<SortOption>,
    pub specialties: Vec<SpecialtyOption>,
}

#[derive(Debug)]
pub struct ListingSession<L> {
    controller: ListingController<L>,
    search: AutocompletePanel,
}

impl<L: Location> ListingSession<L> {
    pub fn new(location: L) -> Self {
        Self {
            controller: ListingController::new(location),
            search: AutocompletePanel::new(),
        }
    }

    pub fn controller(&self) -> &ListingController<L> {
        &self.controller
    }

    pub fn location(&self) -> &L {
        self.controller.location()
    }

    /// Mount: fetch from `source` and settle in `Ready` or `Failed`.
    pub async fn mount(&mut self, source: &dyn DoctorSource) -> bool {
        let applied = self.controller.load(source).await;
        self.sync_search_from_filters();
        applied
    }

    pub fn begin_load(&mut self) -> Option<LoadTicket> {
        self.controller.begin_load()
    }

    pub fn finish_load(&mut self, ticket: LoadTicket, doctors: Vec<Doctor>) -> bool {
        let applied = self.controller.finish_load(ticket, doctors);
        if applied {
            self.sync_search_from_filters();
        }
        applied
    }

    /// The retry control of the error banner. Same as mounting again from `Failed`.
    pub async fn retry(&mut self, source: &dyn DoctorSource) -> bool {
        if !matches!(self.controller.status(), ListingStatus::Failed { .. }) {
            return false;
        }
        self.mount(source).await
    }

    pub fn teardown(&mut self) {
        self.controller.teardown();
    }

    /// Typing in the search box. Updates suggestions only; the list waits for a submit.
    pub fn type_search(&mut self, text: &str) {
        self.search.input(text, self.controller.doctors());
    }

    pub fn focus_search(&mut self) {
        self.search.focus();
    }

    /// Enter or the search button.
    pub fn submit_search(&mut self) -> bool {
        let term = self.search.submit();
        self.controller.handle(ListingEvent::SearchSubmitted(term))
    }

    /// Pick a visible suggestion by position. Searches for the full name.
    pub fn select_suggestion(&mut self, index: usize) -> bool {
        match self.search.select(index, self.controller.doctors()) {
            Some(name) => self.controller.handle(ListingEvent::SearchSubmitted(name)),
            None => false,
        }
    }

    /// A click or tap landed outside the search box and its suggestions.
    pub fn outside_interaction(&mut self) {
        self.search.dismiss();
    }

    pub fn select_consultation(&mut self, mode: Option<ConsultationMode>) -> bool {
        self.controller
            .handle(ListingEvent::ConsultationSelected(mode))
    }

    pub fn toggle_specialty(&mut self, specialty: &str) -> bool {
        self.controller
            .handle(ListingEvent::SpecialtyToggled(specialty.to_string()))
    }

    pub fn clear_specialties(&mut self) -> bool {
        self.controller.handle(ListingEvent::SpecialtiesCleared)
    }

    pub fn select_sort(&mut self, sort: Option<SortOption>) -> bool {
        self.controller.handle(ListingEvent::SortSelected(sort))
    }

    pub fn view(&self) -> ListingView {
        let status = self.controller.status().clone();
        let filters = self.controller.filters();
        let display = self.controller.display();
        let ready = status == ListingStatus::Ready;

        let error = match &status {
            ListingStatus::Failed { message } => Some(ErrorBanner {
                message: message.clone(),
            }),
            _ => None,
        };

        ListingView {
            header: ready.then(|| format!("{} Doctors Available", display.len())),
            cards: display.iter().map(DoctorCard::from).collect(),
            empty_state: (ready && display.is_empty()).then_some(EmptyState {
                title: NO_RESULTS_TITLE,
                hint: NO_RESULTS_HINT,
            }),
            can_retry: error.is_some(),
            error,
            search_term: self.search.term().to_string(),
            suggestions: self.search.visible_suggestions().to_vec(),
            consultation: filters.consultation.clone(),
            sort: filters.sort.clone(),
            specialties: self
                .controller
                .specialty_universe()
                .iter()
                .map(|name| SpecialtyOption {
                    name: name.clone(),
                    checked: filters.specialties.contains(name),
                })
                .collect(),
            status,
        }
    }

    fn sync_search_from_filters(&mut self) {
        if self.controller.status() == &ListingStatus::Ready {
            let term = self.controller.filters().search_term.clone();
            self.search.seed(&term, self.controller.doctors());
        }
    }
}
