//! Filter/sort engine.
//!
//! [`apply`] derives the displayed list from the full doctor set and a [`FilterState`].
//! It is a pure function: the input set is never touched and every call rebuilds the
//! result from scratch. Steps run in a fixed order (search, consultation, specialties)
//! and sorting always comes last.

use directory_types::{ConsultationMode, Doctor, SortOption};
use std::cmp::Reverse;
use std::collections::HashSet;

/// The four filter dimensions mirrored in the page URL.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Free-text name search. Blank means no search filter.
    pub search_term: String,
    pub consultation: Option<ConsultationMode>,
    /// Required specialties, in selection order. A doctor must have all of them.
    pub specialties: Vec<String>,
    pub sort: Option<SortOption>,
}

impl FilterState {
    /// Whether every dimension is at its default.
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// Derive the displayed list for `state`.
pub fn apply(doctors: &[Doctor], state: &FilterState) -> Vec<Doctor> {
    let needle = state.search_term.to_lowercase();
    let search_active = !state.search_term.trim().is_empty();

    let mut filtered: Vec<Doctor> = doctors
        .iter()
        .filter(|d| !search_active || name_matches(&d.name, &needle))
        .filter(|d| {
            state
                .consultation
                .as_ref()
                .map_or(true, |mode| mode.admits(d.consultation_type))
        })
        .filter(|d| state.specialties.iter().all(|s| d.has_specialty(s)))
        .cloned()
        .collect();

    // Both sorts are stable, so equal keys keep their input order.
    match &state.sort {
        Some(SortOption::Fees) => filtered.sort_by_key(|d| d.fee),
        Some(SortOption::Experience) => filtered.sort_by_key(|d| Reverse(d.experience)),
        Some(SortOption::Unrecognized(_)) | None => {}
    }

    filtered
}

/// Case-insensitive substring match of an already lower-cased needle.
pub(crate) fn name_matches(name: &str, lowered_needle: &str) -> bool {
    name.to_lowercase().contains(lowered_needle)
}

/// All distinct specialty labels, in first-seen order.
pub fn specialty_universe(doctors: &[Doctor]) -> Vec<String> {
    let mut seen = HashSet::new();
    doctors
        .iter()
        .flat_map(|d| d.specialties.iter().map(String::as_str))
        .filter(|s| seen.insert(*s))
        .map(str::to_string)
        .collect()
}
