//! URL state codec.
//!
//! Maps a [`FilterState`] to and from the page query string. Both directions are total:
//! - `encode` emits a key only for a non-default value, in the fixed order
//!   `search`, `consultation`, `specialties`, `sort`
//! - `decode` maps absent or empty keys to defaults and keeps unknown enum literals
//!   verbatim instead of rejecting them
//!
//! Values use `application/x-www-form-urlencoded` escaping, so `decode(encode(s)) == s`
//! for every state whose specialties contain no delimiter.

use crate::constants::{CONSULTATION_KEY, SEARCH_KEY, SORT_KEY, SPECIALTIES_KEY, SPECIALTY_DELIMITER};
use crate::filter::FilterState;
use directory_types::{ConsultationMode, SortOption};
use url::form_urlencoded;

/// Render `state` as a query string without the leading `?`.
pub fn encode(state: &FilterState) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());

    if !state.search_term.is_empty() {
        query.append_pair(SEARCH_KEY, &state.search_term);
    }

    if let Some(mode) = &state.consultation {
        query.append_pair(CONSULTATION_KEY, mode.as_literal());
    }

    if !state.specialties.is_empty() {
        query.append_pair(SPECIALTIES_KEY, &state.specialties.join(SPECIALTY_DELIMITER));
    }

    if let Some(sort) = &state.sort {
        query.append_pair(SORT_KEY, sort.as_literal());
    }

    query.finish()
}

/// Read a [`FilterState`] from a query string, with or without the leading `?`.
///
/// When a key repeats, its first occurrence wins. Unknown keys are ignored.
pub fn decode(query: &str) -> FilterState {
    let query = query.strip_prefix('?').unwrap_or(query);

    let mut search = None;
    let mut consultation = None;
    let mut specialties = None;
    let mut sort = None;

    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        let slot = match &*key {
            SEARCH_KEY => &mut search,
            CONSULTATION_KEY => &mut consultation,
            SPECIALTIES_KEY => &mut specialties,
            SORT_KEY => &mut sort,
            _ => continue,
        };
        if slot.is_none() {
            *slot = Some(value.into_owned());
        }
    }

    FilterState {
        search_term: search.unwrap_or_default(),
        consultation: consultation
            .filter(|v| !v.is_empty())
            .map(|v| ConsultationMode::from_literal(&v)),
        specialties: specialties
            .filter(|v| !v.is_empty())
            .map(|v| v.split(SPECIALTY_DELIMITER).map(str::to_string).collect())
            .unwrap_or_default(),
        sort: sort
            .filter(|v| !v.is_empty())
            .map(|v| SortOption::from_literal(&v)),
    }
}

/// Join a base path and an encoded query into the address written to the location.
pub fn href(base_path: &str, query: &str) -> String {
    if query.is_empty() {
        base_path.to_string()
    } else {
        format!("{base_path}?{query}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_state() -> FilterState {
        FilterState {
            search_term: "Dr. Amy & co".into(),
            consultation: Some(ConsultationMode::VideoConsult),
            specialties: vec!["Cardiologist".into(), "Ear-Nose-Throat (ENT) Specialist".into()],
            sort: Some(SortOption::Fees),
        }
    }

    #[test]
    fn default_state_encodes_to_nothing() {
        assert_eq!(encode(&FilterState::default()), "");
        assert_eq!(decode(""), FilterState::default());
        assert_eq!(decode("?"), FilterState::default());
    }

    #[test]
    fn emits_only_non_default_keys_in_fixed_order() {
        let state = FilterState {
            search_term: "john".into(),
            sort: Some(SortOption::Experience),
            ..FilterState::default()
        };
        assert_eq!(encode(&state), "search=john&sort=experience");
    }

    #[test]
    fn uses_form_encoding() {
        let state = FilterState {
            consultation: Some(ConsultationMode::InClinic),
            specialties: vec!["Dentist".into(), "General Physician".into()],
            ..FilterState::default()
        };
        assert_eq!(
            encode(&state),
            "consultation=In+Clinic&specialties=Dentist%2CGeneral+Physician"
        );
    }

    #[test]
    fn round_trips_reachable_states() {
        let states = [
            FilterState::default(),
            full_state(),
            FilterState {
                consultation: Some(ConsultationMode::Unrecognized("Home Visit".into())),
                sort: Some(SortOption::Unrecognized("rating".into())),
                ..FilterState::default()
            },
            FilterState {
                search_term: "  padded  ".into(),
                ..FilterState::default()
            },
        ];

        for state in states {
            assert_eq!(decode(&encode(&state)), state);
        }
    }

    #[test]
    fn decode_accepts_leading_question_mark() {
        let query = format!("?{}", encode(&full_state()));
        assert_eq!(decode(&query), full_state());
    }

    #[test]
    fn unknown_literals_pass_through() {
        let state = decode("consultation=Home%20Visit&sort=rating");
        assert_eq!(
            state.consultation,
            Some(ConsultationMode::Unrecognized("Home Visit".into()))
        );
        assert_eq!(state.sort, Some(SortOption::Unrecognized("rating".into())));
    }

    #[test]
    fn empty_values_decode_as_unset() {
        let state = decode("search=&consultation=&specialties=&sort=");
        assert_eq!(state, FilterState::default());
    }

    #[test]
    fn first_occurrence_wins_and_unknown_keys_are_ignored() {
        let state = decode("page=2&sort=fees&sort=experience");
        assert_eq!(state.sort, Some(SortOption::Fees));
        assert_eq!(state.search_term, "");
    }

    #[test]
    fn specialties_split_in_delimiter_order() {
        let state = decode("specialties=Dentist,Cardiologist");
        assert_eq!(state.specialties, vec!["Dentist", "Cardiologist"]);
    }

    #[test]
    fn href_omits_empty_query() {
        assert_eq!(href("/", ""), "/");
        assert_eq!(href("/doctors", "sort=fees"), "/doctors?sort=fees");
    }
}
