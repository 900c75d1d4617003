//! Autocomplete panel.
//!
//! Holds the live draft of the search box and up to [`MAX_SUGGESTIONS`] name
//! suggestions. The panel knows nothing about the listing controller: submitting or
//! picking a suggestion hands back the term to search for, and the caller forwards it.

use crate::constants::MAX_SUGGESTIONS;
use crate::filter::name_matches;
use directory_types::Doctor;

/// A doctor offered in the suggestion list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Suggestion {
    pub id: String,
    pub name: String,
}

/// Doctors whose name contains `term` (case-insensitive), in dataset order, at most
/// [`MAX_SUGGESTIONS`]. A blank term suggests nothing.
pub fn suggest(term: &str, doctors: &[Doctor]) -> Vec<Suggestion> {
    if term.trim().is_empty() {
        return Vec::new();
    }

    let needle = term.to_lowercase();
    doctors
        .iter()
        .filter(|d| name_matches(&d.name, &needle))
        .take(MAX_SUGGESTIONS)
        .map(|d| Suggestion {
            id: d.id.clone(),
            name: d.name.clone(),
        })
        .collect()
}

#[derive(Clone, Debug, Default)]
pub struct AutocompletePanel {
    term: String,
    suggestions: Vec<Suggestion>,
    visible: bool,
}

impl AutocompletePanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current draft term.
    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Suggestions to render: empty while the panel is hidden.
    pub fn visible_suggestions(&self) -> &[Suggestion] {
        if self.visible {
            &self.suggestions
        } else {
            &[]
        }
    }

    /// The user edited the search box.
    pub fn input(&mut self, term: &str, doctors: &[Doctor]) {
        self.term = term.to_string();
        self.suggestions = suggest(term, doctors);
        self.visible = !self.suggestions.is_empty();
    }

    /// Replace the draft without opening the panel (used when state comes from the URL).
    pub fn seed(&mut self, term: &str, doctors: &[Doctor]) {
        self.term = term.to_string();
        self.suggestions = suggest(term, doctors);
        self.visible = false;
    }

    /// The search box regained focus.
    pub fn focus(&mut self) {
        self.visible = !self.term.trim().is_empty() && !self.suggestions.is_empty();
    }

    /// Enter or the search button: hide and return the term to search for.
    pub fn submit(&mut self) -> String {
        self.visible = false;
        self.term.clone()
    }

    /// Pick the suggestion at `index`: the draft becomes the full name, the panel hides,
    /// and the name is returned for searching. Out-of-range indexes change nothing.
    pub fn select(&mut self, index: usize, doctors: &[Doctor]) -> Option<String> {
        let name = self.visible_suggestions().get(index)?.name.clone();
        self.seed(&name, doctors);
        Some(name)
    }

    /// An interaction happened outside the panel.
    pub fn dismiss(&mut self) {
        self.visible = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use directory_types::ConsultationType;

    fn doctors(names: &[&str]) -> Vec<Doctor> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| Doctor {
                id: format!("d{i}"),
                name: (*name).into(),
                qualifications: vec![],
                specialties: vec![],
                experience: 0,
                consultation_type: ConsultationType::Both,
                clinic_name: String::new(),
                location: String::new(),
                fee: 0,
                rating: None,
                image_url: None,
            })
            .collect()
    }

    fn names(suggestions: &[Suggestion]) -> Vec<&str> {
        suggestions.iter().map(|s| s.name.as_str()).collect()
    }

    #[test]
    fn suggests_at_most_three_in_dataset_order() {
        let all = doctors(&[
            "Dr. Anand Rao",
            "Dr. Amy Lee",
            "Dr. Ananya Iyer",
            "Dr. Nandini Shah",
            "Dr. Sanjay Anand",
        ]);
        let suggestions = suggest("AN", &all);
        assert_eq!(
            names(&suggestions),
            vec!["Dr. Anand Rao", "Dr. Ananya Iyer", "Dr. Nandini Shah"]
        );
    }

    #[test]
    fn blank_term_suggests_nothing() {
        let all = doctors(&["Dr. Amy Lee"]);
        assert!(suggest("", &all).is_empty());
        assert!(suggest("   ", &all).is_empty());
    }

    #[test]
    fn panel_hides_when_nothing_matches() {
        let all = doctors(&["Dr. Amy Lee"]);
        let mut panel = AutocompletePanel::new();

        panel.input("amy", &all);
        assert!(panel.is_visible());
        assert_eq!(names(panel.visible_suggestions()), vec!["Dr. Amy Lee"]);

        panel.input("zzz", &all);
        assert!(!panel.is_visible());
        assert!(panel.visible_suggestions().is_empty());
    }

    #[test]
    fn submit_and_dismiss_hide_the_panel() {
        let all = doctors(&["Dr. Amy Lee"]);
        let mut panel = AutocompletePanel::new();

        panel.input("amy", &all);
        assert_eq!(panel.submit(), "amy");
        assert!(!panel.is_visible());

        panel.focus();
        assert!(panel.is_visible());
        panel.dismiss();
        assert!(!panel.is_visible());
    }

    #[test]
    fn select_fills_full_name_and_hides() {
        let all = doctors(&["Dr. John Smith", "Dr. Sarah Johnson"]);
        let mut panel = AutocompletePanel::new();

        panel.input("john", &all);
        assert_eq!(
            panel.select(1, &all).as_deref(),
            Some("Dr. Sarah Johnson")
        );
        assert_eq!(panel.term(), "Dr. Sarah Johnson");
        assert!(!panel.is_visible());
    }

    #[test]
    fn select_out_of_range_or_hidden_is_ignored() {
        let all = doctors(&["Dr. John Smith"]);
        let mut panel = AutocompletePanel::new();

        panel.input("john", &all);
        assert_eq!(panel.select(5, &all), None);

        panel.dismiss();
        assert_eq!(panel.select(0, &all), None);
        assert_eq!(panel.term(), "john");
    }

    #[test]
    fn seed_does_not_open_panel() {
        let all = doctors(&["Dr. Amy Lee"]);
        let mut panel = AutocompletePanel::new();

        panel.seed("amy", &all);
        assert_eq!(panel.term(), "amy");
        assert!(!panel.is_visible());

        panel.focus();
        assert!(panel.is_visible());
    }
}
