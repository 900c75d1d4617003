//! Plain-text rendering of a [`ListingView`].

use std::fmt::Write;

use directory_core::{ListingStatus, ListingView};

/// Render the whole page followed by the current address.
pub fn page(view: &ListingView, href: &str) -> Result<String, std::fmt::Error> {
    let mut out = String::new();

    // Search box and its suggestion panel.
    writeln!(out, "search: [{}]", view.search_term)?;
    for (i, suggestion) in view.suggestions.iter().enumerate() {
        writeln!(out, "  {}. {}", i + 1, suggestion.name)?;
    }

    let consultation = view
        .consultation
        .as_ref()
        .map_or("any", |mode| mode.as_literal());
    let sort = view.sort.as_ref().map_or("none", |sort| sort.as_literal());
    writeln!(out, "consultation: {consultation} | sort: {sort}")?;

    if !view.specialties.is_empty() {
        let checklist: Vec<String> = view
            .specialties
            .iter()
            .map(|option| {
                let mark = if option.checked { 'x' } else { ' ' };
                format!("[{mark}] {}", option.name)
            })
            .collect();
        writeln!(out, "specialties: {}", checklist.join("  "))?;
    }

    if matches!(view.status, ListingStatus::Idle | ListingStatus::Loading) {
        writeln!(out, "Loading doctors...")?;
    }

    if let Some(error) = &view.error {
        writeln!(out, "! {}", error.message)?;
    }
    if view.can_retry {
        writeln!(out, "type 'retry' to try again")?;
    }
    if let Some(header) = &view.header {
        writeln!(out, "{header}")?;
    }
    for card in &view.cards {
        let rating = card
            .rating
            .map(|rating| format!(" | ★ {rating}"))
            .unwrap_or_default();
        writeln!(
            out,
            "- ({}) {} | {} | {} | {} | {}, {}{}",
            card.initials,
            card.name,
            card.specialties,
            card.experience,
            card.fee,
            card.clinic_name,
            card.location,
            rating
        )?;
    }
    if let Some(empty) = &view.empty_state {
        writeln!(out, "{}\n{}", empty.title, empty.hint)?;
    }

    writeln!(out, "url: {href}")?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use directory_core::{ListingSession, MemoryLocation};
    use directory_feed::{fallback_doctors, StaticDoctorSource};

    #[tokio::test]
    async fn renders_ready_listing() {
        let mut session = ListingSession::new(MemoryLocation::with_query("/", "sort=fees"));
        session
            .mount(&StaticDoctorSource::new(fallback_doctors()))
            .await;

        let text = page(&session.view(), &session.location().href()).expect("render page");
        assert!(text.contains("2 Doctors Available"));
        assert!(text.contains("consultation: any | sort: fees"));
        assert!(text.contains("[ ] General Physician"));
        assert!(text.contains("Dr. John Smith"));
        assert!(text.ends_with("url: /?sort=fees\n"));

        let john = text.find("Dr. John Smith").expect("john rendered");
        let sarah = text.find("Dr. Sarah Johnson").expect("sarah rendered");
        assert!(john < sarah);
    }

    #[tokio::test]
    async fn renders_failure_banner() {
        let mut session = ListingSession::new(MemoryLocation::new("/"));
        session.mount(&StaticDoctorSource::new(Vec::new())).await;

        let text = page(&session.view(), &session.location().href()).expect("render page");
        assert!(text.contains("retry"));
        assert!(!text.contains("Doctors Available"));
    }

    #[tokio::test]
    async fn renders_empty_state() {
        let mut session = ListingSession::new(MemoryLocation::new("/"));
        session
            .mount(&StaticDoctorSource::new(fallback_doctors()))
            .await;
        session.toggle_specialty("Neurologist");

        let text = page(&session.view(), &session.location().href()).expect("render page");
        assert!(text.contains("0 Doctors Available"));
        assert!(text.contains("No doctors found"));
    }
}
