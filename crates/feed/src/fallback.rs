//! Fixed dataset substituted when the upstream feed cannot be read.

use directory_types::{ConsultationType, Doctor};

/// Doctors served in place of the feed after a transport, status or payload failure.
///
/// The session treats these as authoritative, so the list is never empty.
pub fn fallback_doctors() -> Vec<Doctor> {
    vec![
        Doctor {
            id: "mock1".into(),
            name: "Dr. John Smith".into(),
            qualifications: vec!["MBBS".into(), "MD".into()],
            specialties: vec!["General Physician".into()],
            experience: 10,
            consultation_type: ConsultationType::Both,
            clinic_name: "City Hospital".into(),
            location: "New York".into(),
            fee: 500,
            rating: Some(4.5),
            image_url: None,
        },
        Doctor {
            id: "mock2".into(),
            name: "Dr. Sarah Johnson".into(),
            qualifications: vec!["MBBS".into(), "MS".into()],
            specialties: vec!["Dermatologist".into()],
            experience: 8,
            consultation_type: ConsultationType::VideoConsult,
            clinic_name: "Skin Care Clinic".into(),
            location: "Los Angeles".into(),
            fee: 700,
            rating: Some(4.7),
            image_url: None,
        },
    ]
}
