//! Upstream feed wire models and translation helpers.
//!
//! Responsibilities:
//! - Define a tolerant wire model for the upstream JSON array
//! - Translate each raw record into a domain [`Doctor`]
//!
//! Notes:
//! - The feed is third-party, so unknown keys are ignored rather than rejected
//! - Free-text numeric fields ("10 Years of experience", "₹ 500") are reduced to their
//!   first run of digits

use crate::{FetchError, FetchResult};
use directory_types::{ConsultationType, Doctor};
use serde::Deserialize;

/// Rating assigned to every feed record. The feed's own rating, if any, is ignored.
pub const DEFAULT_RATING: f32 = 4.5;

// ============================================================================
// Public translation entry points
// ============================================================================

/// Parse the upstream JSON body into doctors, preserving feed order.
///
/// # Errors
///
/// Returns [`FetchError::Payload`] with the path of the first offending field
/// (for example `[3].specialities[0].name`) when the body does not match the wire model.
pub fn parse_feed(body: &[u8]) -> FetchResult<Vec<Doctor>> {
    let mut deserializer = serde_json::Deserializer::from_slice(body);

    let records = match serde_path_to_error::deserialize::<_, Vec<DoctorWire>>(&mut deserializer)
    {
        Ok(parsed) => parsed,
        Err(err) => {
            let path = err.path().to_string();
            let path = if path.is_empty() || path == "." {
                "<root>".to_string()
            } else {
                path
            };
            return Err(FetchError::Payload {
                path,
                message: err.into_inner().to_string(),
            });
        }
    };

    Ok(records.into_iter().map(wire_to_domain).collect())
}

/// Extract the first run of ASCII digits from free text.
///
/// Returns 0 when the text has no digits. Values beyond `u32::MAX` saturate.
pub fn leading_number(text: &str) -> u32 {
    text.chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(char::is_ascii_digit)
        .filter_map(|c| c.to_digit(10))
        .fold(0u32, |acc, digit| {
            acc.saturating_mul(10).saturating_add(digit)
        })
}

// ============================================================================
// Wire types (internal)
// ============================================================================

/// One record of the upstream JSON array.
#[derive(Clone, Debug, Deserialize)]
struct DoctorWire {
    id: IdWire,

    name: String,

    #[serde(default)]
    qualifications: Option<Vec<LabelWire>>,

    #[serde(default)]
    specialities: Option<Vec<NamedWire>>,

    #[serde(default)]
    experience: Option<String>,

    #[serde(default)]
    video_consult: Option<bool>,

    #[serde(default)]
    in_clinic: Option<bool>,

    #[serde(default)]
    clinic: Option<ClinicWire>,

    #[serde(default)]
    fees: Option<String>,

    #[serde(default)]
    photo: Option<String>,
}

/// Record identifiers arrive as strings, but numeric ids are tolerated.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
enum IdWire {
    Text(String),
    Number(u64),
}

/// A `{ "name": ... }` object.
#[derive(Clone, Debug, Deserialize)]
struct NamedWire {
    name: String,
}

/// Qualifications may be plain strings or named objects.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
enum LabelWire {
    Text(String),
    Named(NamedWire),
}

#[derive(Clone, Debug, Deserialize)]
struct ClinicWire {
    #[serde(default)]
    name: Option<String>,

    #[serde(default)]
    address: Option<AddressWire>,
}

#[derive(Clone, Debug, Deserialize)]
struct AddressWire {
    #[serde(default)]
    city: Option<String>,
}

// ============================================================================
// Helper functions (internal)
// ============================================================================

fn wire_to_domain(wire: DoctorWire) -> Doctor {
    let id = match wire.id {
        IdWire::Text(text) => text,
        IdWire::Number(n) => n.to_string(),
    };

    let qualifications = wire
        .qualifications
        .unwrap_or_default()
        .into_iter()
        .map(|q| match q {
            LabelWire::Text(text) => text,
            LabelWire::Named(named) => named.name,
        })
        .collect();

    let specialties = wire
        .specialities
        .unwrap_or_default()
        .into_iter()
        .map(|s| s.name)
        .filter(|name| !name.trim().is_empty())
        .collect();

    let (clinic_name, location) = match wire.clinic {
        Some(clinic) => (
            clinic.name.unwrap_or_default(),
            clinic.address.and_then(|a| a.city).unwrap_or_default(),
        ),
        None => (String::new(), String::new()),
    };

    Doctor {
        id,
        name: wire.name,
        qualifications,
        specialties,
        experience: wire.experience.as_deref().map_or(0, leading_number),
        consultation_type: ConsultationType::from_flags(
            wire.video_consult.unwrap_or(false),
            wire.in_clinic.unwrap_or(false),
        ),
        clinic_name,
        location,
        fee: wire.fees.as_deref().map_or(0, leading_number),
        rating: Some(DEFAULT_RATING),
        image_url: wire.photo.filter(|p| !p.trim().is_empty()),
    }
}
