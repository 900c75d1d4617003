//! # Directory Types
//!
//! Domain primitives shared by every directory crate.
//!
//! Enum values cross two boundaries as plain text: the upstream feed and the browser
//! query string. Each enum therefore carries its literal form (`as_literal`) and a
//! parser (`from_literal`). The filter-side enums are permissive: any text that is not
//! a known literal is kept verbatim in an `Unrecognized` variant rather than rejected.

use serde::{Deserialize, Serialize};

/// How a doctor can be consulted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConsultationType {
    #[serde(rename = "Video Consult")]
    VideoConsult,
    #[serde(rename = "In Clinic")]
    InClinic,
    #[serde(rename = "Both")]
    Both,
}

impl ConsultationType {
    pub fn as_literal(self) -> &'static str {
        match self {
            ConsultationType::VideoConsult => VIDEO_CONSULT_LITERAL,
            ConsultationType::InClinic => IN_CLINIC_LITERAL,
            ConsultationType::Both => "Both",
        }
    }

    /// Derive the consultation type from the two independent feed flags.
    ///
    /// A record with neither flag set is treated as in-clinic.
    pub fn from_flags(video_consult: bool, in_clinic: bool) -> Self {
        match (video_consult, in_clinic) {
            (true, true) => ConsultationType::Both,
            (true, false) => ConsultationType::VideoConsult,
            (false, true) => ConsultationType::InClinic,
            (false, false) => ConsultationType::InClinic,
        }
    }
}

impl std::fmt::Display for ConsultationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_literal())
    }
}

const VIDEO_CONSULT_LITERAL: &str = "Video Consult";
const IN_CLINIC_LITERAL: &str = "In Clinic";
const SORT_FEES_LITERAL: &str = "fees";
const SORT_EXPERIENCE_LITERAL: &str = "experience";

/// Consultation mode selected in the filter panel.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ConsultationMode {
    VideoConsult,
    InClinic,
    /// Any other literal, kept as received.
    Unrecognized(String),
}

impl ConsultationMode {
    pub fn as_literal(&self) -> &str {
        match self {
            ConsultationMode::VideoConsult => VIDEO_CONSULT_LITERAL,
            ConsultationMode::InClinic => IN_CLINIC_LITERAL,
            ConsultationMode::Unrecognized(raw) => raw,
        }
    }

    pub fn from_literal(literal: &str) -> Self {
        match literal {
            VIDEO_CONSULT_LITERAL => ConsultationMode::VideoConsult,
            IN_CLINIC_LITERAL => ConsultationMode::InClinic,
            other => ConsultationMode::Unrecognized(other.to_string()),
        }
    }

    /// Whether a doctor of the given type is offered under this mode.
    ///
    /// Doctors consulting both ways are offered under every mode.
    pub fn admits(&self, consultation_type: ConsultationType) -> bool {
        match (self, consultation_type) {
            (_, ConsultationType::Both) => true,
            (ConsultationMode::VideoConsult, ConsultationType::VideoConsult) => true,
            (ConsultationMode::InClinic, ConsultationType::InClinic) => true,
            _ => false,
        }
    }
}

/// Ordering applied to the result list.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SortOption {
    /// Ascending consultation fee.
    Fees,
    /// Descending years of experience.
    Experience,
    /// Any other literal, kept as received. Leaves order unchanged.
    Unrecognized(String),
}

impl SortOption {
    pub fn as_literal(&self) -> &str {
        match self {
            SortOption::Fees => SORT_FEES_LITERAL,
            SortOption::Experience => SORT_EXPERIENCE_LITERAL,
            SortOption::Unrecognized(raw) => raw,
        }
    }

    pub fn from_literal(literal: &str) -> Self {
        match literal {
            SORT_FEES_LITERAL => SortOption::Fees,
            SORT_EXPERIENCE_LITERAL => SortOption::Experience,
            other => SortOption::Unrecognized(other.to_string()),
        }
    }
}

/// A practitioner listed in the directory.
///
/// Constructed once from the feed (or the fallback set) and never mutated.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    pub id: String,
    pub name: String,
    pub qualifications: Vec<String>,
    /// Specialty labels in the order the feed listed them.
    pub specialties: Vec<String>,
    /// Years of experience.
    pub experience: u32,
    pub consultation_type: ConsultationType,
    pub clinic_name: String,
    pub location: String,
    pub fee: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Doctor {
    pub fn has_specialty(&self, specialty: &str) -> bool {
        self.specialties.iter().any(|s| s == specialty)
    }
}
