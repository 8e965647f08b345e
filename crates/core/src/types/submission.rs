//! Music submission enums.

use serde::{Deserialize, Serialize};

/// Who is submitting music: an industry contact or an artist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmitterRole {
    Business,
    Artist,
}

impl std::fmt::Display for SubmitterRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Business => write!(f, "business"),
            Self::Artist => write!(f, "artist"),
        }
    }
}

/// Whether a business submission comes from an individual or a company.
///
/// Unknown or missing values fall back to `Company`; the form never rejects
/// on this field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionType {
    Individual,
    #[default]
    Company,
}

impl SubmissionType {
    /// Normalize a raw form value, falling back to the default on anything
    /// unrecognized.
    #[must_use]
    pub fn from_form_value(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_lowercase()).as_deref() {
            Some("individual") => Self::Individual,
            Some("company") => Self::Company,
            _ => Self::default(),
        }
    }
}

impl std::fmt::Display for SubmissionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Individual => write!(f, "individual"),
            Self::Company => write!(f, "company"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submission_type_normalization() {
        assert_eq!(
            SubmissionType::from_form_value(Some("  Individual ")),
            SubmissionType::Individual
        );
        assert_eq!(
            SubmissionType::from_form_value(Some("COMPANY")),
            SubmissionType::Company
        );
        // Unknown values silently fall back to the default.
        assert_eq!(
            SubmissionType::from_form_value(Some("collective")),
            SubmissionType::Company
        );
        assert_eq!(SubmissionType::from_form_value(None), SubmissionType::Company);
    }
}
