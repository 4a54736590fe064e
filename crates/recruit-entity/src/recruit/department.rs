//! Department codes used by the two ranked preferences.

use serde::{Deserialize, Serialize};

/// A club department an applicant can rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Department {
    /// Finance and Marketing.
    Fm,
    /// IT.
    It,
    /// Editorial and Publications.
    Ep,
    /// Research and Project Management.
    Rpm,
    /// Event Management.
    Em,
    /// Strategic Planning.
    Sp,
    /// Human Resources.
    Hr,
    /// Arts & Design.
    Ad,
}

impl Department {
    /// Every department, in form order.
    pub const ALL: [Department; 8] = [
        Self::Fm,
        Self::It,
        Self::Ep,
        Self::Rpm,
        Self::Em,
        Self::Sp,
        Self::Hr,
        Self::Ad,
    ];

    /// Parse a stored department code.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.code() == code)
    }

    /// Code stored on the recruit record.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Fm => "fm",
            Self::It => "it",
            Self::Ep => "ep",
            Self::Rpm => "rpm",
            Self::Em => "em",
            Self::Sp => "sp",
            Self::Hr => "hr",
            Self::Ad => "ad",
        }
    }

    /// Abbreviation shown in the dashboard table.
    pub fn short_label(&self) -> &'static str {
        match self {
            Self::Fm => "F&M",
            Self::It => "IT",
            Self::Ep => "E&P",
            Self::Rpm => "RPM",
            Self::Em => "EM",
            Self::Sp => "SP",
            Self::Hr => "HR",
            Self::Ad => "A&D",
        }
    }

    /// Full name shown in the detail panel and the confirmation email.
    pub fn full_name(&self) -> &'static str {
        match self {
            Self::Fm => "Finance and Marketing Department",
            Self::It => "Department of IT",
            Self::Ep => "Editorial and Publications Department",
            Self::Rpm => "Research and Project Management Department",
            Self::Em => "Event Management",
            Self::Sp => "Strategic Planning Department",
            Self::Hr => "Human Resources Department",
            Self::Ad => "Arts & Design",
        }
    }

    /// Option label used by the submission form: `"Full Name (ABBR)"`.
    pub fn option_label(&self) -> String {
        format!("{} ({})", self.full_name(), self.short_label())
    }
}

/// Short label for a stored code, or the raw code when it is unknown.
pub fn short_label(code: &str) -> String {
    Department::from_code(code)
        .map(|d| d.short_label().to_string())
        .unwrap_or_else(|| code.to_string())
}

/// Full name for a stored code, or the raw code when it is unknown.
pub fn full_name(code: &str) -> String {
    Department::from_code(code)
        .map(|d| d.full_name().to_string())
        .unwrap_or_else(|| code.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for dept in Department::ALL {
            assert_eq!(Department::from_code(dept.code()), Some(dept));
        }
    }

    #[test]
    fn labels_for_known_codes() {
        assert_eq!(short_label("fm"), "F&M");
        assert_eq!(full_name("rpm"), "Research and Project Management Department");
        assert_eq!(
            Department::Ep.option_label(),
            "Editorial and Publications Department (E&P)"
        );
    }

    #[test]
    fn unknown_codes_fall_back_to_raw() {
        assert_eq!(short_label("xyz"), "xyz");
        assert_eq!(full_name(""), "");
    }
}
