//! Recruit entity model and its input schemas.

use std::borrow::Cow;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidateUrl, ValidationError};

use super::semester::DEFAULT_CURRENT_SEMESTER;

/// One applicant's submitted record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Recruit {
    /// Sequential identifier assigned by the store.
    pub id: i64,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// University student identifier, unique across all recruits.
    pub student_id: String,
    /// Personal email address.
    pub personal_email: String,
    /// Institutional (G Suite) email address.
    pub gsuite_email: String,
    /// Contact phone number.
    pub phone_number: String,
    /// Semester the student enrolled in.
    pub enrollment_semester: String,
    /// Residential semester label.
    pub residential_semester: String,
    /// Semester the student is currently in.
    pub current_semester: String,
    /// First-choice department code.
    #[serde(rename = "preferedDepartment")]
    pub preferred_department: String,
    /// Second-choice department code.
    #[serde(rename = "preferedDepartment2")]
    pub preferred_department_2: String,
    /// Free-text hobbies.
    pub hobbies: Option<String>,
    /// Free-text statement about the applicant.
    pub about: String,
    /// Free-text skills.
    pub skills: Option<String>,
    /// Facebook profile URL.
    pub facebook_link: String,
    /// LinkedIn profile URL.
    pub linkedin_link: Option<String>,
    /// GitHub profile URL.
    pub github_link: Option<String>,
    /// Portfolio URL.
    pub portfolio_link: Option<String>,
    /// When the record was created (store-assigned).
    pub created_at: DateTime<Utc>,
    /// When the record was last modified (store-assigned).
    pub updated_at: DateTime<Utc>,
}

impl Recruit {
    /// `"First Last"`.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Address for the confirmation email: the personal email, or the
    /// institutional one when the personal email is blank.
    pub fn contact_email(&self) -> &str {
        if self.personal_email.trim().is_empty() {
            &self.gsuite_email
        } else {
            &self.personal_email
        }
    }
}

/// A public submission. The validation rules here are the form schema and
/// are applied both before the form posts and when the API receives it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewRecruit {
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,
    #[validate(length(min = 1, message = "Student ID is required"))]
    pub student_id: String,
    #[validate(email(message = "Invalid email address"))]
    pub personal_email: String,
    #[validate(email(message = "Invalid GSuite email address"))]
    pub gsuite_email: String,
    #[validate(length(min = 10, message = "Phone number must be at least 10 digits"))]
    pub phone_number: String,
    #[validate(length(min = 1, message = "Enrollment semester is required"))]
    pub enrollment_semester: String,
    #[validate(length(min = 1, message = "Residential semester is required"))]
    pub residential_semester: String,
    #[validate(length(min = 1, message = "Current semester is required"))]
    pub current_semester: String,
    #[serde(rename = "preferedDepartment")]
    #[validate(length(min = 1, message = "Preferred department is required"))]
    pub preferred_department: String,
    #[serde(rename = "preferedDepartment2")]
    #[validate(length(min = 1, message = "Second preferred department is required"))]
    pub preferred_department_2: String,
    #[serde(default)]
    pub hobbies: Option<String>,
    #[validate(length(min = 10, message = "Please write at least 10 characters about yourself"))]
    pub about: String,
    #[serde(default)]
    pub skills: Option<String>,
    #[validate(url(message = "Invalid Facebook URL"))]
    pub facebook_link: String,
    #[serde(default)]
    #[validate(custom(function = "optional_url"))]
    pub linkedin_link: Option<String>,
    #[serde(default)]
    #[validate(custom(function = "optional_url"))]
    pub github_link: Option<String>,
    #[serde(default)]
    #[validate(custom(function = "optional_url"))]
    pub portfolio_link: Option<String>,
}

impl Default for NewRecruit {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            student_id: String::new(),
            personal_email: String::new(),
            gsuite_email: String::new(),
            phone_number: String::new(),
            enrollment_semester: String::new(),
            residential_semester: String::new(),
            current_semester: DEFAULT_CURRENT_SEMESTER.to_string(),
            preferred_department: String::new(),
            preferred_department_2: String::new(),
            hobbies: None,
            about: String::new(),
            skills: None,
            facebook_link: String::new(),
            linkedin_link: None,
            github_link: None,
            portfolio_link: None,
        }
    }
}

impl NewRecruit {
    /// Turns blank optional fields into `None` so the store keeps `NULL`
    /// rather than empty strings.
    pub fn normalized(mut self) -> Self {
        for field in [
            &mut self.hobbies,
            &mut self.skills,
            &mut self.linkedin_link,
            &mut self.github_link,
            &mut self.portfolio_link,
        ] {
            blank_to_none(field);
        }
        self
    }
}

/// A partial update. Present fields overwrite the stored value; absent
/// fields are left alone. For the nullable fields a blank string clears
/// the stored value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RecruitPatch {
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: Option<String>,
    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: Option<String>,
    #[validate(length(min = 1, message = "Student ID is required"))]
    pub student_id: Option<String>,
    #[validate(email(message = "Invalid email address"))]
    pub personal_email: Option<String>,
    #[validate(email(message = "Invalid GSuite email address"))]
    pub gsuite_email: Option<String>,
    #[validate(length(min = 10, message = "Phone number must be at least 10 digits"))]
    pub phone_number: Option<String>,
    #[validate(length(min = 1, message = "Enrollment semester is required"))]
    pub enrollment_semester: Option<String>,
    #[validate(length(min = 1, message = "Residential semester is required"))]
    pub residential_semester: Option<String>,
    #[validate(length(min = 1, message = "Current semester is required"))]
    pub current_semester: Option<String>,
    #[serde(rename = "preferedDepartment")]
    #[validate(length(min = 1, message = "Preferred department is required"))]
    pub preferred_department: Option<String>,
    #[serde(rename = "preferedDepartment2")]
    #[validate(length(min = 1, message = "Second preferred department is required"))]
    pub preferred_department_2: Option<String>,
    pub hobbies: Option<String>,
    #[validate(length(min = 10, message = "Please write at least 10 characters about yourself"))]
    pub about: Option<String>,
    pub skills: Option<String>,
    #[validate(url(message = "Invalid Facebook URL"))]
    pub facebook_link: Option<String>,
    #[validate(custom(function = "optional_url"))]
    pub linkedin_link: Option<String>,
    #[validate(custom(function = "optional_url"))]
    pub github_link: Option<String>,
    #[validate(custom(function = "optional_url"))]
    pub portfolio_link: Option<String>,
}

impl RecruitPatch {
    /// Shallow-merges this patch over `recruit`. Identity and timestamps are
    /// never touched.
    pub fn apply_to(self, recruit: &mut Recruit) {
        let required = [
            (self.first_name, &mut recruit.first_name),
            (self.last_name, &mut recruit.last_name),
            (self.student_id, &mut recruit.student_id),
            (self.personal_email, &mut recruit.personal_email),
            (self.gsuite_email, &mut recruit.gsuite_email),
            (self.phone_number, &mut recruit.phone_number),
            (self.enrollment_semester, &mut recruit.enrollment_semester),
            (self.residential_semester, &mut recruit.residential_semester),
            (self.current_semester, &mut recruit.current_semester),
            (self.preferred_department, &mut recruit.preferred_department),
            (self.preferred_department_2, &mut recruit.preferred_department_2),
            (self.about, &mut recruit.about),
            (self.facebook_link, &mut recruit.facebook_link),
        ];
        for (value, slot) in required {
            if let Some(value) = value {
                *slot = value;
            }
        }

        let nullable = [
            (self.hobbies, &mut recruit.hobbies),
            (self.skills, &mut recruit.skills),
            (self.linkedin_link, &mut recruit.linkedin_link),
            (self.github_link, &mut recruit.github_link),
            (self.portfolio_link, &mut recruit.portfolio_link),
        ];
        for (value, slot) in nullable {
            if value.is_some() {
                *slot = value;
                blank_to_none(slot);
            }
        }
    }

    /// Whether the patch touches nothing.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

fn blank_to_none(field: &mut Option<String>) {
    if field.as_deref().is_some_and(|v| v.trim().is_empty()) {
        *field = None;
    }
}

/// Accepts an empty string (field left blank) or a valid URL.
fn optional_url(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || value.validate_url() {
        Ok(())
    } else {
        Err(ValidationError::new("url").with_message(Cow::Borrowed("Invalid URL")))
    }
}
