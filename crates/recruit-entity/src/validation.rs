//! Flattening of `validator` output into wire-named field messages.

use std::collections::BTreeMap;

use validator::ValidationErrors;

/// Rule messages keyed by the field name used on the wire.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Collect the messages of every failed rule, keyed by wire field name.
pub fn field_messages(errors: &ValidationErrors) -> FieldErrors {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let messages = errs
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{field} is invalid"))
                })
                .collect();
            (wire_name(&field), messages)
        })
        .collect()
}

/// Field name as it appears in JSON bodies.
pub fn wire_name(field: &str) -> String {
    match field {
        "preferred_department" => "preferedDepartment".to_string(),
        "preferred_department_2" => "preferedDepartment2".to_string(),
        _ => {
            let mut out = String::with_capacity(field.len());
            let mut upper = false;
            for c in field.chars() {
                if c == '_' {
                    upper = true;
                } else if upper {
                    out.extend(c.to_uppercase());
                    upper = false;
                } else {
                    out.push(c);
                }
            }
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use validator::Validate;

    use super::*;
    use crate::recruit::NewRecruit;

    #[test]
    fn wire_names_match_request_fields() {
        assert_eq!(wire_name("phone_number"), "phoneNumber");
        assert_eq!(wire_name("preferred_department_2"), "preferedDepartment2");
        assert_eq!(wire_name("about"), "about");
    }

    #[test]
    fn empty_submission_reports_each_required_field() {
        let errors = NewRecruit::default().validate().unwrap_err();
        let fields = field_messages(&errors);
        assert_eq!(fields["firstName"], vec!["First name is required"]);
        assert_eq!(fields["preferedDepartment"], vec!["Preferred department is required"]);
        assert!(!fields.contains_key("currentSemester"));
        assert!(!fields.contains_key("hobbies"));
    }
}
