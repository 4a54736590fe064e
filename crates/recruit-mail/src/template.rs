//! Confirmation email sent to an applicant after a successful submission.

use recruit_entity::recruit::Recruit;
use recruit_entity::recruit::department::full_name;

use crate::mailer::OutgoingMail;

/// Subject line of the confirmation email.
pub const CONFIRMATION_SUBJECT: &str = "Application received";

/// Render the confirmation for a stored recruit, addressed to its
/// contact email.
pub fn confirmation(recruit: &Recruit) -> OutgoingMail {
    let first = full_name(&recruit.preferred_department);
    let second = full_name(&recruit.preferred_department_2);

    let text = format!(
        "Hi {name},\n\n\
         Thank you for applying. We've received your application and will review it soon.\n\n\
         Student ID: {student_id}\n\
         First choice: {first}\n\
         Second choice: {second}\n\n\
         We will contact you at this address once the review is complete.\n",
        name = recruit.first_name,
        student_id = recruit.student_id,
    );

    let html = format!(
        "<p>Hi {name},</p>\
         <p>Thank you for applying. We've received your application and will review it soon.</p>\
         <ul>\
         <li><strong>Student ID:</strong> {student_id}</li>\
         <li><strong>First choice:</strong> {first}</li>\
         <li><strong>Second choice:</strong> {second}</li>\
         </ul>\
         <p>We will contact you at this address once the review is complete.</p>",
        name = escape_html(&recruit.first_name),
        student_id = escape_html(&recruit.student_id),
        first = escape_html(&first),
        second = escape_html(&second),
    );

    OutgoingMail {
        to: recruit.contact_email().to_string(),
        subject: CONFIRMATION_SUBJECT.to_string(),
        text,
        html,
    }
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn recruit() -> Recruit {
        let now = Utc::now();
        Recruit {
            id: 1,
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            student_id: "22101001".into(),
            personal_email: "ada@example.com".into(),
            gsuite_email: "ada@g.example.edu".into(),
            phone_number: "01700000000".into(),
            enrollment_semester: "Spring 2023".into(),
            residential_semester: "Summer 2023".into(),
            current_semester: "Fall 2025".into(),
            preferred_department: "it".into(),
            preferred_department_2: "ad".into(),
            hobbies: None,
            about: "Analytical engines.".into(),
            skills: None,
            facebook_link: "https://facebook.com/ada".into(),
            linkedin_link: None,
            github_link: None,
            portfolio_link: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn greets_by_first_name_and_lists_departments() {
        let mail = confirmation(&recruit());
        assert_eq!(mail.to, "ada@example.com");
        assert_eq!(mail.subject, "Application received");
        assert!(mail.text.starts_with("Hi Ada,"));
        assert!(mail.text.contains("Department of IT"));
        assert!(mail.text.contains("Arts & Design"));
        assert!(mail.text.contains("22101001"));
        assert!(mail.html.contains("Arts &amp; Design"));
    }

    #[test]
    fn falls_back_to_institutional_address() {
        let mut r = recruit();
        r.personal_email = String::new();
        assert_eq!(confirmation(&r).to, "ada@g.example.edu");
    }

    #[test]
    fn html_escapes_applicant_input() {
        let mut r = recruit();
        r.first_name = "<b>Ada</b>".into();
        let mail = confirmation(&r);
        assert!(mail.html.contains("&lt;b&gt;Ada&lt;/b&gt;"));
    }
}
