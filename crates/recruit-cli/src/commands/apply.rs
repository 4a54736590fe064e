//! Interactive application form.

use dialoguer::{Input, Select};

use recruit_client::{ApplicationForm, FormOutcome};
use recruit_core::config::AppConfig;
use recruit_core::error::AppError;
use recruit_core::result::AppResult;
use recruit_entity::recruit::Department;
use recruit_entity::recruit::semester::SEMESTER_OPTIONS;

use super::{api_client, input_error, notice_error};
use crate::output;

/// Prompt for every field and submit the application.
pub async fn execute(config: &AppConfig) -> AppResult<()> {
    let mut form = ApplicationForm::new(api_client(config));

    println!("Recruitment application\n");
    loop {
        fill(&mut form)?;

        match form.submit().await {
            FormOutcome::Submitted(_) => {
                output::print_success("Application submitted. Check your inbox for a confirmation.");
                return Ok(());
            }
            FormOutcome::Invalid(fields) => {
                for (field, messages) in &fields {
                    output::print_error(&format!("{field}: {}", messages.join("; ")));
                }
                let retry = dialoguer::Confirm::new()
                    .with_prompt("Fix and resubmit?")
                    .default(true)
                    .interact()
                    .map_err(input_error)?;
                if !retry {
                    return Err(AppError::validation("Application has invalid fields"));
                }
            }
            FormOutcome::Failed(notice) => return Err(notice_error(notice)),
        }
    }
}

/// Prompts start from the current values so a retry only needs the fixes.
fn fill(form: &mut ApplicationForm) -> AppResult<()> {
    let data = &mut form.data;
    data.first_name = text("First name", &data.first_name)?;
    data.last_name = text("Last name", &data.last_name)?;
    data.student_id = text("Student ID", &data.student_id)?;
    data.personal_email = text("Personal email", &data.personal_email)?;
    data.gsuite_email = text("GSuite email", &data.gsuite_email)?;
    data.phone_number = text("Phone number", &data.phone_number)?;
    data.enrollment_semester = semester("Enrollment semester", &data.enrollment_semester)?;
    data.residential_semester = semester("Residential semester", &data.residential_semester)?;
    data.current_semester = semester("Current semester", &data.current_semester)?;
    data.preferred_department = department("Preferred department", &data.preferred_department)?;
    data.preferred_department_2 =
        department("Second preferred department", &data.preferred_department_2)?;
    data.hobbies = optional("Hobbies (optional)", data.hobbies.as_deref())?;
    data.about = text("About yourself", &data.about)?;
    data.skills = optional("Skills (optional)", data.skills.as_deref())?;
    data.facebook_link = text("Facebook profile URL", &data.facebook_link)?;
    data.linkedin_link = optional("LinkedIn URL (optional)", data.linkedin_link.as_deref())?;
    data.github_link = optional("GitHub URL (optional)", data.github_link.as_deref())?;
    data.portfolio_link = optional("Portfolio URL (optional)", data.portfolio_link.as_deref())?;
    Ok(())
}

fn text(prompt: &str, current: &str) -> AppResult<String> {
    Input::new()
        .with_prompt(prompt)
        .with_initial_text(current)
        .allow_empty(true)
        .interact_text()
        .map_err(input_error)
}

fn optional(prompt: &str, current: Option<&str>) -> AppResult<Option<String>> {
    let value = text(prompt, current.unwrap_or_default())?;
    Ok(Some(value).filter(|v| !v.trim().is_empty()))
}

fn semester(prompt: &str, current: &str) -> AppResult<String> {
    let default = SEMESTER_OPTIONS
        .iter()
        .position(|s| *s == current)
        .unwrap_or(0);
    let index = Select::new()
        .with_prompt(prompt)
        .items(SEMESTER_OPTIONS)
        .default(default)
        .interact()
        .map_err(input_error)?;
    Ok(SEMESTER_OPTIONS[index].to_string())
}

fn department(prompt: &str, current: &str) -> AppResult<String> {
    let labels: Vec<String> = Department::ALL.iter().map(Department::option_label).collect();
    let default = Department::ALL
        .iter()
        .position(|d| d.code() == current)
        .unwrap_or(0);
    let index = Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(default)
        .interact()
        .map_err(input_error)?;
    Ok(Department::ALL[index].code().to_string())
}
