//! Reviewer dashboard commands.

use std::sync::Arc;

use clap::{Args, Subcommand};
use serde::Serialize;
use serde_json::{Map, Value};
use tabled::Tabled;

use recruit_client::{Dashboard, DashboardOutcome, RecruitRow};
use recruit_core::config::AppConfig;
use recruit_core::error::AppError;
use recruit_core::result::AppResult;
use recruit_entity::recruit::RecruitPatch;

use super::{api_client, input_error, notice_error, token_store};
use crate::output::{self, OutputFormat};

/// Arguments for dashboard commands
#[derive(Debug, Args)]
pub struct DashboardArgs {
    /// Dashboard subcommand
    #[command(subcommand)]
    pub command: DashboardCommand,
}

/// Dashboard subcommands
#[derive(Debug, Subcommand)]
pub enum DashboardCommand {
    /// List all applications
    List,
    /// Show one application in full
    Show {
        /// Recruit ID
        id: i64,
    },
    /// Change fields of an application
    Update {
        /// Recruit ID
        id: i64,
        /// Field to change as `name=value` using API field names,
        /// e.g. `phoneNumber=01811111111`; an empty value clears optional fields
        #[arg(long = "set", value_name = "FIELD=VALUE", value_parser = parse_assignment, required = true)]
        fields: Vec<(String, String)>,
    },
    /// Delete an application
    Delete {
        /// Recruit ID
        id: i64,
        /// Skip confirmation prompt
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, Serialize, Tabled)]
struct RecruitTableRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Student ID")]
    student_id: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Phone")]
    phone: String,
    #[tabled(rename = "Dept 1")]
    department: String,
    #[tabled(rename = "Dept 2")]
    department_2: String,
    #[tabled(rename = "Semester")]
    semester: String,
    #[tabled(rename = "Applied")]
    applied: String,
}

impl From<RecruitRow> for RecruitTableRow {
    fn from(row: RecruitRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            student_id: row.student_id,
            email: row.email,
            phone: row.phone,
            department: row.department,
            department_2: row.department_2,
            semester: row.semester,
            applied: row.applied,
        }
    }
}

/// Execute dashboard commands
pub async fn execute(
    args: &DashboardArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> AppResult<()> {
    let mut dashboard = Dashboard::new(api_client(config), Arc::new(token_store(config)));
    settle(dashboard.open().await)?;

    match &args.command {
        DashboardCommand::List => {
            let rows: Vec<RecruitTableRow> =
                dashboard.rows().into_iter().map(RecruitTableRow::from).collect();
            output::print_list(&rows, format);
        }
        DashboardCommand::Show { id } => {
            let detail = dashboard
                .select(*id)
                .ok_or_else(|| AppError::not_found(format!("Recruit with ID {id} not found")))?;
            if format == OutputFormat::Json {
                output::print_json(&detail.recruit);
                return Ok(());
            }

            let r = &detail.recruit;
            println!("{}", r.full_name());
            output::print_kv("Student ID", &r.student_id);
            output::print_kv("Personal email", &r.personal_email);
            output::print_kv("GSuite email", &r.gsuite_email);
            output::print_kv("Phone", &r.phone_number);
            output::print_kv("Enrollment semester", &r.enrollment_semester);
            output::print_kv("Residential semester", &r.residential_semester);
            output::print_kv("Current semester", &r.current_semester);
            output::print_kv("First choice", &detail.department);
            output::print_kv("Second choice", &detail.department_2);
            output::print_kv("About", &r.about);
            for (label, value) in [
                ("Hobbies", &r.hobbies),
                ("Skills", &r.skills),
                ("LinkedIn", &r.linkedin_link),
                ("GitHub", &r.github_link),
                ("Portfolio", &r.portfolio_link),
            ] {
                if let Some(value) = value {
                    output::print_kv(label, value);
                }
            }
            output::print_kv("Facebook", &r.facebook_link);
            output::print_kv("Applied", &r.created_at.to_rfc3339());
        }
        DashboardCommand::Update { id, fields } => {
            let patch = build_patch(fields)?;
            settle(dashboard.update(*id, &patch).await)?;
            output::print_success(&format!("Recruit {id} updated"));
            if format == OutputFormat::Json {
                if let Some(detail) = dashboard.select(*id) {
                    output::print_json(&detail.recruit);
                }
            }
        }
        DashboardCommand::Delete { id, force } => {
            if dashboard.select(*id).is_none() {
                return Err(AppError::not_found(format!("Recruit with ID {id} not found")));
            }
            if !force {
                let confirm = dialoguer::Confirm::new()
                    .with_prompt(format!("Delete recruit {id}?"))
                    .default(false)
                    .interact()
                    .map_err(input_error)?;
                if !confirm {
                    println!("Cancelled.");
                    return Ok(());
                }
            }

            settle(dashboard.remove(*id).await)?;
            output::print_success(&format!("Recruit {id} deleted"));
        }
    }

    Ok(())
}

fn parse_assignment(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(name, value)| (name.trim().to_string(), value.to_string()))
        .filter(|(name, _)| !name.is_empty())
        .ok_or_else(|| format!("expected FIELD=VALUE, got '{raw}'"))
}

/// Unknown field names are rejected rather than silently ignored.
fn build_patch(fields: &[(String, String)]) -> AppResult<RecruitPatch> {
    let object: Map<String, Value> = fields
        .iter()
        .map(|(name, value)| (name.clone(), Value::String(value.clone())))
        .collect();
    let patch: RecruitPatch = serde_json::from_value(Value::Object(object.clone()))
        .map_err(|e| AppError::bad_request(format!("Invalid update: {e}")))?;

    let known = serde_json::to_value(&patch)
        .map_err(|e| AppError::internal(format!("Failed to encode update: {e}")))?;
    if let Some(unknown) = object.keys().find(|k| known.get(k.as_str()).is_none()) {
        return Err(AppError::bad_request(format!("Unknown field '{unknown}'")));
    }
    Ok(patch)
}

fn settle(outcome: DashboardOutcome) -> AppResult<()> {
    match outcome {
        DashboardOutcome::Ready => Ok(()),
        DashboardOutcome::Redirect { notice, .. } => {
            let message = notice
                .map(|n| format!("{}: {}", n.title, n.description))
                .unwrap_or_else(|| "Not logged in".to_string());
            Err(AppError::unauthorized(format!("{message}. Run `recruit login` first.")))
        }
        DashboardOutcome::Failed(notice) => Err(notice_error(notice)),
    }
}
