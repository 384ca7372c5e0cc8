use clap::{Parser, ValueEnum};
use junbi::prelude::*;
use serde::Deserialize;
use std::fs;

// --- JSON Deserialization Structs (Input Format Specific) ---
// These structs match the setup-script format and are only used here for
// conversion into field patches.

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSetup {
    industries: Option<Vec<String>>,
    job_titles: Option<Vec<String>>,
    locations: Option<Vec<String>>,
    keywords: Option<String>,
    company_description: Option<String>,
    message_tone: Option<MessageTone>,
    connection_request_style: Option<ConnectionRequestStyle>,
    comment_style: Option<CommentStyle>,
    runs_per_day: Option<u8>,
    prospects_per_run: Option<u8>,
    /// "HH:MM", e.g. "09:00"
    working_hours_start: Option<String>,
    working_hours_end: Option<String>,
    timezone: Option<String>,
    enable_weekends: Option<bool>,
}

impl RawSetup {
    fn into_patches(self) -> Vec<FieldPatch> {
        let mut patches = Vec::new();
        if let Some(v) = self.industries {
            patches.push(FieldPatch::Industries(v.into_iter().collect()));
        }
        if let Some(v) = self.job_titles {
            patches.push(FieldPatch::JobTitles(v));
        }
        if let Some(v) = self.locations {
            patches.push(FieldPatch::Locations(v.into_iter().collect()));
        }
        if let Some(v) = self.keywords {
            patches.push(FieldPatch::Keywords(v));
        }
        if let Some(v) = self.company_description {
            patches.push(FieldPatch::CompanyDescription(v));
        }
        if let Some(v) = self.message_tone {
            patches.push(FieldPatch::MessageTone(v));
        }
        if let Some(v) = self.connection_request_style {
            patches.push(FieldPatch::ConnectionRequestStyle(v));
        }
        if let Some(v) = self.comment_style {
            patches.push(FieldPatch::CommentStyle(v));
        }
        if let Some(v) = self.runs_per_day {
            patches.push(FieldPatch::RunsPerDay(v));
        }
        if let Some(v) = self.prospects_per_run {
            patches.push(FieldPatch::ProspectsPerRun(v));
        }
        if let Some(v) = self.working_hours_start {
            patches.push(FieldPatch::WorkingHoursStart(parse_time(&v)));
        }
        if let Some(v) = self.working_hours_end {
            patches.push(FieldPatch::WorkingHoursEnd(parse_time(&v)));
        }
        if let Some(v) = self.timezone {
            patches.push(FieldPatch::Timezone(v));
        }
        if let Some(v) = self.enable_weekends {
            patches.push(FieldPatch::EnableWeekends(v));
        }
        patches
    }
}

fn parse_time(raw: &str) -> chrono::NaiveTime {
    chrono::NaiveTime::parse_from_str(raw, "%H:%M")
        .unwrap_or_else(|e| exit_with_error(&format!("Invalid time '{}': {}", raw, e)))
}

/// A CLI-specific enum for clap to parse plan names.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum PlanCli {
    Free,
    Trial,
    Base,
    Pro,
    Plus,
}

impl From<PlanCli> for Plan {
    fn from(value: PlanCli) -> Self {
        match value {
            PlanCli::Free => Plan::Free,
            PlanCli::Trial => Plan::Trial,
            PlanCli::Base => Plan::Base,
            PlanCli::Pro => Plan::Pro,
            PlanCli::Plus => Plan::Plus,
        }
    }
}

/// Dry-runs the flow setup wizard against a template and a setup script
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the template JSON file
    template_path: String,
    /// Optional path to a setup-script JSON file with field values
    setup_path: Option<String>,

    /// The subscription plan to gate against
    #[arg(short, long, value_enum)]
    plan: Option<PlanCli>,

    /// Executions already consumed by this user
    #[arg(short = 'u', long, default_value_t = 0)]
    executions_used: u32,
}

fn main() {
    let cli = Cli::parse();
    let plan: Plan = cli.plan.unwrap_or(PlanCli::Trial).into();

    // --- 1. File Loading ---
    let template_json = fs::read_to_string(&cli.template_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read template file '{}': {}",
            &cli.template_path, e
        ))
    });
    let template: Template = serde_json::from_str(&template_json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse template JSON: {}", e)));

    let patches = match &cli.setup_path {
        Some(path) => {
            let setup_json = fs::read_to_string(path).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to read setup file '{}': {}", path, e))
            });
            let raw: RawSetup = serde_json::from_str(&setup_json)
                .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse setup JSON: {}", e)));
            raw.into_patches()
        }
        None => {
            println!("No setup file provided. Using template defaults only.");
            Vec::new()
        }
    };

    // --- 2. Wizard Walk ---
    println!("\nOpening wizard for template '{}'...", template.display_name);
    let display_name = template.display_name.clone();
    let mut wizard = Wizard::open(template);

    for patch in patches {
        wizard
            .apply(patch)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to apply field: {}", e)));
    }

    while !wizard.current_step().is_review() {
        let step = wizard.current_step();
        match wizard.next() {
            Ok(next) => println!("  Step '{}' ok, moving to '{}'", step, next),
            Err(e) => {
                eprintln!("  Step '{}' blocked: {}", step, e);
                for (field, code) in wizard.field_errors() {
                    eprintln!("    - {}: {}", field, code);
                }
                std::process::exit(1);
            }
        }
    }

    // --- 3. Quota Verdict ---
    println!("\nChecking quota for plan {:?}...", plan);
    let verdict = can_submit(plan, cli.executions_used);
    if !verdict.allowed {
        eprintln!(
            "  Submission would be refused: trial execution cap reached ({} used)",
            cli.executions_used
        );
        std::process::exit(2);
    }
    println!("  Submission allowed.");

    // --- 4. Payload Preview ---
    let name = flow_name(&display_name, chrono::Local::now().date_naive());
    let payload = serde_json::to_string_pretty(wizard.config())
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize payload: {}", e)));

    println!("\nGenerated flow name: {}", name);
    println!("Submission payload:\n{}", payload);
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
