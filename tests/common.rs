//! Common test utilities for building configurations, templates, and
//! scripted remote collaborators.
use std::sync::Mutex;
use std::sync::atomic::{AtomicU32, Ordering};

use async_trait::async_trait;
use chrono::NaiveTime;
use junbi::error::{LaunchError, SourceError};
use junbi::prelude::*;

/// Creates a fully valid configuration that passes all three editing
/// steps.
#[allow(dead_code)]
pub fn valid_config() -> FlowConfig {
    FlowConfig {
        targeting: TargetingSettings {
            industries: ["SaaS".to_string(), "Fintech".to_string()]
                .into_iter()
                .collect(),
            job_titles: vec!["Founder".to_string(), "CTO".to_string()],
            locations: ["United States".to_string()].into_iter().collect(),
            keywords: "b2b outreach".to_string(),
        },
        messaging: MessagingSettings {
            company_description:
                "We build pipeline automation for early-stage B2B sales teams worldwide."
                    .to_string(),
            message_tone: MessageTone::Professional,
            connection_request_style: ConnectionRequestStyle::ValueFirst,
            comment_style: CommentStyle::AddInsights,
        },
        execution: ExecutionSettings {
            runs_per_day: Some(2),
            prospects_per_run: Some(10),
            working_hours: WorkingHours {
                start: NaiveTime::from_hms_opt(9, 0, 0),
                end: NaiveTime::from_hms_opt(17, 0, 0),
                timezone: "Europe/Berlin".to_string(),
            },
            enable_weekends: false,
        },
    }
}

/// A template without defaults; the wizard starts blank.
#[allow(dead_code)]
pub fn blank_template() -> Template {
    Template {
        id: "tpl-founder-outreach".to_string(),
        display_name: "Founder Outreach".to_string(),
        default_config: None,
        stages: vec!["connect".to_string(), "follow-up".to_string()],
        max_runs_per_day: 4,
    }
}

/// A template whose defaults already pass validation.
#[allow(dead_code)]
pub fn seeded_template() -> Template {
    Template {
        default_config: Some(valid_config()),
        ..blank_template()
    }
}

/// Opens a wizard on a blank template and fills every step with the
/// values from [`valid_config`] through field patches.
#[allow(dead_code)]
pub fn fill_valid(wizard: &mut Wizard) {
    let config = valid_config();
    wizard
        .apply(FieldPatch::Industries(config.targeting.industries.clone()))
        .unwrap();
    wizard
        .apply(FieldPatch::JobTitles(config.targeting.job_titles.clone()))
        .unwrap();
    wizard
        .apply(FieldPatch::Locations(config.targeting.locations.clone()))
        .unwrap();
    wizard
        .apply(FieldPatch::Keywords(config.targeting.keywords.clone()))
        .unwrap();
    wizard
        .apply(FieldPatch::CompanyDescription(
            config.messaging.company_description.clone(),
        ))
        .unwrap();
    wizard.apply(FieldPatch::RunsPerDay(2)).unwrap();
    wizard.apply(FieldPatch::ProspectsPerRun(10)).unwrap();
    wizard
        .apply(FieldPatch::WorkingHoursStart(
            NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        ))
        .unwrap();
    wizard
        .apply(FieldPatch::WorkingHoursEnd(
            NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
        ))
        .unwrap();
    wizard
        .apply(FieldPatch::Timezone("Europe/Berlin".to_string()))
        .unwrap();
}

/// Walks a freshly opened wizard to the review step. Panics if any step
/// refuses to advance.
#[allow(dead_code)]
pub fn walk_to_review(wizard: &mut Wizard) {
    fill_valid(wizard);
    wizard.next().expect("targeting step should validate");
    wizard.next().expect("messaging step should validate");
    wizard.next().expect("schedule step should validate");
    assert_eq!(wizard.current_step(), WizardStep::Review);
}

/// Opens a ledger over a fresh in-memory store with a given starting
/// count.
#[allow(dead_code)]
pub fn ledger_with(executions: u32) -> UsageLedger<MemoryStore> {
    let mut ledger = UsageLedger::open(MemoryStore::new(), "user-1");
    for _ in 0..executions {
        ledger.record_execution().unwrap();
    }
    ledger
}

/// A scripted flow-start collaborator that records how often it was
/// called.
pub struct MockLauncher {
    outcome: Mutex<ScriptedOutcome>,
    calls: AtomicU32,
}

#[allow(dead_code)]
pub enum ScriptedOutcome {
    Succeed,
    FailService(String),
    FailTimeout,
}

impl MockLauncher {
    #[allow(dead_code)]
    pub fn succeeding() -> Self {
        Self::with_outcome(ScriptedOutcome::Succeed)
    }

    #[allow(dead_code)]
    pub fn failing(message: &str) -> Self {
        Self::with_outcome(ScriptedOutcome::FailService(message.to_string()))
    }

    #[allow(dead_code)]
    pub fn timing_out() -> Self {
        Self::with_outcome(ScriptedOutcome::FailTimeout)
    }

    #[allow(dead_code)]
    pub fn with_outcome(outcome: ScriptedOutcome) -> Self {
        Self {
            outcome: Mutex::new(outcome),
            calls: AtomicU32::new(0),
        }
    }

    /// Reprograms the outcome, for retry scenarios.
    #[allow(dead_code)]
    pub fn set_outcome(&self, outcome: ScriptedOutcome) {
        *self.outcome.lock().unwrap() = outcome;
    }

    #[allow(dead_code)]
    pub fn call_count(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FlowLauncher for MockLauncher {
    async fn start_flow(
        &self,
        template_id: &str,
        name: &str,
        _config: &FlowConfig,
    ) -> Result<FlowHandle, LaunchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &*self.outcome.lock().unwrap() {
            ScriptedOutcome::Succeed => Ok(FlowHandle {
                id: format!("flow-{template_id}"),
                name: name.to_string(),
            }),
            ScriptedOutcome::FailService(message) => Err(LaunchError::Service {
                message: message.clone(),
            }),
            ScriptedOutcome::FailTimeout => Err(LaunchError::Timeout),
        }
    }
}

/// A template source whose industry lookup always fails, for fallback
/// tests.
#[allow(dead_code)]
pub struct UnavailableSource;

#[async_trait]
impl TemplateSource for UnavailableSource {
    async fn fetch_template(&self, template_id: &str) -> Result<Template, SourceError> {
        Err(SourceError::UnknownTemplate(template_id.to_string()))
    }

    async fn fetch_industries(&self) -> Result<Vec<Industry>, SourceError> {
        Err(SourceError::Unavailable("lookup offline".to_string()))
    }

    async fn search_industries(&self, _query: &str) -> Result<Vec<Industry>, SourceError> {
        Err(SourceError::Unavailable("lookup offline".to_string()))
    }
}
