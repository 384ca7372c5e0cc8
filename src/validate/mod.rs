//! Per-step configuration validation.
//!
//! Every check in this module is a pure function over the configuration:
//! identical input yields an identical error map, nothing is mutated, and
//! nothing can fail — problems are reported as values, never as `Err`.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::config::model::{
    FlowConfig, PROSPECTS_PER_RUN_RANGE, RUNS_PER_DAY_RANGE,
};
use crate::wizard::WizardStep;

/// Why a field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationCode {
    Required,
    TooShort,
    OutOfRange,
}

impl std::fmt::Display for ValidationCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ValidationCode::Required => "REQUIRED",
            ValidationCode::TooShort => "TOO_SHORT",
            ValidationCode::OutOfRange => "OUT_OF_RANGE",
        })
    }
}

/// Field problems keyed by `"sectionName.fieldName"`.
///
/// The working-hours bounds report under the single combined key
/// `executionSettings.workingHours`.
pub type FieldErrors = AHashMap<String, ValidationCode>;

/// The minimum accepted length of a trimmed company description.
pub const COMPANY_DESCRIPTION_MIN_LEN: usize = 50;

/// Validates the configuration fields belonging to one wizard step.
///
/// The review step carries no fields of its own and always validates
/// clean; submission instead re-runs the three editing steps through
/// [`validate_all`].
pub fn validate_step(step: WizardStep, config: &FlowConfig) -> FieldErrors {
    let mut errors = FieldErrors::new();
    match step {
        WizardStep::Targeting => validate_targeting(config, &mut errors),
        WizardStep::Messaging => validate_messaging(config, &mut errors),
        WizardStep::Execution => validate_execution(config, &mut errors),
        WizardStep::Review => {}
    }
    errors
}

/// Runs the three editing steps in order and merges their error maps.
pub fn validate_all(config: &FlowConfig) -> FieldErrors {
    let mut errors = FieldErrors::new();
    validate_targeting(config, &mut errors);
    validate_messaging(config, &mut errors);
    validate_execution(config, &mut errors);
    errors
}

fn validate_targeting(config: &FlowConfig, errors: &mut FieldErrors) {
    let targeting = &config.targeting;
    if targeting.industries.is_empty() {
        errors.insert(
            "targetingSettings.industries".to_string(),
            ValidationCode::Required,
        );
    }
    if targeting.keywords.trim().is_empty() {
        errors.insert(
            "targetingSettings.keywords".to_string(),
            ValidationCode::Required,
        );
    }
    if targeting.locations.is_empty() {
        errors.insert(
            "targetingSettings.locations".to_string(),
            ValidationCode::Required,
        );
    }
    // Job titles are optional and never produce an error.
}

fn validate_messaging(config: &FlowConfig, errors: &mut FieldErrors) {
    let description = config.messaging.company_description.trim();
    let code = if description.is_empty() {
        Some(ValidationCode::Required)
    } else if description.chars().count() < COMPANY_DESCRIPTION_MIN_LEN {
        Some(ValidationCode::TooShort)
    } else {
        None
    };
    if let Some(code) = code {
        errors.insert("messagingSettings.companyDescription".to_string(), code);
    }
}

fn validate_execution(config: &FlowConfig, errors: &mut FieldErrors) {
    let execution = &config.execution;

    let (runs_min, runs_max) = RUNS_PER_DAY_RANGE;
    match execution.runs_per_day {
        Some(n) if (runs_min..=runs_max).contains(&n) => {}
        _ => {
            errors.insert(
                "executionSettings.runsPerDay".to_string(),
                ValidationCode::OutOfRange,
            );
        }
    }

    // Tolerated when absent: templates may omit it and the remote default
    // applies.
    let (prospects_min, prospects_max) = PROSPECTS_PER_RUN_RANGE;
    if let Some(n) = execution.prospects_per_run {
        if !(prospects_min..=prospects_max).contains(&n) {
            errors.insert(
                "executionSettings.prospectsPerRun".to_string(),
                ValidationCode::OutOfRange,
            );
        }
    }

    let hours = &execution.working_hours;
    if hours.start.is_none() || hours.end.is_none() {
        errors.insert(
            "executionSettings.workingHours".to_string(),
            ValidationCode::Required,
        );
    }
}
