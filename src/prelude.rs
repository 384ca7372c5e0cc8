//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the
//! junbi crate. Import this module to get access to the core functionality
//! without having to import each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! use junbi::prelude::*;
//!
//! let template = Template {
//!     id: "tpl-1".to_string(),
//!     display_name: "Founder Outreach".to_string(),
//!     default_config: None,
//!     stages: vec![],
//!     max_runs_per_day: 4,
//! };
//!
//! let mut wizard = Wizard::open(template);
//! wizard.apply(FieldPatch::Keywords("b2b".to_string())).unwrap();
//! ```

// Wizard state machine
pub use crate::wizard::{StepIndicator, Wizard, WizardPhase, WizardStep};

// Configuration model and mutation
pub use crate::config::{
    CommentStyle, ConfigBuilder, ConnectionRequestStyle, ExecutionSettings, FieldPatch,
    FlowConfig, MessageTone, MessagingSettings, Section, TargetingSettings, WorkingHours,
};

// Validation
pub use crate::validate::{FieldErrors, ValidationCode, validate_all, validate_step};

// Plans, quota verdicts, and usage tracking
pub use crate::plan::{
    AutomationHeadroom, MemoryStore, Plan, PlanLimits, ProfileHeadroom, QuotaRefusal,
    SubmitVerdict, TRIAL_EXECUTION_CAP, UsageLedger, UsageStore, can_submit,
    check_automation_limit, check_profile_limit,
};

// Remote collaborator contracts
pub use crate::remote::{
    FlowHandle, FlowLauncher, Industry, Template, TemplateSource, load_industries,
};

// Submission
pub use crate::submit::{SubmissionCoordinator, flow_name};

// Error types
pub use crate::error::{StorageError, SubmissionError, WizardError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
