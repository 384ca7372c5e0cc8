//! The step state machine that assembles a configuration and gates its
//! submission.

use ahash::AHashSet;
use itertools::Itertools;
use tracing::{debug, info, warn};

use crate::config::{ConfigBuilder, FieldPatch, FlowConfig, Section};
use crate::error::WizardError;
use crate::plan::{Plan, UsageLedger, UsageStore};
use crate::remote::{FlowHandle, FlowLauncher, Template};
use crate::submit::SubmissionCoordinator;
use crate::validate::{FieldErrors, validate_all, validate_step};

pub mod step;
pub use step::WizardStep;

/// Where the wizard is in its lifecycle. Editing covers all four steps;
/// submitting is entered while the remote call is outstanding; submitted
/// is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardPhase {
    Editing,
    Submitting,
    Submitted,
}

/// Read-only entry for the sidebar step indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepIndicator {
    pub index: u8,
    pub title: &'static str,
    pub current: bool,
    pub completed: bool,
}

/// Orchestrates step transitions, per-step validation, and the final
/// quota-gated submission.
///
/// All mutations are serialized through `&mut self`; the remote start call
/// is the only suspending operation, and while it is outstanding every
/// other operation is rejected via the submitting phase (a single
/// in-flight flag, not a queue).
#[derive(Debug)]
pub struct Wizard {
    template: Template,
    step: WizardStep,
    phase: WizardPhase,
    builder: ConfigBuilder,
    errors: FieldErrors,
}

impl Wizard {
    /// Opens the wizard for a template, pre-populating the configuration
    /// from the template's defaults when it carries any.
    pub fn open(template: Template) -> Self {
        let builder = match &template.default_config {
            Some(config) => ConfigBuilder::seeded(config.clone()),
            None => ConfigBuilder::new(),
        };
        debug!(template_id = %template.id, "wizard opened");
        Self {
            template,
            step: WizardStep::Targeting,
            phase: WizardPhase::Editing,
            builder,
            errors: FieldErrors::new(),
        }
    }

    pub fn current_step(&self) -> WizardStep {
        self.step
    }

    pub fn phase(&self) -> WizardPhase {
        self.phase
    }

    pub fn config(&self) -> &FlowConfig {
        self.builder.config()
    }

    pub fn template(&self) -> &Template {
        &self.template
    }

    /// Field problems recorded by the last blocked transition or
    /// submission attempt, keyed `"sectionName.fieldName"`.
    pub fn field_errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Sections the user has written, for auto-save collaborators.
    pub fn touched_sections(&self) -> &AHashSet<Section> {
        self.builder.touched_sections()
    }

    /// The sidebar's read-only view of the sequence. Indicators expose no
    /// navigation; steps are only reachable through [`Wizard::next`] and
    /// [`Wizard::previous`].
    pub fn step_indicator(&self) -> Vec<StepIndicator> {
        WizardStep::ALL
            .iter()
            .map(|s| StepIndicator {
                index: s.index(),
                title: s.title(),
                current: *s == self.step,
                completed: *s < self.step,
            })
            .collect()
    }

    fn ensure_editing(&self) -> Result<(), WizardError> {
        match self.phase {
            WizardPhase::Editing => Ok(()),
            WizardPhase::Submitting => Err(WizardError::SubmissionInFlight),
            WizardPhase::Submitted => Err(WizardError::AlreadySubmitted),
        }
    }

    /// Writes one configuration field and clears any stale error recorded
    /// under that field's key.
    pub fn apply(&mut self, patch: FieldPatch) -> Result<(), WizardError> {
        self.ensure_editing()?;
        let key = self.builder.apply(patch);
        self.errors.remove(key);
        Ok(())
    }

    /// Advances to the following step if the current step validates
    /// clean. On failure the errors are recorded, the step does not
    /// change, and the caller receives the same map. Advancing from
    /// review clamps (stays on review).
    pub fn next(&mut self) -> Result<WizardStep, WizardError> {
        self.ensure_editing()?;
        let errors = validate_step(self.step, self.builder.config());
        if !errors.is_empty() {
            debug!(step = %self.step, count = errors.len(), "step blocked by validation");
            self.errors.extend(errors.clone());
            return Err(WizardError::StepBlocked {
                step: self.step,
                errors,
            });
        }
        self.step = self.step.forward();
        debug!(step = %self.step, "advanced");
        Ok(self.step)
    }

    /// Steps back without validating; clamps at the first step.
    pub fn previous(&mut self) -> Result<WizardStep, WizardError> {
        self.ensure_editing()?;
        self.step = self.step.back();
        debug!(step = %self.step, "went back");
        Ok(self.step)
    }

    /// Submits the assembled configuration from the review step.
    ///
    /// Re-validates the three editing steps and aggregates every field
    /// error before anything else; then delegates the quota gate, the
    /// remote start call, and the usage increment to the
    /// [`SubmissionCoordinator`]. On success the wizard state is cleared
    /// and the wizard closes; on any failure the configuration and step
    /// are preserved for retry.
    pub async fn submit<L: FlowLauncher, S: UsageStore>(
        &mut self,
        plan: Plan,
        ledger: &mut UsageLedger<S>,
        launcher: &L,
    ) -> Result<FlowHandle, WizardError> {
        self.ensure_editing()?;
        if !self.step.is_review() {
            return Err(WizardError::NotOnReviewStep(self.step));
        }

        let errors = validate_all(self.builder.config());
        if !errors.is_empty() {
            let summary = errors.keys().sorted().join(", ");
            warn!(%summary, "submission blocked by validation");
            self.errors = errors.clone();
            return Err(WizardError::ValidationFailed { errors, summary });
        }

        self.phase = WizardPhase::Submitting;
        let result = SubmissionCoordinator::new(launcher)
            .submit(&self.template, self.builder.config(), plan, ledger)
            .await;

        match result {
            Ok(handle) => {
                info!(template_id = %self.template.id, flow_id = %handle.id, "wizard submitted");
                self.phase = WizardPhase::Submitted;
                self.builder = ConfigBuilder::new();
                self.errors.clear();
                Ok(handle)
            }
            Err(e) => {
                self.phase = WizardPhase::Editing;
                Err(WizardError::Submission(e))
            }
        }
    }
}
