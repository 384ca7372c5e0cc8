//! Final hand-off of an assembled configuration to the execution service.

use chrono::{Local, NaiveDate};
use tracing::{info, warn};

use crate::config::FlowConfig;
use crate::error::SubmissionError;
use crate::plan::{Plan, UsageLedger, UsageStore, can_submit};
use crate::remote::{FlowHandle, FlowLauncher, Template};

/// Derives the flow's generated name from the template and a date.
///
/// The public submission path stamps today's date; tests inject a fixed
/// one.
pub fn flow_name(display_name: &str, date: NaiveDate) -> String {
    format!("{} - {}", display_name, date.format("%Y-%m-%d"))
}

/// Executes the submission sequence: quota gate, remote start call, then
/// the at-most-once usage increment for capped plans.
///
/// The coordinator never touches wizard state; callers keep their
/// configuration intact on every failure path so the user can retry
/// without re-entering data.
pub struct SubmissionCoordinator<'a, L: FlowLauncher> {
    launcher: &'a L,
}

impl<'a, L: FlowLauncher> SubmissionCoordinator<'a, L> {
    pub fn new(launcher: &'a L) -> Self {
        Self { launcher }
    }

    /// Submits with today's date in the generated flow name.
    pub async fn submit<S: UsageStore>(
        &self,
        template: &Template,
        config: &FlowConfig,
        plan: Plan,
        ledger: &mut UsageLedger<S>,
    ) -> Result<FlowHandle, SubmissionError> {
        self.submit_dated(template, config, plan, ledger, Local::now().date_naive())
            .await
    }

    /// The full sequence with an injectable date.
    ///
    /// 1. Capped plans consult the quota gate first; a refusal makes no
    ///    remote call and leaves the ledger untouched.
    /// 2. The remote start call is the only suspending operation; once
    ///    dispatched it cannot be cancelled from here.
    /// 3. The ledger increment happens only after confirmed remote
    ///    acceptance, never before, so failed attempts are never charged.
    pub async fn submit_dated<S: UsageStore>(
        &self,
        template: &Template,
        config: &FlowConfig,
        plan: Plan,
        ledger: &mut UsageLedger<S>,
        date: NaiveDate,
    ) -> Result<FlowHandle, SubmissionError> {
        if plan == Plan::Trial {
            let verdict = can_submit(plan, ledger.count()?);
            if !verdict.allowed {
                return Err(SubmissionError::TrialLimitReached);
            }
        }

        let name = flow_name(&template.display_name, date);
        match self.launcher.start_flow(&template.id, &name, config).await {
            Ok(handle) => {
                if plan == Plan::Trial {
                    // The launch is already accepted; failing the whole
                    // submission here would push the user into a retry and
                    // a second remote start.
                    if let Err(e) = ledger.record_execution() {
                        warn!(error = %e, "flow started but usage record write failed");
                    }
                }
                info!(flow_id = %handle.id, name = %handle.name, "flow started");
                Ok(handle)
            }
            Err(e) => {
                warn!(error = %e, template_id = %template.id, "flow start failed");
                Err(SubmissionError::Remote {
                    message: e.to_string(),
                })
            }
        }
    }
}
