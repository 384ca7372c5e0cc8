//! # Junbi - Flow Setup and Submission Gating Engine
//!
//! **Junbi** is the client-side core of a multi-step automation setup flow: it
//! assembles a structured [`FlowConfig`](config::FlowConfig) across sequential
//! wizard steps, validates each step independently, enforces plan-based quota
//! limits, and atomically hands the finished configuration to a remote
//! execution service.
//!
//! ## Core Workflow
//!
//! The engine owns no rendering and no wire format. It operates on a typed
//! configuration model and reaches every remote collaborator through a trait.
//! The primary workflow is:
//!
//! 1.  **Open**: Fetch a [`Template`](remote::Template) through your
//!     [`TemplateSource`](remote::TemplateSource) implementation and open a
//!     [`Wizard`](wizard::Wizard) for it. The template's defaults pre-populate
//!     the configuration.
//! 2.  **Assemble**: Apply [`FieldPatch`](config::FieldPatch) mutations as the
//!     user edits. Each patch writes exactly one field and clears that field's
//!     stale error.
//! 3.  **Navigate**: `next()` validates the current step and refuses to
//!     advance while it has problems; `previous()` always succeeds.
//! 4.  **Submit**: From the review step, `submit()` re-validates everything,
//!     asks the quota governor for a verdict, and only then calls your
//!     [`FlowLauncher`](remote::FlowLauncher). Trial-plan executions are
//!     counted in a durable [`UsageLedger`](plan::UsageLedger) only after the
//!     service confirms the start.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use junbi::prelude::*;
//! use junbi::error::LaunchError;
//! use async_trait::async_trait;
//!
//! struct ApiLauncher;
//!
//! #[async_trait]
//! impl FlowLauncher for ApiLauncher {
//!     async fn start_flow(
//!         &self,
//!         template_id: &str,
//!         name: &str,
//!         config: &FlowConfig,
//!     ) -> Result<FlowHandle, LaunchError> {
//!         // POST to your flow service here.
//!         Ok(FlowHandle { id: "flow-1".to_string(), name: name.to_string() })
//!     }
//! }
//!
//! # async fn run_example() -> Result<()> {
//! let template = Template {
//!     id: "tpl-founder-outreach".to_string(),
//!     display_name: "Founder Outreach".to_string(),
//!     default_config: None,
//!     stages: vec![],
//!     max_runs_per_day: 4,
//! };
//!
//! let mut wizard = Wizard::open(template);
//!
//! // Step 1: targeting
//! wizard.apply(FieldPatch::Industries(["SaaS".to_string()].into_iter().collect()))?;
//! wizard.apply(FieldPatch::Locations(["United States".to_string()].into_iter().collect()))?;
//! wizard.apply(FieldPatch::Keywords("b2b founders".to_string()))?;
//! wizard.next()?;
//!
//! // ... messaging and schedule steps ...
//!
//! // Final step: quota-gated submission.
//! let mut ledger = UsageLedger::open(MemoryStore::new(), "user-42");
//! let handle = wizard.submit(Plan::Trial, &mut ledger, &ApiLauncher).await?;
//! println!("started flow '{}'", handle.name);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod plan;
pub mod prelude;
pub mod remote;
pub mod submit;
pub mod validate;
pub mod wizard;
