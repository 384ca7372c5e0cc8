use ahash::AHashSet;
use tracing::debug;

use super::model::FlowConfig;
use super::patch::{FieldPatch, Section};

/// Holds the in-progress [`FlowConfig`] and applies single-field mutations.
///
/// The builder is purely structural: it performs no validation, and every
/// mutation goes through [`ConfigBuilder::apply`], which replaces exactly
/// one field and leaves all sibling fields in the section untouched.
/// Sections that have been written at least once are tracked for
/// downstream auto-save collaborators.
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    config: FlowConfig,
    touched: AHashSet<Section>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from a pre-populated configuration, typically a template's
    /// defaults. Replaces the whole config; touched-section tracking is
    /// reset since nothing was user-written yet.
    pub fn seeded(config: FlowConfig) -> Self {
        Self {
            config,
            touched: AHashSet::new(),
        }
    }

    /// Applies a single-field patch and returns the error-map key the
    /// caller should clear for this field.
    pub fn apply(&mut self, patch: FieldPatch) -> &'static str {
        let section = patch.section();
        let key = patch.error_key();
        debug!(section = %section, field = key, "applying config patch");

        match patch {
            FieldPatch::Industries(v) => self.config.targeting.industries = v,
            FieldPatch::JobTitles(v) => self.config.targeting.job_titles = v,
            FieldPatch::Locations(v) => self.config.targeting.locations = v,
            FieldPatch::Keywords(v) => self.config.targeting.keywords = v,
            FieldPatch::CompanyDescription(v) => self.config.messaging.company_description = v,
            FieldPatch::MessageTone(v) => self.config.messaging.message_tone = v,
            FieldPatch::ConnectionRequestStyle(v) => {
                self.config.messaging.connection_request_style = v
            }
            FieldPatch::CommentStyle(v) => self.config.messaging.comment_style = v,
            FieldPatch::RunsPerDay(v) => self.config.execution.runs_per_day = Some(v),
            FieldPatch::ProspectsPerRun(v) => self.config.execution.prospects_per_run = Some(v),
            FieldPatch::WorkingHoursStart(v) => self.config.execution.working_hours.start = Some(v),
            FieldPatch::WorkingHoursEnd(v) => self.config.execution.working_hours.end = Some(v),
            FieldPatch::Timezone(v) => self.config.execution.working_hours.timezone = v,
            FieldPatch::EnableWeekends(v) => self.config.execution.enable_weekends = v,
        }

        self.touched.insert(section);
        key
    }

    pub fn config(&self) -> &FlowConfig {
        &self.config
    }

    /// Consumes the builder, yielding the assembled configuration.
    pub fn into_config(self) -> FlowConfig {
        self.config
    }

    /// Sections written at least once since creation/seeding.
    pub fn touched_sections(&self) -> &AHashSet<Section> {
        &self.touched
    }
}
