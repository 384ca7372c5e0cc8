use chrono::NaiveTime;

use super::model::{CommentStyle, ConnectionRequestStyle, MessageTone};
use ahash::AHashSet;

/// One of the three independently validated configuration groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Targeting,
    Messaging,
    Execution,
}

impl Section {
    /// The section's key in the remote contract (and in error-map keys).
    pub fn wire_name(&self) -> &'static str {
        match self {
            Section::Targeting => "targetingSettings",
            Section::Messaging => "messagingSettings",
            Section::Execution => "executionSettings",
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// A single-field mutation of the in-progress [`FlowConfig`](super::FlowConfig).
///
/// Every mutable field has exactly one variant; applying a patch replaces
/// that field and nothing else, so sibling fields in the same section can
/// never be lost by an update.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldPatch {
    Industries(AHashSet<String>),
    JobTitles(Vec<String>),
    Locations(AHashSet<String>),
    Keywords(String),
    CompanyDescription(String),
    MessageTone(MessageTone),
    ConnectionRequestStyle(ConnectionRequestStyle),
    CommentStyle(CommentStyle),
    RunsPerDay(u8),
    ProspectsPerRun(u8),
    WorkingHoursStart(NaiveTime),
    WorkingHoursEnd(NaiveTime),
    Timezone(String),
    EnableWeekends(bool),
}

impl FieldPatch {
    /// The section this patch writes into.
    pub fn section(&self) -> Section {
        match self {
            FieldPatch::Industries(_)
            | FieldPatch::JobTitles(_)
            | FieldPatch::Locations(_)
            | FieldPatch::Keywords(_) => Section::Targeting,
            FieldPatch::CompanyDescription(_)
            | FieldPatch::MessageTone(_)
            | FieldPatch::ConnectionRequestStyle(_)
            | FieldPatch::CommentStyle(_) => Section::Messaging,
            FieldPatch::RunsPerDay(_)
            | FieldPatch::ProspectsPerRun(_)
            | FieldPatch::WorkingHoursStart(_)
            | FieldPatch::WorkingHoursEnd(_)
            | FieldPatch::Timezone(_)
            | FieldPatch::EnableWeekends(_) => Section::Execution,
        }
    }

    /// The `"section.field"` key under which the validator reports problems
    /// with this field. Writing the field clears any stale entry under this
    /// key.
    ///
    /// Both working-hour bounds share the combined
    /// `executionSettings.workingHours` key, matching how the validator
    /// reports them.
    pub fn error_key(&self) -> &'static str {
        match self {
            FieldPatch::Industries(_) => "targetingSettings.industries",
            FieldPatch::JobTitles(_) => "targetingSettings.jobTitles",
            FieldPatch::Locations(_) => "targetingSettings.locations",
            FieldPatch::Keywords(_) => "targetingSettings.keywords",
            FieldPatch::CompanyDescription(_) => "messagingSettings.companyDescription",
            FieldPatch::MessageTone(_) => "messagingSettings.messageTone",
            FieldPatch::ConnectionRequestStyle(_) => "messagingSettings.connectionRequestStyle",
            FieldPatch::CommentStyle(_) => "messagingSettings.commentStyle",
            FieldPatch::RunsPerDay(_) => "executionSettings.runsPerDay",
            FieldPatch::ProspectsPerRun(_) => "executionSettings.prospectsPerRun",
            FieldPatch::WorkingHoursStart(_) | FieldPatch::WorkingHoursEnd(_) => {
                "executionSettings.workingHours"
            }
            FieldPatch::Timezone(_) => "executionSettings.timezone",
            FieldPatch::EnableWeekends(_) => "executionSettings.enableWeekends",
        }
    }
}
