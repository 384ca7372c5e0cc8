use ahash::AHashSet;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// The complete configuration object assembled by the wizard and handed to
/// the remote execution service on submission.
///
/// The three sections are always structurally present; optionality lives on
/// the individual fields. Field names serialize in the remote contract's
/// camelCase form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlowConfig {
    #[serde(rename = "targetingSettings")]
    pub targeting: TargetingSettings,
    #[serde(rename = "messagingSettings")]
    pub messaging: MessagingSettings,
    #[serde(rename = "executionSettings")]
    pub execution: ExecutionSettings,
}

/// Who the automation should reach.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetingSettings {
    pub industries: AHashSet<String>,
    /// Ordered and optional; an empty list is valid.
    #[serde(default)]
    pub job_titles: Vec<String>,
    pub locations: AHashSet<String>,
    pub keywords: String,
}

/// How generated outreach should read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessagingSettings {
    pub company_description: String,
    pub message_tone: MessageTone,
    pub connection_request_style: ConnectionRequestStyle,
    pub comment_style: CommentStyle,
}

/// When and how aggressively the automation runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionSettings {
    pub runs_per_day: Option<u8>,
    pub prospects_per_run: Option<u8>,
    pub working_hours: WorkingHours,
    pub enable_weekends: bool,
}

/// A daily execution window in a named IANA timezone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkingHours {
    pub start: Option<NaiveTime>,
    pub end: Option<NaiveTime>,
    /// IANA zone name, e.g. `"Europe/Berlin"`.
    pub timezone: String,
}

impl Default for WorkingHours {
    fn default() -> Self {
        Self {
            start: None,
            end: None,
            timezone: "UTC".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageTone {
    #[default]
    Professional,
    Casual,
    Friendly,
    Consultative,
    Direct,
    Conversational,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConnectionRequestStyle {
    #[default]
    #[serde(rename = "Value-First")]
    ValueFirst,
    #[serde(rename = "Common Interest")]
    CommonInterest,
    #[serde(rename = "Mutual Connection")]
    MutualConnection,
    #[serde(rename = "Industry Focus")]
    IndustryFocus,
    #[serde(rename = "Direct Introduction")]
    DirectIntroduction,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommentStyle {
    #[default]
    #[serde(rename = "Add Insights")]
    AddInsights,
    #[serde(rename = "Ask Questions")]
    AskQuestions,
    #[serde(rename = "Share Experience")]
    ShareExperience,
    #[serde(rename = "Show Support")]
    ShowSupport,
    #[serde(rename = "Provide Value")]
    ProvideValue,
}

/// Inclusive bounds enforced by the execution-step validator.
pub const RUNS_PER_DAY_RANGE: (u8, u8) = (1, 4);
pub const PROSPECTS_PER_RUN_RANGE: (u8, u8) = (5, 15);
