use serde::{Deserialize, Serialize};

/// A subscription tier determining feature and quota limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Plan {
    Free,
    Trial,
    Base,
    Pro,
    Plus,
}

/// Hard cap on total flow starts for users on the trial plan.
pub const TRIAL_EXECUTION_CAP: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Linkedin,
    Twitter,
    Email,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Csv,
    Xlsx,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupportTier {
    Community,
    Email,
    Priority,
    Dedicated,
}

/// The immutable limit set attached to a plan.
///
/// Defined once at compile time and never mutated. Only the trial
/// execution cap is enforced client-side as a hard gate; the numeric
/// limits here drive advisory headroom checks, with authoritative
/// enforcement living server-side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanLimits {
    pub max_concurrent_automations: u32,
    pub max_monthly_profiles: u32,
    pub smart_flows: u32,
    pub flows_enabled: bool,
    pub platforms: &'static [Platform],
    pub export_formats: &'static [ExportFormat],
    pub support: SupportTier,
    pub ai_personalization: bool,
    pub trial_days: Option<u16>,
    pub team_users: Option<u16>,
    pub white_label_option: bool,
}

impl Plan {
    /// The static limit table, keyed by plan.
    pub const fn limits(self) -> PlanLimits {
        match self {
            Plan::Free => PlanLimits {
                max_concurrent_automations: 1,
                max_monthly_profiles: 50,
                smart_flows: 1,
                flows_enabled: false,
                platforms: &[Platform::Linkedin],
                export_formats: &[ExportFormat::Csv],
                support: SupportTier::Community,
                ai_personalization: false,
                trial_days: None,
                team_users: None,
                white_label_option: false,
            },
            Plan::Trial => PlanLimits {
                max_concurrent_automations: 2,
                max_monthly_profiles: 100,
                smart_flows: 2,
                flows_enabled: true,
                platforms: &[Platform::Linkedin],
                export_formats: &[ExportFormat::Csv],
                support: SupportTier::Email,
                ai_personalization: true,
                trial_days: Some(7),
                team_users: None,
                white_label_option: false,
            },
            Plan::Base => PlanLimits {
                max_concurrent_automations: 3,
                max_monthly_profiles: 500,
                smart_flows: 5,
                flows_enabled: true,
                platforms: &[Platform::Linkedin, Platform::Email],
                export_formats: &[ExportFormat::Csv, ExportFormat::Xlsx],
                support: SupportTier::Email,
                ai_personalization: true,
                trial_days: None,
                team_users: Some(1),
                white_label_option: false,
            },
            Plan::Pro => PlanLimits {
                max_concurrent_automations: 10,
                max_monthly_profiles: 2_000,
                smart_flows: 20,
                flows_enabled: true,
                platforms: &[Platform::Linkedin, Platform::Twitter, Platform::Email],
                export_formats: &[ExportFormat::Csv, ExportFormat::Xlsx, ExportFormat::Json],
                support: SupportTier::Priority,
                ai_personalization: true,
                trial_days: None,
                team_users: Some(5),
                white_label_option: false,
            },
            Plan::Plus => PlanLimits {
                max_concurrent_automations: 25,
                max_monthly_profiles: 10_000,
                smart_flows: 100,
                flows_enabled: true,
                platforms: &[Platform::Linkedin, Platform::Twitter, Platform::Email],
                export_formats: &[ExportFormat::Csv, ExportFormat::Xlsx, ExportFormat::Json],
                support: SupportTier::Dedicated,
                ai_personalization: true,
                trial_days: None,
                team_users: Some(25),
                white_label_option: true,
            },
        }
    }
}
