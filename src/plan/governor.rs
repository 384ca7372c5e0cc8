use tracing::warn;

use super::limits::{Plan, TRIAL_EXECUTION_CAP};

/// Pass/fail decision for a submission attempt.
///
/// Verdicts are plain values; deriving one never fails and never touches
/// storage or the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitVerdict {
    pub allowed: bool,
    pub refusal: Option<QuotaRefusal>,
}

impl SubmitVerdict {
    const ALLOWED: Self = Self {
        allowed: true,
        refusal: None,
    };
}

/// Why a submission was refused on quota grounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuotaRefusal {
    /// The trial plan's hard cap on total executions was reached.
    TrialLimitReached,
}

/// Decides whether a user may hand a configuration to the execution
/// service.
///
/// Only the trial execution cap is a hard client-side gate. Every other
/// plan submits freely here; concurrent-automation and monthly-profile
/// limits are enforced server-side, with [`check_automation_limit`] and
/// [`check_profile_limit`] providing advisory headroom for UI warnings.
pub fn can_submit(plan: Plan, executions_used: u32) -> SubmitVerdict {
    if plan != Plan::Trial {
        return SubmitVerdict::ALLOWED;
    }
    if executions_used < TRIAL_EXECUTION_CAP {
        SubmitVerdict::ALLOWED
    } else {
        warn!(executions_used, cap = TRIAL_EXECUTION_CAP, "trial execution cap reached");
        SubmitVerdict {
            allowed: false,
            refusal: Some(QuotaRefusal::TrialLimitReached),
        }
    }
}

/// Advisory headroom against the plan's concurrent-automation limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutomationHeadroom {
    pub can_create: bool,
    pub limit: u32,
    pub remaining: u32,
    pub is_near_limit: bool,
}

/// Advisory headroom against the plan's monthly-profile limit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileHeadroom {
    pub within_limit: bool,
    pub limit: u32,
    pub remaining: u32,
    pub usage_percentage: f64,
}

/// How close the user is to the concurrent-automation limit.
/// `is_near_limit` trips at 80% of the plan's limit.
pub fn check_automation_limit(current_count: u32, plan: Plan) -> AutomationHeadroom {
    let limit = plan.limits().max_concurrent_automations;
    AutomationHeadroom {
        can_create: current_count < limit,
        limit,
        remaining: limit.saturating_sub(current_count),
        is_near_limit: current_count as f64 >= 0.8 * limit as f64,
    }
}

/// How much of the monthly profile allowance is consumed.
pub fn check_profile_limit(current_usage: u32, plan: Plan) -> ProfileHeadroom {
    let limit = plan.limits().max_monthly_profiles;
    ProfileHeadroom {
        within_limit: current_usage < limit,
        limit,
        remaining: limit.saturating_sub(current_usage),
        usage_percentage: current_usage as f64 / limit as f64 * 100.0,
    }
}
