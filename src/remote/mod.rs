//! Contracts for the remote collaborators this crate consumes.
//!
//! The crate owns no wire format; templates, industry lookups, and the
//! flow-start call are reached through these traits and implemented
//! elsewhere. The one side-effecting call is [`FlowLauncher::start_flow`].

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::FlowConfig;
use crate::error::{LaunchError, SourceError};

/// A predefined automation blueprint exposing default configuration and
/// stage metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: String,
    pub display_name: String,
    /// Pre-populates the wizard when present.
    pub default_config: Option<FlowConfig>,
    #[serde(default)]
    pub stages: Vec<String>,
    pub max_runs_per_day: u8,
}

/// An industry selectable in the targeting step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Industry {
    pub name: String,
}

/// The created flow, as acknowledged by the execution service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowHandle {
    pub id: String,
    pub name: String,
}

/// Read-only access to templates and industry lookups.
#[async_trait]
pub trait TemplateSource: Send + Sync {
    async fn fetch_template(&self, template_id: &str) -> Result<Template, SourceError>;

    async fn fetch_industries(&self) -> Result<Vec<Industry>, SourceError>;

    async fn search_industries(&self, query: &str) -> Result<Vec<Industry>, SourceError>;
}

/// The single side-effecting remote call: hand a finished configuration to
/// the execution service.
#[async_trait]
pub trait FlowLauncher: Send + Sync {
    async fn start_flow(
        &self,
        template_id: &str,
        name: &str,
        config: &FlowConfig,
    ) -> Result<FlowHandle, LaunchError>;
}

/// Shipped selector entries used when the industry lookup is unavailable.
pub const FALLBACK_INDUSTRIES: [&str; 8] = [
    "Technology",
    "Finance",
    "Healthcare",
    "Education",
    "Retail",
    "Manufacturing",
    "Real Estate",
    "Consulting",
];

/// Fetches the industry list, falling back to the built-in static list on
/// failure so wizard setup is never blocked by the lookup service.
pub async fn load_industries(source: &impl TemplateSource) -> Vec<Industry> {
    match source.fetch_industries().await {
        Ok(industries) if !industries.is_empty() => industries,
        Ok(_) => fallback_industries(),
        Err(e) => {
            warn!(error = %e, "industry lookup unavailable, using built-in list");
            fallback_industries()
        }
    }
}

fn fallback_industries() -> Vec<Industry> {
    FALLBACK_INDUSTRIES
        .iter()
        .map(|name| Industry {
            name: (*name).to_string(),
        })
        .collect()
}
