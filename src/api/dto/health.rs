//! Health check payloads.

use serde::Serialize;

/// Overall service state reported by `GET /health`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Healthy,
    Degraded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentState {
    Ok,
    Error,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: ServiceStatus,
    pub version: &'static str,
    pub checks: HealthChecks,
}

#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub store: ComponentCheck,
    pub rate_limiter: ComponentCheck,
}

/// Outcome of probing one component, with a human-readable note.
#[derive(Debug, Serialize)]
pub struct ComponentCheck {
    pub status: ComponentState,
    pub message: String,
}

impl ComponentCheck {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            status: ComponentState::Ok,
            message: message.into(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            status: ComponentState::Error,
            message: message.into(),
        }
    }
}

impl HealthChecks {
    /// Only the store can degrade the service; the limiter is informational.
    pub fn status(&self) -> ServiceStatus {
        match self.store.status {
            ComponentState::Ok => ServiceStatus::Healthy,
            ComponentState::Error => ServiceStatus::Degraded,
        }
    }
}
