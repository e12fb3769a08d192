//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Query parameters for list endpoints that support an `include_inactive` flag.
#[derive(Debug, Deserialize)]
pub struct IncludeInactiveParams {
    #[serde(default)]
    pub include_inactive: bool,
}

/// `?confirm=true` on place endpoints: displace the current occupant of the
/// requested order instead of reporting a conflict.
#[derive(Debug, Deserialize)]
pub struct ConfirmParams {
    #[serde(default)]
    pub confirm: bool,
}

/// Partition selector for scope-generic endpoints.
///
/// `variant` selects a featured-item ordering (`feature` or `tile`);
/// `section_id` selects the links of one menu section.
#[derive(Debug, Default, Deserialize)]
pub struct ScopeParams {
    pub variant: Option<String>,
    pub section_id: Option<i64>,
}
