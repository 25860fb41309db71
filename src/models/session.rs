//! Caller identity carried explicitly in tool requests.
//!
//! The gateway interceptor decodes the caller's token and injects a `session`
//! argument into tool calls that need it.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::models::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    Analyst,
    WirelessHunter,
}

impl Role {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Analyst => "analyst",
            Self::WirelessHunter => "wireless-hunter",
        }
    }
}

/// Roles allowed to start captures and upload PCAP files
pub const SCAN_ROLES: [Role; 3] = [Role::Admin, Role::Analyst, Role::WirelessHunter];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub user_id: String,
    pub user_name: String,
    #[serde(default)]
    #[schemars(description = "Role names, e.g. \"admin\", \"analyst\", \"wireless-hunter\"")]
    pub roles: Vec<String>,
}

impl Session {
    #[must_use]
    pub fn has_role(&self, role: Role) -> bool {
        self.roles
            .iter()
            .any(|r| r.trim().eq_ignore_ascii_case(role.as_str()))
    }

    #[must_use]
    pub fn can_run_scans(&self) -> bool {
        SCAN_ROLES.iter().any(|role| self.has_role(*role))
    }
}

/// Returns the session if it grants one of [`SCAN_ROLES`].
///
/// # Errors
///
/// Returns [`AppError::PermissionDenied`] when no session was supplied or the
/// session lacks a scanning role.
pub fn require_scan_permission<'a>(
    session: Option<&'a Session>,
    action: &str,
) -> Result<&'a Session, AppError> {
    let session = session.ok_or_else(|| {
        AppError::PermissionDenied(format!("no authenticated session; cannot {action}"))
    })?;

    if session.can_run_scans() {
        Ok(session)
    } else {
        Err(AppError::PermissionDenied(format!(
            "user {} does not have the required role to {action}",
            session.user_id
        )))
    }
}
