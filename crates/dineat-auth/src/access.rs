//! Dashboard access control.

use dineat_storage::keys;
use serde::Serialize;

use crate::session::{Redirect, SessionManager};
use crate::user::{UserType, ADMIN_DASHBOARD, KITCHEN_DASHBOARD, TABLE_SELECTION_PAGE};

/// Whether the current page may be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AccessDecision {
    Allowed,
    /// Send the user elsewhere instead.
    Redirect(Redirect),
}

impl AccessDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, AccessDecision::Allowed)
    }
}

impl SessionManager<'_> {
    /// Decide whether `page` may be shown to the current user.
    ///
    /// `page` may be a full path; only its last segment is compared. Only
    /// logged-in users on another role's dashboard are redirected. Storage
    /// errors allow access.
    pub fn check_access(&self, page: &str) -> AccessDecision {
        let page = page.rsplit('/').next().unwrap_or(page);

        let logged_in = match self.is_logged_in() {
            Ok(logged_in) => logged_in,
            Err(e) => {
                tracing::warn!(error = %e, "could not read session, allowing access");
                return AccessDecision::Allowed;
            }
        };
        if !logged_in {
            return AccessDecision::Allowed;
        }

        let user_type = match self.storage.get(keys::USER_TYPE) {
            Ok(value) => value.and_then(|t| t.parse::<UserType>().ok()),
            Err(e) => {
                tracing::warn!(error = %e, "could not read user type, allowing access");
                return AccessDecision::Allowed;
            }
        };

        let target = match (page, user_type) {
            (KITCHEN_DASHBOARD, Some(UserType::Kitchen)) => None,
            (KITCHEN_DASHBOARD, Some(UserType::Admin)) => Some(ADMIN_DASHBOARD),
            (KITCHEN_DASHBOARD, _) => Some(TABLE_SELECTION_PAGE),
            (ADMIN_DASHBOARD, Some(UserType::Admin)) => None,
            (ADMIN_DASHBOARD, Some(UserType::Kitchen)) => Some(KITCHEN_DASHBOARD),
            (ADMIN_DASHBOARD, _) => Some(TABLE_SELECTION_PAGE),
            _ => None,
        };

        match target {
            Some(target) => {
                tracing::debug!(page, redirect = target, "access denied");
                AccessDecision::Redirect(Redirect {
                    page: target,
                    delay: std::time::Duration::ZERO,
                })
            }
            None => AccessDecision::Allowed,
        }
    }
}
