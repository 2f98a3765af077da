//! User types and page names.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::AuthError;

/// Landing page.
pub const INDEX_PAGE: &str = "index.html";
/// Page shown after a table is chosen.
pub const MENU_PAGE: &str = "menu.html";
pub const TABLE_SELECTION_PAGE: &str = "table-selection.html";
pub const KITCHEN_DASHBOARD: &str = "kitchen-dashboard.html";
pub const ADMIN_DASHBOARD: &str = "admin-dashboard.html";

/// Who is using the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    /// Diner ordering at a table.
    #[default]
    Customer,
    /// Kitchen staff.
    Kitchen,
    Admin,
}

impl UserType {
    pub const ALL: [UserType; 3] = [UserType::Customer, UserType::Kitchen, UserType::Admin];

    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::Customer => "customer",
            UserType::Kitchen => "kitchen",
            UserType::Admin => "admin",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            UserType::Customer => "Customer",
            UserType::Kitchen => "Kitchen",
            UserType::Admin => "Admin",
        }
    }

    /// Page to open after logging in.
    pub fn landing_page(&self) -> &'static str {
        match self {
            UserType::Customer => TABLE_SELECTION_PAGE,
            UserType::Kitchen => KITCHEN_DASHBOARD,
            UserType::Admin => ADMIN_DASHBOARD,
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserType {
    type Err = AuthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UserType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| AuthError::InvalidUserType(s.to_string()))
    }
}

/// The logged-in session as read back from storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrentUser {
    /// `None` if the stored user type is missing or unrecognised.
    pub user_type: Option<UserType>,
    pub login_time: Option<DateTime<Utc>>,
    pub table: Option<u32>,
}
