//! Simulated authentication for the DineAt ordering client.
//!
//! Provides login and logout for customers, kitchen staff and admins,
//! dashboard access checks, and table selection. Nothing here is secure:
//! the session is a handful of keys in client storage.
//!
//! # Example
//!
//! ```
//! use dineat_auth::{SessionManager, UserType};
//! use dineat_commerce::notify::NotificationCenter;
//! use dineat_storage::MemoryStore;
//!
//! let storage = MemoryStore::new();
//! let notifier = NotificationCenter::new();
//! let session = SessionManager::new(&storage, &notifier);
//!
//! let redirect = session.select_table(4).unwrap();
//! assert_eq!(redirect.page, "menu.html");
//! assert_eq!(session.selected_table().unwrap(), Some(4));
//! assert!(session.check_access("admin-dashboard.html").is_allowed());
//! ```

mod access;
mod error;
mod session;
mod table;
mod user;

pub use access::AccessDecision;
pub use error::AuthError;
pub use session::{
    LoginForm, Redirect, SessionManager, DEFAULT_LOGIN_DELAY, DEFAULT_REDIRECT_DELAY,
};
pub use user::{
    CurrentUser, UserType, ADMIN_DASHBOARD, INDEX_PAGE, KITCHEN_DASHBOARD, MENU_PAGE,
    TABLE_SELECTION_PAGE,
};
