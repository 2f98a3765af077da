//! Simulated login and logout.
//!
//! There is no credential check: any form with its required fields filled
//! in logs the user in as the chosen user type. The session is just a few
//! keys in client storage.

use std::fmt;
use std::time::Duration;

use chrono::{DateTime, SecondsFormat, Utc};
use dineat_commerce::notify::Notifier;
use dineat_commerce::site::{validate_form, FieldKind, FormField};
use dineat_storage::{keys, KeyValueStore, StorageError};
use serde::Serialize;

use crate::user::{CurrentUser, UserType, INDEX_PAGE};
use crate::AuthError;

/// How long the simulated login takes.
pub const DEFAULT_LOGIN_DELAY: Duration = Duration::from_millis(1500);

/// Pause before following a redirect.
pub const DEFAULT_REDIRECT_DELAY: Duration = Duration::from_millis(1000);

/// Keys removed on logout.
const SESSION_KEYS: [&str; 5] = [
    keys::USER_TYPE,
    keys::IS_LOGGED_IN,
    keys::SELECTED_TABLE,
    keys::LOGIN_TIME,
    keys::TABLE_SELECTION_TIME,
];

/// A page to navigate to after a short pause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Redirect {
    pub page: &'static str,
    pub delay: Duration,
}

/// Login form for one user type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginForm {
    pub user_type: UserType,
    pub fields: Vec<FormField>,
}

impl LoginForm {
    pub fn new(user_type: UserType) -> Self {
        Self {
            user_type,
            fields: Vec::new(),
        }
    }

    /// The username and password form every login page uses.
    pub fn with_credentials(
        user_type: UserType,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self::new(user_type)
            .field(
                FormField::required("username", FieldKind::Text, username)
                    .with_placeholder("Username"),
            )
            .field(
                FormField::required("password", FieldKind::Password, password)
                    .with_placeholder("Password"),
            )
    }

    pub fn field(mut self, field: FormField) -> Self {
        self.fields.push(field);
        self
    }
}

/// Session operations over client storage.
pub struct SessionManager<'a> {
    pub(crate) storage: &'a dyn KeyValueStore,
    pub(crate) notifier: &'a dyn Notifier,
    login_delay: Duration,
    pub(crate) redirect_delay: Duration,
}

impl<'a> SessionManager<'a> {
    pub fn new(storage: &'a dyn KeyValueStore, notifier: &'a dyn Notifier) -> Self {
        Self {
            storage,
            notifier,
            login_delay: DEFAULT_LOGIN_DELAY,
            redirect_delay: DEFAULT_REDIRECT_DELAY,
        }
    }

    pub fn with_login_delay(mut self, delay: Duration) -> Self {
        self.login_delay = delay;
        self
    }

    pub fn with_redirect_delay(mut self, delay: Duration) -> Self {
        self.redirect_delay = delay;
        self
    }

    /// Log in with the given form.
    ///
    /// The first failing field is reported and nothing is stored.
    pub async fn login(&self, form: &LoginForm) -> Result<Redirect, AuthError> {
        if let Some(failure) = validate_form(&form.fields).into_iter().next() {
            return Err(AuthError::InvalidForm(failure.error));
        }

        self.notifier.info("Logging in...");
        tokio::time::sleep(self.login_delay).await;

        let user_type = form.user_type;
        self.storage.set(keys::USER_TYPE, user_type.as_str())?;
        self.storage.set(keys::IS_LOGGED_IN, "true")?;
        self.storage.set(keys::LOGIN_TIME, &now_rfc3339())?;

        tracing::info!(user_type = %user_type, "logged in");
        self.notifier.success("Login successful!");

        Ok(self.redirect(user_type.landing_page()))
    }

    /// Clear the session and table selection.
    pub fn logout(&self) -> Result<Redirect, AuthError> {
        for key in SESSION_KEYS {
            self.storage.remove(key)?;
        }

        tracing::info!("logged out");
        self.notifier.success("Logged out successfully");

        Ok(self.redirect(INDEX_PAGE))
    }

    /// The logged-in user, or `None` when nobody is logged in.
    pub fn current_user(&self) -> Result<Option<CurrentUser>, AuthError> {
        if !self.is_logged_in()? {
            return Ok(None);
        }

        let user_type = self
            .storage
            .get(keys::USER_TYPE)?
            .and_then(|t| t.parse::<UserType>().ok());
        let login_time = self
            .storage
            .get(keys::LOGIN_TIME)?
            .and_then(|t| parse_timestamp(&t));

        Ok(Some(CurrentUser {
            user_type,
            login_time,
            table: self.selected_table()?,
        }))
    }

    /// Only the presence of the flag matters.
    pub fn is_logged_in(&self) -> Result<bool, StorageError> {
        self.storage.exists(keys::IS_LOGGED_IN)
    }

    pub(crate) fn redirect(&self, page: &'static str) -> Redirect {
        Redirect {
            page,
            delay: self.redirect_delay,
        }
    }
}

impl fmt::Debug for SessionManager<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionManager")
            .field("login_delay", &self.login_delay)
            .field("redirect_delay", &self.redirect_delay)
            .finish_non_exhaustive()
    }
}

pub(crate) fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub(crate) fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|t| t.with_timezone(&Utc))
}
