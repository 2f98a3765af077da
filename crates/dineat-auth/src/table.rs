//! Table selection.

use dineat_storage::keys;

use crate::session::{now_rfc3339, Redirect, SessionManager};
use crate::user::MENU_PAGE;
use crate::AuthError;

impl SessionManager<'_> {
    /// Record the table the customer is sitting at.
    pub fn select_table(&self, table: u32) -> Result<Redirect, AuthError> {
        if table < 1 {
            return Err(AuthError::InvalidTable);
        }

        self.storage.set(keys::SELECTED_TABLE, &table.to_string())?;
        self.storage.set(keys::TABLE_SELECTION_TIME, &now_rfc3339())?;

        tracing::info!(table, "table selected");
        self.notifier
            .success(&format!("Table {} selected successfully!", table));

        Ok(self.redirect(MENU_PAGE))
    }

    /// The selected table. Unparseable values read as no selection.
    pub fn selected_table(&self) -> Result<Option<u32>, AuthError> {
        let table = self
            .storage
            .get(keys::SELECTED_TABLE)?
            .and_then(|t| t.trim().parse::<u32>().ok())
            .filter(|t| *t >= 1);
        Ok(table)
    }
}
