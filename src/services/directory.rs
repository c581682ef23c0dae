//! User directory service
//!
//! Looks up and registers users in the `users` sheet. Registering a user also
//! gives them a personal sheet copied from the blank sheet.

use crate::error::{GuardianError, GuardianResult};
use crate::models::{DisplayName, UserRecord, Username};
use crate::storage::{Workbook, BLANK_SHEET, USERS_SHEET};

const ID_COLUMN: usize = 0;
const USERNAME_COLUMN: usize = 1;
const DISPLAY_NAME_COLUMN: usize = 2;

/// Service for the user directory
pub struct UserDirectory<'a, W: Workbook + ?Sized> {
    workbook: &'a mut W,
}

impl<'a, W: Workbook + ?Sized> UserDirectory<'a, W> {
    /// Create a new directory service
    pub fn new(workbook: &'a mut W) -> Self {
        Self { workbook }
    }

    /// All registered users, in sheet order
    pub fn list(&self) -> GuardianResult<Vec<UserRecord>> {
        self.workbook
            .read_rows(USERS_SHEET)?
            .iter()
            .enumerate()
            .skip(1)
            .filter(|(_, row)| row.iter().any(|cell| !cell.trim().is_empty()))
            .map(|(index, row)| decode_user(index, row))
            .collect()
    }

    /// Find a user by exact username
    pub fn find(&self, username: &Username) -> GuardianResult<Option<UserRecord>> {
        // Row 0 is the header, so "username" itself can still be registered
        self.workbook
            .read_rows(USERS_SHEET)?
            .iter()
            .enumerate()
            .skip(1)
            .find(|(_, row)| {
                row.get(USERNAME_COLUMN).map(|c| c.trim()) == Some(username.as_str())
            })
            .map(|(index, row)| decode_user(index, row))
            .transpose()
    }

    /// Get a user by username, failing when absent
    pub fn get(&self, username: &Username) -> GuardianResult<UserRecord> {
        self.find(username)?
            .ok_or_else(|| GuardianError::user_not_found(username.as_str()))
    }

    /// Register a new user and create their sheet
    pub fn create(
        &mut self,
        username: Username,
        display_name: DisplayName,
    ) -> GuardianResult<UserRecord> {
        if self.find(&username)?.is_some() {
            return Err(GuardianError::Duplicate {
                entity_type: "User",
                identifier: username.to_string(),
            });
        }

        let id = self.list()?.iter().map(|u| u.id).max().unwrap_or(0) + 1;
        let user = UserRecord {
            id,
            username,
            display_name,
        };

        self.workbook.duplicate_sheet(BLANK_SHEET, &user.sheet_name())?;
        self.workbook.append_row(
            USERS_SHEET,
            vec![
                user.id.to_string(),
                user.username.to_string(),
                user.display_name.to_string(),
            ],
        )?;

        tracing::info!(id = user.id, username = %user.username, "user registered");
        Ok(user)
    }
}

fn decode_user(index: usize, row: &[String]) -> GuardianResult<UserRecord> {
    let cell = |column: usize| row.get(column).map(|c| c.trim()).unwrap_or_default();
    let malformed = |what: String| {
        GuardianError::Storage(format!("Users row {}: {}", index + 1, what))
    };

    let id = cell(ID_COLUMN)
        .parse::<u32>()
        .map_err(|_| malformed(format!("invalid id '{}'", cell(ID_COLUMN))))?;
    let username = Username::parse(cell(USERNAME_COLUMN)).map_err(|e| malformed(e.to_string()))?;
    let display_name =
        DisplayName::parse(cell(DISPLAY_NAME_COLUMN)).map_err(|e| malformed(e.to_string()))?;

    Ok(UserRecord {
        id,
        username,
        display_name,
    })
}
