//! User directory records
//!
//! A user is identified by a numeric id (which is also the name of the
//! user's sheet), a unique username and a display name.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Validated username: 5 to 10 ASCII letters and digits
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Username(String);

impl Username {
    pub const MIN_LEN: usize = 5;
    pub const MAX_LEN: usize = 10;

    /// Validate and wrap a username
    pub fn parse(input: &str) -> Result<Self, UserValidationError> {
        if input.is_empty() || !input.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(UserValidationError::UsernameCharacters);
        }

        let len = input.chars().count();
        if !(Self::MIN_LEN..=Self::MAX_LEN).contains(&len) {
            return Err(UserValidationError::UsernameLength(len));
        }

        Ok(Self(input.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validated display name: letters and spaces, not blank
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DisplayName(String);

impl DisplayName {
    /// Validate and wrap a display name
    pub fn parse(input: &str) -> Result<Self, UserValidationError> {
        if !input.chars().all(|c| c.is_alphabetic() || c.is_whitespace()) {
            return Err(UserValidationError::NameCharacters);
        }

        if input.trim().is_empty() {
            return Err(UserValidationError::EmptyName);
        }

        Ok(Self(input.trim().to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Name with each word capitalised ("ada lovelace" -> "Ada Lovelace")
    pub fn titled(&self) -> String {
        self.0
            .split_whitespace()
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first
                        .to_uppercase()
                        .chain(chars.flat_map(char::to_lowercase))
                        .collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A row of the user directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Unique id, also the name of the user's sheet
    pub id: u32,
    pub username: Username,
    pub display_name: DisplayName,
}

impl UserRecord {
    /// Name of the sheet holding this user's ledgers
    pub fn sheet_name(&self) -> String {
        self.id.to_string()
    }
}

/// Validation errors for user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    UsernameCharacters,
    UsernameLength(usize),
    NameCharacters,
    EmptyName,
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UsernameCharacters => {
                write!(f, "You must only use letters and or numbers for your username.")
            }
            Self::UsernameLength(_) => {
                write!(f, "Your username must be between 5 and 10 characters long.")
            }
            Self::NameCharacters => write!(f, "You must only use letters and spaces."),
            Self::EmptyName => write!(f, "This field cannot be empty."),
        }
    }
}

impl std::error::Error for UserValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_rules() {
        assert!(Username::parse("alice").is_ok());
        assert!(Username::parse("Bob123456Z").is_ok());
        assert_eq!(
            Username::parse("abcd"),
            Err(UserValidationError::UsernameLength(4))
        );
        assert_eq!(
            Username::parse("abcdefghijk"),
            Err(UserValidationError::UsernameLength(11))
        );
        assert_eq!(
            Username::parse("ali ce"),
            Err(UserValidationError::UsernameCharacters)
        );
        assert_eq!(Username::parse(""), Err(UserValidationError::UsernameCharacters));
        assert_eq!(
            Username::parse("alicé1"),
            Err(UserValidationError::UsernameCharacters)
        );
    }

    #[test]
    fn test_display_name_rules() {
        assert_eq!(DisplayName::parse("Ada Lovelace").unwrap().as_str(), "Ada Lovelace");
        assert_eq!(DisplayName::parse("   "), Err(UserValidationError::EmptyName));
        assert_eq!(DisplayName::parse(""), Err(UserValidationError::EmptyName));
        assert_eq!(
            DisplayName::parse("R2 D2"),
            Err(UserValidationError::NameCharacters)
        );
    }

    #[test]
    fn test_titled() {
        let name = DisplayName::parse("ada  LOVELACE").unwrap();
        assert_eq!(name.titled(), "Ada Lovelace");
    }

    #[test]
    fn test_sheet_name_is_id() {
        let user = UserRecord {
            id: 7,
            username: Username::parse("alice").unwrap(),
            display_name: DisplayName::parse("Alice").unwrap(),
        };
        assert_eq!(user.sheet_name(), "7");
    }
}
