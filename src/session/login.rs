//! Login
//!
//! Resolves the person at the keyboard to a user record, offering to register
//! unknown usernames.

use std::io::{BufRead, Write};

use crate::error::GuardianResult;
use crate::models::{DisplayName, UserRecord, Username};
use crate::services::UserDirectory;
use crate::storage::Workbook;

use super::prompt::Console;

/// Ask for a username until it resolves to an existing or new user
pub fn login<R, W, Wb>(console: &mut Console<R, W>, workbook: &mut Wb) -> GuardianResult<UserRecord>
where
    R: BufRead,
    W: Write,
    Wb: Workbook + ?Sized,
{
    loop {
        let username = ask_username(console)?;
        let mut directory = UserDirectory::new(&mut *workbook);

        if let Some(user) = directory.find(&username)? {
            console.say("User data successfully loaded\n")?;
            return Ok(user);
        }

        console.say(&format!("Username: {} not found!\n", username))?;
        if console.confirm("Would you like to create a new username? y/n\n")? {
            let display_name = ask_display_name(console)?;
            console.say("Creating user data...")?;
            let user = directory.create(username, display_name)?;
            console.say("User data successfully created.\n")?;
            console.say("User data successfully loaded\n")?;
            return Ok(user);
        }
    }
}

fn ask_username<R: BufRead, W: Write>(console: &mut Console<R, W>) -> GuardianResult<Username> {
    loop {
        console.say("\nPlease enter your username to begin.\n")?;
        console.say("You can create a new one by entering it below.")?;
        console.say("It must only contain letters and or numbers")?;
        console.say(&format!(
            "and be {} to {} characters long.\n",
            Username::MIN_LEN,
            Username::MAX_LEN
        ))?;

        let answer = console.ask("Username: ")?;
        match Username::parse(&answer) {
            Ok(username) => {
                console.say("Loading user data...\n")?;
                return Ok(username);
            }
            Err(e) => console.say(&format!("Invalid data: {}\nPlease try again.\n", e))?,
        }
    }
}

fn ask_display_name<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> GuardianResult<DisplayName> {
    loop {
        let answer = console.ask("Please enter your first and last name:\n")?;
        match DisplayName::parse(&answer) {
            Ok(name) => return Ok(name),
            Err(e) => console.say(&format!("Invalid data: {} Please try again.\n", e))?,
        }
    }
}
