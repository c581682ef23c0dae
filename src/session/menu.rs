//! Main menu and session loop

use std::io::{BufRead, Write};

use crate::config::Settings;
use crate::display::ledger::RULE_WIDTH;
use crate::error::GuardianResult;
use crate::models::RecordKind;
use crate::storage::Workbook;

use super::flows::LedgerFlows;
use super::login::login;
use super::prompt::Console;

/// Options of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    NewBudget,
    ViewBudget,
    UpdateBudget,
    DeleteBudget,
    UpdateTransactions,
    ViewTransactions,
    DeleteTransactions,
    LogOut,
}

impl MenuOption {
    /// All options in menu order
    pub const ALL: [MenuOption; 8] = [
        Self::NewBudget,
        Self::ViewBudget,
        Self::UpdateBudget,
        Self::DeleteBudget,
        Self::UpdateTransactions,
        Self::ViewTransactions,
        Self::DeleteTransactions,
        Self::LogOut,
    ];

    /// Parse a menu selection ("1" to "8")
    pub fn from_selection(selection: &str) -> Option<Self> {
        let index = selection.trim().parse::<usize>().ok()?;
        Self::ALL.get(index.checked_sub(1)?).copied()
    }

    /// Menu label
    pub fn label(&self) -> &'static str {
        match self {
            Self::NewBudget => "New budget",
            Self::ViewBudget => "View budget",
            Self::UpdateBudget => "Update budget",
            Self::DeleteBudget => "Delete budget",
            Self::UpdateTransactions => "Add or update transaction",
            Self::ViewTransactions => "View transactions",
            Self::DeleteTransactions => "Delete transactions",
            Self::LogOut => "Log out",
        }
    }
}

/// Run an interactive session until the user logs out
pub fn run_session<Wb, R, W>(
    workbook: &mut Wb,
    settings: &Settings,
    console: &mut Console<R, W>,
) -> GuardianResult<()>
where
    Wb: Workbook + ?Sized,
    R: BufRead,
    W: Write,
{
    welcome(console)?;

    let user = login(console, workbook)?;
    let name = user.display_name.titled();
    tracing::info!(id = user.id, "session started");

    console.say(&"-".repeat(RULE_WIDTH))?;
    console.say(&format!("\nWelcome {}!\n", name))?;

    loop {
        console.say(&"-".repeat(RULE_WIDTH))?;
        console.say("\nPlease select one of the options below:\n")?;
        for (index, option) in MenuOption::ALL.iter().enumerate() {
            console.say(&format!("{}. {}", index + 1, option.label()))?;
        }

        let answer = console.ask("\nYour selection: ")?;
        let Some(option) = MenuOption::from_selection(&answer) else {
            console.say("Invalid option")?;
            continue;
        };

        if option == MenuOption::LogOut {
            console.say(&format!(
                "\nThank you for using Finance Guardian.\nGood bye {}!\n",
                name
            ))?;
            tracing::info!(id = user.id, "session ended");
            return Ok(());
        }

        let mut flows =
            LedgerFlows::new(&mut *workbook, &user, &mut *console, settings.overwrite_policy)?;
        match option {
            MenuOption::NewBudget => flows.new_budget()?,
            MenuOption::ViewBudget => flows.view(RecordKind::Budget)?,
            MenuOption::UpdateBudget => flows.update(RecordKind::Budget)?,
            MenuOption::DeleteBudget => flows.delete(RecordKind::Budget)?,
            MenuOption::UpdateTransactions => flows.update(RecordKind::Expense)?,
            MenuOption::ViewTransactions => flows.view(RecordKind::Expense)?,
            MenuOption::DeleteTransactions => flows.delete(RecordKind::Expense)?,
            MenuOption::LogOut => {}
        }
    }
}

fn welcome<R: BufRead, W: Write>(console: &mut Console<R, W>) -> GuardianResult<()> {
    console.say(&"_".repeat(70))?;
    console.say("\n  FINANCE GUARDIAN\n")?;
    console.say("\n Welcome to Finance Guardian!\n")?;
    console.say(" Your personal budgeting app. \n")?;
    console.say(&"-".repeat(70))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OverwritePolicy;
    use crate::error::GuardianError;
    use crate::storage::{initialize_workbook, MemoryWorkbook};
    use std::io::Cursor;

    fn session(wb: &mut MemoryWorkbook, input: &str) -> (GuardianResult<()>, String) {
        let mut console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        let result = run_session(wb, &Settings::default(), &mut console);
        (result, String::from_utf8(console.into_output()).unwrap())
    }

    fn workbook() -> MemoryWorkbook {
        let mut wb = MemoryWorkbook::new();
        initialize_workbook(&mut wb).unwrap();
        wb
    }

    #[test]
    fn test_menu_selection() {
        assert_eq!(MenuOption::from_selection("1"), Some(MenuOption::NewBudget));
        assert_eq!(MenuOption::from_selection(" 8 "), Some(MenuOption::LogOut));
        assert_eq!(MenuOption::from_selection("0"), None);
        assert_eq!(MenuOption::from_selection("9"), None);
        assert_eq!(MenuOption::from_selection("x"), None);
    }

    #[test]
    fn test_full_session() {
        let mut wb = workbook();
        let input = "alice\ny\nada lovelace\n\
                     9\n\
                     1\n1\n1000\ny\nn\n\
                     2\n1\nn\n\
                     8\n";
        let (result, out) = session(&mut wb, input);
        result.unwrap();

        assert!(out.contains("Welcome to Finance Guardian!"));
        assert!(out.contains("Welcome Ada Lovelace!"));
        assert!(out.contains("Invalid option"));
        assert!(out.contains("Successfully saved!"));
        assert!(out.contains("Good bye Ada Lovelace!"));
        assert_eq!(wb.column_values("1", 1).unwrap()[1], "300.00");
    }

    #[test]
    fn test_return_to_menu_from_month_selection() {
        let mut wb = workbook();
        let (result, out) = session(&mut wb, "alice\ny\nAlice\n4\n0\n8\n");
        result.unwrap();
        assert!(out.contains("Delete Budget"));
        assert_eq!(out.matches("5. Add or update transaction").count(), 2);
    }

    #[test]
    fn test_input_closed_mid_session() {
        let mut wb = workbook();
        let (result, _) = session(&mut wb, "alice\ny\nAlice\n1\n");
        assert!(matches!(result, Err(GuardianError::InputClosed)));
    }

    #[test]
    fn test_block_policy_from_settings() {
        let mut wb = workbook();
        session(&mut wb, "alice\ny\nAlice\n1\n1\n1000\ny\nn\n8\n").0.unwrap();

        let settings = Settings {
            overwrite_policy: OverwritePolicy::Block,
            ..Settings::default()
        };
        let mut console = Console::new(
            Cursor::new(b"alice\n1\n1\nn\n8\n".to_vec()),
            Vec::new(),
        );
        run_session(&mut wb, &settings, &mut console).unwrap();
        let out = String::from_utf8(console.into_output()).unwrap();
        assert!(out.contains("cannot be replaced"));
    }
}
