//! Interactive ledger flows
//!
//! Each flow selects a month, checks whether it holds a budget, then creates,
//! views, updates or deletes one column of the user's sheet. Every flow ends
//! with a "repeat for another month?" question and loops until it is declined
//! or the month selection returns to the main menu.

use std::io::{BufRead, Write};

use crate::config::OverwritePolicy;
use crate::display::{format_ledger, format_title};
use crate::error::GuardianResult;
use crate::models::{Month, MonthLedger, MonthStatus, RecordKind, UserRecord};
use crate::services::LedgerService;
use crate::storage::LedgerStore;

use super::prompt::Console;

/// Ledger flows for one logged-in user
pub struct LedgerFlows<'a, 'c, S: LedgerStore + ?Sized, R, W> {
    ledger: LedgerService<'a, S>,
    console: &'c mut Console<R, W>,
    policy: OverwritePolicy,
}

impl<'a, 'c, S, R, W> LedgerFlows<'a, 'c, S, R, W>
where
    S: LedgerStore + ?Sized,
    R: BufRead,
    W: Write,
{
    /// Create the flows for a user
    pub fn new(
        store: &'a mut S,
        user: &UserRecord,
        console: &'c mut Console<R, W>,
        policy: OverwritePolicy,
    ) -> GuardianResult<Self> {
        Ok(Self {
            ledger: LedgerService::new(store, user)?,
            console,
            policy,
        })
    }

    /// Create a new budget from an income figure
    pub fn new_budget(&mut self) -> GuardianResult<()> {
        self.title("Create New Budget")?;
        while let Some(month) = self.select_month()? {
            self.create(month)?;
            if !self.console.confirm("\nWould you like to create a new budget? y/n\n")? {
                break;
            }
        }
        Ok(())
    }

    /// Show a month's budget or transactions
    pub fn view(&mut self, kind: RecordKind) -> GuardianResult<()> {
        let (title, again) = match kind {
            RecordKind::Budget => ("View Budget", "\nWould you like to view a new budget? y/n\n"),
            RecordKind::Expense => ("View Transactions", "\nWould you like to view a new month? y/n\n"),
        };

        self.title(title)?;
        while let Some(month) = self.select_month()? {
            match self.ledger.status(month)? {
                MonthStatus::Empty => self.offer_create(month)?,
                MonthStatus::Populated => {
                    let ledger = self.ledger.load(month)?;
                    self.show(&ledger)?;
                }
            }
            if !self.console.confirm(again)? {
                break;
            }
        }
        Ok(())
    }

    /// Edit a month's budget or transactions category by category
    pub fn update(&mut self, kind: RecordKind) -> GuardianResult<()> {
        let (title, again) = match kind {
            RecordKind::Budget => ("Update Budget", "\nWould you like to update a new budget? y/n\n"),
            RecordKind::Expense => (
                "Add or Update Transaction",
                "\nWould you like to update transactions in a new month? y/n\n",
            ),
        };

        self.title(title)?;
        while let Some(month) = self.select_month()? {
            match self.ledger.status(month)? {
                MonthStatus::Empty => self.offer_create(month)?,
                MonthStatus::Populated => self.edit(month, kind)?,
            }
            if !self.console.confirm(again)? {
                break;
            }
        }
        Ok(())
    }

    /// Clear a month's budget or transactions after confirmation
    pub fn delete(&mut self, kind: RecordKind) -> GuardianResult<()> {
        let title = match kind {
            RecordKind::Budget => "Delete Budget",
            RecordKind::Expense => "Delete Transactions",
        };

        self.title(title)?;
        while let Some(month) = self.select_month()? {
            let label = self.ledger.month_label(month)?;

            if kind == RecordKind::Expense {
                self.console.say(
                    "\nTo update or delete a single transaction\n\
                     please go to add or update transactions in the main menu\n",
                )?;
            }

            let prompt = format!("Confirm deletion of {}'s {}? y/n\n", label, kind.noun());
            if self.console.confirm(&prompt)? {
                self.console
                    .say(&format!("Deleting {}'s {}...", label, kind.noun()))?;
                self.ledger.clear(month, kind)?;
                self.console.say("\nSuccessfully deleted!")?;
            }

            if !self.console.confirm("\nWould you like to delete another month? y/n\n")? {
                break;
            }
        }
        Ok(())
    }

    /// Numbered month list; `None` when the user returns to the menu
    fn select_month(&mut self) -> GuardianResult<Option<Month>> {
        self.console.say("\nPlease select one of the options below:\n")?;
        for month in Month::all() {
            self.console
                .say(&format!("{}. {}", month.number(), month.name()))?;
        }
        self.console.say("0. Return to main menu")?;

        match self.console.select("\nYour selection: ", 12)? {
            0 => Ok(None),
            n => Month::new(n as u32).map(Some),
        }
    }

    fn create(&mut self, month: Month) -> GuardianResult<()> {
        if self.ledger.status(month)? == MonthStatus::Populated {
            self.console.say("\nA budget already exists.\n")?;
            match self.policy {
                OverwritePolicy::Block => {
                    self.console
                        .say("Existing budgets cannot be replaced. Delete it first.")?;
                    return Ok(());
                }
                OverwritePolicy::Confirm => {
                    if !self.console.confirm("Would you like to create a new one? y/n\n")? {
                        return Ok(());
                    }
                }
            }
        }

        let income = self
            .console
            .ask_amount("\nPlease enter the income for the month: ")?;
        let draft = self.ledger.draft(month, income)?;
        self.show(&draft)?;
        self.offer_save(&draft, RecordKind::Budget)
    }

    fn offer_create(&mut self, month: Month) -> GuardianResult<()> {
        self.console.say("\nThis budget is empty.\n")?;
        if self.console.confirm("Would you like to create a new one? y/n\n")? {
            self.create(month)?;
        }
        Ok(())
    }

    fn edit(&mut self, month: Month, kind: RecordKind) -> GuardianResult<()> {
        let mut ledger = self.ledger.load(month)?;
        self.show(&ledger)?;

        let categories = ledger.rows.len();
        loop {
            let selection = self.console.select(
                "\nPlease select a category to update,\nor select 0 to finish updating:\n",
                categories,
            )?;
            if selection == 0 {
                break;
            }

            let value = self.console.ask_amount("\nPlease enter a value:\n")?;
            ledger.set(selection, kind, value);
            self.show(&ledger)?;
        }

        self.offer_save(&ledger, kind)
    }

    fn offer_save(&mut self, ledger: &MonthLedger, kind: RecordKind) -> GuardianResult<()> {
        if self.console.confirm("\nWould you like to save? y/n ")? {
            self.console.say("\nSaving...")?;
            self.ledger.save(ledger, kind)?;
            self.console.say("\nSuccessfully saved!")?;
        } else {
            self.console.say("\nNot saved.")?;
        }
        Ok(())
    }

    fn show(&mut self, ledger: &MonthLedger) -> GuardianResult<()> {
        self.console.say(&format_ledger(ledger))
    }

    fn title(&mut self, title: &str) -> GuardianResult<()> {
        self.console.say(&format_title(title))
    }
}
