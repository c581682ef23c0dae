//! Month ledger display formatting
//!
//! Renders a month's budget and expenses side by side, one numbered row per
//! category, so the same table serves viewing and the update flows.

use crate::models::{MonthLedger, RecordKind};

/// Width of the horizontal rules around section titles
pub const RULE_WIDTH: usize = 75;

const AMOUNT_WIDTH: usize = 12;

/// Format a section title between two rules
pub fn format_title(title: &str) -> String {
    let rule = "-".repeat(RULE_WIDTH);
    format!("{}\n\n{}\n\n{}\n", rule, title, rule)
}

/// Format a month ledger as a table with a totals line
pub fn format_ledger(ledger: &MonthLedger) -> String {
    let mut output = format_title(&format!("{} Monthly Budget", ledger.label));

    let name_width = ledger
        .rows
        .iter()
        .map(|r| r.category.len())
        .max()
        .unwrap_or(0)
        .max("Categories".len());
    let number_width = ledger.rows.len().to_string().len() + 2;

    output.push_str(&format!(
        "{:<nw$}{:<width$}  {:>aw$}  {:>aw$}\n",
        "",
        "Categories",
        "Budget",
        "Expenses",
        nw = number_width,
        width = name_width,
        aw = AMOUNT_WIDTH
    ));
    output.push_str(&format!(
        "{:-<total$}\n",
        "",
        total = number_width + name_width + 2 * (AMOUNT_WIDTH + 2)
    ));

    for (index, row) in ledger.rows.iter().enumerate() {
        output.push_str(&format!(
            "{:<nw$}{:<width$}  {:>aw$}  {:>aw$}\n",
            format!("{}.", index + 1),
            row.category,
            row.budget.to_string(),
            row.expense.to_string(),
            nw = number_width,
            width = name_width,
            aw = AMOUNT_WIDTH
        ));
    }

    output.push_str(&format!(
        "{:-<total$}\n",
        "",
        total = number_width + name_width + 2 * (AMOUNT_WIDTH + 2)
    ));
    output.push_str(&format!(
        "{:<nw$}{:<width$}  {:>aw$}  {:>aw$}\n",
        "",
        "Total",
        ledger.total(RecordKind::Budget).to_string(),
        ledger.total(RecordKind::Expense).to_string(),
        nw = number_width,
        width = name_width,
        aw = AMOUNT_WIDTH
    ));

    if let Some(income) = ledger.income {
        output.push_str(&format!(
            "{:<nw$}{:<width$}  {:>aw$}\n",
            "",
            "Income",
            income.to_string(),
            nw = number_width,
            width = name_width,
            aw = AMOUNT_WIDTH
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Amount, LedgerRow, Month};

    fn ledger() -> MonthLedger {
        let mut ledger = MonthLedger::new(
            Month::new(3).unwrap(),
            "March",
            vec![
                LedgerRow::new("Rent", Amount::from_cents(50_000), Amount::from_cents(45_000)),
                LedgerRow::new("Groceries", Amount::from_cents(30_000), Amount::zero()),
            ],
        );
        ledger.income = Some(Amount::from_cents(100_000));
        ledger
    }

    #[test]
    fn test_format_ledger() {
        let output = format_ledger(&ledger());

        assert!(output.contains("March Monthly Budget"));
        assert!(output.contains("Categories"));
        assert!(output.contains("1. Rent"));
        assert!(output.contains("2. Groceries"));
        assert!(output.contains("450.00"));
        assert!(output.contains("800.00"));
        assert!(output.contains("1000.00"));
    }

    #[test]
    fn test_columns_are_aligned() {
        let output = format_ledger(&ledger());
        let rows: Vec<&str> = output
            .lines()
            .filter(|l| l.starts_with("1.") || l.starts_with("2."))
            .collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].len(), rows[1].len());
    }

    #[test]
    fn test_largest_amounts_total_without_overflow() {
        let max = Amount::from_cents(Amount::MAX_CENTS);
        let rows = (0..12)
            .map(|i| LedgerRow::new(format!("Category{}", i), max, max))
            .collect();
        let ledger = MonthLedger::new(Month::new(1).unwrap(), "January", rows);

        let output = format_ledger(&ledger);
        assert!(output.contains("120000000000000.00"));
    }

    #[test]
    fn test_empty_ledger_has_no_income_line() {
        let ledger = MonthLedger::new(Month::new(1).unwrap(), "January", Vec::new());
        let output = format_ledger(&ledger);
        assert!(output.contains("January Monthly Budget"));
        assert!(!output.contains("Income"));
    }
}
