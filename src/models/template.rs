//! Category template
//!
//! The template is the shared, ordered list of categories with the share of
//! income each one receives. Its order is the row order of every user sheet.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One category of the template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateCategory {
    /// Category name
    pub name: String,

    /// Share of income as a fraction (0.25 = 25%)
    pub percentage: f64,
}

impl TemplateCategory {
    /// Create a new template category
    pub fn new(name: impl Into<String>, percentage: f64) -> Self {
        Self {
            name: name.into(),
            percentage,
        }
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), TemplateValidationError> {
        if self.name.trim().is_empty() {
            return Err(TemplateValidationError::EmptyName);
        }

        if !self.percentage.is_finite() || !(0.0..=1.0).contains(&self.percentage) {
            return Err(TemplateValidationError::PercentageOutOfRange(
                self.name.clone(),
                self.percentage,
            ));
        }

        Ok(())
    }
}

impl fmt::Display for TemplateCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, format_percentage(self.percentage))
    }
}

/// Ordered category template shared by all users
///
/// Percentages are taken as written: they are not required to add up to
/// 100%, so a budget derived from the template may total less (or more) than
/// the income.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryTemplate {
    pub categories: Vec<TemplateCategory>,
}

impl CategoryTemplate {
    /// Create a template from categories
    pub fn new(categories: Vec<TemplateCategory>) -> Self {
        Self { categories }
    }

    /// Build a template from (name, fraction) pairs
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, f64)>) -> Self {
        Self::new(
            pairs
                .into_iter()
                .map(|(name, pct)| TemplateCategory::new(name, pct))
                .collect(),
        )
    }

    /// The template written by `init` when none exists
    pub fn default_template() -> Self {
        Self::from_pairs([
            ("Housing", 0.30),
            ("Utilities", 0.10),
            ("Groceries", 0.10),
            ("Transport", 0.10),
            ("Insurance", 0.05),
            ("Health", 0.05),
            ("Savings", 0.10),
            ("Debt", 0.05),
            ("Personal", 0.10),
            ("Entertainment", 0.05),
        ])
    }

    /// Number of categories
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// True when the template holds no categories
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Category names in template order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.name.as_str())
    }

    /// Sum of all percentages
    pub fn total_percentage(&self) -> f64 {
        self.categories.iter().map(|c| c.percentage).sum()
    }

    /// Validate every category
    pub fn validate(&self) -> Result<(), TemplateValidationError> {
        if self.categories.is_empty() {
            return Err(TemplateValidationError::NoCategories);
        }
        self.categories.iter().try_for_each(TemplateCategory::validate)
    }
}

/// Parse a template percentage cell
///
/// Accepts a fraction ("0.3") or percent notation ("30%").
pub fn parse_percentage(text: &str) -> Result<f64, TemplateValidationError> {
    let text = text.trim();
    let invalid = || TemplateValidationError::InvalidPercentage(text.to_string());

    let value = match text.strip_suffix('%') {
        Some(percent) => percent.trim().parse::<f64>().map_err(|_| invalid())? / 100.0,
        None => text.parse::<f64>().map_err(|_| invalid())?,
    };

    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(invalid());
    }

    Ok(value)
}

/// Format a fraction as a percentage ("30%", "12.5%")
pub fn format_percentage(fraction: f64) -> String {
    let percent = fraction * 100.0;
    if (percent - percent.round()).abs() < 1e-9 {
        format!("{}%", percent.round())
    } else {
        format!("{}%", (percent * 100.0).round() / 100.0)
    }
}

/// Validation errors for templates
#[derive(Debug, Clone, PartialEq)]
pub enum TemplateValidationError {
    NoCategories,
    EmptyName,
    InvalidPercentage(String),
    PercentageOutOfRange(String, f64),
}

impl fmt::Display for TemplateValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoCategories => write!(f, "Template has no categories"),
            Self::EmptyName => write!(f, "Category name cannot be empty"),
            Self::InvalidPercentage(text) => write!(f, "Invalid percentage: '{}'", text),
            Self::PercentageOutOfRange(name, pct) => {
                write!(f, "Percentage for '{}' must be between 0 and 1, got {}", name, pct)
            }
        }
    }
}

impl std::error::Error for TemplateValidationError {}
