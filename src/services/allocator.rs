//! Budget allocation
//!
//! Splits an income across the template categories by their percentages.

use crate::models::{Amount, CategoryTemplate};

/// Allocate `income` across the template, one amount per category
///
/// Percentages are applied as stored; when they do not add up to 100% the
/// budget total differs from the income.
pub fn allocate(income: Amount, template: &CategoryTemplate) -> Vec<Amount> {
    template
        .categories
        .iter()
        .map(|category| income.scale(category.percentage))
        .collect()
}
