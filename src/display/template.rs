//! Category template display formatting

use crate::models::template::format_percentage;
use crate::models::CategoryTemplate;

/// Format the category template as a list with percentages
pub fn format_template(template: &CategoryTemplate) -> String {
    if template.is_empty() {
        return "No categories found.\n\nRun 'guardian init' to create the default template."
            .to_string();
    }

    let name_width = template
        .names()
        .map(str::len)
        .max()
        .unwrap_or(8)
        .max(8);

    let mut output = String::new();
    output.push_str(&format!("{:<width$}  {:>8}\n", "Category", "Share", width = name_width));
    output.push_str(&format!("{:-<width$}  {:->8}\n", "", "", width = name_width));

    for category in &template.categories {
        output.push_str(&format!(
            "{:<width$}  {:>8}\n",
            category.name,
            format_percentage(category.percentage),
            width = name_width
        ));
    }

    let total = template.total_percentage();
    output.push_str(&format!(
        "{:<width$}  {:>8}\n",
        "Total",
        format_percentage(total),
        width = name_width
    ));

    if (total - 1.0).abs() > 1e-9 {
        output.push_str("\nNote: percentages do not add up to 100%.\n");
    }

    output
}
