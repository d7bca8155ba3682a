//! Markdown renderer
//!
//! Renders an annotated table to a markdown table, emphasizing significant
//! p-value cells. Presentation only; the numbers come from the table as-is.

use crate::annotate::AnnotatedTable;

/// Table renderer with fixed-decimal number formatting
pub struct Renderer {
    places: usize,
}

impl Renderer {
    pub fn new() -> Self {
        Self { places: 6 }
    }

    /// Decimal places for statistic and p-value cells
    pub fn with_places(mut self, places: usize) -> Self {
        self.places = places;
        self
    }

    /// Render the table with significant p-values in bold
    pub fn render(&self, table: &AnnotatedTable) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "| categorical | numerical | {} | p-value |\n",
            table.statistic
        ));
        output.push_str("|------|------|------|------|\n");

        for row in &table.rows {
            let p = format!("{:.*}", self.places, row.result.outcome.p_value);
            let p_cell = if row.significant {
                format!("**{}**", p)
            } else {
                p
            };
            output.push_str(&format!(
                "| {} | {} | {:.*} | {} |\n",
                row.result.categorical,
                row.result.numerical,
                self.places,
                row.result.outcome.statistic,
                p_cell
            ));
        }

        if !table.skipped.is_empty() {
            output.push('\n');
            for skip in &table.skipped {
                output.push_str(&format!(
                    "_{} × {}: skipped, cardinality {} (requires {})_\n",
                    skip.categorical, skip.numerical, skip.actual, skip.required
                ));
            }
        }

        output
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
