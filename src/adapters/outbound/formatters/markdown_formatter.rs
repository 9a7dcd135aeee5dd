use crate::application::read_models::{ConsistencyReadModel, MismatchView, SummaryView};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// Markdown table header for the contributing manifests of one mismatch
const TABLE_HEADER: &str = "| Version | Manifest |\n";

/// Markdown table separator line
const TABLE_SEPARATOR: &str = "|---------|----------|\n";

/// MarkdownFormatter adapter for review-friendly reports
///
/// Dependency names link to pkg.go.dev.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn dependency_link(dependency: &str) -> String {
        format!("[`{}`](https://pkg.go.dev/{})", dependency, dependency)
    }

    fn render_header(&self, output: &mut String, model: &ConsistencyReadModel) {
        output.push_str("# Dependency Version Report\n\n");
        output.push_str(&format!(
            "Generated by {} {} at {}\n\n",
            model.metadata.tool_name, model.metadata.tool_version, model.metadata.timestamp
        ));
    }

    fn render_summary(&self, output: &mut String, summary: &SummaryView) {
        output.push_str("## Summary\n\n");
        output.push_str("| Manifests | Dependencies | Mismatches |\n");
        output.push_str("|-----------|--------------|------------|\n");
        output.push_str(&format!(
            "| {} | {} | {} |\n\n",
            summary.manifests, summary.dependencies, summary.mismatches
        ));
    }

    fn render_mismatches(&self, output: &mut String, mismatches: &[MismatchView]) {
        output.push_str("## Mismatches\n\n");

        if mismatches.is_empty() {
            output.push_str("*No version mismatches found.*\n\n");
            return;
        }

        for mismatch in mismatches {
            output.push_str(&format!(
                "### {} ({} versions)\n\n",
                Self::dependency_link(&mismatch.dependency),
                mismatch.version_count
            ));
            output.push_str(TABLE_HEADER);
            output.push_str(TABLE_SEPARATOR);
            for requirement in &mismatch.requirements {
                output.push_str(&format!(
                    "| {} | {} |\n",
                    Self::escape_markdown_table_cell(&requirement.version),
                    Self::escape_markdown_table_cell(&requirement.manifest)
                ));
            }
            output.push('\n');
        }
    }

    fn render_manifests(&self, output: &mut String, manifests: &[String]) {
        if manifests.is_empty() {
            return;
        }
        output.push_str("## Checked Manifests\n\n");
        for manifest in manifests {
            output.push_str(&format!("- `{}`\n", manifest));
        }
        output.push('\n');
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format(&self, model: &ConsistencyReadModel) -> Result<String> {
        let mut output = String::new();

        self.render_header(&mut output, model);
        self.render_summary(&mut output, &model.summary);
        self.render_mismatches(&mut output, &model.mismatches);
        self.render_manifests(&mut output, &model.manifests);

        Ok(output)
    }
}
