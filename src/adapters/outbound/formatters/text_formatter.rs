use crate::application::read_models::{ConsistencyReadModel, MismatchView};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use std::fmt::Write;

/// TextFormatter adapter for the default line-oriented report
///
/// Each mismatch renders as
///
/// ```text
/// [!] Mismatch for `example.com/pkg`. Found 2 versions - {v1.2.0,v1.3.0}
/// 	- v1.2.0: /ws/a/go.mod
/// 	- v1.3.0: /ws/b/go.mod
/// ```
///
/// A run without mismatches renders as the empty string.
pub struct TextFormatter;

impl TextFormatter {
    pub fn new() -> Self {
        Self
    }

    fn render_mismatch(output: &mut String, mismatch: &MismatchView) -> std::fmt::Result {
        writeln!(
            output,
            "[!] Mismatch for `{}`. Found {} versions - {{{}}}",
            mismatch.dependency,
            mismatch.version_count,
            mismatch.versions.join(",")
        )?;
        for requirement in &mismatch.requirements {
            writeln!(output, "\t- {}: {}", requirement.version, requirement.manifest)?;
        }
        Ok(())
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, model: &ConsistencyReadModel) -> Result<String> {
        let mut output = String::new();
        for mismatch in &model.mismatches {
            Self::render_mismatch(&mut output, mismatch)
                .map_err(|e| anyhow::anyhow!("Failed to render text report: {}", e))?;
        }
        Ok(output)
    }
}
