//! Export functionality for comparison results
//!
//! Produces the "Copy Comparison Results" text block or JSON, written to a
//! file or any writer.

use std::fs;
use std::io::Write;
use std::path::Path;
use anyhow::{Context, Result};

use crate::compare::ComparisonResult;
use crate::config::ExportSettings;
use crate::diff::{DiffFormat, DiffFormatter, ViewSide};

/// Export output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Human-readable "Copy Comparison Results" block
    Text,
    /// Pretty-printed JSON of the whole result
    Json,
}

/// Handles exporting comparison results
pub struct ComparisonExporter {
    settings: ExportSettings,
    format: ExportFormat,
}

impl ComparisonExporter {
    pub fn new(settings: ExportSettings, format: ExportFormat) -> Self {
        Self { settings, format }
    }

    /// Text block exporter with default settings
    pub fn text() -> Self {
        Self::new(ExportSettings::default(), ExportFormat::Text)
    }

    /// JSON exporter
    pub fn json() -> Self {
        Self::new(ExportSettings::default(), ExportFormat::Json)
    }

    /// Render the result in the configured format
    pub fn render(&self, result: &ComparisonResult) -> Result<String> {
        match self.format {
            ExportFormat::Text => Ok(self.format_text(result)),
            ExportFormat::Json => {
                serde_json::to_string_pretty(result)
                    .context("Failed to serialize comparison result")
            }
        }
    }

    /// Export a comparison to a file
    pub fn export_to_file<P: AsRef<Path>>(
        &self,
        result: &ComparisonResult,
        output_path: P,
    ) -> Result<()> {
        let output_path = output_path.as_ref();
        let content = self.render(result)?;
        fs::write(output_path, content)
            .with_context(|| format!("Failed to write export to {}", output_path.display()))?;
        tracing::info!("Exported comparison to {}", output_path.display());
        Ok(())
    }

    /// Export to a writer (stdout or custom outputs)
    pub fn export_to_writer<W: Write>(
        &self,
        result: &ComparisonResult,
        writer: &mut W,
    ) -> Result<()> {
        let content = self.render(result)?;
        writeln!(writer, "{}", content)?;
        Ok(())
    }

    fn format_text(&self, result: &ComparisonResult) -> String {
        let before = &result.before_metrics;
        let after = &result.after_metrics;
        let mut content = String::new();

        content.push_str("Copy Comparison Results\n");
        content.push_str("=======================\n");

        if self.settings.include_metadata {
            content.push_str(&format!(
                "Generated at: {}\n",
                chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
            ));
        }

        content.push_str(&format!(
            "Improvement Score: {}\n\n",
            format_score(result.improvement_score)
        ));

        content.push_str(&format!("Word Count: {} → {}\n", before.word_count, after.word_count));
        content.push_str(&format!(
            "Sentences: {} → {}\n",
            before.sentence_count, after.sentence_count
        ));
        content.push_str(&format!(
            "Avg Sentence Length: {:.1} → {:.1}\n",
            before.avg_sentence_length, after.avg_sentence_length
        ));
        content.push_str(&format!(
            "Grade Level: {:.1} → {:.1}\n",
            before.flesch_kincaid_grade, after.flesch_kincaid_grade
        ));
        content.push_str(&format!(
            "Reading Ease: {:.1} → {:.1}\n",
            before.flesch_reading_ease, after.flesch_reading_ease
        ));
        content.push_str(&format!(
            "Passive Voice: {} → {}\n",
            before.passive_voice_count, after.passive_voice_count
        ));
        content.push_str(&format!("Adverbs: {} → {}\n", before.adverb_count, after.adverb_count));
        content.push_str(&format!(
            "Reading Time: {}s → {}s\n",
            before.reading_time, after.reading_time
        ));

        content.push_str("\nSummary:\n");
        content.push_str(&result.summary);
        content.push('\n');

        if self.settings.include_diff {
            content.push_str("\nBefore:\n");
            content.push_str(&DiffFormatter::format_view(
                &result.before_view,
                ViewSide::Before,
                DiffFormat::Marked,
            ));
            content.push_str("\n\nAfter:\n");
            content.push_str(&DiffFormatter::format_view(
                &result.after_view,
                ViewSide::After,
                DiffFormat::Marked,
            ));
            content.push('\n');
        }

        content
    }
}

/// Score with an explicit sign, e.g. `+37%`, `-12%`, `0%`
pub fn format_score(score: i32) -> String {
    if score > 0 {
        format!("+{}%", score)
    } else {
        format!("{}%", score)
    }
}
