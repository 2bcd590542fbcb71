use super::algorithms::DiffStats;
use super::view::DisplaySegment;

/// Which side of the comparison a view belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewSide {
    Before,
    After,
}

/// Different output formats for word diffs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffFormat {
    /// `[-removed-]` / `{+added+}` markers, safe for files and pipes
    Marked,
    /// ANSI red/green highlighting for terminals
    Colored,
    /// Words only, no highlighting
    Plain,
}

/// Formats display segments into text
pub struct DiffFormatter;

impl DiffFormatter {
    /// Render one view as a single line of words
    pub fn format_view(segments: &[DisplaySegment], side: ViewSide, format: DiffFormat) -> String {
        segments
            .iter()
            .map(|segment| Self::format_segment(segment, side, format))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Render one view, wrapping lines at `width` visible characters
    pub fn format_view_wrapped(
        segments: &[DisplaySegment],
        side: ViewSide,
        format: DiffFormat,
        width: usize,
    ) -> String {
        let mut lines = Vec::new();
        let mut line = String::new();
        let mut visible = 0;

        for segment in segments {
            let rendered = Self::format_segment(segment, side, format);
            let rendered_width = Self::visible_width(segment, format);

            if visible > 0 && visible + 1 + rendered_width > width {
                lines.push(std::mem::take(&mut line));
                visible = 0;
            }
            if visible > 0 {
                line.push(' ');
                visible += 1;
            }
            line.push_str(&rendered);
            visible += rendered_width;
        }

        if !line.is_empty() {
            lines.push(line);
        }

        lines.join("\n")
    }

    fn format_segment(segment: &DisplaySegment, side: ViewSide, format: DiffFormat) -> String {
        if !segment.highlighted {
            return segment.text.clone();
        }

        match (format, side) {
            (DiffFormat::Plain, _) => segment.text.clone(),
            (DiffFormat::Marked, ViewSide::Before) => format!("[-{}-]", segment.text),
            (DiffFormat::Marked, ViewSide::After) => format!("{{+{}+}}", segment.text),
            (DiffFormat::Colored, ViewSide::Before) => format!("\x1b[31m{}\x1b[0m", segment.text),
            (DiffFormat::Colored, ViewSide::After) => format!("\x1b[32m{}\x1b[0m", segment.text),
        }
    }

    fn visible_width(segment: &DisplaySegment, format: DiffFormat) -> usize {
        let chars = segment.text.chars().count();
        match format {
            DiffFormat::Marked if segment.highlighted => chars + 4,
            _ => chars,
        }
    }

    /// Format diff statistics as a summary
    pub fn format_stats(stats: &DiffStats) -> String {
        format!(
            "{} words added, {} removed, {} unchanged",
            stats.words_added, stats.words_removed, stats.words_equal
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::{after_view, before_view, DiffGenerator};

    #[test]
    fn test_marked_format() {
        let result = DiffGenerator::new().generate("Buy it now", "Get it today");

        let before = DiffFormatter::format_view(
            &before_view(&result.operations),
            ViewSide::Before,
            DiffFormat::Marked,
        );
        let after = DiffFormatter::format_view(
            &after_view(&result.operations),
            ViewSide::After,
            DiffFormat::Marked,
        );

        assert_eq!(before, "[-Buy-] it [-now-]");
        assert_eq!(after, "{+Get+} it {+today+}");
    }

    #[test]
    fn test_colored_format() {
        let result = DiffGenerator::new().generate("old", "new");
        let after = DiffFormatter::format_view(
            &after_view(&result.operations),
            ViewSide::After,
            DiffFormat::Colored,
        );
        assert_eq!(after, "\x1b[32mnew\x1b[0m");
    }

    #[test]
    fn test_wrapping() {
        let result = DiffGenerator::new().generate("one two three four", "one two three four");
        let wrapped = DiffFormatter::format_view_wrapped(
            &before_view(&result.operations),
            ViewSide::Before,
            DiffFormat::Plain,
            9,
        );
        assert_eq!(wrapped, "one two\nthree\nfour");
    }

    #[test]
    fn test_format_stats() {
        let result = DiffGenerator::new().generate("a b c", "a c d");
        assert_eq!(
            DiffFormatter::format_stats(&result.stats),
            "1 words added, 1 removed, 2 unchanged"
        );

        let unchanged = DiffGenerator::new().generate("Buy now.", "Buy now.");
        assert_eq!(
            DiffFormatter::format_stats(&unchanged.stats),
            "0 words added, 0 removed, 2 unchanged"
        );
    }
}
