use std::fmt::Write;

use crate::error::Result;

use super::{ColorMode, HandlerSummary, OutputFormatter, RunSummary, ansi, no_color_requested};

pub struct TextFormatter {
    use_colors: bool,
    verbose: u8,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_verbose(mode, 0)
    }

    /// With `verbose >= 1`, handlers that saw no files are listed too.
    #[must_use]
    pub fn with_verbose(mode: ColorMode, verbose: u8) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            verbose,
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                !no_color_requested() && std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    fn is_listed(&self, handler: &HandlerSummary) -> bool {
        self.verbose >= 1 || handler.stats.is_none_or(|stats| stats.files > 0)
    }

    fn format_handler(handler: &HandlerSummary, output: &mut String) {
        let extension = if handler.extension.is_empty() {
            "*"
        } else {
            handler.extension.as_str()
        };
        let dash = || "-".to_string();
        let (files, lines, significant, characters) = handler.stats.map_or_else(
            || (dash(), dash(), dash(), dash()),
            |stats| {
                (
                    stats.files.to_string(),
                    stats.lines.to_string(),
                    stats.significant.map_or_else(dash, |n| n.to_string()),
                    stats.characters.to_string(),
                )
            },
        );
        writeln!(
            output,
            "{extension:<16} {:<14} {files:>7} {lines:>9} {significant:>12} {characters:>11}",
            handler.kind
        )
        .ok();
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, summary: &RunSummary) -> Result<String> {
        let mut output = String::new();

        let listed: Vec<_> = summary
            .handlers
            .iter()
            .filter(|handler| self.is_listed(handler))
            .collect();
        if !listed.is_empty() {
            let header = format!(
                "{:<16} {:<14} {:>7} {:>9} {:>12} {:>11}",
                "Extension", "Kind", "Files", "Lines", "Significant", "Characters"
            );
            writeln!(output, "{}", self.colorize(&header, ansi::BOLD)).ok();
            for handler in listed {
                Self::format_handler(handler, &mut output);
            }
            writeln!(output).ok();
        }

        for failure in &summary.failures {
            let marker = self.colorize("✗", ansi::RED);
            writeln!(
                output,
                "{marker} {} ({}): {}",
                failure.path.display(),
                failure.extension,
                failure.message
            )
            .ok();
            if let Some(cause) = &failure.cause {
                writeln!(output, "   Cause: {cause}").ok();
            }
        }

        let total = self.colorize(&summary.files_seen.to_string(), ansi::CYAN);
        let mut line = format!("Total files: {total}");
        if summary.has_failures() {
            let failed = self.colorize(&summary.failures.len().to_string(), ansi::RED);
            write!(line, ", {failed} handler failures").ok();
        } else {
            let ok = self.colorize("ok", ansi::GREEN);
            write!(line, " ({ok})").ok();
        }
        writeln!(output, "{line}").ok();

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
