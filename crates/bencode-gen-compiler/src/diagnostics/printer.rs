//! Builder-pattern printer for rendering diagnostics.

use std::fmt::Write;

use annotate_snippets::{AnnotationKind, Level, Renderer, Snippet};
use bencode_gen_core::Colors;

use super::Diagnostics;
use super::message::{DiagnosticMessage, Severity};

/// Builder for rendering diagnostics with various options.
pub struct DiagnosticsPrinter<'d> {
    diagnostics: &'d Diagnostics,
    colored: bool,
}

impl<'d> DiagnosticsPrinter<'d> {
    pub fn new(diagnostics: &'d Diagnostics) -> Self {
        Self {
            diagnostics,
            colored: false,
        }
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let renderer = if self.colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        for (i, diag) in self.diagnostics.iter().enumerate() {
            if i > 0 {
                w.write_char('\n')?;
            }
            match &diag.snippet {
                Some(snippet) => {
                    let range = adjust_range(snippet.range.clone(), snippet.source.len());
                    let headline = diag.headline();
                    let annotated = Snippet::source(snippet.source.as_str())
                        .line_start(1)
                        .annotation(AnnotationKind::Primary.span(range).label(&snippet.label));
                    let level = severity_to_level(diag.severity());
                    let report = vec![level.primary_title(&headline).element(annotated)];
                    writeln!(w, "{}", renderer.render(&report))?;
                }
                None => self.format_plain(w, diag)?,
            }
        }

        Ok(())
    }

    fn format_plain(&self, w: &mut impl Write, diag: &DiagnosticMessage) -> std::fmt::Result {
        let colors = Colors::new(self.colored);
        let color = match diag.severity() {
            Severity::Error => colors.red,
            Severity::Warning => colors.yellow,
        };
        let severity = colors.paint(color, &diag.severity().to_string());
        writeln!(w, "{severity}: {}", diag.headline())
    }
}

fn severity_to_level(severity: Severity) -> Level<'static> {
    match severity {
        Severity::Error => Level::ERROR,
        Severity::Warning => Level::WARNING,
    }
}

// Empty ranges still need one visible caret.
fn adjust_range(range: std::ops::Range<usize>, limit: usize) -> std::ops::Range<usize> {
    if range.start == range.end {
        let start = range.start.min(limit);
        return start..(start + 1).min(limit).max(start);
    }
    range
}

impl Diagnostics {
    pub fn printer(&self) -> DiagnosticsPrinter<'_> {
        DiagnosticsPrinter::new(self)
    }
}
