//! Builder-pattern printer for rendering compile errors.

use std::fmt::Write;

use annotate_snippets::{AnnotationKind, Group, Level, Renderer, Snippet};

use crate::error::Error;

/// Builder for rendering an [`Error`] against the pattern it came from.
///
/// With a source attached, syntax errors come out as annotated snippets
/// with the offending span underlined; errors without a span, and every
/// error when no source is attached, render as a bare message.
pub struct ErrorPrinter<'e, 's> {
    error: &'e Error,
    source: Option<&'s str>,
    colored: bool,
}

impl<'e, 's> ErrorPrinter<'e, 's> {
    pub fn new(error: &'e Error) -> Self {
        Self {
            error,
            source: None,
            colored: false,
        }
    }

    pub fn source(mut self, source: &'s str) -> Self {
        self.source = Some(source);
        self
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
        let Some(source) = self.source else {
            return write!(w, "{}", self.error);
        };

        let renderer = if self.colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        let message = self.error.to_string();
        let mut group = Group::with_title(Level::ERROR.primary_title(&message));

        if let Some(span) = self.error.span() {
            let range = adjust_range(span.range(), source.len());
            group = group.element(
                Snippet::source(source)
                    .line_start(1)
                    .annotation(AnnotationKind::Primary.span(range).label(&message)),
            );
        }

        let report: Vec<Group> = vec![group];
        write!(w, "{}", renderer.render(&report))
    }
}

/// Zero-width spans still need one caret to point at.
fn adjust_range(range: std::ops::Range<usize>, limit: usize) -> std::ops::Range<usize> {
    if range.start == range.end {
        return range.start..(range.start + 1).min(limit);
    }
    range
}

impl Error {
    pub fn printer(&self) -> ErrorPrinter<'_, '_> {
        ErrorPrinter::new(self)
    }
}
