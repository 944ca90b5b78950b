//! Error types for parsing

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

use crate::parser::ast::Span;

/// Fixed message for a missing or malformed header line
pub const HEADER_MESSAGE: &str = "First line must be: infographic <template-name>";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("SyntaxError: {message}")]
    Syntax { span: Span, message: String },
}

impl ParseError {
    /// Error for a source whose first non-empty line is not `infographic <template>`
    pub fn missing_header(span: Span) -> Self {
        ParseError::Syntax {
            span,
            message: HEADER_MESSAGE.to_string(),
        }
    }

    pub fn span(&self) -> &Span {
        match self {
            ParseError::Syntax { span, .. } => span,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ParseError::Syntax { message, .. } => message,
        }
    }

    /// Format the error with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        let ParseError::Syntax { span, message } = self;
        let mut buf = Vec::new();

        let written = Report::build(ReportKind::Error, filename, span.start)
            .with_message(message)
            .with_label(
                Label::new((filename, span.clone()))
                    .with_message("expected `infographic <template-name>` here")
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf);

        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => self.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_kind() {
        let err = ParseError::missing_header(0..5);
        assert_eq!(
            err.to_string(),
            "SyntaxError: First line must be: infographic <template-name>"
        );
        assert_eq!(err.span(), &(0..5));
    }

    #[test]
    fn test_format_includes_message_and_source() {
        let source = "graphic list-grid-badge-card\n";
        let err = ParseError::missing_header(0..28);
        let report = err.format(source, "input.ig");
        assert!(report.contains(HEADER_MESSAGE));
        assert!(report.contains("input.ig"));
    }
}
