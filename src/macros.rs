//! Utility macros for the front end.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_SPAN!` - Creates a Span between two byte offsets of the lexer's file

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's string value
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Int, "42".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        Token {
            kind: $kind,
            value: $value,
            span: $span,
        }
    };
}

/// Creates a Span covering `$start..$end` in the lexer's current file.
///
/// Offsets that do not fit a `u32` are clamped to `u32::MAX`.
///
/// ```ignore
/// let span = MK_SPAN!(lexer, start, lexer.pos);
/// ```
#[macro_export]
macro_rules! MK_SPAN {
    ($lexer:expr, $start:expr, $end:expr) => {
        Span {
            start: Position(
                u32::try_from($start).unwrap_or(u32::MAX),
                Rc::clone(&$lexer.file),
            ),
            end: Position(
                u32::try_from($end).unwrap_or(u32::MAX),
                Rc::clone(&$lexer.file),
            ),
        }
    };
}
