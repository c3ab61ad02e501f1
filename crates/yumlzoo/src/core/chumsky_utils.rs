//! Shared chumsky parser utilities for yUML parsing
//!
//! Small combinators for the bracketed-token notation used by yUML class
//! diagrams.

use chumsky::prelude::*;

/// Parse a yUML comment (`//` to end of input).
pub fn yuml_comment<'src>() -> impl Parser<'src, &'src str, ()> + Clone {
    just("//").ignore_then(any().repeated()).ignored()
}

/// Parse one bracketed token and return the raw text between the brackets.
///
/// The body is one or more characters other than `]`, so `[]` is not a token
/// and an inner `[` is kept as part of the body.
pub fn bracket_token<'src>() -> impl Parser<'src, &'src str, &'src str> + Clone {
    just('[')
        .ignore_then(none_of(']').repeated().at_least(1).to_slice())
        .then_ignore(just(']'))
}

/// Collect every bracketed token in the input, scanning left to right.
///
/// Text between tokens is skipped one character at a time, so a `[` that
/// does not start a complete token is stepped over and scanning resumes on
/// the next character.
pub fn bracket_tokens<'src>() -> impl Parser<'src, &'src str, Vec<&'src str>> + Clone {
    bracket_token()
        .map(Some)
        .or(any().to(None))
        .repeated()
        .collect::<Vec<_>>()
        .map(|found| found.into_iter().flatten().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(input: &str) -> Vec<&str> {
        bracket_tokens().parse(input).into_result().unwrap()
    }

    #[test]
    fn test_yuml_comment() {
        let parser = yuml_comment().then_ignore(end());
        assert!(parser.parse("// a comment").into_result().is_ok());
        assert!(parser.parse("//").into_result().is_ok());
        assert!(parser.parse("/ not a comment").into_result().is_err());
    }

    #[test]
    fn test_bracket_token() {
        let parser = bracket_token().then_ignore(end());
        assert_eq!(parser.parse("[Customer]").into_result().unwrap(), "Customer");
        assert_eq!(
            parser.parse("[Customer|name;id]").into_result().unwrap(),
            "Customer|name;id"
        );
        assert!(parser.parse("[]").into_result().is_err());
        assert!(parser.parse("[Open").into_result().is_err());
    }

    #[test]
    fn test_bracket_tokens_in_line() {
        assert_eq!(tokens("[A]^[B]"), vec!["A", "B"]);
        assert_eq!(tokens("[A]1-*[B]"), vec!["A", "B"]);
        assert_eq!(tokens("no brackets"), Vec::<&str>::new());
        assert_eq!(tokens(""), Vec::<&str>::new());
    }

    #[test]
    fn test_bracket_tokens_skip_incomplete() {
        assert_eq!(tokens("[]->[B]"), vec!["B"]);
        assert_eq!(tokens("[A]->[B"), vec!["A"]);
        assert_eq!(tokens("[A [B]"), vec!["A [B"]);
        assert_eq!(tokens("]][A]"), vec!["A"]);
    }
}
