//! # Placeholder Scanning
//!
//! Splits template text into literal runs and `{{key}}` placeholders.
//! This is a flat token scan, not a templating language: no nesting, no
//! expressions, no escapes. An unterminated `{{` is kept as literal text.

/// Profile variables resolvable at render time
pub const PROFILE_VARIABLES: &[&str] = &["name", "username", "email", "website"];

pub fn is_profile_variable(key: &str) -> bool {
    PROFILE_VARIABLES.contains(&key)
}

/// A piece of scanned template text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Literal(&'a str),

    /// `key` is trimmed, `raw` is the full `{{ ... }}` token
    Placeholder { key: &'a str, raw: &'a str },
}

/// Iterator over the segments of a template
pub struct Segments<'a> {
    rest: &'a str,
}

pub fn segments(source: &str) -> Segments<'_> {
    Segments { rest: source }
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Segment<'a>> {
        if self.rest.is_empty() {
            return None;
        }

        let open = match self.rest.find("{{") {
            Some(open) => open,
            None => {
                let literal = self.rest;
                self.rest = "";
                return Some(Segment::Literal(literal));
            }
        };

        if open > 0 {
            let literal = &self.rest[..open];
            self.rest = &self.rest[open..];
            return Some(Segment::Literal(literal));
        }

        match self.rest[2..].find("}}") {
            Some(close) => {
                let raw = &self.rest[..close + 4];
                let key = raw[2..raw.len() - 2].trim();
                self.rest = &self.rest[close + 4..];
                Some(Segment::Placeholder { key, raw })
            }
            None => {
                let literal = self.rest;
                self.rest = "";
                Some(Segment::Literal(literal))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text() {
        let parts: Vec<_> = segments("hello world").collect();
        assert_eq!(parts, vec![Segment::Literal("hello world")]);
    }

    #[test]
    fn test_placeholders_and_literals() {
        let parts: Vec<_> = segments("# {{title}} by {{ name }}!").collect();
        assert_eq!(
            parts,
            vec![
                Segment::Literal("# "),
                Segment::Placeholder { key: "title", raw: "{{title}}" },
                Segment::Literal(" by "),
                Segment::Placeholder { key: "name", raw: "{{ name }}" },
                Segment::Literal("!"),
            ]
        );
    }

    #[test]
    fn test_adjacent_placeholders() {
        let parts: Vec<_> = segments("{{a}}{{b}}").collect();
        assert_eq!(parts.len(), 2);
    }

    #[test]
    fn test_unterminated_is_literal() {
        let parts: Vec<_> = segments("a {{b").collect();
        assert_eq!(parts, vec![Segment::Literal("a "), Segment::Literal("{{b")]);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(segments("").count(), 0);
    }

    #[test]
    fn test_profile_variables() {
        assert!(is_profile_variable("username"));
        assert!(!is_profile_variable("title"));
    }
}
