//! Delimited pattern compilation.
//!
//! Rule tables store patterns in delimited form, e.g. `/^\d{4} ?[A-Z]{2}$/i`:
//!
//! - The first character is the delimiter. Bracket delimiters close with
//!   their partner (`(`/`)`, `[`/`]`, `{`/`}`, `<`/`>`).
//! - Characters after the closing delimiter are flags.
//! - A pattern that starts with an alphanumeric character or a backslash is
//!   a bare regular expression with no delimiters and no flags.
//!
//! Patterns keep the semantics of the rule tables they come from:
//!
//! - `\d`, `\w`, `\s` and their negations are ASCII classes, so `\d` is
//!   `[0-9]` and never matches other Unicode digits. `\b` and `\B` use
//!   ASCII word characters.
//! - Without the `m` or `D` flag, `$` matches at the end of the value or
//!   before a final `\n`.
//!
//! ## Flags
//!
//! | Flag | Effect                                  |
//! |------|-----------------------------------------|
//! | `i`  | case-insensitive                        |
//! | `m`  | `^`/`$` match at line boundaries        |
//! | `s`  | `.` matches `\n`                        |
//! | `x`  | whitespace and `#` comments ignored     |
//! | `U`  | swap greedy and lazy quantifiers        |
//! | `D`  | `$` matches only at the very end        |
//! | `u`  | accepted, patterns are always UTF-8     |

use regex::{Regex, RegexBuilder};
use thiserror::Error;

/// Characters with a meaning of their own inside a regular expression.
const REGEX_META: &str = r"\.+*?()|[]{}^$#&-~";

/// `$` when it may also match before a final newline.
const DOLLAR_BEFORE_FINAL_NEWLINE: &str = r"(?:\n?\z)";

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("pattern is empty")]
    Empty,

    #[error("no ending delimiter '{delimiter}' found")]
    Unterminated { delimiter: char },

    #[error("unknown modifier '{flag}'")]
    UnknownFlag { flag: char },

    #[error(transparent)]
    Regex(#[from] regex::Error),
}

#[derive(Debug, Default, Clone, Copy)]
struct Flags {
    case_insensitive: bool,
    multi_line: bool,
    dot_matches_new_line: bool,
    ignore_whitespace: bool,
    swap_greed: bool,
    dollar_end_only: bool,
}

impl Flags {
    fn parse(raw: &str) -> Result<Self, PatternError> {
        let mut flags = Self::default();
        for flag in raw.chars() {
            match flag {
                'i' => flags.case_insensitive = true,
                'm' => flags.multi_line = true,
                's' => flags.dot_matches_new_line = true,
                'x' => flags.ignore_whitespace = true,
                'U' => flags.swap_greed = true,
                'D' => flags.dollar_end_only = true,
                'u' => {}
                c if c.is_whitespace() => {}
                flag => return Err(PatternError::UnknownFlag { flag }),
            }
        }
        Ok(flags)
    }

    /// Whether `$` keeps the `regex` crate meaning.
    fn native_dollar(self) -> bool {
        self.multi_line || self.dollar_end_only
    }
}

/// Compile a stored pattern into a [`Regex`].
pub fn compile_pattern(raw: &str) -> Result<Regex, PatternError> {
    let trimmed = raw.trim_start();
    let Some(delimiter) = trimmed.chars().next() else {
        return Err(PatternError::Empty);
    };

    if delimiter.is_alphanumeric() || delimiter == '\\' {
        let flags = Flags::default();
        return Ok(Regex::new(&translate(trimmed, None, flags))?);
    }

    let closing = closing_delimiter(delimiter);
    let rest = &trimmed[delimiter.len_utf8()..];
    let end = rest
        .rfind(closing)
        .ok_or(PatternError::Unterminated { delimiter: closing })?;

    let flags = Flags::parse(&rest[end + closing.len_utf8()..])?;
    let body = translate(&rest[..end], Some((delimiter, closing)), flags);

    let regex = RegexBuilder::new(&body)
        .case_insensitive(flags.case_insensitive)
        .multi_line(flags.multi_line)
        .dot_matches_new_line(flags.dot_matches_new_line)
        .ignore_whitespace(flags.ignore_whitespace)
        .swap_greed(flags.swap_greed)
        .build()?;
    Ok(regex)
}

fn closing_delimiter(opening: char) -> char {
    match opening {
        '(' => ')',
        '[' => ']',
        '{' => '}',
        '<' => '>',
        other => other,
    }
}

/// ASCII members of the Perl classes `\d`, `\w` and `\s` (any case).
fn perl_class_items(class: char) -> Option<&'static str> {
    match class {
        'd' | 'D' => Some("0-9"),
        'w' | 'W' => Some("0-9A-Za-z_"),
        's' | 'S' => Some(r"\t\n\x0B\x0C\r\x20"),
        _ => None,
    }
}

/// Rewrite a pattern body into `regex` crate syntax.
///
/// - Escaped delimiters that are plain characters to the regex engine lose
///   their backslash (`\/` becomes `/`); escaped metacharacters are kept.
/// - Perl classes become explicit ASCII classes.
/// - `[` inside a character class is a literal.
/// - `$` outside a class also matches before a final newline unless
///   `flags` say otherwise.
fn translate(body: &str, delimiters: Option<(char, char)>, flags: Flags) -> String {
    let plain_delimiter = |c: char| {
        delimiters.is_some_and(|(opening, closing)| {
            (c == opening || c == closing) && !REGEX_META.contains(c)
        })
    };

    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars().peekable();
    let mut in_class = false;
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                let Some(next) = chars.next() else {
                    out.push('\\');
                    continue;
                };
                if plain_delimiter(next) {
                    out.push(next);
                } else if let Some(items) = perl_class_items(next) {
                    match (in_class, next.is_ascii_uppercase()) {
                        (true, false) => out.push_str(items),
                        (false, false) => {
                            out.push('[');
                            out.push_str(items);
                            out.push(']');
                        }
                        (_, true) => {
                            out.push_str("[^");
                            out.push_str(items);
                            out.push(']');
                        }
                    }
                } else if in_class && next == 'b' {
                    // backspace
                    out.push_str(r"\x08");
                } else if !in_class && matches!(next, 'b' | 'B') {
                    out.push_str(r"(?-u:\");
                    out.push(next);
                    out.push(')');
                } else {
                    out.push('\\');
                    out.push(next);
                }
            }
            '[' if !in_class => {
                in_class = true;
                out.push('[');
                if chars.next_if_eq(&'^').is_some() {
                    out.push('^');
                }
                if chars.next_if_eq(&']').is_some() {
                    out.push_str(r"\]");
                }
            }
            '[' if chars.peek() == Some(&':') => {
                // POSIX class such as [:alpha:]
                out.push('[');
                for p in chars.by_ref() {
                    out.push(p);
                    if p == ']' && out.ends_with(":]") {
                        break;
                    }
                }
            }
            '[' => out.push_str(r"\["),
            ']' if in_class => {
                in_class = false;
                out.push(']');
            }
            '$' if !in_class && !flags.native_dollar() => {
                out.push_str(DOLLAR_BEFORE_FINAL_NEWLINE);
            }
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slash_delimited() {
        let re = compile_pattern(r"/^\d{5}$/").expect("compile");
        assert!(re.is_match("75007"));
        assert!(!re.is_match("7500"));
        assert!(!re.is_match("x75007"));
    }

    #[test]
    fn test_case_insensitive_flag() {
        let re = compile_pattern(r"/^\d{4} ?[A-Z]{2}$/i").expect("compile");
        assert!(re.is_match("1012 ab"));
        assert!(re.is_match("1012AB"));

        let strict = compile_pattern(r"/^\d{4} ?[A-Z]{2}$/").expect("compile");
        assert!(!strict.is_match("1012 ab"));
    }

    #[test]
    fn test_bracket_and_hash_delimiters() {
        assert!(compile_pattern(r"{^\d{3}$}").expect("compile").is_match("123"));
        assert!(compile_pattern(r"#^[0-9]{2}$#").expect("compile").is_match("12"));
        assert!(compile_pattern(r"(^ab$)i").expect("compile").is_match("AB"));
    }

    #[test]
    fn test_escaped_delimiter_is_unescaped() {
        let re = compile_pattern(r"/^\d{2}\/\d{3}$/").expect("compile");
        assert!(re.is_match("12/345"));
        assert!(!re.is_match("12-345"));
    }

    #[test]
    fn test_escaped_meta_delimiter_is_kept() {
        let re = compile_pattern(r"|^a\|b$|").expect("compile");
        assert!(re.is_match("a|b"));
        assert!(!re.is_match("a"));
    }

    #[test]
    fn test_bare_pattern() {
        let re = compile_pattern(r"\d+").expect("compile");
        assert!(re.is_match("abc123"));
    }

    #[test]
    fn test_digit_class_is_ascii() {
        let re = compile_pattern(r"/^\d{2} ?\d{3}$/").expect("compile");
        assert!(re.is_match("75007"));
        // Arabic-Indic and fullwidth digits
        assert!(!re.is_match("\u{0667}\u{0665}\u{0660}\u{0660}\u{0667}"));
        assert!(!re.is_match("\u{FF17}\u{FF15}\u{FF10}\u{FF10}\u{FF17}"));

        let in_class = compile_pattern(r"/^[W\d]{2}$/u").expect("compile");
        assert!(in_class.is_match("W7"));
        assert!(!in_class.is_match("W\u{0667}"));
    }

    #[test]
    fn test_word_and_space_classes_are_ascii() {
        let word = compile_pattern(r"/^\w+$/").expect("compile");
        assert!(word.is_match("ab_12"));
        assert!(!word.is_match("caf\u{e9}"));

        let space = compile_pattern(r"/^\d\s\d$/").expect("compile");
        assert!(space.is_match("1 2"));
        assert!(space.is_match("1\t2"));
        assert!(!space.is_match("1\u{a0}2"));

        let negated = compile_pattern(r"/^\D\S$/").expect("compile");
        assert!(negated.is_match("\u{0667}x"));
        assert!(!negated.is_match("1x"));
        assert!(!negated.is_match("x "));
    }

    #[test]
    fn test_word_boundary_is_ascii() {
        let re = compile_pattern(r"/\bAB\b/").expect("compile");
        assert!(re.is_match("x AB y"));
        assert!(!re.is_match("xAB"));
    }

    #[test]
    fn test_dollar_allows_final_newline() {
        let re = compile_pattern(r"/^\d{5}$/").expect("compile");
        assert!(re.is_match("75007\n"));
        assert!(!re.is_match("75007\n\n"));
        assert!(!re.is_match("75007\nx"));

        let end_only = compile_pattern(r"/^\d{5}$/D").expect("compile");
        assert!(end_only.is_match("75007"));
        assert!(!end_only.is_match("75007\n"));

        let multi_line = compile_pattern(r"/^\d{5}$/m").expect("compile");
        assert!(multi_line.is_match("x\n75007\ny"));
    }

    #[test]
    fn test_literal_brackets_in_class() {
        let re = compile_pattern(r"/^[]a[]+$/").expect("compile");
        assert!(re.is_match("a]["));
        assert!(!re.is_match("b"));

        let posix = compile_pattern(r"/^[[:digit:]x]+$/").expect("compile");
        assert!(posix.is_match("1x2"));
        assert!(!posix.is_match("1y"));
    }

    #[test]
    fn test_errors() {
        assert!(matches!(compile_pattern(""), Err(PatternError::Empty)));
        assert!(matches!(
            compile_pattern("/^abc"),
            Err(PatternError::Unterminated { delimiter: '/' })
        ));
        assert!(matches!(
            compile_pattern("/^abc$/q"),
            Err(PatternError::UnknownFlag { flag: 'q' })
        ));
        assert!(matches!(
            compile_pattern("/^(abc$/"),
            Err(PatternError::Regex(_))
        ));
    }
}
