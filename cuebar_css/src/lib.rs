// Copyright 2026 the Cuebar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scopes a stylesheet under a theme class.
//!
//! [`scope_stylesheet`] rewrites every rule's selector list so it only
//! matches below `scope`:
//!
//! ```
//! let css = ":root {\n  --bg: #111;\n}\n.card, .nav a {\n  color: #eee;\n}";
//! let scoped = cuebar_css::scope_stylesheet(css, ".dark-theme").unwrap();
//! assert_eq!(
//!     scoped,
//!     ".dark-theme {\n  --bg: #111;\n}\n.dark-theme .card, .dark-theme .nav a {\n  color: #eee;\n}"
//! );
//! ```
//!
//! The rewrite is line-oriented and keeps everything else byte-for-byte:
//! indentation, comments, blank lines and declarations. `:root` and `body`
//! selectors turn into the scope itself. Conditional group rules (`@media`,
//! `@supports`, `@container`, `@layer`) are entered and their rules scoped;
//! other at-rule blocks such as `@keyframes` and `@font-face` pass through.
//! Braces inside strings and comments are not structure.

use thiserror::Error;

/// Scope used for the page's dark stylesheet.
pub const DEFAULT_SCOPE: &str = ".dark-theme";

const GROUP_AT_RULES: &[&str] = &["@media", "@supports", "@container", "@layer", "@document"];

/// Errors from [`scope_stylesheet`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScopeError {
    /// A `}` with no open block.
    #[error("line {line}: closing brace without a matching opening brace")]
    UnbalancedBrace {
        /// 1-based line number.
        line: usize,
    },
    /// The input ended inside a block.
    #[error("stylesheet ends with {depth} unclosed block(s)")]
    UnclosedBlock {
        /// Number of blocks left open.
        depth: usize,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Block {
    /// Conditional group; its children are rules to scope.
    Group,
    /// Declaration block of a scoped rule.
    Rule,
    /// Anything copied through untouched.
    Verbatim,
}

/// Prefixes every selector in `css` with `scope`.
pub fn scope_stylesheet(css: &str, scope: &str) -> Result<String, ScopeError> {
    let mut stack: Vec<Block> = Vec::new();
    let mut lexer = Lexer::default();
    // Block kind of an at-rule whose `{` has not appeared yet.
    let mut pending_at: Option<Block> = None;
    let mut out: Vec<String> = Vec::new();

    for (idx, line) in css.split('\n').enumerate() {
        let number = idx + 1;
        let trimmed = line.trim();
        let in_comment = lexer.in_comment;
        let braces = lexer.braces(line);

        if in_comment || trimmed.is_empty() || trimmed.starts_with("/*") {
            track_braces(&braces, Block::Verbatim, &mut stack, number)?;
            out.push(line.to_owned());
            continue;
        }

        let selector_level = matches!(stack.last(), None | Some(Block::Group));
        if !selector_level || trimmed.starts_with('}') {
            track_braces(&braces, Block::Verbatim, &mut stack, number)?;
            out.push(line.to_owned());
            continue;
        }

        if trimmed.starts_with('@') || pending_at.is_some() {
            let opens = match pending_at.take() {
                Some(opens) => opens,
                None if GROUP_AT_RULES.contains(&at_rule_name(trimmed)) => Block::Group,
                None => Block::Verbatim,
            };
            if braces.is_empty() && !trimmed.ends_with(';') {
                pending_at = Some(opens);
            }
            track_braces(&braces, opens, &mut stack, number)?;
            out.push(line.to_owned());
            continue;
        }

        let indent = &line[..line.len() - line.trim_start().len()];
        match braces.first() {
            Some(&(brace, '{')) if !line[..brace].trim().is_empty() => {
                let (head, tail) = line.split_at(brace);
                out.push(format!(
                    "{indent}{} {tail}",
                    prefix_selector_list(head.trim(), scope)
                ));
                track_braces(&braces, Block::Rule, &mut stack, number)?;
            }
            Some(_) => {
                track_braces(&braces, Block::Rule, &mut stack, number)?;
                out.push(line.to_owned());
            }
            // First lines of a selector list split across lines.
            None if trimmed.ends_with(',') => {
                let ending = &line[line.trim_end().len()..];
                let list = prefix_selector_list(trimmed.trim_end_matches(','), scope);
                out.push(format!("{indent}{list},{ending}"));
            }
            None => out.push(line.to_owned()),
        }
    }

    if !stack.is_empty() {
        return Err(ScopeError::UnclosedBlock { depth: stack.len() });
    }
    Ok(out.join("\n"))
}

/// Finds braces that are CSS syntax rather than string or comment text.
///
/// Comments may span lines; strings end at the line break.
#[derive(Debug, Default)]
struct Lexer {
    in_comment: bool,
}

impl Lexer {
    /// Byte offsets of the structural `{` and `}` on `line`.
    fn braces(&mut self, line: &str) -> Vec<(usize, char)> {
        let mut found = Vec::new();
        let mut quote: Option<char> = None;
        let mut chars = line.char_indices().peekable();
        while let Some((at, c)) = chars.next() {
            if self.in_comment {
                if c == '*' && chars.next_if(|&(_, next)| next == '/').is_some() {
                    self.in_comment = false;
                }
                continue;
            }
            if let Some(q) = quote {
                if c == '\\' {
                    chars.next();
                } else if c == q {
                    quote = None;
                }
                continue;
            }
            match c {
                '/' if chars.next_if(|&(_, next)| next == '*').is_some() => {
                    self.in_comment = true;
                }
                '"' | '\'' => quote = Some(c),
                '{' | '}' => found.push((at, c)),
                _ => {}
            }
        }
        found
    }
}

/// The first `{` opens `opens`; later ones open verbatim blocks.
fn track_braces(
    braces: &[(usize, char)],
    opens: Block,
    stack: &mut Vec<Block>,
    line: usize,
) -> Result<(), ScopeError> {
    let mut next = opens;
    for &(_, c) in braces {
        if c == '{' {
            stack.push(next);
            next = Block::Verbatim;
        } else if stack.pop().is_none() {
            return Err(ScopeError::UnbalancedBrace { line });
        }
    }
    Ok(())
}

fn at_rule_name(trimmed: &str) -> &str {
    let end = trimmed
        .find(|c: char| c.is_whitespace() || c == '{' || c == '(')
        .unwrap_or(trimmed.len());
    &trimmed[..end]
}

fn prefix_selector_list(list: &str, scope: &str) -> String {
    list.split(',')
        .map(str::trim)
        .filter(|sel| !sel.is_empty())
        .map(|sel| prefix_selector(sel, scope))
        .collect::<Vec<_>>()
        .join(", ")
}

fn prefix_selector(sel: &str, scope: &str) -> String {
    if starts_with_word(sel, scope) {
        return sel.to_owned();
    }
    for root in [":root", "body"] {
        if starts_with_word(sel, root) {
            return format!("{scope}{}", &sel[root.len()..]);
        }
    }
    format!("{scope} {sel}")
}

/// `sel` starts with `word` and the next character does not extend it.
fn starts_with_word(sel: &str, word: &str) -> bool {
    sel.strip_prefix(word).is_some_and(|rest| {
        !rest
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scope(css: &str) -> String {
        scope_stylesheet(css, DEFAULT_SCOPE).unwrap()
    }

    #[test]
    fn root_and_body_become_the_scope() {
        assert_eq!(scope(":root {\n}"), ".dark-theme {\n}");
        assert_eq!(scope("body {\n}"), ".dark-theme {\n}");
        assert_eq!(scope("body.home main {\n}"), ".dark-theme.home main {\n}");
        assert_eq!(scope("body .card {\n}"), ".dark-theme .card {\n}");
    }

    #[test]
    fn body_prefix_needs_word_boundary() {
        assert_eq!(scope(".bodytext {\n}"), ".dark-theme .bodytext {\n}");
        assert_eq!(scope("bodyx {\n}"), ".dark-theme bodyx {\n}");
    }

    #[test]
    fn every_selector_in_a_list_is_prefixed() {
        assert_eq!(
            scope("h1, h2 > a,::selection {\n}"),
            ".dark-theme h1, .dark-theme h2 > a, .dark-theme ::selection {\n}"
        );
    }

    #[test]
    fn already_scoped_selectors_are_kept() {
        assert_eq!(
            scope(".dark-theme .x, .y {\n}"),
            ".dark-theme .x, .dark-theme .y {\n}"
        );
        assert_eq!(scope(".dark-themed {\n}"), ".dark-theme .dark-themed {\n}");
    }

    #[test]
    fn declarations_are_untouched() {
        let css = ".a {\n  background: url(body.png);\n  color: red;\n}";
        assert_eq!(
            scope(css),
            ".dark-theme .a {\n  background: url(body.png);\n  color: red;\n}"
        );
    }

    #[test]
    fn single_line_rule_keeps_its_declarations() {
        assert_eq!(
            scope(".a { color: red; }\n.b {\n}"),
            ".dark-theme .a { color: red; }\n.dark-theme .b {\n}"
        );
    }

    #[test]
    fn media_blocks_are_scoped_and_indent_kept() {
        let css = "@media (max-width: 600px) {\n    .nav {\n        display: none;\n    }\n}";
        assert_eq!(
            scope(css),
            "@media (max-width: 600px) {\n    .dark-theme .nav {\n        display: none;\n    }\n}"
        );
    }

    #[test]
    fn keyframes_pass_through() {
        let css = "@keyframes pulse {\n  from {\n    opacity: 0;\n  }\n  to {\n    opacity: 1;\n  }\n}\n.p {\n}";
        assert_eq!(
            scope(css),
            "@keyframes pulse {\n  from {\n    opacity: 0;\n  }\n  to {\n    opacity: 1;\n  }\n}\n.dark-theme .p {\n}"
        );
    }

    #[test]
    fn comments_pass_through() {
        let css = "/* header\n.not-a-rule {\n*/\n.a {\n}";
        assert_eq!(scope(css), "/* header\n.not-a-rule {\n*/\n.dark-theme .a {\n}");
    }

    #[test]
    fn split_selector_lists_are_prefixed() {
        assert_eq!(
            scope(".a,\n.b {\n}"),
            ".dark-theme .a,\n.dark-theme .b {\n}"
        );
    }

    #[test]
    fn braces_in_strings_are_text() {
        let css = ".a::before {\n  content: \"{\";\n}\n.b {\n  color: red;\n}";
        assert_eq!(
            scope(css),
            ".dark-theme .a::before {\n  content: \"{\";\n}\n.dark-theme .b {\n  color: red;\n}"
        );
        assert_eq!(
            scope("a[title='}'] {\n}"),
            ".dark-theme a[title='}'] {\n}"
        );
    }

    #[test]
    fn braces_in_trailing_comments_are_text() {
        let css = ".a {\n  color: red; /* } */\n}\n.b {\n}";
        assert_eq!(
            scope(css),
            ".dark-theme .a {\n  color: red; /* } */\n}\n.dark-theme .b {\n}"
        );
    }

    #[test]
    fn comment_spanning_lines_inside_a_rule() {
        let css = ".a {\n  /* {\n  } { */\n  color: red;\n}\n.b {\n}";
        assert_eq!(
            scope(css),
            ".dark-theme .a {\n  /* {\n  } { */\n  color: red;\n}\n.dark-theme .b {\n}"
        );
    }

    #[test]
    fn at_rule_brace_on_next_line() {
        let css = "@media (max-width: 600px)\n{\n  .nav {\n  }\n}";
        assert_eq!(
            scope(css),
            "@media (max-width: 600px)\n{\n  .dark-theme .nav {\n  }\n}"
        );
    }

    #[test]
    fn statement_at_rules_do_not_open_blocks() {
        assert_eq!(
            scope("@import url(\"base.css\");\n.a {\n}"),
            "@import url(\"base.css\");\n.dark-theme .a {\n}"
        );
    }

    #[test]
    fn crlf_line_endings_are_kept() {
        assert_eq!(
            scope(".a,\r\n.b {\r\n}\r\n"),
            ".dark-theme .a,\r\n.dark-theme .b {\r\n}\r\n"
        );
    }

    #[test]
    fn custom_scope() {
        assert_eq!(
            scope_stylesheet(":root {\n}\n.a {\n}", ".night").unwrap(),
            ".night {\n}\n.night .a {\n}"
        );
    }

    #[test]
    fn trailing_newline_is_preserved() {
        assert_eq!(scope(".a {\n}\n"), ".dark-theme .a {\n}\n");
    }

    #[test]
    fn stray_closing_brace_is_an_error() {
        assert_eq!(
            scope_stylesheet(".a {\n}\n}", DEFAULT_SCOPE),
            Err(ScopeError::UnbalancedBrace { line: 3 })
        );
    }

    #[test]
    fn unclosed_block_is_an_error() {
        assert_eq!(
            scope_stylesheet("@media print {\n.a {\n}", DEFAULT_SCOPE),
            Err(ScopeError::UnclosedBlock { depth: 1 })
        );
    }
}
