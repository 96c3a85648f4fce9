// Copyright (c) 2024 The Regents of the University of Michigan.
// Part of cibconf, released under the BSD 3-Clause License.

//! Text and `pcs` command renderers.
//!
//! Text renderers return lines without trailing newlines, indented by two
//! spaces per nesting level. Command renderers return one `Vec<String>` per
//! command: the first element is the command itself and the remaining
//! elements are continuation parts that already carry their indentation.
//! Use [`cmd_to_lines`] and [`cmds_to_string`] to join them.

pub mod alert;
pub mod defaults;
pub mod node;
pub mod nvset;
pub mod property;
pub mod resource;
pub mod rule;

use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;

const INDENT: &str = "  ";

/// Indent every non-empty line by `level` steps.
pub fn indent<I>(lines: I, level: usize) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let prefix = INDENT.repeat(level);
    lines
        .into_iter()
        .map(|line| {
            if line.is_empty() {
                line
            } else {
                format!("{prefix}{line}")
            }
        })
        .collect()
}

/// Double quote a text value when it contains a space or `=`.
pub fn quote_value(value: &str) -> Cow<'_, str> {
    if value.contains([' ', '=']) {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\\\"")))
    } else {
        Cow::Borrowed(value)
    }
}

/// Format pairs as `name=value` text tokens, quoting values as needed.
pub fn format_name_value_list<'a, I>(pairs: I) -> Vec<String>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    pairs
        .into_iter()
        .map(|(name, value)| format!("{name}={}", quote_value(value)))
        .collect()
}

/// Format pairs sorted by name (then value) as `name=value` text tokens.
pub fn format_name_value_sorted<'a, I>(pairs: I) -> Vec<String>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut pairs: Vec<(&str, &str)> = pairs.into_iter().collect();
    pairs.sort_unstable();
    format_name_value_list(pairs)
}

fn unsafe_shell_characters() -> &'static Regex {
    static UNSAFE: OnceLock<Regex> = OnceLock::new();
    UNSAFE.get_or_init(|| Regex::new(r"[^\w@%+=:,./-]").expect("valid regular expression"))
}

/// Quote a string for a POSIX shell.
///
/// Strings made only of safe characters are returned unchanged, everything
/// else is wrapped in single quotes.
///
pub fn shell_quote(value: &str) -> Cow<'_, str> {
    if value.is_empty() {
        return Cow::Borrowed("''");
    }
    if value.is_ascii() && !unsafe_shell_characters().is_match(value) {
        return Cow::Borrowed(value);
    }
    Cow::Owned(format!("'{}'", value.replace('\'', r#"'"'"'"#)))
}

/// Format pairs as shell quoted `name=value` tokens.
pub fn pairs_to_cmd<'a, I>(pairs: I) -> Vec<String>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    pairs
        .into_iter()
        .map(|(name, value)| shell_quote(&format!("{name}={value}")).into_owned())
        .collect()
}

/// The value `pcs` accepts for a boolean option.
pub fn bool_to_cli_value(value: bool) -> &'static str {
    if value {
        "1"
    } else {
        "0"
    }
}

/// Append line continuations to all parts of a command but the last.
pub fn cmd_to_lines(cmd: &[String]) -> Vec<String> {
    let last = cmd.len().saturating_sub(1);
    cmd.iter()
        .enumerate()
        .map(|(i, part)| {
            if i == last {
                part.clone()
            } else {
                format!("{part} \\")
            }
        })
        .collect()
}

/// Join commands into one shell script fragment.
pub fn cmds_to_string(cmds: &[Vec<String>]) -> String {
    cmds.iter()
        .map(|cmd| cmd.join(" \\\n"))
        .collect::<Vec<_>>()
        .join(";\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indent_lines() {
        let lines = vec!["a".to_string(), String::new(), "  b".to_string()];
        assert_eq!(indent(lines.clone(), 0), lines);
        assert_eq!(indent(lines, 2), vec!["    a", "", "      b"]);
    }

    #[test]
    fn name_value_quoting() {
        assert_eq!(
            format_name_value_list([
                ("a", "b"),
                ("c", "d e"),
                ("f", "g=h"),
                ("i", "j \"k\""),
                ("l", ""),
                ("m", "n\to"),
            ]),
            vec!["a=b", "c=\"d e\"", "f=\"g=h\"", "i=\"j \\\"k\\\"\"", "l=", "m=n\to"]
        );
    }

    #[test]
    fn name_value_sorted() {
        assert_eq!(
            format_name_value_sorted([("b", "1"), ("a", "2"), ("a", "1")]),
            vec!["a=1", "a=2", "b=1"]
        );
    }

    #[test]
    fn quote_for_shell() {
        assert_eq!(shell_quote("simple"), "simple");
        assert_eq!(shell_quote("a=b,c:d/e.f@g%h+i-j_k"), "a=b,c:d/e.f@g%h+i-j_k");
        assert_eq!(shell_quote(""), "''");
        assert_eq!(shell_quote("a b"), "'a b'");
        assert_eq!(shell_quote("$HOME"), "'$HOME'");
        assert_eq!(shell_quote("it's"), r#"'it'"'"'s'"#);
        assert_eq!(shell_quote("čaj"), "'čaj'");
    }

    #[test]
    fn pairs_for_shell() {
        assert_eq!(
            pairs_to_cmd([("a", "b"), ("c", "d e")]),
            vec!["a=b", "'c=d e'"]
        );
    }

    #[test]
    fn join_commands() {
        let cmds = vec![
            vec!["pcs a".to_string(), "  b".to_string()],
            vec!["pcs c".to_string()],
        ];
        assert_eq!(cmds_to_string(&cmds), "pcs a \\\n  b;\npcs c");
        assert_eq!(cmd_to_lines(&cmds[0]), vec!["pcs a \\", "  b"]);
        assert_eq!(cmd_to_lines(&cmds[1]), vec!["pcs c"]);
        assert!(cmd_to_lines(&[]).is_empty());
    }
}
