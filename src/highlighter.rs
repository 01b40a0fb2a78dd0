// ABOUTME: REPL syntax highlighter — colors bilingual keywords, built-ins, strings, numbers

use crate::keywords;
use rustyline::completion::Completer;
use rustyline::highlight::{CmdKind, Highlighter};
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::Helper;
use std::borrow::Cow;
use std::collections::HashSet;

const COLOR_RESET: &str = "\x1b[0m";
const COLOR_KEYWORD: &str = "\x1b[1;35m"; // Bold magenta
const COLOR_BUILTIN: &str = "\x1b[36m"; // Cyan
const COLOR_NUMBER: &str = "\x1b[33m"; // Yellow
const COLOR_STRING: &str = "\x1b[32m"; // Green
const COLOR_COMMENT: &str = "\x1b[90m"; // Bright black

pub struct ExoHelper;

impl ExoHelper {
    pub fn new() -> Self {
        ExoHelper
    }
}

impl Default for ExoHelper {
    fn default() -> Self {
        Self::new()
    }
}

impl Helper for ExoHelper {}

impl Completer for ExoHelper {
    type Candidate = String;
}

impl Hinter for ExoHelper {
    type Hint = String;
}

impl Validator for ExoHelper {}

impl Highlighter for ExoHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        let highlighted = highlight_line(line);
        if highlighted == line {
            Cow::Borrowed(line)
        } else {
            Cow::Owned(highlighted)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        true
    }
}

fn is_keyword(word: &str) -> bool {
    const FAMILIES: &[&[&str]] = &[
        keywords::DECLARE,
        keywords::FUNC,
        keywords::RETURN,
        keywords::IF,
        keywords::ELSE_IF,
        keywords::ELSE,
        keywords::WHILE,
        keywords::FOR,
        keywords::IN,
        keywords::BREAK,
        keywords::CONTINUE,
        keywords::END,
        keywords::ROUTE,
        keywords::OR,
        keywords::AND,
        keywords::NOT,
        keywords::TRUE_LITERAL,
        keywords::FALSE_LITERAL,
        keywords::NULL_LITERAL,
    ];
    FAMILIES.iter().any(|family| keywords::is_word(family, word))
}

fn builtin_names() -> HashSet<&'static str> {
    [
        "print", "input", "len", "type", "str", "int", "float", "sqrt", "pow", "abs", "round",
        "floor", "ceil", "max", "min", "sum", "random", "range", "push", "pop", "keys", "values",
        "join", "split", "readFile", "writeFile", "fileExists", "deleteFile", "sleep", "json",
        "parseJson", "html", "import", "export",
    ]
    .into_iter()
    .collect()
}

fn highlight_line(line: &str) -> String {
    let builtins = builtin_names();
    let mut result = String::new();
    let chars: Vec<char> = line.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '#' => {
                result.push_str(COLOR_COMMENT);
                while i < chars.len() {
                    result.push(chars[i]);
                    i += 1;
                }
                result.push_str(COLOR_RESET);
            }
            '"' | '\'' => {
                let quote = chars[i];
                let start = i;
                i += 1;
                while i < chars.len() && chars[i] != quote {
                    if chars[i] == '\\' && i + 1 < chars.len() {
                        i += 2;
                    } else {
                        i += 1;
                    }
                }
                if i < chars.len() {
                    i += 1;
                }
                result.push_str(COLOR_STRING);
                result.extend(&chars[start..i]);
                result.push_str(COLOR_RESET);
            }
            c if c.is_ascii_digit() => {
                let start = i;
                while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                    i += 1;
                }
                result.push_str(COLOR_NUMBER);
                result.extend(&chars[start..i]);
                result.push_str(COLOR_RESET);
            }
            c if c.is_whitespace() => {
                result.push(c);
                i += 1;
            }
            _ => {
                let start = i;
                while i < chars.len()
                    && !chars[i].is_whitespace()
                    && !"()[]{},:\"'#".contains(chars[i])
                {
                    i += 1;
                }
                if i == start {
                    result.push(chars[i]);
                    i += 1;
                    continue;
                }
                let word: String = chars[start..i].iter().collect();
                if is_keyword(&word) {
                    result.push_str(COLOR_KEYWORD);
                    result.push_str(&word);
                    result.push_str(COLOR_RESET);
                } else if builtins.contains(word.as_str()) {
                    result.push_str(COLOR_BUILTIN);
                    result.push_str(&word);
                    result.push_str(COLOR_RESET);
                } else {
                    result.push_str(&word);
                }
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colors_english_and_arabic_keywords_alike() {
        assert!(highlight_line("let x = 1").contains(COLOR_KEYWORD));
        assert!(highlight_line("متغير x = 1").contains(COLOR_KEYWORD));
    }

    #[test]
    fn colors_string_literals() {
        assert!(highlight_line("print(\"hi\")").contains(COLOR_STRING));
    }

    #[test]
    fn colors_builtin_calls() {
        assert!(highlight_line("len(xs)").contains(COLOR_BUILTIN));
    }

    #[test]
    fn colors_trailing_comment() {
        assert!(highlight_line("x = 1 # note").contains(COLOR_COMMENT));
    }
}
