// ABOUTME: Bilingual English/Arabic keyword matrix (spec §6.2)

/// Declaration keywords: `let | var | const | متغير`.
pub const DECLARE: &[&str] = &["let", "var", "const", "متغير"];
pub const FUNC: &[&str] = &["func", "function", "دالة"];
pub const RETURN: &[&str] = &["return", "ارجع"];
pub const IF: &[&str] = &["if", "اذا"];
pub const ELSE_IF: &[&str] = &["else if", "والا اذا"];
pub const ELSE: &[&str] = &["else", "والا"];
pub const WHILE: &[&str] = &["while", "بينما"];
pub const FOR: &[&str] = &["for", "لكل"];
pub const IN: &[&str] = &["in", "في"];
pub const BREAK: &[&str] = &["break", "اكسر"];
pub const CONTINUE: &[&str] = &["continue", "استمر"];
pub const END: &[&str] = &["end", "نهاية"];
pub const ROUTE: &[&str] = &["route", "مسار"];

pub const OR: &[&str] = &["or", "او", "||"];
pub const AND: &[&str] = &["and", "و", "&&"];
pub const NOT: &[&str] = &["not", "ليس", "!"];

pub const TRUE_LITERAL: &[&str] = &["True", "true", "صح"];
pub const FALSE_LITERAL: &[&str] = &["False", "false", "خطأ"];
pub const NULL_LITERAL: &[&str] = &["null", "None", "فارغ"];

/// Every keyword that opens a block that must be matched by `end`/`نهاية`
/// (spec §4.4 "Block extraction"). Used by the statement runner's
/// depth-tracking scan; the opener whose own body is being collected is not
/// re-counted by the caller.
pub fn is_block_opener(word: &str) -> bool {
    is_word(FUNC, word) || is_word(IF, word) || is_word(WHILE, word) || is_word(FOR, word) || is_word(ROUTE, word)
}

/// Exact (whole-token) match against one of `words`.
pub fn is_word(words: &[&str], token: &str) -> bool {
    words.iter().any(|w| *w == token)
}

/// If `line` begins with one of `words` at a character boundary (so a
/// multi-byte Arabic keyword is never sliced mid-codepoint — spec §9's
/// explicit warning) followed by whitespace or end-of-string, returns the
/// remainder of the line with that prefix and one separating space removed.
pub fn strip_keyword_prefix<'a>(line: &'a str, words: &[&str]) -> Option<&'a str> {
    let trimmed = line;
    for word in words {
        if let Some(rest) = strip_one(trimmed, word) {
            return Some(rest);
        }
    }
    None
}

fn strip_one<'a>(line: &'a str, word: &str) -> Option<&'a str> {
    if !line.starts_with(word) {
        return None;
    }
    let word_chars = word.chars().count();
    let mut chars = line.char_indices();
    // Advance past `word_chars` characters to find the byte offset right
    // after the keyword — never assume the keyword's byte length equals its
    // char length (Arabic keywords are multi-byte).
    let byte_len = match chars.nth(word_chars) {
        Some((idx, _)) => idx,
        None => line.len(),
    };
    let rest = &line[byte_len..];
    let next_char_is_boundary = rest.is_empty() || rest.starts_with(char::is_whitespace);
    if !next_char_is_boundary {
        return None;
    }
    Some(rest.trim_start())
}

/// Like `strip_keyword_prefix`, but returns the byte offset right after the
/// matched keyword (before the separating whitespace is trimmed away) instead
/// of the remainder — callers that need to measure a span, not just strip a
/// prefix, use this (spec §4.4 inline block form).
pub fn match_keyword_end(line: &str, words: &[&str]) -> Option<usize> {
    for word in words {
        if !line.starts_with(word) {
            continue;
        }
        let word_chars = word.chars().count();
        let mut chars = line.char_indices();
        let byte_len = match chars.nth(word_chars) {
            Some((idx, _)) => idx,
            None => line.len(),
        };
        let rest = &line[byte_len..];
        if rest.is_empty() || rest.starts_with(char::is_whitespace) {
            return Some(byte_len);
        }
    }
    None
}

/// Returns the first whitespace-delimited word of `line`.
pub fn leading_word(line: &str) -> &str {
    line.split_whitespace().next().unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_english_declaration_keyword() {
        let rest = strip_keyword_prefix("let x = 1", DECLARE).unwrap();
        assert_eq!(rest, "x = 1");
    }

    #[test]
    fn strips_arabic_declaration_keyword_at_char_boundary() {
        let rest = strip_keyword_prefix("متغير x = 1", DECLARE).unwrap();
        assert_eq!(rest, "x = 1");
    }

    #[test]
    fn does_not_match_as_a_substring_prefix() {
        // "ifx" should not be treated as `if` followed by "x"
        assert!(strip_keyword_prefix("ifx = 1", IF).is_none());
    }

    #[test]
    fn else_if_is_checked_before_else() {
        assert!(strip_keyword_prefix("else if x > 0", ELSE_IF).is_some());
    }

    #[test]
    fn block_opener_detection() {
        assert!(is_block_opener("func"));
        assert!(is_block_opener("دالة"));
        assert!(!is_block_opener("let"));
    }
}
