// ABOUTME: Tokenizer-free recursive precedence-climbing expression evaluator (spec §4.2)

use crate::env::Scope;
use crate::error::ExoError;
use crate::interpreter::Interpreter;
use crate::keywords;
use crate::value::Value;
use std::rc::Rc;

/// One char of `expr` annotated with whether this position sits at bracket
/// depth 0 and outside a string literal — the only positions an operator
/// split or an outer-paren strip is allowed to touch (spec §4.2 step 2).
pub(crate) struct Scan {
    pub(crate) idx: usize,
    pub(crate) ch: char,
    pub(crate) safe: bool,
}

pub(crate) fn scan(expr: &str) -> Vec<Scan> {
    let mut depth = 0i32;
    let mut in_string: Option<char> = None;
    let mut escape = false;
    let mut out = Vec::with_capacity(expr.len());
    for (idx, ch) in expr.char_indices() {
        let safe = depth == 0 && in_string.is_none();
        out.push(Scan { idx, ch, safe });
        if let Some(quote) = in_string {
            if escape {
                escape = false;
            } else if ch == '\\' {
                escape = true;
            } else if ch == quote {
                in_string = None;
            }
            continue;
        }
        match ch {
            '"' | '\'' => in_string = Some(ch),
            '(' | '[' | '{' => depth += 1,
            ')' | ']' | '}' => depth -= 1,
            _ => {}
        }
    }
    out
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if is_ident_start(c) => chars.all(is_ident_char),
        _ => false,
    }
}

/// Strips a single layer of parentheses that wraps the entire expression at
/// balanced depth. Nested parens that close before the final character are
/// left alone (spec §4.2 step 1).
fn strip_outer_parens(expr: &str) -> &str {
    let trimmed = expr.trim();
    if !trimmed.starts_with('(') || !trimmed.ends_with(')') {
        return trimmed;
    }
    let scanned = scan(trimmed);
    let mut depth = 0i32;
    for (i, s) in scanned.iter().enumerate() {
        match s.ch {
            '(' if s.safe || depth > 0 => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 && i != scanned.len() - 1 {
                    return trimmed;
                }
            }
            _ => {}
        }
    }
    if depth == 0 {
        trimmed[1..trimmed.len() - 1].trim()
    } else {
        trimmed
    }
}

/// A word-style operator (`and`, `او`, `not`) must sit on a character
/// boundary; a symbol-style operator (`+`, `==`) never needs one.
fn word_boundary_ok(expr: &str, start: usize, end: usize) -> bool {
    let before_ok = expr[..start]
        .chars()
        .next_back()
        .map_or(true, |c| !is_ident_char(c));
    let after_ok = expr[end..].chars().next().map_or(true, |c| !is_ident_char(c));
    before_ok && after_ok
}

fn is_word_op(op: &str) -> bool {
    op.chars().next().is_some_and(|c| c.is_alphabetic())
}

/// Finds every depth-0, non-string occurrence of any operator in `ops`
/// (checked in the given order at each position, so callers list longer
/// operators before their prefixes, e.g. `==` before nothing conflicting,
/// `>=` before `>`). Returns `(start_byte, end_byte, matched_op)` triples in
/// left-to-right order.
fn find_operator_splits(expr: &str, ops: &[&str]) -> Vec<(usize, usize, String)> {
    let scanned = scan(expr);
    let mut hits = Vec::new();
    let mut i = 0usize;
    while i < scanned.len() {
        if scanned[i].safe {
            let byte_pos = scanned[i].idx;
            let rest = &expr[byte_pos..];
            let mut matched = None;
            for op in ops {
                if rest.starts_with(op) {
                    let end = byte_pos + op.len();
                    if is_word_op(op) && !word_boundary_ok(expr, byte_pos, end) {
                        continue;
                    }
                    matched = Some((*op, end));
                    break;
                }
            }
            if let Some((op, end)) = matched {
                hits.push((byte_pos, end, op.to_string()));
                while i < scanned.len() && scanned[i].idx < end {
                    i += 1;
                }
                continue;
            }
        }
        i += 1;
    }
    hits
}

/// Splits `expr` on every depth-0 occurrence of one of `ops`, returning the
/// operand strings and the operators between them. An operand that is empty
/// after trimming (only possible directly after a split) is treated as `0` —
/// this reproduces the documented unary-minus quirk: `-3` and `a + -3` both
/// evaluate sensibly even though the splitter has no dedicated unary rule
/// (spec §9 "Recursive-descent without a tokenizer").
fn split_all(expr: &str, ops: &[&str]) -> Option<(Vec<String>, Vec<String>)> {
    let hits = find_operator_splits(expr, ops);
    if hits.is_empty() {
        return None;
    }
    let mut operands = Vec::new();
    let mut operators = Vec::new();
    let mut cursor = 0usize;
    for (start, end, op) in &hits {
        let piece = expr[cursor..*start].trim();
        operands.push(if piece.is_empty() { "0".to_string() } else { piece.to_string() });
        operators.push(op.clone());
        cursor = *end;
    }
    let tail = expr[cursor..].trim();
    operands.push(if tail.is_empty() { "0".to_string() } else { tail.to_string() });
    Some((operands, operators))
}

/// Splits on only the first depth-0 occurrence (used for the non-chaining
/// relational level, spec §4.2.3.4).
fn split_first<'a>(expr: &'a str, ops: &[&str]) -> Option<(&'a str, String, &'a str)> {
    let hits = find_operator_splits(expr, ops);
    let (start, end, op) = hits.into_iter().next()?;
    Some((expr[..start].trim(), op, expr[end..].trim()))
}

/// Splits comma-separated items at depth 0 (list/map literals, call args).
fn split_commas(inner: &str) -> Vec<String> {
    if inner.trim().is_empty() {
        return Vec::new();
    }
    let scanned = scan(inner);
    let mut parts = Vec::new();
    let mut cursor = 0usize;
    for s in &scanned {
        if s.safe && s.ch == ',' {
            parts.push(inner[cursor..s.idx].trim().to_string());
            cursor = s.idx + 1;
        }
    }
    parts.push(inner[cursor..].trim().to_string());
    parts
}

fn skip_ws(s: &str, from: usize) -> usize {
    s[from..]
        .char_indices()
        .find(|(_, c)| !c.is_whitespace())
        .map(|(i, _)| from + i)
        .unwrap_or(s.len())
}

const INFIX_LEVELS: &[&[&str]] = &[
    keywords::OR,
    keywords::AND,
    &["==", "!=", ">=", "<=", ">", "<"],
    &["+", "-"],
    &["*", "/", "%"],
    &["^"],
];

/// Matches one operator from `INFIX_LEVELS` at `at`, honoring the same
/// word-boundary rule as `find_operator_splits`. Returns the byte offset
/// right after the matched operator.
fn match_infix_operator(s: &str, at: usize) -> Option<usize> {
    if at >= s.len() {
        return None;
    }
    let rest = &s[at..];
    for level in INFIX_LEVELS {
        for op in *level {
            if rest.starts_with(op) {
                let end = at + op.len();
                if is_word_op(op) && !word_boundary_ok(s, at, end) {
                    continue;
                }
                return Some(end);
            }
        }
    }
    None
}

/// Consumes one of `words` at `at` if present at a word boundary, returning
/// the offset right after it.
fn match_prefix_word(s: &str, at: usize, words: &[&str]) -> Option<usize> {
    let rest = &s[at..];
    for word in words {
        if rest.starts_with(word) {
            let end = at + word.len();
            if is_word_op(word) && !word_boundary_ok(s, at, end) {
                continue;
            }
            return Some(end);
        }
    }
    None
}

/// Consumes a string literal starting at `start` (which must be a quote
/// char), returning the offset right after the matching closing quote.
fn consume_string(s: &str, start: usize, quote: char) -> Option<usize> {
    let mut escape = false;
    for (i, c) in s[start + 1..].char_indices() {
        if escape {
            escape = false;
            continue;
        }
        if c == '\\' {
            escape = true;
            continue;
        }
        if c == quote {
            return Some(start + 1 + i + c.len_utf8());
        }
    }
    None
}

/// Consumes a bracketed group starting at `start` (`s[start..]` begins with
/// `open`), returning the offset right after the matching `close`. Content
/// inside a nested string literal is never mistaken for a bracket.
fn consume_bracketed(s: &str, start: usize, open: char, close: char) -> Option<usize> {
    let mut depth = 0i32;
    let mut in_string: Option<char> = None;
    let mut escape = false;
    for (i, c) in s[start..].char_indices() {
        if let Some(quote) = in_string {
            if escape {
                escape = false;
            } else if c == '\\' {
                escape = true;
            } else if c == quote {
                in_string = None;
            }
            continue;
        }
        match c {
            '"' | '\'' => in_string = Some(c),
            _ if c == open => depth += 1,
            _ if c == close => {
                depth -= 1;
                if depth == 0 {
                    return Some(start + i + c.len_utf8());
                }
            }
            _ => {}
        }
    }
    None
}

fn consume_number(s: &str, start: usize) -> usize {
    let bytes = s.as_bytes();
    let mut i = start;
    while i < s.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    if i < s.len() && bytes[i] == b'.' && i + 1 < s.len() && bytes[i + 1].is_ascii_digit() {
        i += 1;
        while i < s.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
    }
    i
}

fn consume_word(s: &str, start: usize) -> usize {
    let mut end = start;
    for (i, c) in s[start..].char_indices() {
        if is_ident_char(c) {
            end = start + i + c.len_utf8();
        } else {
            break;
        }
    }
    end
}

/// Consumes one primary — a string, a bracketed group, a number, a unary
/// minus wrapping another primary, or an identifier optionally extended with
/// call args / indexing / a property-access chain — returning the offset
/// right after it, or `None` if `s[start..]` doesn't start a primary at all.
fn consume_primary(s: &str, start: usize) -> Option<usize> {
    let c = s[start..].chars().next()?;
    let mut pos = match c {
        '"' | '\'' => consume_string(s, start, c)?,
        '(' => consume_bracketed(s, start, '(', ')')?,
        '[' => consume_bracketed(s, start, '[', ']')?,
        '{' => consume_bracketed(s, start, '{', '}')?,
        '-' => consume_primary(s, start + 1)?,
        c if c.is_ascii_digit() => consume_number(s, start),
        c if is_ident_start(c) => consume_word(s, start),
        _ => return None,
    };
    loop {
        let scan_pos = skip_ws(s, pos);
        match s[scan_pos..].chars().next() {
            Some('(') => pos = consume_bracketed(s, scan_pos, '(', ')')?,
            Some('[') => pos = consume_bracketed(s, scan_pos, '[', ']')?,
            Some('.') => {
                let after_dot = scan_pos + 1;
                match s[after_dot..].chars().next() {
                    Some(d) if is_ident_start(d) => pos = consume_word(s, after_dot),
                    _ => break,
                }
            }
            _ => break,
        }
    }
    Some(pos)
}

/// Returns the byte length of the shortest prefix of `s` that parses as one
/// complete expression — a primary, optionally extended by infix operators
/// and further primaries. Used to find where a block header's
/// condition/iterable ends when a body statement follows directly on the
/// same physical line (spec §4.4's inline block form, e.g.
/// `for i in range(1, 5) s = s + i end`). Returns 0 if no primary starts at
/// the beginning of `s`.
pub(crate) fn expr_prefix_len(s: &str) -> usize {
    let mut pos = skip_ws(s, 0);
    while let Some(after) = match_prefix_word(s, pos, keywords::NOT) {
        pos = skip_ws(s, after);
    }
    let Some(mut end) = consume_primary(s, pos) else {
        return 0;
    };
    loop {
        let op_start = skip_ws(s, end);
        let Some(op_end) = match_infix_operator(s, op_start) else {
            break;
        };
        let operand_start = skip_ws(s, op_end);
        match consume_primary(s, operand_start) {
            Some(next_end) => end = next_end,
            None => break,
        }
    }
    end
}

pub fn eval_expr(expr: &str, scope: &Rc<Scope>, interp: &mut Interpreter) -> Result<Value, ExoError> {
    let expr = strip_outer_parens(expr);
    if expr.is_empty() {
        return Err(ExoError::syntax("empty expression"));
    }

    if let Some((operands, _)) = split_all(expr, keywords::OR) {
        let mut result = Value::Bool(false);
        for operand in &operands {
            let v = eval_expr(operand, scope, interp)?;
            if v.is_truthy() {
                return Ok(Value::Bool(true));
            }
            result = v;
        }
        return Ok(Value::Bool(result.is_truthy()));
    }

    if let Some((operands, _)) = split_all(expr, keywords::AND) {
        let mut last = Value::Bool(true);
        for operand in &operands {
            let v = eval_expr(operand, scope, interp)?;
            if !v.is_truthy() {
                return Ok(Value::Bool(false));
            }
            last = v;
        }
        return Ok(Value::Bool(last.is_truthy()));
    }

    if let Some(rest) = keywords::strip_keyword_prefix(expr, keywords::NOT) {
        let v = eval_expr(rest, scope, interp)?;
        return Ok(Value::Bool(!v.is_truthy()));
    }

    const RELATIONAL: &[&str] = &["==", "!=", ">=", "<=", ">", "<"];
    if let Some((left, op, right)) = split_first(expr, RELATIONAL) {
        let lv = eval_expr(left, scope, interp)?;
        let rv = eval_expr(right, scope, interp)?;
        return compare(&op, &lv, &rv, expr);
    }

    const ADDITIVE: &[&str] = &["+", "-"];
    if let Some((operands, ops)) = split_all(expr, ADDITIVE) {
        let mut acc = eval_expr(&operands[0], scope, interp)?;
        for (op, operand) in ops.iter().zip(&operands[1..]) {
            let rhs = eval_expr(operand, scope, interp)?;
            acc = apply_additive(op, acc, rhs, expr)?;
        }
        return Ok(acc);
    }

    const MULTIPLICATIVE: &[&str] = &["*", "/", "%"];
    if let Some((operands, ops)) = split_all(expr, MULTIPLICATIVE) {
        let mut acc = eval_expr(&operands[0], scope, interp)?;
        for (op, operand) in ops.iter().zip(&operands[1..]) {
            let rhs = eval_expr(operand, scope, interp)?;
            acc = apply_multiplicative(op, acc, rhs, expr)?;
        }
        return Ok(acc);
    }

    const EXPONENT: &[&str] = &["^"];
    if let Some((operands, _)) = split_all(expr, EXPONENT) {
        let mut values = Vec::with_capacity(operands.len());
        for operand in &operands {
            values.push(eval_expr(operand, scope, interp)?);
        }
        let mut acc = values.pop().unwrap();
        while let Some(base) = values.pop() {
            acc = apply_pow(base, acc)?;
        }
        return Ok(acc);
    }

    base_value(expr, scope, interp)
}

fn compare(op: &str, lv: &Value, rv: &Value, context: &str) -> Result<Value, ExoError> {
    if op == "==" {
        return Ok(Value::Bool(lv == rv));
    }
    if op == "!=" {
        return Ok(Value::Bool(lv != rv));
    }
    let ordering = match (lv, rv) {
        (Value::Int(a), Value::Int(b)) => a.partial_cmp(b),
        (Value::Float(a), Value::Float(b)) => a.partial_cmp(b),
        (Value::Int(a), Value::Float(b)) => (*a as f64).partial_cmp(b),
        (Value::Float(a), Value::Int(b)) => a.partial_cmp(&(*b as f64)),
        (Value::Str(a), Value::Str(b)) => a.partial_cmp(b),
        _ => {
            return Err(ExoError::type_error("comparison", "two numbers or two strings", lv.type_name())
                .with_context(context))
        }
    };
    let ordering = ordering.ok_or_else(|| ExoError::type_error("comparison", "comparable values", lv.type_name()))?;
    let result = match op {
        ">" => ordering.is_gt(),
        "<" => ordering.is_lt(),
        ">=" => ordering.is_ge(),
        "<=" => ordering.is_le(),
        _ => unreachable!(),
    };
    Ok(Value::Bool(result))
}

fn apply_additive(op: &str, lv: Value, rv: Value, context: &str) -> Result<Value, ExoError> {
    match (op, &lv, &rv) {
        ("+", Value::Str(a), Value::Str(b)) => Ok(Value::str(format!("{}{}", a, b))),
        ("+", Value::List(a), Value::List(b)) => {
            let mut items = a.borrow().clone();
            items.extend(b.borrow().iter().cloned());
            Ok(Value::list(items))
        }
        ("+", Value::Int(a), Value::Int(b)) => Ok(Value::Int(a + b)),
        ("-", Value::Int(a), Value::Int(b)) => Ok(Value::Int(a - b)),
        (_, a, b) => {
            let (af, bf) = (numeric(a, context)?, numeric(b, context)?);
            match op {
                "+" => Ok(Value::Float(af + bf)),
                "-" => Ok(Value::Float(af - bf)),
                _ => unreachable!(),
            }
        }
    }
}

fn apply_multiplicative(op: &str, lv: Value, rv: Value, context: &str) -> Result<Value, ExoError> {
    match op {
        "*" => match (&lv, &rv) {
            (Value::Int(a), Value::Int(b)) => Ok(Value::Int(a * b)),
            _ => Ok(Value::Float(numeric(&lv, context)? * numeric(&rv, context)?)),
        },
        "/" => {
            let (a, b) = (numeric(&lv, context)?, numeric(&rv, context)?);
            if b == 0.0 {
                return Err(ExoError::arithmetic("division by zero").with_context(context));
            }
            Ok(Value::Float(a / b))
        }
        "%" => match (&lv, &rv) {
            (Value::Int(a), Value::Int(b)) => {
                if *b == 0 {
                    return Err(ExoError::arithmetic("modulo by zero").with_context(context));
                }
                Ok(Value::Int(a % b))
            }
            _ => {
                let (a, b) = (numeric(&lv, context)?, numeric(&rv, context)?);
                if b == 0.0 {
                    return Err(ExoError::arithmetic("modulo by zero").with_context(context));
                }
                Ok(Value::Float(a % b))
            }
        },
        _ => unreachable!(),
    }
}

fn apply_pow(base: Value, exp: Value) -> Result<Value, ExoError> {
    if let (Value::Int(b), Value::Int(e)) = (&base, &exp) {
        if *e >= 0 {
            return Ok(Value::Int(b.pow(*e as u32)));
        }
    }
    let (b, e) = (numeric(&base, "^")?, numeric(&exp, "^")?);
    Ok(Value::Float(b.powf(e)))
}

fn numeric(v: &Value, context: &str) -> Result<f64, ExoError> {
    match v {
        Value::Int(n) => Ok(*n as f64),
        Value::Float(n) => Ok(*n),
        other => Err(ExoError::type_error("arithmetic", "number", other.type_name()).with_context(context)),
    }
}

fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some('n') => out.push('\n'),
                Some('t') => out.push('\t'),
                Some('r') => out.push('\r'),
                Some('"') => out.push('"'),
                Some('\'') => out.push('\''),
                Some('\\') => out.push('\\'),
                Some(other) => {
                    out.push('\\');
                    out.push(other);
                }
                None => out.push('\\'),
            }
        } else {
            out.push(c);
        }
    }
    out
}

fn as_balanced_wrapped(expr: &str, open: char, close: char) -> Option<&str> {
    if !(expr.starts_with(open) && expr.ends_with(close)) {
        return None;
    }
    let scanned = scan(expr);
    let mut depth = 0i32;
    for (i, s) in scanned.iter().enumerate() {
        if s.ch == open {
            depth += 1;
        } else if s.ch == close {
            depth -= 1;
            if depth == 0 {
                return if i == scanned.len() - 1 { Some(&expr[1..expr.len() - 1]) } else { None };
            }
        }
    }
    None
}

fn call_procedure(name: &str, args: Vec<Value>, scope: &Rc<Scope>, interp: &mut Interpreter) -> Result<Value, ExoError> {
    let callee = scope.get(name);
    match callee {
        Some(Value::Procedure(proc)) => crate::exec::call_user_procedure(&proc, args, interp),
        Some(Value::Builtin(builtin_name)) => call_builtin(&builtin_name, &args, interp),
        Some(_) => Err(ExoError::type_error(name, "callable", "non-callable value")),
        None => {
            if interp.builtins.contains_key(name) {
                call_builtin(name, &args, interp)
            } else {
                Err(ExoError::name(format!("'{}' is not declared", name)))
            }
        }
    }
}

fn call_builtin(name: &str, args: &[Value], interp: &mut Interpreter) -> Result<Value, ExoError> {
    let f = *interp
        .builtins
        .get(name)
        .ok_or_else(|| ExoError::name(format!("unknown procedure '{}'", name)))?;
    f(args, interp)
}

fn base_value(expr: &str, scope: &Rc<Scope>, interp: &mut Interpreter) -> Result<Value, ExoError> {
    if keywords::is_word(keywords::TRUE_LITERAL, expr) {
        return Ok(Value::Bool(true));
    }
    if keywords::is_word(keywords::FALSE_LITERAL, expr) {
        return Ok(Value::Bool(false));
    }
    if keywords::is_word(keywords::NULL_LITERAL, expr) {
        return Ok(Value::Null);
    }

    if (expr.starts_with('"') && expr.ends_with('"') && expr.len() >= 2)
        || (expr.starts_with('\'') && expr.ends_with('\'') && expr.len() >= 2)
    {
        let quote = expr.chars().next().unwrap();
        if let Some(inner) = as_balanced_wrapped(expr, quote, quote) {
            return Ok(Value::str(unescape(inner)));
        }
    }

    if let Some(inner) = as_balanced_wrapped(expr, '[', ']') {
        let mut items = Vec::new();
        for piece in split_commas(inner) {
            items.push(eval_expr(&piece, scope, interp)?);
        }
        return Ok(Value::list(items));
    }

    if let Some(inner) = as_balanced_wrapped(expr, '{', '}') {
        let mut entries = Vec::new();
        for piece in split_commas(inner) {
            // A `:`-less pair is silently dropped (spec §4.2.4, §9 documented quirk).
            if let Some((key_str, value_str)) = split_first(&piece, &[":"]) {
                let key = eval_expr(key_str, scope, interp)?;
                let value = eval_expr(&value_str, scope, interp)?;
                entries.push((key, value));
            }
        }
        return Ok(Value::map(entries));
    }

    if let Some((name, inner)) = call_syntax(expr) {
        let mut args = Vec::new();
        for piece in split_commas(inner) {
            args.push(eval_expr(&piece, scope, interp)?);
        }
        return call_procedure(name, args, scope, interp);
    }

    if let Some((name, index_expr)) = index_syntax(expr) {
        let index = eval_expr(index_expr, scope, interp)?;
        let base = scope
            .get(name)
            .ok_or_else(|| ExoError::name(format!("'{}' is not declared", name)))?;
        return index_into(&base, &index);
    }

    if let Some(segments) = property_path(expr) {
        let mut current = scope
            .get(segments[0])
            .ok_or_else(|| ExoError::name(format!("'{}' is not declared", segments[0])))?;
        for segment in &segments[1..] {
            current = map_get(&current, segment)?;
        }
        return Ok(current);
    }

    if is_identifier(expr) {
        return scope
            .get(expr)
            .ok_or_else(|| ExoError::name(format!("'{}' is not declared", expr)));
    }

    if let Ok(i) = expr.parse::<i64>() {
        return Ok(Value::Int(i));
    }
    if expr.contains('.') {
        if let Ok(f) = expr.parse::<f64>() {
            return Ok(Value::Float(f));
        }
    }

    Err(ExoError::syntax(format!("invalid expression: {}", expr)))
}

pub(crate) fn call_syntax(expr: &str) -> Option<(&str, &str)> {
    if !expr.ends_with(')') {
        return None;
    }
    let open = expr.find('(')?;
    let name = expr[..open].trim();
    if !is_identifier(name) {
        return None;
    }
    let rest = &expr[open..];
    let inner = as_balanced_wrapped(rest, '(', ')')?;
    Some((name, inner))
}

pub(crate) fn index_syntax(expr: &str) -> Option<(&str, &str)> {
    if !expr.ends_with(']') {
        return None;
    }
    let open = expr.find('[')?;
    let name = expr[..open].trim();
    if !is_identifier(name) {
        return None;
    }
    let rest = &expr[open..];
    let inner = as_balanced_wrapped(rest, '[', ']')?;
    Some((name, inner))
}

pub(crate) fn property_path(expr: &str) -> Option<Vec<&str>> {
    if !expr.contains('.') {
        return None;
    }
    let scanned = scan(expr);
    let mut segments = Vec::new();
    let mut cursor = 0usize;
    for s in &scanned {
        if s.safe && s.ch == '.' {
            segments.push(&expr[cursor..s.idx]);
            cursor = s.idx + 1;
        }
    }
    segments.push(&expr[cursor..]);
    if segments.len() < 2 || segments.iter().any(|s| !is_identifier(s)) {
        return None;
    }
    Some(segments)
}

pub fn map_get(container: &Value, key: &str) -> Result<Value, ExoError> {
    match container {
        Value::Map(entries) => entries
            .borrow()
            .iter()
            .find(|(k, _)| matches!(k, Value::Str(s) if s == key))
            .map(|(_, v)| v.clone())
            .ok_or_else(|| ExoError::name(format!("Key not found: {}", key))),
        other => Err(ExoError::type_error("property access", "map", other.type_name())),
    }
}

pub fn map_set(container: &Value, key: &str, value: Value) -> Result<(), ExoError> {
    match container {
        Value::Map(entries) => {
            let mut entries = entries.borrow_mut();
            if let Some(slot) = entries.iter_mut().find(|(k, _)| matches!(k, Value::Str(s) if s == key)) {
                slot.1 = value;
            } else {
                entries.push((Value::str(key), value));
            }
            Ok(())
        }
        other => Err(ExoError::type_error("property assignment", "map", other.type_name())),
    }
}

pub fn index_into(base: &Value, index: &Value) -> Result<Value, ExoError> {
    match base {
        Value::List(items) => {
            let i = match index {
                Value::Int(i) => *i,
                other => return Err(ExoError::type_error("index", "int", other.type_name())),
            };
            let items = items.borrow();
            let len = items.len() as i64;
            if i < 0 || i >= len {
                return Err(ExoError::name(format!("index {} out of range", i)));
            }
            Ok(items[i as usize].clone())
        }
        Value::Map(entries) => entries
            .borrow()
            .iter()
            .find(|(k, _)| k == index)
            .map(|(_, v)| v.clone())
            .ok_or_else(|| ExoError::name("Key not found".to_string())),
        Value::Str(s) => {
            let i = match index {
                Value::Int(i) => *i,
                other => return Err(ExoError::type_error("index", "int", other.type_name())),
            };
            s.chars()
                .nth(i.max(0) as usize)
                .map(|c| Value::str(c.to_string()))
                .ok_or_else(|| ExoError::name(format!("index {} out of range", i)))
        }
        other => Err(ExoError::type_error("index", "list, map, or string", other.type_name())),
    }
}

pub fn index_set(base: &Value, index: &Value, value: Value) -> Result<(), ExoError> {
    match base {
        Value::List(items) => {
            let i = match index {
                Value::Int(i) => *i,
                other => return Err(ExoError::type_error("index", "int", other.type_name())),
            };
            let mut items = items.borrow_mut();
            let len = items.len() as i64;
            if i < 0 || i >= len {
                return Err(ExoError::name(format!("index {} out of range", i)));
            }
            items[i as usize] = value;
            Ok(())
        }
        Value::Map(entries) => {
            let mut entries = entries.borrow_mut();
            if let Some(slot) = entries.iter_mut().find(|(k, _)| k == index) {
                slot.1 = value;
            } else {
                entries.push((index.clone(), value));
            }
            Ok(())
        }
        other => Err(ExoError::type_error("index assignment", "list or map", other.type_name())),
    }
}
