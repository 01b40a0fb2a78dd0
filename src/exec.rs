// ABOUTME: Statement runner — dispatches on the leading token of each line (spec §4.4)

use crate::env::Scope;
use crate::error::ExoError;
use crate::eval_expr::{self, eval_expr};
use crate::interpreter::Interpreter;
use crate::keywords;
use crate::value::{Procedure, Value};
use std::rc::Rc;

/// A control signal propagated up out of a block body.
pub enum Signal {
    Normal,
    Return(Value),
    Break,
    Continue,
}

/// Strips a trailing `#...` comment (respecting string literals) and
/// surrounding whitespace, then expands any block opener/body/`end` packed
/// onto one physical line into its own logical lines — spec §2 component B /
/// §6.1, and spec §8 S5's inline form `for i in range(1, 5) s = s + i end`.
pub fn split_source_lines(source: &str) -> Vec<String> {
    source
        .lines()
        .map(strip_comment)
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty())
        .flat_map(|l| split_into_statements(&l))
        .collect()
}

/// Net block-depth change a raw (possibly inline-packed) physical line
/// contributes once split into logical statements — e.g.
/// `for i in range(1, 5) s = s + i end` contributes 0 (one opener, one
/// `end`), while a bare `if x` contributes 1. Used by the REPL's multi-line
/// block continuation (`main.rs`'s `collect_block`) so it stops prompting as
/// soon as an inline block form already closed itself on one line.
pub fn net_depth(line: &str) -> i32 {
    split_into_statements(line)
        .iter()
        .map(|stmt| {
            let word = keywords::leading_word(stmt);
            if keywords::is_block_opener(word) {
                1
            } else if keywords::is_word(keywords::END, word) {
                -1
            } else {
                0
            }
        })
        .sum()
}

/// No-argument keyword families that always form a complete statement by
/// themselves (spec §4.4).
const NO_ARG_KEYWORDS: &[&[&str]] = &[keywords::BREAK, keywords::CONTINUE, keywords::END];

/// Splits a single already comment-stripped physical line into one or more
/// logical statement lines, so a block opener, its body, and its closing
/// `end` packed onto one physical line (spec §8 S5's
/// `for i in range(1, 5) s = s + i end`) dispatch exactly like the same
/// construct spread across several lines. A line with no inline block
/// content returns unchanged as a single-element vec.
fn split_into_statements(text: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut rest = text.trim_start();
    while !rest.is_empty() {
        let (piece, remainder) = split_one_statement(rest);
        out.push(piece.trim().to_string());
        if remainder.len() == rest.len() {
            break;
        }
        rest = remainder.trim_start();
    }
    out
}

/// Peels exactly one logical statement off the front of `text`, mirroring
/// `exec_lines`'s own dispatch order, and returns `(statement, remainder)`.
/// `remainder` may itself hold further statements; the caller loops. Falls
/// back to returning all of `text` as one piece (empty remainder) when
/// nothing recognizable starts it, so a genuinely malformed line still
/// reaches the evaluator and raises its usual `SyntaxError`.
fn split_one_statement(text: &str) -> (&str, &str) {
    if let Some(end) = keywords::match_keyword_end(text, keywords::DECLARE) {
        let rest = &text[end..];
        let lhs_len = eval_expr::expr_prefix_len(rest);
        if lhs_len > 0 {
            if let Some(rhs_start) = rhs_start_after_eq(rest, lhs_len) {
                let rhs_len = eval_expr::expr_prefix_len(&rest[rhs_start..]);
                if rhs_len > 0 {
                    let stmt_end = end + rhs_start + rhs_len;
                    return (&text[..stmt_end], &text[stmt_end..]);
                }
            }
        }
        return (text, "");
    }

    if let Some(end) = keywords::match_keyword_end(text, keywords::RETURN) {
        let rhs_len = eval_expr::expr_prefix_len(&text[end..]);
        let stmt_end = end + rhs_len;
        return (&text[..stmt_end], &text[stmt_end..]);
    }

    for words in NO_ARG_KEYWORDS.iter().copied() {
        if let Some(end) = keywords::match_keyword_end(text, words) {
            return (&text[..end], &text[end..]);
        }
    }

    if let Some(end) = keywords::match_keyword_end(text, keywords::FUNC) {
        return match header_end_at_matching_paren(text, end) {
            Some(header_end) => (&text[..header_end], &text[header_end..]),
            None => (text, ""),
        };
    }

    for words in [keywords::IF, keywords::WHILE] {
        if let Some(end) = keywords::match_keyword_end(text, words) {
            let cond_len = eval_expr::expr_prefix_len(&text[end..]);
            let stmt_end = end + cond_len;
            return (&text[..stmt_end], &text[stmt_end..]);
        }
    }

    if let Some(end) = keywords::match_keyword_end(text, keywords::ELSE_IF) {
        let cond_len = eval_expr::expr_prefix_len(&text[end..]);
        let stmt_end = end + cond_len;
        return (&text[..stmt_end], &text[stmt_end..]);
    }
    if let Some(end) = keywords::match_keyword_end(text, keywords::ELSE) {
        return (&text[..end], &text[end..]);
    }

    if let Some(end) = keywords::match_keyword_end(text, keywords::FOR) {
        return match find_in_position(&text[end..]) {
            Some((_, in_end_rel)) => {
                let iterable_start = end + in_end_rel;
                let iterable_len = eval_expr::expr_prefix_len(&text[iterable_start..]);
                let stmt_end = iterable_start + iterable_len;
                (&text[..stmt_end], &text[stmt_end..])
            }
            None => (text, ""),
        };
    }

    if let Some(end) = keywords::match_keyword_end(text, keywords::ROUTE) {
        let path_len = eval_expr::expr_prefix_len(&text[end..]);
        let stmt_end = end + path_len;
        return (&text[..stmt_end], &text[stmt_end..]);
    }

    // Plain assignment or bare expression statement. `expr_prefix_len`
    // naturally stops right at the assignment target, since a bare `=` never
    // matches an infix operator (only `==` does), so the same probe serves
    // both: it IS the whole statement when no `=` follows.
    let lhs_len = eval_expr::expr_prefix_len(text);
    if lhs_len > 0 {
        if let Some(rhs_start) = rhs_start_after_eq(text, lhs_len) {
            let rhs_len = eval_expr::expr_prefix_len(&text[rhs_start..]);
            if rhs_len > 0 {
                let stmt_end = rhs_start + rhs_len;
                return (&text[..stmt_end], &text[stmt_end..]);
            }
        }
        return (&text[..lhs_len], &text[lhs_len..]);
    }

    (text, "")
}

/// Given `text` whose prefix `lhs_len` bytes form an assignment/declaration
/// target, looks for the `=` that must follow (skipping whitespace, and
/// never mistaking a `==` comparison for it). Returns the byte offset of the
/// right-hand-side expression's start.
fn rhs_start_after_eq(text: &str, lhs_len: usize) -> Option<usize> {
    let after_ws = skip_ws(text, lhs_len);
    let rest = &text[after_ws..];
    if rest.starts_with('=') && !rest.starts_with("==") {
        Some(after_ws + 1)
    } else {
        None
    }
}

fn skip_ws(s: &str, from: usize) -> usize {
    s[from..]
        .char_indices()
        .find(|(_, c)| !c.is_whitespace())
        .map(|(i, _)| from + i)
        .unwrap_or(s.len())
}

/// `text[after_keyword..]` begins with a function's `name(params)` header;
/// returns the offset right after the matching `)` of the parameter list
/// (not the last `)` in the line, which may belong to an inline body).
fn header_end_at_matching_paren(text: &str, after_keyword: usize) -> Option<usize> {
    let rest = &text[after_keyword..];
    let open_rel = rest.find('(')?;
    let abs_open = after_keyword + open_rel;
    let mut depth = 0i32;
    for (i, c) in text[abs_open..].char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(abs_open + i + 1);
                }
            }
            _ => {}
        }
    }
    None
}

fn strip_comment(line: &str) -> &str {
    let mut in_string: Option<char> = None;
    let mut escape = false;
    for (i, c) in line.char_indices() {
        if let Some(q) = in_string {
            if escape {
                escape = false;
            } else if c == '\\' {
                escape = true;
            } else if c == q {
                in_string = None;
            }
            continue;
        }
        match c {
            '"' | '\'' => in_string = Some(c),
            '#' => return &line[..i],
            _ => {}
        }
    }
    line
}

/// Locates the `end`/`نهاية` that matches the block opener at `lines[open_idx]`,
/// tracking nested block-openers so their own bodies are skipped over rather
/// than mistaken for the outer block's terminator (spec §4.4 "Block
/// extraction").
fn find_matching_end(lines: &[String], open_idx: usize) -> Result<usize, ExoError> {
    let mut depth = 0i32;
    for (idx, line) in lines.iter().enumerate().skip(open_idx + 1) {
        let leading = keywords::leading_word(line);
        if keywords::is_block_opener(leading) {
            depth += 1;
        } else if keywords::is_word(keywords::END, leading) {
            if depth == 0 {
                return Ok(idx);
            }
            depth -= 1;
        }
    }
    Err(ExoError::syntax("missing closing 'end'"))
}

struct Branch {
    condition: Option<String>,
    body: Vec<String>,
}

/// Splits an `if` chain's full body (everything between `if ...` and its
/// matching `end`) into branches at local depth 0, so an `else`/`else if`
/// belonging to a nested block is never mistaken for a sibling branch.
fn split_if_branches(first_condition: String, body: &[String]) -> Vec<Branch> {
    let mut branches = Vec::new();
    let mut depth = 0i32;
    let mut current_condition = Some(first_condition);
    let mut current_body = Vec::new();

    for line in body {
        let leading = keywords::leading_word(line);
        if depth == 0 {
            if let Some(cond) = keywords::strip_keyword_prefix(line, keywords::ELSE_IF) {
                branches.push(Branch {
                    condition: current_condition.take(),
                    body: std::mem::take(&mut current_body),
                });
                current_condition = Some(cond.to_string());
                continue;
            }
            if keywords::is_word(keywords::ELSE, leading) {
                branches.push(Branch {
                    condition: current_condition.take(),
                    body: std::mem::take(&mut current_body),
                });
                current_condition = None;
                continue;
            }
        }
        if keywords::is_block_opener(leading) {
            depth += 1;
        } else if keywords::is_word(keywords::END, leading) && depth > 0 {
            depth -= 1;
        }
        current_body.push(line.clone());
    }
    branches.push(Branch {
        condition: current_condition,
        body: current_body,
    });
    branches
}

/// Attaches a 1-based line number to an error that doesn't already carry one
/// — nested blocks attach their own, innermost wins (spec §7 `line?`).
fn attach_line(err: ExoError, line: usize) -> ExoError {
    if err.line.is_none() {
        err.with_line(line)
    } else {
        err
    }
}

fn find_assignment_eq(line: &str) -> Option<usize> {
    let scanned = eval_expr::scan(line);
    for (i, s) in scanned.iter().enumerate() {
        if s.safe && s.ch == '=' {
            let prev = scanned.get(i.wrapping_sub(1)).map(|s| s.ch);
            let next = scanned.get(i + 1).map(|s| s.ch);
            if prev == Some('=') || prev == Some('!') || prev == Some('<') || prev == Some('>') {
                continue;
            }
            if next == Some('=') {
                continue;
            }
            return Some(s.idx);
        }
    }
    None
}

/// Locates the depth-0, word-boundary `in`/`في` that separates a `for`
/// header's loop variable from its iterable expression, returning
/// `(start, end)` — the byte offsets of the keyword's first and
/// one-past-last byte.
fn find_in_position(rest: &str) -> Option<(usize, usize)> {
    let scanned = eval_expr::scan(rest);
    let mut i = 0usize;
    while i < scanned.len() {
        if scanned[i].safe {
            let byte_pos = scanned[i].idx;
            let tail = &rest[byte_pos..];
            for kw in keywords::IN {
                if tail.starts_with(kw) {
                    let end = byte_pos + kw.len();
                    let before_ok = rest[..byte_pos].chars().next_back().map_or(true, |c| !c.is_alphanumeric());
                    let after_ok = rest[end..].chars().next().map_or(true, |c| c.is_whitespace());
                    if before_ok && after_ok {
                        return Some((byte_pos, end));
                    }
                }
            }
        }
        i += 1;
    }
    None
}

fn split_for_header(rest: &str) -> Result<(&str, &str), ExoError> {
    let (start, end) =
        find_in_position(rest).ok_or_else(|| ExoError::syntax("expected 'in'/'في' in for-loop header"))?;
    Ok((rest[..start].trim(), rest[end..].trim()))
}

/// Executes an ordered list of already-split lines (spec §4.4). Returns the
/// control signal that ended execution (Normal if the block ran to
/// completion) and the value of the last bare expression evaluated — used to
/// supply a procedure's implicit return value when its body has no explicit
/// `return`.
pub fn exec_lines(lines: &[String], scope: &Rc<Scope>, interp: &mut Interpreter) -> Result<(Signal, Value), ExoError> {
    let mut idx = 0usize;
    let mut last = Value::Null;

    while idx < lines.len() {
        let line = lines[idx].as_str();

        if let Some(rest) = keywords::strip_keyword_prefix(line, keywords::DECLARE) {
            exec_declaration(rest, scope, interp).map_err(|e| attach_line(e, idx + 1))?;
            idx += 1;
            continue;
        }

        if let Some(rest) = keywords::strip_keyword_prefix(line, keywords::RETURN) {
            let value = if rest.is_empty() {
                Value::Null
            } else {
                eval_expr(rest, scope, interp).map_err(|e| attach_line(e, idx + 1))?
            };
            return Ok((Signal::Return(value), last));
        }

        let leading = keywords::leading_word(line);
        if keywords::is_word(keywords::BREAK, leading) {
            return Ok((Signal::Break, last));
        }
        if keywords::is_word(keywords::CONTINUE, leading) {
            return Ok((Signal::Continue, last));
        }

        if let Some(rest) = keywords::strip_keyword_prefix(line, keywords::FUNC) {
            let end_idx = find_matching_end(lines, idx)?;
            define_procedure(rest, &lines[idx + 1..end_idx], scope)?;
            idx = end_idx + 1;
            continue;
        }

        if let Some(condition) = keywords::strip_keyword_prefix(line, keywords::IF) {
            let end_idx = find_matching_end(lines, idx)?;
            let branches = split_if_branches(condition.to_string(), &lines[idx + 1..end_idx]);
            let (signal, value) = run_if_branches(&branches, scope, interp)?;
            last = value;
            if !matches!(signal, Signal::Normal) {
                return Ok((signal, last));
            }
            idx = end_idx + 1;
            continue;
        }

        if let Some(condition) = keywords::strip_keyword_prefix(line, keywords::WHILE) {
            let end_idx = find_matching_end(lines, idx)?;
            let body = &lines[idx + 1..end_idx];
            loop {
                if !eval_expr(condition, scope, interp).map_err(|e| attach_line(e, idx + 1))?.is_truthy() {
                    break;
                }
                let (signal, value) = exec_lines(body, scope, interp)?;
                last = value;
                match signal {
                    Signal::Break => break,
                    Signal::Continue | Signal::Normal => {}
                    Signal::Return(v) => return Ok((Signal::Return(v), last)),
                }
            }
            idx = end_idx + 1;
            continue;
        }

        if let Some(rest) = keywords::strip_keyword_prefix(line, keywords::FOR) {
            let end_idx = find_matching_end(lines, idx)?;
            let body = &lines[idx + 1..end_idx];
            let (var_name, iterable_expr) = split_for_header(rest)?;
            if !eval_expr::is_identifier(var_name) {
                return Err(ExoError::syntax(format!("invalid loop variable '{}'", var_name)));
            }
            let iterable = eval_expr(iterable_expr, scope, interp).map_err(|e| attach_line(e, idx + 1))?;
            let items = iterate(&iterable)?;
            'outer: for item in items {
                scope.declare(var_name, item);
                let (signal, value) = exec_lines(body, scope, interp)?;
                last = value;
                match signal {
                    Signal::Break => break 'outer,
                    Signal::Continue | Signal::Normal => {}
                    Signal::Return(v) => return Ok((Signal::Return(v), last)),
                }
            }
            idx = end_idx + 1;
            continue;
        }

        if let Some(path) = keywords::strip_keyword_prefix(line, keywords::ROUTE) {
            let end_idx = find_matching_end(lines, idx)?;
            interp.routes.register(path.trim().to_string(), lines[idx + 1..end_idx].to_vec());
            idx = end_idx + 1;
            continue;
        }

        if let Some(eq) = find_assignment_eq(line) {
            let left = line[..eq].trim();
            let right = line[eq + 1..].trim();
            exec_assignment(left, right, scope, interp).map_err(|e| attach_line(e, idx + 1))?;
            idx += 1;
            continue;
        }

        last = eval_expr(line, scope, interp).map_err(|e| attach_line(e, idx + 1))?;
        idx += 1;
    }

    Ok((Signal::Normal, last))
}

fn run_if_branches(branches: &[Branch], scope: &Rc<Scope>, interp: &mut Interpreter) -> Result<(Signal, Value), ExoError> {
    for branch in branches {
        let taken = match &branch.condition {
            Some(cond) => eval_expr(cond, scope, interp)?.is_truthy(),
            None => true,
        };
        if taken {
            // Deliberately the enclosing scope, not a child — spec §4.4 / §9:
            // `if` does not introduce a new scope.
            return exec_lines(&branch.body, scope, interp);
        }
    }
    Ok((Signal::Normal, Value::Null))
}

fn iterate(value: &Value) -> Result<Vec<Value>, ExoError> {
    match value {
        Value::List(items) => Ok(items.borrow().clone()),
        Value::Map(entries) => Ok(entries.borrow().iter().map(|(k, _)| k.clone()).collect()),
        Value::Str(s) => Ok(s.chars().map(|c| Value::str(c.to_string())).collect()),
        other => Err(ExoError::type_error("for", "list, map, or string", other.type_name())),
    }
}

fn exec_declaration(rest: &str, scope: &Rc<Scope>, interp: &mut Interpreter) -> Result<(), ExoError> {
    let eq = find_assignment_eq(rest).ok_or_else(|| ExoError::syntax("expected '=' in declaration"))?;
    let left = rest[..eq].trim();
    let right = rest[eq + 1..].trim();
    let value = eval_expr(right, scope, interp)?;

    if let Some((name, index_expr)) = eval_expr::index_syntax(left) {
        // Special form: `let name[idx] = expr` assigns into an existing
        // container without declaring (spec §4.4).
        let index = eval_expr(index_expr, scope, interp)?;
        let base = scope.get(name).ok_or_else(|| ExoError::name(format!("'{}' is not declared", name)))?;
        eval_expr::index_set(&base, &index, value)?;
        return Ok(());
    }

    if !eval_expr::is_identifier(left) {
        return Err(ExoError::syntax(format!("invalid declaration target '{}'", left)));
    }
    scope.declare(left, value);
    Ok(())
}

fn exec_assignment(left: &str, right: &str, scope: &Rc<Scope>, interp: &mut Interpreter) -> Result<(), ExoError> {
    let value = eval_expr(right, scope, interp)?;

    if let Some((name, index_expr)) = eval_expr::index_syntax(left) {
        let index = eval_expr(index_expr, scope, interp)?;
        let base = scope.get(name).ok_or_else(|| ExoError::name(format!("'{}' is not declared", name)))?;
        return eval_expr::index_set(&base, &index, value);
    }

    if let Some(segments) = eval_expr::property_path(left) {
        let mut container = scope
            .get(segments[0])
            .ok_or_else(|| ExoError::name(format!("'{}' is not declared", segments[0])))?;
        for segment in &segments[1..segments.len() - 1] {
            container = eval_expr::map_get(&container, segment)?;
        }
        return eval_expr::map_set(&container, segments[segments.len() - 1], value);
    }

    if eval_expr::is_identifier(left) {
        return scope.assign(left, value);
    }

    Err(ExoError::syntax(format!("invalid assignment target '{}'", left)))
}

fn define_procedure(header: &str, body: &[String], scope: &Rc<Scope>) -> Result<(), ExoError> {
    let open = header.find('(').ok_or_else(|| ExoError::syntax("expected '(' in function definition"))?;
    let name = header[..open].trim();
    if !eval_expr::is_identifier(name) {
        return Err(ExoError::syntax(format!("invalid function name '{}'", name)));
    }
    let close = header.rfind(')').ok_or_else(|| ExoError::syntax("expected ')' in function definition"))?;
    let params_str = &header[open + 1..close];
    let params: Vec<String> = if params_str.trim().is_empty() {
        Vec::new()
    } else {
        params_str.split(',').map(|p| p.trim().to_string()).collect()
    };

    let proc = Procedure {
        name: name.to_string(),
        params,
        body: body.to_vec(),
        scope: scope.clone(),
    };
    scope.declare(name, Value::Procedure(Rc::new(proc)));
    Ok(())
}

/// Runs a user procedure per spec §4.6: push a call-stack frame, enforce the
/// recursion cap, create a scope parented to the procedure's *captured
/// definition* scope (not the caller's — lexical scoping), bind parameters
/// (missing → Null, extras ignored), execute, pop the frame, return the
/// explicit return value or the last bare expression's value.
pub fn call_user_procedure(proc: &Rc<Procedure>, args: Vec<Value>, interp: &mut Interpreter) -> Result<Value, ExoError> {
    interp.push_frame(&proc.name, &args).map_err(|e| interp.error(e))?;

    let call_scope = Scope::with_parent(proc.scope.clone(), proc.name.clone());
    for (i, param) in proc.params.iter().enumerate() {
        call_scope.declare(param.clone(), args.get(i).cloned().unwrap_or(Value::Null));
    }

    let result = exec_lines(&proc.body, &call_scope, interp);
    interp.pop_frame();
    let (signal, last) = result.map_err(|e| interp.error(e))?;
    match signal {
        Signal::Return(v) => Ok(v),
        _ => Ok(last),
    }
}

/// Runs a full program (or module body) in `scope`. A top-level `return`
/// terminates the run and supplies its value (spec §4.4 "Return").
pub fn run_program(lines: &[String], scope: &Rc<Scope>, interp: &mut Interpreter) -> Result<Value, ExoError> {
    let (signal, last) = exec_lines(lines, scope, interp)?;
    match signal {
        Signal::Return(v) => Ok(v),
        _ => Ok(last),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sandbox::Sandbox;

    fn run(source: &str) -> (Value, Rc<Scope>) {
        let mut interp = Interpreter::new(Sandbox::test_sandbox(), std::env::temp_dir());
        let lines = split_source_lines(source);
        let scope = interp.global.clone();
        let value = run_program(&lines, &scope, &mut interp).expect("program failed");
        (value, scope)
    }

    #[test]
    fn declare_in_function_does_not_leak_to_caller() {
        let (_, scope) = run(
            "let x = 1\nfunc g() let x = 5 end\ng()\n",
        );
        assert_eq!(scope.get("x"), Some(Value::Int(1)));
    }

    #[test]
    fn assign_in_function_mutates_enclosing_scope() {
        let (_, scope) = run("let x = 1\nfunc f() x = 2 end\nf()\n");
        assert_eq!(scope.get("x"), Some(Value::Int(2)));
    }

    #[test]
    fn closures_capture_definition_scope_by_alias() {
        let (value, _) = run(
            "func make(n)\nfunc inner() return n end\nreturn inner\nend\nlet f = make(7)\nreturn f()\n",
        );
        assert_eq!(value, Value::Int(7));
    }

    #[test]
    fn for_loop_over_range_sums_elements() {
        let (value, _) = run(
            "let s = 0\nfor i in range(1, 5) s = s + i end\nreturn s\n",
        );
        assert_eq!(value, Value::Int(10));
    }

    #[test]
    fn if_does_not_introduce_a_new_scope() {
        let (_, scope) = run("if true let y = 9 end\n");
        assert_eq!(scope.get("y"), Some(Value::Int(9)));
    }

    #[test]
    fn recursion_cap_raises_recursion_error() {
        let mut interp = Interpreter::new(Sandbox::test_sandbox(), std::env::temp_dir());
        let lines = split_source_lines("func loop() return loop() end\nloop()\n");
        let scope = interp.global.clone();
        let err = run_program(&lines, &scope, &mut interp).unwrap_err();
        assert_eq!(err.kind, crate::error::ErrorKind::Recursion);
    }

    #[test]
    fn container_aliasing_is_observed_across_bindings() {
        let (_, scope) = run("let a = [1, 2]\nlet b = a\npush(b, 3)\n");
        if let Some(Value::List(items)) = scope.get("a") {
            assert_eq!(items.borrow().len(), 3);
        } else {
            panic!("expected list");
        }
    }
}
