// ABOUTME: Module built-ins — import, export (spec §4.5, §4.7)

use crate::env::Scope;
use crate::error::{ExoError, ARITY_ONE, ARITY_TWO};
use crate::eval_expr::map_set;
use crate::exec::{run_program, split_source_lines};
use crate::interpreter::Interpreter;
use crate::value::{BuiltinFn, Value};
use std::collections::HashMap;
use std::path::PathBuf;

fn resolve_module_path(raw: &str, interp: &Interpreter) -> PathBuf {
    let with_ext = if raw.ends_with(".exo") { raw.to_string() } else { format!("{}.exo", raw) };
    let base_dir = interp
        .current_file
        .as_ref()
        .and_then(|f| PathBuf::from(f).parent().map(PathBuf::from))
        .unwrap_or_else(|| interp.current_dir.clone());
    base_dir.join(with_ext)
}

/// Spec §4.7: append `.exo`, resolve relative to the importing file's
/// directory (else the process cwd), return the cached exports map if
/// already loaded, otherwise register an empty exports map *before*
/// executing the body so a circular import observes a partial map instead
/// of re-entering the loader.
fn import(args: &[Value], interp: &mut Interpreter) -> Result<Value, ExoError> {
    if args.len() != 1 {
        return Err(ExoError::arity("import", ARITY_ONE, args.len()));
    }
    let raw_path = match &args[0] {
        Value::Str(s) => s.clone(),
        other => return Err(ExoError::type_error("import", "str", other.type_name())),
    };
    let resolved = resolve_module_path(&raw_path, interp);
    let canonical = resolved
        .canonicalize()
        .map_err(|e| ExoError::import(format!("cannot resolve module '{}': {}", raw_path, e)))?;

    if let Some(existing) = interp.modules.get(&canonical) {
        return Ok(existing);
    }

    let exports = interp.modules.register(canonical.clone());
    interp.export_stack.push(exports.clone());

    let source = std::fs::read_to_string(&canonical)
        .map_err(|e| ExoError::import(format!("cannot read module '{}': {}", canonical.display(), e)));

    let result = source.and_then(|source| {
        let lines = split_source_lines(&source);
        let module_scope = Scope::with_parent(interp.global.clone(), canonical.display().to_string());

        let saved_file = interp.current_file.take();
        let saved_dir = interp.current_dir.clone();
        interp.current_file = Some(canonical.display().to_string());
        if let Some(parent) = canonical.parent() {
            interp.current_dir = parent.to_path_buf();
        }

        let run_result = run_program(&lines, &module_scope, interp);

        interp.current_file = saved_file;
        interp.current_dir = saved_dir;
        run_result
    });

    interp.export_stack.pop();
    result?;
    Ok(exports)
}

/// Writes `name -> value` into the exports map of the module currently
/// loading (spec §4.7 step 4). Calling `export` outside a module body is a
/// name error — there is nothing to export into.
fn export(args: &[Value], interp: &mut Interpreter) -> Result<Value, ExoError> {
    if args.len() != 2 {
        return Err(ExoError::arity("export", ARITY_TWO, args.len()));
    }
    let name = match &args[0] {
        Value::Str(s) => s.clone(),
        other => return Err(ExoError::type_error("export", "str", other.type_name())),
    };
    let exports = interp
        .export_stack
        .last()
        .ok_or_else(|| ExoError::name("export: not inside a module".to_string()))?
        .clone();
    map_set(&exports, &name, args[1].clone())?;
    Ok(Value::Null)
}

pub fn register(table: &mut HashMap<String, BuiltinFn>) {
    table.insert("import".to_string(), import);
    table.insert("export".to_string(), export);
}
