// ABOUTME: Built-in dispatcher — registers every named built-in procedure (spec §4.5)
//
// Built-in tags are plain identifier names, not syntactic keywords, so unlike
// `src/keywords.rs` there is no Arabic alias table here: a built-in is looked
// up the same way a user procedure is (`name(args)`), and Arabic is already
// a valid identifier alphabet (spec §6.1), so an Exo program is free to
// `let الطول = len` and call it as such without the dispatcher needing to
// know about it.

pub mod coerce;
pub mod containers;
pub mod host;
pub mod introspect;
pub mod io;
pub mod math;
pub mod module_ops;
pub mod sequence;
pub mod strings;

use crate::value::BuiltinFn;
use std::collections::HashMap;

pub fn register_builtins(table: &mut HashMap<String, BuiltinFn>) {
    io::register(table);
    introspect::register(table);
    coerce::register(table);
    math::register(table);
    sequence::register(table);
    containers::register(table);
    strings::register(table);
    host::register(table);
    module_ops::register(table);
}
