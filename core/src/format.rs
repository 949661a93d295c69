//! Trace-line formatting
//!
//! Renders intercepted calls as replayable-looking source lines:
//! `gl.bindBuffer(gl.ARRAY_BUFFER, buffer0);`. Arguments are substituted
//! left to right with, in order of precedence: a previously assigned
//! resource symbol, a typed-array construction literal, a quoted string,
//! a known constant as `gl.<NAME>`, or the value's default text.

use smallvec::SmallVec;

use crate::names::ResourceNames;
use crate::registry::ConstantTable;
use crate::value::{Value, format_f64};

/// Quote `s` as a single-quoted string literal.
///
/// The eight common escapes get their backslash forms; every other UTF-16
/// code unit below 0x20 or at 0x80 and above is written as a four-digit
/// `\uXXXX` escape, so non-ASCII text and control characters survive any
/// log transport.
pub fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for unit in s.encode_utf16() {
        match unit {
            0x27 => out.push_str("\\'"),
            0x22 => out.push_str("\\\""),
            0x5c => out.push_str("\\\\"),
            0x08 => out.push_str("\\b"),
            0x0c => out.push_str("\\f"),
            0x0a => out.push_str("\\n"),
            0x0d => out.push_str("\\r"),
            0x09 => out.push_str("\\t"),
            0x20..=0x7f => out.push(unit as u8 as char),
            _ => out.push_str(&format!("\\u{unit:04x}")),
        }
    }
    out.push('\'');
    out
}

/// Format one argument for a trace line.
pub fn format_argument(value: &Value, names: &ResourceNames, table: &ConstantTable) -> String {
    match value {
        Value::Handle(handle) => match names.get(*handle) {
            Some(symbol) => symbol.to_string(),
            None => format!("<handle {}>", handle.raw()),
        },
        Value::Array(array) => array.to_literal(),
        Value::Str(s) => quote(s),
        Value::Int(n) => match enum_name(*n, table) {
            Some(name) => format!("gl.{name}"),
            None => n.to_string(),
        },
        Value::Float(f) => format_f64(*f),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
    }
}

/// Format one full call as a trace line: `gl.<name>(<args>);`.
pub fn trace_call(
    name: &str,
    args: &[Value],
    names: &ResourceNames,
    table: &ConstantTable,
) -> String {
    let parts: SmallVec<[String; 8]> = args
        .iter()
        .map(|arg| format_argument(arg, names, table))
        .collect();
    format!("gl.{name}({});", parts.join(", "))
}

/// Format a call for error reports: `<name>(<args>)`, substituting known
/// constant names but nothing else (no resource symbols, no quoting).
pub fn format_call(name: &str, args: &[Value], table: &ConstantTable) -> String {
    let parts: SmallVec<[String; 8]> = args
        .iter()
        .map(|arg| match arg {
            Value::Int(n) => match enum_name(*n, table) {
                Some(name) => name.to_string(),
                None => n.to_string(),
            },
            Value::Str(s) => s.clone(),
            Value::Float(f) => format_f64(*f),
            Value::Bool(b) => b.to_string(),
            Value::Null => "null".to_string(),
            Value::Array(array) => array.to_literal(),
            Value::Handle(handle) => format!("<handle {}>", handle.raw()),
        })
        .collect();
    format!("{name}({})", parts.join(", "))
}

fn enum_name(n: i64, table: &ConstantTable) -> Option<String> {
    let value = u32::try_from(n).ok()?;
    if table.might_be_enum(value) {
        Some(table.enum_to_string(value))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixture_manifest;
    use crate::value::{Handle, TypedArray};

    fn table() -> ConstantTable {
        ConstantTable::from_manifest(&fixture_manifest())
    }

    #[test]
    fn test_quote_escapes() {
        assert_eq!(quote("plain"), "'plain'");
        assert_eq!(quote("it's"), "'it\\'s'");
        assert_eq!(quote("a\"b"), "'a\\\"b'");
        assert_eq!(quote("back\\slash"), "'back\\\\slash'");
        assert_eq!(quote("line\nbreak\ttab\r"), "'line\\nbreak\\ttab\\r'");
        assert_eq!(quote("\u{8}\u{c}"), "'\\b\\f'");
    }

    #[test]
    fn test_quote_unicode_escapes() {
        // Control and non-ASCII code units become \uXXXX.
        assert_eq!(quote("\u{1}"), "'\\u0001'");
        assert_eq!(quote("é"), "'\\u00e9'");
        // Outside the BMP: one escape per UTF-16 code unit.
        assert_eq!(quote("\u{1F600}"), "'\\ud83d\\ude00'");
    }

    #[test]
    fn test_argument_precedence() {
        let table = table();
        let mut names = ResourceNames::new();
        let buffer = Handle::from_raw(1);
        names.assign(buffer, "buffer0".to_string());

        // Named handle beats everything.
        assert_eq!(
            format_argument(&Value::Handle(buffer), &names, &table),
            "buffer0"
        );
        // Unnamed handle falls back to the default text.
        assert_eq!(
            format_argument(&Value::Handle(Handle::from_raw(9)), &names, &table),
            "<handle 9>"
        );
        // Typed arrays render as construction literals.
        assert_eq!(
            format_argument(
                &Value::Array(TypedArray::Float32(vec![1.0, 0.5])),
                &names,
                &table
            ),
            "new WebGLFloatArray( [1, 0.5] )"
        );
        // Strings are quoted.
        assert_eq!(
            format_argument(&Value::str("hi"), &names, &table),
            "'hi'"
        );
        // Integers matching a known constant print the symbol.
        assert_eq!(
            format_argument(&Value::Int(0x8892), &names, &table),
            "gl.ARRAY_BUFFER"
        );
        // Other integers print plainly, negatives included.
        assert_eq!(format_argument(&Value::Int(1234), &names, &table), "1234");
        assert_eq!(format_argument(&Value::Int(-1), &names, &table), "-1");
        // Remaining kinds use their default text.
        assert_eq!(format_argument(&Value::Float(1.5), &names, &table), "1.5");
        assert_eq!(format_argument(&Value::Bool(true), &names, &table), "true");
        assert_eq!(format_argument(&Value::Null, &names, &table), "null");
    }

    #[test]
    fn test_trace_call_line() {
        let table = table();
        let mut names = ResourceNames::new();
        let buffer = Handle::from_raw(1);
        names.assign(buffer, "buffer0".to_string());

        let line = trace_call(
            "bindBuffer",
            &[Value::Int(0x8892), Value::Handle(buffer)],
            &names,
            &table,
        );
        assert_eq!(line, "gl.bindBuffer(gl.ARRAY_BUFFER, buffer0);");

        assert_eq!(trace_call("finish", &[], &names, &table), "gl.finish();");
    }

    #[test]
    fn test_format_call_substitutes_enums_only() {
        let table = table();
        let call = format_call(
            "texParameteri",
            &[Value::Int(0x8892), Value::Int(7), Value::str("raw")],
            &table,
        );
        assert_eq!(call, "texParameteri(ARRAY_BUFFER, 7, raw)");
    }
}
