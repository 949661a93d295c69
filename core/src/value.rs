//! Value model for intercepted calls
//!
//! Arguments and results of context calls are carried as [`Value`]s so the
//! proxy can delegate them unchanged while still rendering them for trace
//! output. Resource handles carry an opaque identity that the wrapper's
//! name side-table keys on.

/// Opaque reference to a context-owned resource (buffer, shader, program,
/// texture, uniform location, ...).
///
/// Only the identity matters to this crate: two handles compare equal iff
/// they refer to the same underlying resource. The context implementation
/// decides how ids are allocated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle(u64);

impl Handle {
    /// Wrap a raw resource id.
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw resource id.
    pub fn raw(self) -> u64 {
        self.0
    }
}

/// A GL typed-array buffer argument, one variant per element kind.
#[derive(Debug, Clone, PartialEq)]
pub enum TypedArray {
    Int8(Vec<i8>),
    Uint8(Vec<u8>),
    Int16(Vec<i16>),
    Uint16(Vec<u16>),
    Int32(Vec<i32>),
    Uint32(Vec<u32>),
    Float32(Vec<f32>),
}

impl TypedArray {
    /// Host-facing type name used in trace literals.
    pub fn type_name(&self) -> &'static str {
        match self {
            TypedArray::Int8(_) => "WebGLByteArray",
            TypedArray::Uint8(_) => "WebGLUnsignedByteArray",
            TypedArray::Int16(_) => "WebGLShortArray",
            TypedArray::Uint16(_) => "WebGLUnsignedShortArray",
            TypedArray::Int32(_) => "WebGLIntArray",
            TypedArray::Uint32(_) => "WebGLUnsignedIntArray",
            TypedArray::Float32(_) => "WebGLFloatArray",
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        match self {
            TypedArray::Int8(v) => v.len(),
            TypedArray::Uint8(v) => v.len(),
            TypedArray::Int16(v) => v.len(),
            TypedArray::Uint16(v) => v.len(),
            TypedArray::Int32(v) => v.len(),
            TypedArray::Uint32(v) => v.len(),
            TypedArray::Float32(v) => v.len(),
        }
    }

    /// Check if the array has no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Render the array as a construction literal for trace output,
    /// e.g. `new WebGLFloatArray( [0.5, 1, 2] )`.
    pub fn to_literal(&self) -> String {
        let elems = match self {
            TypedArray::Int8(v) => join_elements(v.iter()),
            TypedArray::Uint8(v) => join_elements(v.iter()),
            TypedArray::Int16(v) => join_elements(v.iter()),
            TypedArray::Uint16(v) => join_elements(v.iter()),
            TypedArray::Int32(v) => join_elements(v.iter()),
            TypedArray::Uint32(v) => join_elements(v.iter()),
            TypedArray::Float32(v) => v
                .iter()
                .map(|f| format_f32(*f))
                .collect::<Vec<_>>()
                .join(", "),
        };
        format!("new {}( [{}] )", self.type_name(), elems)
    }
}

fn join_elements<T: std::fmt::Display>(iter: impl Iterator<Item = T>) -> String {
    iter.map(|e| e.to_string()).collect::<Vec<_>>().join(", ")
}

/// Format an f32 the way the trace renders numbers: integral values lose
/// the trailing `.0` so `1.0` prints as `1`.
pub(crate) fn format_f32(value: f32) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

/// Same trimming for f64 values.
pub(crate) fn format_f64(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

/// An argument to or result of an intercepted context call.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Absent / void result.
    Null,
    Bool(bool),
    /// Plain integer argument. May coincide with a known constant's value;
    /// the trace formatter treats that as an enum, an ambiguity inherent
    /// to the approach.
    Int(i64),
    Float(f64),
    Str(String),
    Array(TypedArray),
    Handle(Handle),
}

impl Value {
    /// Convenience constructor for string values.
    pub fn str(s: impl Into<String>) -> Self {
        Value::Str(s.into())
    }

    /// The handle inside, if this is a handle value.
    pub fn as_handle(&self) -> Option<Handle> {
        match self {
            Value::Handle(h) => Some(*h),
            _ => None,
        }
    }

    /// The integer inside, if this is an integer value.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<Handle> for Value {
    fn from(v: Handle) -> Self {
        Value::Handle(v)
    }
}

impl From<TypedArray> for Value {
    fn from(v: TypedArray) -> Self {
        Value::Array(v)
    }
}
