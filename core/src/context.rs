//! Context trait and manifest
//!
//! A context-like object exposes numeric constant members, callable members
//! and an error query. A dynamically typed host would discover that shape by
//! reflection; here it is declared up front as a [`Manifest`], and the
//! callable surface is reached through the [`Context`] trait, which is also
//! the seam the debug wrapper decorates.

use crate::value::Value;

/// A named numeric constant member of a context (e.g. `ARRAY_BUFFER`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstantDef {
    pub name: String,
    pub value: u32,
}

impl ConstantDef {
    pub fn new(name: impl Into<String>, value: u32) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Declared shape of a context: its constant members, its callable member
/// names, and every other member as a plain value.
///
/// The debug wrapper copies `values` through unchanged so the wrapped
/// context stays a drop-in substitute for the original.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Manifest {
    /// Numeric constant members, in declaration order. Order matters when
    /// two names share a value: the constant registry keeps the first.
    pub constants: Vec<ConstantDef>,
    /// Names of callable members.
    pub methods: Vec<String>,
    /// Non-callable, non-constant members, copied through by the wrapper.
    pub values: Vec<(String, Value)>,
}

impl Manifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a constant member.
    pub fn with_constant(mut self, name: impl Into<String>, value: u32) -> Self {
        self.constants.push(ConstantDef::new(name, value));
        self
    }

    /// Add a callable member name.
    pub fn with_method(mut self, name: impl Into<String>) -> Self {
        self.methods.push(name.into());
        self
    }

    /// Add a plain (non-callable, non-constant) member.
    pub fn with_value(mut self, name: impl Into<String>, value: Value) -> Self {
        self.values.push((name.into(), value));
        self
    }

    /// Look up a constant member's value by name.
    pub fn constant(&self, name: &str) -> Option<u32> {
        self.constants
            .iter()
            .find(|def| def.name == name)
            .map(|def| def.value)
    }

    /// Look up a plain member by name.
    pub fn value(&self, name: &str) -> Option<&Value> {
        self.values
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Whether `name` is a declared callable member.
    pub fn has_method(&self, name: &str) -> bool {
        self.methods.iter().any(|m| m == name)
    }
}

/// Error raised by the wrapped call itself.
///
/// The debug wrapper never swallows or retries these; they propagate to the
/// caller unchanged. Error *codes* reported by the context's error query are
/// a separate channel and never become a `CallError`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CallError {
    /// The context has no callable member with this name.
    #[error("context has no callable member `{0}`")]
    UnknownMethod(String),
    /// The underlying call failed.
    #[error("call to `{name}` failed: {message}")]
    Failed { name: String, message: String },
}

/// A graphics-context-like object.
///
/// `get_error` returns the latest error code and resets it, with `0`
/// meaning no error, following the GL convention of returning error codes
/// rather than raising them.
pub trait Context {
    /// The declared shape of this context.
    fn manifest(&self) -> &Manifest;

    /// Invoke the callable member `name` with `args`.
    fn invoke(&mut self, name: &str, args: &[Value]) -> Result<Value, CallError>;

    /// Query and reset the pending error code; `0` means no error.
    fn get_error(&mut self) -> u32;
}
