//! Resource-name side-table
//!
//! Calls that construct a new resource get an autogenerated symbolic name
//! in the trace (`buffer0`, `buffer1`, ...). The name is recorded against
//! the returned handle's identity so later calls taking that handle print
//! the symbol instead of an opaque id. One counter per constructing call
//! kind, scoped to a single wrapped context.

use hashbrown::HashMap;

use crate::value::Handle;

/// Calls whose return value is a newly created resource worth naming,
/// with the symbol prefix used for each.
const CONSTRUCTORS: &[(&str, &str)] = &[
    ("createBuffer", "buffer"),
    ("createFrameBuffer", "frameBuffer"),
    ("createProgram", "program"),
    ("createRenderbuffer", "renderBuffer"),
    ("createShader", "shader"),
    ("createTexture", "texture"),
    ("getUniformLocation", "uniformLocation"),
    ("readPixels", "pixels"),
];

/// Per-wrapper table of handle identity to generated symbolic name.
#[derive(Debug, Default)]
pub struct ResourceNames {
    names: HashMap<Handle, String>,
    counters: HashMap<&'static str, u32>,
}

impl ResourceNames {
    pub fn new() -> Self {
        Self::default()
    }

    /// If `call` constructs a resource, generate the next symbol for its
    /// kind (`buffer0`, `buffer1`, ...); otherwise `None`.
    pub fn next_symbol(&mut self, call: &str) -> Option<String> {
        let prefix = CONSTRUCTORS
            .iter()
            .find(|(name, _)| *name == call)
            .map(|(_, prefix)| *prefix)?;
        let counter = self.counters.entry(prefix).or_insert(0);
        let symbol = format!("{prefix}{counter}");
        *counter += 1;
        Some(symbol)
    }

    /// Record `symbol` as the name for `handle`.
    pub fn assign(&mut self, handle: Handle, symbol: String) {
        self.names.insert(handle, symbol);
    }

    /// The symbol previously assigned to `handle`, if any.
    pub fn get(&self, handle: Handle) -> Option<&str> {
        self.names.get(&handle).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_are_per_kind() {
        let mut names = ResourceNames::new();
        assert_eq!(names.next_symbol("createBuffer").as_deref(), Some("buffer0"));
        assert_eq!(names.next_symbol("createBuffer").as_deref(), Some("buffer1"));
        assert_eq!(
            names.next_symbol("createTexture").as_deref(),
            Some("texture0")
        );
        assert_eq!(names.next_symbol("createBuffer").as_deref(), Some("buffer2"));
    }

    #[test]
    fn test_non_constructing_calls_get_no_symbol() {
        let mut names = ResourceNames::new();
        assert_eq!(names.next_symbol("bindBuffer"), None);
        assert_eq!(names.next_symbol("drawArrays"), None);
    }

    #[test]
    fn test_assign_and_lookup() {
        let mut names = ResourceNames::new();
        let handle = Handle::from_raw(3);
        assert_eq!(names.get(handle), None);

        let symbol = names.next_symbol("createProgram").unwrap();
        names.assign(handle, symbol);
        assert_eq!(names.get(handle), Some("program0"));
        assert_eq!(names.get(Handle::from_raw(4)), None);
    }
}
