//! Constant registry
//!
//! Process-wide table mapping numeric constant values to their symbolic
//! names, built once from the first context manifest seen. All lookups go
//! through this table; reading it before initialization is a usage error
//! and fails fast.

use std::sync::OnceLock;

use hashbrown::HashMap;

use crate::context::Manifest;

static TABLE: OnceLock<ConstantTable> = OnceLock::new();

/// Usage errors for the constant registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// A lookup ran before [`init`] populated the table.
    #[error("constant registry not initialized; call gltrace::init with a context manifest first")]
    Uninitialized,
}

/// Value-to-name table for a context's numeric constants.
#[derive(Debug, Clone, Default)]
pub struct ConstantTable {
    names: HashMap<u32, String>,
}

impl ConstantTable {
    /// Build a table from a manifest's constant definitions.
    ///
    /// When two names share a value, the first definition in manifest
    /// order wins; the later one is unreachable through lookups. That
    /// ambiguity comes with value-keyed tables and is kept as-is.
    pub fn from_manifest(manifest: &Manifest) -> Self {
        let mut names = HashMap::with_capacity(manifest.constants.len());
        for def in &manifest.constants {
            names.entry(def.value).or_insert_with(|| def.name.clone());
        }
        Self { names }
    }

    /// Whether `value` matches a known constant.
    ///
    /// Heuristic: a plain integer that happens to collide with a constant's
    /// value is indistinguishable from an intentional enum argument.
    pub fn might_be_enum(&self, value: u32) -> bool {
        self.names.contains_key(&value)
    }

    /// The symbolic name for `value`, or a placeholder embedding the value
    /// in hex when it is not a known constant.
    pub fn enum_to_string(&self, value: u32) -> String {
        match self.names.get(&value) {
            Some(name) => name.clone(),
            None => format!("*UNKNOWN WebGL ENUM (0x{value:x})"),
        }
    }

    /// Number of distinct constant values in the table.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if the table holds no constants.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Populate the process-wide constant table from `manifest`. Safe to call
/// more than once: the first call wins and later calls are no-ops, even
/// with a different manifest.
///
/// A manifest with no constants leaves the table empty, which degrades
/// every later lookup to the unknown-value placeholder; that is not an
/// error here.
pub fn init(manifest: &Manifest) -> &'static ConstantTable {
    TABLE.get_or_init(|| ConstantTable::from_manifest(manifest))
}

/// The process-wide table, or [`RegistryError::Uninitialized`] before
/// [`init`] has run.
pub fn table() -> Result<&'static ConstantTable, RegistryError> {
    TABLE.get().ok_or(RegistryError::Uninitialized)
}

/// Whether `value` matches a constant recorded at [`init`] time.
pub fn might_be_enum(value: u32) -> Result<bool, RegistryError> {
    Ok(table()?.might_be_enum(value))
}

/// Symbolic name for `value`, or the unknown-value placeholder.
pub fn enum_to_string(value: u32) -> Result<String, RegistryError> {
    Ok(table()?.enum_to_string(value))
}
