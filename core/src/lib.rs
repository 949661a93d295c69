//! gltrace - debug tracing for GL-style graphics contexts
//!
//! Instruments a graphics context with a same-shaped wrapper that checks
//! the error state after every call and can emit a human-readable trace of
//! each call made.
//!
//! # Architecture
//!
//! - [`Context`] - Trait implemented by the context being wrapped, with its
//!   shape declared as a [`Manifest`]
//! - [`registry`] - Process-wide constant value-to-name table, built once
//!   from the first manifest seen
//! - [`DebugContext`] - The wrapping proxy: per-call error polling, an
//!   error shadow so direct polling still sees every code once, and
//!   optional call tracing with autogenerated resource names
//! - [`webgl`] - Hand-maintained manifest of the standard WebGL 1.0 surface
//!
//! # Example
//!
//! ```ignore
//! use gltrace_core::{Context, DebugContext};
//!
//! let mut gl = DebugContext::new(native_context)
//!     .with_error_callback(|code, name, _args| {
//!         panic!("{} raised by call to {name}",
//!                gltrace_core::registry::enum_to_string(code).unwrap());
//!     });
//! gl.set_tracing(true);
//! gl.invoke("createBuffer", &[])?;
//! ```

pub mod context;
pub mod debug;
pub mod format;
pub mod names;
pub mod registry;
#[cfg(test)]
mod test_utils;
pub mod value;
pub mod webgl;

// Re-export the wrapping seam and the proxy
pub use context::{CallError, ConstantDef, Context, Manifest};
pub use debug::{DebugContext, ErrorCallback, TraceSink};

// Re-export the registry operations
pub use registry::{ConstantTable, RegistryError, enum_to_string, init, might_be_enum};

// Re-export the value model
pub use value::{Handle, TypedArray, Value};
