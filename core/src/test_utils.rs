//! Shared test fixtures
//!
//! Every test in this binary that touches the process-wide constant
//! registry must initialize it from [`fixture_manifest`], since the first
//! init wins for the whole process.

use std::collections::VecDeque;

use crate::context::{CallError, Context, Manifest};
use crate::value::{Handle, Value};

/// The constant set shared by all in-process tests.
pub fn fixture_manifest() -> Manifest {
    Manifest::new()
        .with_constant("NO_ERROR", 0)
        .with_constant("INVALID_ENUM", 0x0500)
        .with_constant("INVALID_VALUE", 0x0501)
        .with_constant("INVALID_OPERATION", 0x0502)
        .with_constant("OUT_OF_MEMORY", 0x0505)
        .with_constant("TRIANGLES", 0x0004)
        .with_constant("DEPTH_TEST", 0x0B71)
        .with_constant("FLOAT", 0x1406)
        .with_constant("ARRAY_BUFFER", 0x8892)
        .with_constant("STATIC_DRAW", 0x88E4)
        .with_method("bindBuffer")
        .with_method("bufferData")
        .with_method("checkFramebufferStatus")
        .with_method("createBuffer")
        .with_method("createProgram")
        .with_method("createShader")
        .with_method("createTexture")
        .with_method("disable")
        .with_method("drawArrays")
        .with_method("enable")
        .with_method("finish")
        .with_method("getError")
        .with_method("getUniformLocation")
        .with_method("linkProgram")
        .with_method("shaderSource")
        .with_value("canvas", Value::str("main-canvas"))
        .with_value("premultipliedAlpha", Value::Bool(true))
}

/// In-memory context with scripted resource ids, an injectable error
/// queue, and a one-shot failure hook.
pub struct FakeContext {
    manifest: Manifest,
    next_id: u64,
    pending_errors: VecDeque<u32>,
    fail_next: Option<String>,
    /// Every invocation seen, in order.
    pub calls: Vec<(String, Vec<Value>)>,
}

impl FakeContext {
    pub fn new() -> Self {
        Self {
            manifest: fixture_manifest(),
            next_id: 1,
            pending_errors: VecDeque::new(),
            fail_next: None,
            calls: Vec::new(),
        }
    }

    /// Queue `code` to be reported by the next `get_error` poll.
    pub fn inject_error(&mut self, code: u32) {
        self.pending_errors.push_back(code);
    }

    /// Make the next invocation fail with `message`.
    pub fn fail_next(&mut self, message: impl Into<String>) {
        self.fail_next = Some(message.into());
    }
}

impl Context for FakeContext {
    fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    fn invoke(&mut self, name: &str, args: &[Value]) -> Result<Value, CallError> {
        self.calls.push((name.to_string(), args.to_vec()));

        if let Some(message) = self.fail_next.take() {
            return Err(CallError::Failed {
                name: name.to_string(),
                message,
            });
        }
        if !self.manifest.has_method(name) {
            return Err(CallError::UnknownMethod(name.to_string()));
        }

        match name {
            "createBuffer" | "createProgram" | "createShader" | "createTexture"
            | "getUniformLocation" => {
                let handle = Handle::from_raw(self.next_id);
                self.next_id += 1;
                Ok(Value::Handle(handle))
            }
            "checkFramebufferStatus" => Ok(Value::Int(42)),
            "getError" => Ok(Value::Int(self.get_error() as i64)),
            _ => Ok(Value::Null),
        }
    }

    fn get_error(&mut self) -> u32 {
        self.pending_errors.pop_front().unwrap_or(0)
    }
}
