//! Scripted in-memory context
//!
//! A stand-in for a real rendering context: resource-creating calls hand
//! out fresh handles, everything else is accepted and recorded, and an
//! error code can be scheduled against a named call to exercise the
//! wrapper's error paths.

use gltrace_core::{CallError, Context, Handle, Manifest, Value, webgl};
use smallvec::SmallVec;

/// Arguments of one recorded call.
pub type Args = SmallVec<[Value; 8]>;

pub struct ScriptedContext {
    manifest: Manifest,
    next_id: u64,
    pending_error: u32,
    /// Call name that triggers `error_on_call.1` when invoked.
    error_on_call: Option<(String, u32)>,
    calls: Vec<(String, Args)>,
}

impl ScriptedContext {
    pub fn new() -> Self {
        Self {
            manifest: webgl::manifest(),
            next_id: 1,
            pending_error: webgl::NO_ERROR,
            error_on_call: None,
            calls: Vec::new(),
        }
    }

    /// Schedule `code` to be reported after the next invocation of `call`.
    pub fn schedule_error(&mut self, call: impl Into<String>, code: u32) {
        self.error_on_call = Some((call.into(), code));
    }

    /// Number of calls made so far.
    pub fn call_count(&self) -> usize {
        self.calls.len()
    }
}

impl Context for ScriptedContext {
    fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    fn invoke(&mut self, name: &str, args: &[Value]) -> Result<Value, CallError> {
        if !self.manifest.has_method(name) {
            return Err(CallError::UnknownMethod(name.to_string()));
        }
        self.calls.push((name.to_string(), args.iter().cloned().collect()));

        if let Some((_, code)) = self.error_on_call.take_if(|(call, _)| call == name) {
            self.pending_error = code;
        }

        match name {
            "createBuffer" | "createFramebuffer" | "createProgram" | "createRenderbuffer"
            | "createShader" | "createTexture" | "getUniformLocation" => {
                let handle = Handle::from_raw(self.next_id);
                self.next_id += 1;
                Ok(Value::Handle(handle))
            }
            "getError" => Ok(Value::Int(self.get_error() as i64)),
            "checkFramebufferStatus" => {
                Ok(Value::Int(self.manifest.constant("FRAMEBUFFER_COMPLETE").unwrap_or(0) as i64))
            }
            "isContextLost" => Ok(Value::Bool(false)),
            _ => Ok(Value::Null),
        }
    }

    fn get_error(&mut self) -> u32 {
        std::mem::replace(&mut self.pending_error, webgl::NO_ERROR)
    }
}
