//! Debug wrapping context
//!
//! [`DebugContext`] wraps any [`Context`] with a same-shaped proxy that
//! polls the real error query after every call, shadows non-zero codes so
//! the application still sees each one exactly once, and optionally emits a
//! trace line per call. It is pass-through instrumentation: results return
//! unchanged, underlying call failures propagate verbatim, and nothing is
//! ever retried.

use std::collections::BTreeMap;

use crate::context::{CallError, Context, Manifest};
use crate::format;
use crate::names::ResourceNames;
use crate::registry::{self, ConstantTable};
use crate::value::Value;
use crate::webgl::NO_ERROR;

/// Pending error flags, one per distinct code reported since the last
/// drain. Flags, not counts: a second report of the same code before a
/// drain is indistinguishable from the first.
#[derive(Debug, Default)]
struct ErrorShadow {
    pending: BTreeMap<u32, bool>,
}

impl ErrorShadow {
    fn record(&mut self, code: u32) {
        self.pending.insert(code, true);
    }

    /// Return and clear one pending code, lowest first, or `NO_ERROR`.
    fn drain(&mut self) -> u32 {
        for (code, pending) in self.pending.iter_mut() {
            if *pending {
                *pending = false;
                return *code;
            }
        }
        NO_ERROR
    }
}

/// Callback fired when a wrapped call leaves a non-zero error code:
/// `(code, call name, arguments)`.
pub type ErrorCallback = Box<dyn FnMut(u32, &str, &[Value])>;

/// Sink for trace lines and default error reports.
pub type TraceSink = Box<dyn FnMut(&str)>;

/// A wrapping context that checks the error state after every call and
/// optionally traces each call made.
///
/// The wrapper is a drop-in substitute for the original: it implements
/// [`Context`] itself, its manifest carries the target's constants and
/// plain members unchanged, and every call delegates to the target. The
/// original context remains independently usable, though mixing direct
/// calls with wrapped calls desynchronizes the error shadow.
pub struct DebugContext<C: Context> {
    inner: C,
    manifest: Manifest,
    table: &'static ConstantTable,
    shadow: ErrorShadow,
    names: ResourceNames,
    tracing: bool,
    sink: TraceSink,
    on_error: Option<ErrorCallback>,
}

impl<C: Context> DebugContext<C> {
    /// Wrap `inner`, initializing the constant registry from its manifest
    /// if this is the first context wrapped in the process.
    pub fn new(inner: C) -> Self {
        let table = registry::init(inner.manifest());
        let manifest = inner.manifest().clone();
        Self {
            inner,
            manifest,
            table,
            shadow: ErrorShadow::default(),
            names: ResourceNames::new(),
            tracing: false,
            sink: Box::new(|line| log::info!(target: "gltrace", "{line}")),
            on_error: None,
        }
    }

    /// Replace the diagnostic sink. The default writes through
    /// `log::info!` with target `gltrace`.
    pub fn with_sink(mut self, sink: impl FnMut(&str) + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    /// Replace the error callback. The default formats the offending call
    /// and writes `WebGL error <NAME> in <call>` to the sink.
    pub fn with_error_callback(
        mut self,
        callback: impl FnMut(u32, &str, &[Value]) + 'static,
    ) -> Self {
        self.on_error = Some(Box::new(callback));
        self
    }

    /// Toggle call tracing. The off-to-on transition is itself announced
    /// through the sink.
    pub fn set_tracing(&mut self, enabled: bool) {
        if !self.tracing && enabled {
            (self.sink)("gl.setTracing(true);");
        }
        self.tracing = enabled;
    }

    /// Whether tracing is currently enabled.
    pub fn tracing(&self) -> bool {
        self.tracing
    }

    /// The wrapped context.
    pub fn inner(&self) -> &C {
        &self.inner
    }

    /// Unwrap, discarding all instrumentation state.
    pub fn into_inner(self) -> C {
        self.inner
    }

    fn report_error(&mut self, code: u32, name: &str, args: &[Value]) {
        match self.on_error.as_mut() {
            Some(on_error) => on_error(code, name, args),
            None => {
                let line = format!(
                    "WebGL error {} in {}",
                    self.table.enum_to_string(code),
                    format::format_call(name, args, self.table)
                );
                (self.sink)(&line);
            }
        }
    }
}

impl<C: Context> Context for DebugContext<C> {
    fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    fn invoke(&mut self, name: &str, args: &[Value]) -> Result<Value, CallError> {
        // The error query is overridden, not wrapped: by-name calls to it
        // drain the shadow and are neither traced nor error-checked.
        if name == "getError" {
            return Ok(Value::Int(self.shadow.drain() as i64));
        }

        let mut result_name = None;
        if self.tracing {
            result_name = self.names.next_symbol(name);
            let call = format::trace_call(name, args, &self.names, self.table);
            let line = match &result_name {
                Some(symbol) => format!("var {symbol} = {call}"),
                None => call,
            };
            (self.sink)(&line);
        }

        let result = self.inner.invoke(name, args)?;

        // Only reference-like results can carry a name; primitives drop it.
        if let (Some(symbol), Value::Handle(handle)) = (result_name, &result) {
            self.names.assign(*handle, symbol);
        }

        let code = self.inner.get_error();
        if code != NO_ERROR {
            self.shadow.record(code);
            self.report_error(code, name, args);
        }

        Ok(result)
    }

    fn get_error(&mut self) -> u32 {
        self.shadow.drain()
    }
}
