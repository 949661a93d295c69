//! gltrace demo - trace a scripted draw sequence
//!
//! Drives an in-memory WebGL-shaped context through the debug wrapper and
//! prints the resulting trace to stdout.
//!
//! # Usage
//!
//! ```bash
//! # Full trace of the scripted sequence
//! gltrace-demo
//!
//! # Force an INVALID_ENUM mid-sequence to see the error report and shadow
//! gltrace-demo --inject-error
//!
//! # Tracing off: only error reports are printed
//! gltrace-demo --inject-error --quiet
//! ```

mod scripted;

use anyhow::{Context as _, Result};
use clap::Parser;
use gltrace_core::{Context, DebugContext, TypedArray, Value, enum_to_string, webgl};

use crate::scripted::ScriptedContext;

#[derive(Parser)]
#[command(name = "gltrace-demo", about = "Trace a scripted draw sequence through the debug wrapper")]
struct Args {
    /// Schedule an INVALID_ENUM error on the enable() call
    #[arg(long)]
    inject_error: bool,

    /// Disable call tracing; only error reports are printed
    #[arg(long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut target = ScriptedContext::new();
    if args.inject_error {
        target.schedule_error("enable", webgl::INVALID_ENUM);
    }

    let mut gl = DebugContext::new(target).with_sink(|line| println!("{line}"));
    gl.set_tracing(!args.quiet);

    run_sequence(&mut gl)?;

    // Drain the error shadow the way an application polling for errors
    // would; each shadowed code surfaces exactly once.
    loop {
        let code = gl.get_error();
        if code == webgl::NO_ERROR {
            break;
        }
        println!("polled error: {}", enum_to_string(code)?);
    }

    println!("calls made: {}", gl.inner().call_count());
    Ok(())
}

/// A minimal "upload a triangle and draw it" sequence.
fn run_sequence(gl: &mut DebugContext<ScriptedContext>) -> Result<()> {
    let lookup = |name: &str| -> Result<Value> {
        let value = gl_constant(gl, name)?;
        Ok(Value::Int(value as i64))
    };
    let array_buffer = lookup("ARRAY_BUFFER")?;
    let static_draw = lookup("STATIC_DRAW")?;
    let vertex_shader = lookup("VERTEX_SHADER")?;
    let fragment_shader = lookup("FRAGMENT_SHADER")?;
    let depth_test = lookup("DEPTH_TEST")?;
    let triangles = lookup("TRIANGLES")?;

    let buffer = gl.invoke("createBuffer", &[])?;
    gl.invoke("bindBuffer", &[array_buffer.clone(), buffer.clone()])?;
    gl.invoke(
        "bufferData",
        &[
            array_buffer,
            Value::Array(TypedArray::Float32(vec![
                0.0, 0.5, -0.5, -0.5, 0.5, -0.5,
            ])),
            static_draw,
        ],
    )?;

    let vs = gl.invoke("createShader", &[vertex_shader])?;
    gl.invoke(
        "shaderSource",
        &[vs.clone(), Value::str("void main() {\n  gl_Position = pos;\n}")],
    )?;
    gl.invoke("compileShader", &[vs.clone()])?;

    let fs = gl.invoke("createShader", &[fragment_shader])?;
    gl.invoke(
        "shaderSource",
        &[fs.clone(), Value::str("void main() {\n  gl_FragColor = color;\n}")],
    )?;
    gl.invoke("compileShader", &[fs.clone()])?;

    let program = gl.invoke("createProgram", &[])?;
    gl.invoke("attachShader", &[program.clone(), vs])?;
    gl.invoke("attachShader", &[program.clone(), fs])?;
    gl.invoke("linkProgram", &[program.clone()])?;
    gl.invoke("useProgram", &[program.clone()])?;

    let color = gl.invoke("getUniformLocation", &[program, Value::str("u_color")])?;
    gl.invoke(
        "uniform4f",
        &[
            color,
            Value::Float(1.0),
            Value::Float(0.5),
            Value::Float(0.25),
            Value::Float(1.0),
        ],
    )?;

    gl.invoke("enable", &[depth_test])?;
    gl.invoke("drawArrays", &[triangles, Value::Int(0), Value::Int(3)])?;
    gl.invoke("finish", &[])?;

    Ok(())
}

fn gl_constant(gl: &DebugContext<ScriptedContext>, name: &str) -> Result<u32> {
    gl.manifest()
        .constant(name)
        .with_context(|| format!("context manifest has no constant {name}"))
}
