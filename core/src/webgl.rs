//! Built-in WebGL 1.0 surface manifest
//!
//! A statically typed host cannot discover a context's shape by reflection,
//! so the known constant names and callable names are hand-maintained here,
//! taken from the published WebGL 1.0 interface. Context implementations
//! can start from [`manifest`] instead of declaring the surface themselves.

use crate::context::Manifest;

/// No pending error. The drain sentinel for every error query.
pub const NO_ERROR: u32 = 0;
/// An enum argument was out of range.
pub const INVALID_ENUM: u32 = 0x0500;
/// A numeric argument was out of range.
pub const INVALID_VALUE: u32 = 0x0501;
/// The call is not allowed in the current state.
pub const INVALID_OPERATION: u32 = 0x0502;
/// Not enough memory to execute the call.
pub const OUT_OF_MEMORY: u32 = 0x0505;
/// The bound framebuffer is not complete.
pub const INVALID_FRAMEBUFFER_OPERATION: u32 = 0x0506;
/// The context was lost.
pub const CONTEXT_LOST_WEBGL: u32 = 0x9242;

/// Numeric constant members of a WebGL 1.0 context.
///
/// Error codes come first: several names share the value `0` (`NO_ERROR`,
/// `POINTS`, `ZERO`) and the constant registry keeps the first definition
/// per value, so error reports resolve `0` to `NO_ERROR`.
pub const CONSTANTS: &[(&str, u32)] = &[
    // Error codes
    ("NO_ERROR", NO_ERROR),
    ("INVALID_ENUM", INVALID_ENUM),
    ("INVALID_VALUE", INVALID_VALUE),
    ("INVALID_OPERATION", INVALID_OPERATION),
    ("OUT_OF_MEMORY", OUT_OF_MEMORY),
    ("INVALID_FRAMEBUFFER_OPERATION", INVALID_FRAMEBUFFER_OPERATION),
    ("CONTEXT_LOST_WEBGL", CONTEXT_LOST_WEBGL),
    // Clear bits
    ("DEPTH_BUFFER_BIT", 0x0000_0100),
    ("STENCIL_BUFFER_BIT", 0x0000_0400),
    ("COLOR_BUFFER_BIT", 0x0000_4000),
    // Primitives
    ("POINTS", 0x0000),
    ("LINES", 0x0001),
    ("LINE_LOOP", 0x0002),
    ("LINE_STRIP", 0x0003),
    ("TRIANGLES", 0x0004),
    ("TRIANGLE_STRIP", 0x0005),
    ("TRIANGLE_FAN", 0x0006),
    // Blend factors
    ("ZERO", 0x0000),
    ("ONE", 0x0001),
    ("SRC_COLOR", 0x0300),
    ("ONE_MINUS_SRC_COLOR", 0x0301),
    ("SRC_ALPHA", 0x0302),
    ("ONE_MINUS_SRC_ALPHA", 0x0303),
    ("DST_ALPHA", 0x0304),
    ("ONE_MINUS_DST_ALPHA", 0x0305),
    ("DST_COLOR", 0x0306),
    ("ONE_MINUS_DST_COLOR", 0x0307),
    // Buffer targets and usage
    ("ARRAY_BUFFER", 0x8892),
    ("ELEMENT_ARRAY_BUFFER", 0x8893),
    ("STREAM_DRAW", 0x88E0),
    ("STATIC_DRAW", 0x88E4),
    ("DYNAMIC_DRAW", 0x88E8),
    // Capabilities
    ("CULL_FACE", 0x0B44),
    ("DEPTH_TEST", 0x0B71),
    ("STENCIL_TEST", 0x0B90),
    ("DITHER", 0x0BD0),
    ("BLEND", 0x0BE2),
    ("SCISSOR_TEST", 0x0C11),
    ("POLYGON_OFFSET_FILL", 0x8037),
    // Face culling and winding
    ("CW", 0x0900),
    ("CCW", 0x0901),
    ("FRONT", 0x0404),
    ("BACK", 0x0405),
    ("FRONT_AND_BACK", 0x0408),
    // Comparison functions
    ("NEVER", 0x0200),
    ("LESS", 0x0201),
    ("EQUAL", 0x0202),
    ("LEQUAL", 0x0203),
    ("GREATER", 0x0204),
    ("NOTEQUAL", 0x0205),
    ("GEQUAL", 0x0206),
    ("ALWAYS", 0x0207),
    // Element types
    ("BYTE", 0x1400),
    ("UNSIGNED_BYTE", 0x1401),
    ("SHORT", 0x1402),
    ("UNSIGNED_SHORT", 0x1403),
    ("INT", 0x1404),
    ("UNSIGNED_INT", 0x1405),
    ("FLOAT", 0x1406),
    // Pixel formats
    ("ALPHA", 0x1906),
    ("RGB", 0x1907),
    ("RGBA", 0x1908),
    ("LUMINANCE", 0x1909),
    ("LUMINANCE_ALPHA", 0x190A),
    // Shaders
    ("FRAGMENT_SHADER", 0x8B30),
    ("VERTEX_SHADER", 0x8B31),
    ("COMPILE_STATUS", 0x8B81),
    ("LINK_STATUS", 0x8B82),
    ("VALIDATE_STATUS", 0x8B83),
    // Textures
    ("TEXTURE_2D", 0x0DE1),
    ("TEXTURE_CUBE_MAP", 0x8513),
    ("TEXTURE0", 0x84C0),
    ("TEXTURE_MAG_FILTER", 0x2800),
    ("TEXTURE_MIN_FILTER", 0x2801),
    ("TEXTURE_WRAP_S", 0x2802),
    ("TEXTURE_WRAP_T", 0x2803),
    ("NEAREST", 0x2600),
    ("LINEAR", 0x2601),
    ("REPEAT", 0x2901),
    ("CLAMP_TO_EDGE", 0x812F),
    // Framebuffers and renderbuffers
    ("FRAMEBUFFER", 0x8D40),
    ("RENDERBUFFER", 0x8D41),
    ("COLOR_ATTACHMENT0", 0x8CE0),
    ("DEPTH_ATTACHMENT", 0x8D00),
    ("FRAMEBUFFER_COMPLETE", 0x8CD5),
];

/// Callable members of a WebGL 1.0 context.
pub const METHODS: &[&str] = &[
    "activeTexture",
    "attachShader",
    "bindAttribLocation",
    "bindBuffer",
    "bindFramebuffer",
    "bindRenderbuffer",
    "bindTexture",
    "blendColor",
    "blendEquation",
    "blendEquationSeparate",
    "blendFunc",
    "blendFuncSeparate",
    "bufferData",
    "bufferSubData",
    "checkFramebufferStatus",
    "clear",
    "clearColor",
    "clearDepth",
    "clearStencil",
    "colorMask",
    "compileShader",
    "copyTexImage2D",
    "copyTexSubImage2D",
    "createBuffer",
    "createFramebuffer",
    "createProgram",
    "createRenderbuffer",
    "createShader",
    "createTexture",
    "cullFace",
    "deleteBuffer",
    "deleteFramebuffer",
    "deleteProgram",
    "deleteRenderbuffer",
    "deleteShader",
    "deleteTexture",
    "depthFunc",
    "depthMask",
    "depthRange",
    "detachShader",
    "disable",
    "disableVertexAttribArray",
    "drawArrays",
    "drawElements",
    "enable",
    "enableVertexAttribArray",
    "finish",
    "flush",
    "framebufferRenderbuffer",
    "framebufferTexture2D",
    "frontFace",
    "generateMipmap",
    "getActiveAttrib",
    "getActiveUniform",
    "getAttachedShaders",
    "getAttribLocation",
    "getBufferParameter",
    "getContextAttributes",
    "getError",
    "getExtension",
    "getFramebufferAttachmentParameter",
    "getParameter",
    "getProgramInfoLog",
    "getProgramParameter",
    "getRenderbufferParameter",
    "getShaderInfoLog",
    "getShaderParameter",
    "getShaderSource",
    "getSupportedExtensions",
    "getTexParameter",
    "getUniform",
    "getUniformLocation",
    "getVertexAttrib",
    "getVertexAttribOffset",
    "hint",
    "isBuffer",
    "isContextLost",
    "isEnabled",
    "isFramebuffer",
    "isProgram",
    "isRenderbuffer",
    "isShader",
    "isTexture",
    "lineWidth",
    "linkProgram",
    "pixelStorei",
    "polygonOffset",
    "readPixels",
    "renderbufferStorage",
    "sampleCoverage",
    "scissor",
    "shaderSource",
    "stencilFunc",
    "stencilFuncSeparate",
    "stencilMask",
    "stencilMaskSeparate",
    "stencilOp",
    "stencilOpSeparate",
    "texImage2D",
    "texParameterf",
    "texParameteri",
    "texSubImage2D",
    "uniform1f",
    "uniform1fv",
    "uniform1i",
    "uniform1iv",
    "uniform2f",
    "uniform2fv",
    "uniform2i",
    "uniform2iv",
    "uniform3f",
    "uniform3fv",
    "uniform3i",
    "uniform3iv",
    "uniform4f",
    "uniform4fv",
    "uniform4i",
    "uniform4iv",
    "uniformMatrix2fv",
    "uniformMatrix3fv",
    "uniformMatrix4fv",
    "useProgram",
    "validateProgram",
    "vertexAttrib1f",
    "vertexAttrib1fv",
    "vertexAttrib2f",
    "vertexAttrib2fv",
    "vertexAttrib3f",
    "vertexAttrib3fv",
    "vertexAttrib4f",
    "vertexAttrib4fv",
    "vertexAttribPointer",
    "viewport",
];

/// Manifest of the standard WebGL 1.0 surface.
pub fn manifest() -> Manifest {
    let mut manifest = Manifest::new();
    for (name, value) in CONSTANTS {
        manifest = manifest.with_constant(*name, *value);
    }
    for name in METHODS {
        manifest = manifest.with_method(*name);
    }
    manifest
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::ConstantTable;

    #[test]
    fn test_constant_names_are_unique() {
        for (i, (name, _)) in CONSTANTS.iter().enumerate() {
            assert!(
                !CONSTANTS[i + 1..].iter().any(|(other, _)| other == name),
                "duplicate constant name {name}"
            );
        }
    }

    #[test]
    fn test_method_names_are_unique_and_sorted() {
        for pair in METHODS.windows(2) {
            assert!(pair[0] < pair[1], "{} out of order", pair[1]);
        }
    }

    #[test]
    fn test_error_codes_win_shared_values() {
        // NO_ERROR, POINTS and ZERO all have value 0; ONE and LINES share 1.
        let table = ConstantTable::from_manifest(&manifest());
        assert_eq!(table.enum_to_string(0), "NO_ERROR");
        assert_eq!(table.enum_to_string(1), "LINES");
        assert_eq!(table.enum_to_string(INVALID_ENUM), "INVALID_ENUM");
        assert_eq!(table.enum_to_string(0x8892), "ARRAY_BUFFER");
    }

    #[test]
    fn test_manifest_shape() {
        let manifest = manifest();
        assert_eq!(manifest.constants.len(), CONSTANTS.len());
        assert_eq!(manifest.methods.len(), METHODS.len());
        assert!(manifest.has_method("createBuffer"));
        assert!(manifest.has_method("getError"));
        assert!(manifest.values.is_empty());
    }
}
