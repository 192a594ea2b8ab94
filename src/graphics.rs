
//! Wrappers for unsafe OpenGL state calls

use gl;
use gl::types::*;
use log::error;

use crate::color::Color;

/// Sets the OpenGL viewport to cover a window of the given size
pub fn viewport(width: u32, height: u32) {
    unsafe {
        gl::Viewport(0, 0, width as GLsizei, height as GLsizei);
    }
}

/// Logs all pending OpenGL errors. Returns the number of errors found.
pub fn print_errors() -> usize {
    let mut count = 0;
    unsafe {
        while let Some(message) = get_error_message(gl::GetError()) {
            error!("OpenGL error: {}", message);
            count += 1;
        }
    }
    count
}

fn get_error_message(error: GLenum) -> Option<String> {
    let value = match error {
        gl::INVALID_VALUE                   => "Invalid value",
        gl::INVALID_ENUM                    => "Invalid enum",
        gl::INVALID_OPERATION               => "Invalid operation",
        gl::INVALID_FRAMEBUFFER_OPERATION   => "Invalid framebuffer operation",
        gl::OUT_OF_MEMORY                   => "Out of memory",

        gl::NO_ERROR                        => return None,
        _                                   => return Some(format!("Invalid error code: {:x}", error)),
    };
    Some(String::from(value))
}

/// Clears the backbuffer. The color buffer is only cleared if a color is given.
pub fn clear(color: Option<Color>, depth: bool, stencil: bool) {
    unsafe {
        if let Some(color) = color {
            gl::ClearColor(color.r, color.g, color.b, color.a);
        }
        let mut mask = 0;
        if color.is_some() { mask |= gl::COLOR_BUFFER_BIT }
        if depth           { mask |= gl::DEPTH_BUFFER_BIT }
        if stencil         { mask |= gl::STENCIL_BUFFER_BIT }
        gl::Clear(mask);
    }
}

/// Toggles depth testing. The backbuffer always has a depthbuffer.
pub fn set_depth_testing(enabled: bool) {
    set_capability(gl::DEPTH_TEST, enabled);
}

/// When enabled, the vertex shader decides how large points are through `gl_PointSize`.
pub fn set_program_point_size(enabled: bool) {
    set_capability(gl::PROGRAM_POINT_SIZE, enabled);
}

/// Draws polygons as outlines instead of filling them
pub fn set_wireframe(enabled: bool) {
    unsafe {
        gl::PolygonMode(gl::FRONT_AND_BACK, if enabled { gl::LINE } else { gl::FILL });
    }
}

/// Widths above 1 are only supported because the context is not forward compatible. Drivers may
/// clamp them.
pub fn set_line_width(width: f32) {
    unsafe {
        gl::LineWidth(width);
    }
}

/// Smooths the edges of lines and polygons, asking for the best quality. Only visible with
/// blending enabled.
pub fn set_smoothing(enabled: bool) {
    set_capability(gl::LINE_SMOOTH, enabled);
    set_capability(gl::POLYGON_SMOOTH, enabled);
    if enabled {
        unsafe {
            gl::Hint(gl::LINE_SMOOTH_HINT, gl::NICEST);
            gl::Hint(gl::POLYGON_SMOOTH_HINT, gl::NICEST);
        }
    }
}

fn set_capability(capability: GLenum, enabled: bool) {
    unsafe {
        if enabled {
            gl::Enable(capability);
        } else {
            gl::Disable(capability);
        }
    }
}

/// Sets which side of a face to treat as the front face and which side of a face to cull. If
/// `None` is passed this disables culling.
///
/// `graphics::set_culling(Some(Default::default()))` sets the winding order to counter-clockwise
/// and culls back faces.
pub fn set_culling(mode: Option<(WindingOrder, FaceSide)>) {
    unsafe { match mode {
        Some((winding_order, face_side)) => {
            gl::Enable(gl::CULL_FACE);
            match winding_order {
                WindingOrder::Clockwise => gl::FrontFace(gl::CW),
                WindingOrder::CounterClockwise => gl::FrontFace(gl::CCW),
            }
            match face_side {
                FaceSide::Front => gl::CullFace(gl::FRONT),
                FaceSide::Back => gl::CullFace(gl::BACK),
            }
        },
        None => {
            gl::Disable(gl::CULL_FACE);
        },
    } }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum WindingOrder {
    Clockwise, CounterClockwise,
}
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FaceSide {
    Front, Back
}

impl Default for WindingOrder {
    fn default() -> WindingOrder { WindingOrder::CounterClockwise }
}
impl Default for FaceSide {
    fn default() -> FaceSide { FaceSide::Back }
}

/// If passed `Some` enables the given blend settings. If passed `None` disables blending.
pub fn set_blending(blending: Option<BlendSettings>) {
    unsafe {
        if let Some(settings) = blending {
            gl::Enable(gl::BLEND);

            gl::BlendFuncSeparate(
                settings.src_color as GLenum,
                settings.dst_color as GLenum,
                settings.src_alpha as GLenum,
                settings.dst_alpha as GLenum
            );
            gl::BlendEquation(settings.function as GLenum);
        } else {
            gl::Disable(gl::BLEND);
        }
    }
}

/// Settings used to define OpenGL blend state. The default settings do normal alpha blending.
#[derive(Debug, Clone, Copy)]
pub struct BlendSettings {
    pub src_color:  BlendFactor,
    pub src_alpha:  BlendFactor,
    pub dst_color:  BlendFactor,
    pub dst_alpha:  BlendFactor,
    pub function:   BlendFunction,
}

impl Default for BlendSettings {
    fn default() -> BlendSettings {
        BlendSettings {
            src_color:  BlendFactor::SrcAlpha,
            dst_color:  BlendFactor::OneMinusSrcAlpha,
            src_alpha:  BlendFactor::One,
            dst_alpha:  BlendFactor::Zero,
            function:   BlendFunction::Add,
        }
    }
}

impl BlendSettings {
    /// Blends with the given factors for both color and alpha
    pub fn new(src: BlendFactor, dst: BlendFactor) -> BlendSettings {
        BlendSettings {
            src_color: src,
            dst_color: dst,
            src_alpha: src,
            dst_alpha: dst,
            function: BlendFunction::Add,
        }
    }
}

#[repr(u32)] // GLenum is u32
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BlendFactor {
    Zero                    = gl::ZERO,
    One                     = gl::ONE,
    SrcColor                = gl::SRC_COLOR,
    OneMinusSrcColor        = gl::ONE_MINUS_SRC_COLOR,
    DstColor                = gl::DST_COLOR,
    OneMinusDstColor        = gl::ONE_MINUS_DST_COLOR,
    SrcAlpha                = gl::SRC_ALPHA,
    OneMinusSrcAlpha        = gl::ONE_MINUS_SRC_ALPHA,
}

#[repr(u32)] // GLenum is u32
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BlendFunction {
    /// `Src + Dst`
    Add             = gl::FUNC_ADD,
    /// `Src - Dst`
    Subtract        = gl::FUNC_SUBTRACT,
}

/// Enables the stencil test with the given settings, or disables it when passed `None`.
pub fn set_stencil(stencil: Option<StencilSettings>) {
    unsafe {
        if let Some(settings) = stencil {
            gl::Enable(gl::STENCIL_TEST);
            gl::StencilFunc(settings.function as GLenum, settings.reference, settings.mask);
            gl::StencilOp(settings.fail as GLenum, settings.depth_fail as GLenum, settings.pass as GLenum);
        } else {
            gl::Disable(gl::STENCIL_TEST);
        }
    }
}

/// Stencil test and update settings. A fragment passes if `(reference & mask) <function>
/// (stencil & mask)` holds.
#[derive(Debug, Clone, Copy)]
pub struct StencilSettings {
    pub function: CompareFunction,
    pub reference: GLint,
    pub mask: GLuint,

    pub fail: StencilOp,
    pub depth_fail: StencilOp,
    pub pass: StencilOp,
}

impl StencilSettings {
    /// Only draws where the stencil buffer is still 0, and increments it wherever something is
    /// drawn. Each pixel is thus drawn at most once, which keeps overlapping translucent shapes
    /// from darkening each other.
    pub fn draw_once() -> StencilSettings {
        StencilSettings {
            function: CompareFunction::Equal,
            reference: 0,
            mask: 1,
            fail: StencilOp::Keep,
            depth_fail: StencilOp::Keep,
            pass: StencilOp::Incr,
        }
    }
}

#[repr(u32)] // GLenum is u32
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CompareFunction {
    Never           = gl::NEVER,
    Always          = gl::ALWAYS,
    Equal           = gl::EQUAL,
    NotEqual        = gl::NOTEQUAL,
    Less            = gl::LESS,
    LessOrEqual     = gl::LEQUAL,
    Greater         = gl::GREATER,
    GreaterOrEqual  = gl::GEQUAL,
}

#[repr(u32)] // GLenum is u32
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StencilOp {
    Keep    = gl::KEEP,
    Zero    = gl::ZERO,
    Replace = gl::REPLACE,
    Incr    = gl::INCR,
    Decr    = gl::DECR,
    Invert  = gl::INVERT,
}

/// Reads the RGBA contents of the backbuffer. Rows are returned bottom to top, the way OpenGL
/// stores them.
pub fn read_pixels(width: u32, height: u32) -> Vec<u8> {
    let mut data = vec![0u8; (width * height * 4) as usize];
    unsafe {
        gl::PixelStorei(gl::PACK_ALIGNMENT, 1);
        gl::ReadBuffer(gl::BACK);
        gl::ReadPixels(
            0, 0,
            width as GLsizei, height as GLsizei,
            gl::RGBA, gl::UNSIGNED_BYTE,
            data.as_mut_ptr() as *mut GLvoid,
        );
    }
    data
}
