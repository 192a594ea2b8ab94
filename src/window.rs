
//! An X11 window with an OpenGL 3.3 core context.

use std::ffi::CStr;
use std::os::raw::c_char;

use gl::types::GLubyte;
use math3d::Vec2;

use crate::error::{Error, Result};
use crate::input::Input;

// All shaders are written against 3.3 core, so we don't allow customizing this.
#[derive(Debug, Copy, Clone)]
struct GlRequest {
    version: (u32, u32),
    debug: bool,
}

impl Default for GlRequest {
    fn default() -> GlRequest {
        GlRequest {
            version: (3, 3),
            debug: cfg!(debug_assertions),
        }
    }
}

/// Reads the string returned by `glGetString(GL_VERSION)`. A null pointer means the context is
/// not usable.
unsafe fn version_string(raw: *const GLubyte) -> Result<String> {
    if raw.is_null() {
        return Err(Error::Window("glGetString(GL_VERSION) returned null".into()));
    }
    Ok(CStr::from_ptr(raw as *const c_char).to_string_lossy().into_owned())
}

#[cfg(target_os = "linux")]
pub use self::linux::*;

#[cfg(target_os = "linux")]
mod linux {
    use super::*;

    use std::ptr;
    use std::mem;
    use std::ffi::CString;
    use std::os::raw::c_long;

    use log::{debug, info, trace, warn};

    // We access all ffi stuff through `ffi::whatever` instead of through each apis specific
    // bindings. This allows us to easily add custom stuff that is missing in bindings.
    mod ffi {
        pub(super) use x11_dl::xlib::*;
        pub(super) use x11_dl::glx::*;
        pub(super) use x11_dl::glx::arb::*;

        #[allow(non_camel_case_types)]
        pub type glXSwapIntervalEXT = unsafe extern "C" fn(*mut Display, GLXDrawable, i32);

        #[allow(non_camel_case_types)]
        pub type glXCreateContextAttribsARB = unsafe extern "C" fn(
            *mut Display,
            GLXFBConfig,
            GLXContext,
            Bool,
            *const i32
        ) -> GLXContext;
    }

    pub struct Window {
        xlib: ffi::Xlib,
        glx: ffi::Glx,

        display: *mut ffi::Display,
        window: ffi::Window,
        context: ffi::GLXContext,

        wm_delete_window: ffi::Atom,
        swap_function: Option<ffi::glXSwapIntervalEXT>,

        close_requested: bool,
        resized: bool,
        size: Vec2<u32>,
    }

    impl Window {
        /// Opens a window with a double buffered OpenGL 3.3 core context which has a depth and a
        /// stencil buffer. The context is made current and all gl functions are loaded. The
        /// window is not visible until `show` is called.
        pub fn new(title: &str, width: u32, height: u32) -> Result<Window> {
            let gl_request = GlRequest::default();

            let xlib = ffi::Xlib::open()
                .map_err(|err| Error::Window(format!("Could not load xlib: {:?}", err)))?;
            let glx = ffi::Glx::open()
                .map_err(|err| Error::Window(format!("Could not load glx: {:?}", err)))?;

            unsafe { (xlib.XSetErrorHandler)(Some(x_error_callback)) };

            let display = unsafe { (xlib.XOpenDisplay)(ptr::null()) };
            if display.is_null() {
                return Err(Error::Window("Could not connect to the X server".into()));
            }

            // Everything the demos need: depth testing for 3D scenes and a stencil buffer for
            // drawing each shadow only once
            let mut attributes = [
                ffi::GLX_X_RENDERABLE,  1,
                ffi::GLX_DRAWABLE_TYPE, ffi::GLX_WINDOW_BIT,
                ffi::GLX_RENDER_TYPE,   ffi::GLX_RGBA_BIT,
                ffi::GLX_X_VISUAL_TYPE, ffi::GLX_TRUE_COLOR,
                ffi::GLX_RED_SIZE,      8,
                ffi::GLX_GREEN_SIZE,    8,
                ffi::GLX_BLUE_SIZE,     8,
                ffi::GLX_ALPHA_SIZE,    8,
                ffi::GLX_DEPTH_SIZE,    24,
                ffi::GLX_STENCIL_SIZE,  8,
                ffi::GLX_DOUBLEBUFFER,  1,

                0,
            ];

            let default_screen = unsafe { (xlib.XDefaultScreen)(display) };

            let mut count = 0;
            let fb_configs = unsafe { (glx.glXChooseFBConfig)(
                display,
                default_screen,
                attributes.as_mut_ptr(),
                &mut count,
            ) };
            if fb_configs.is_null() || count == 0 {
                unsafe { (xlib.XCloseDisplay)(display) };
                return Err(Error::Window("No framebuffer config with depth and stencil buffers".into()));
            }

            let fb_config = unsafe { *fb_configs }; // Just use the first one
            unsafe { (xlib.XFree)(fb_configs as *mut _) };

            let visual = unsafe { (glx.glXGetVisualFromFBConfig)(display, fb_config) };
            if visual.is_null() {
                unsafe { (xlib.XCloseDisplay)(display) };
                return Err(Error::Window("No appropriate visual found".into()));
            }

            let root = unsafe { (xlib.XDefaultRootWindow)(display) };
            let colormap = unsafe { (xlib.XCreateColormap)(display, root, (*visual).visual, ffi::AllocNone) };

            let mut win_attributes = ffi::XSetWindowAttributes {
                event_mask:
                    ffi::ExposureMask |
                    ffi::StructureNotifyMask |
                    ffi::KeyPressMask | ffi::KeyReleaseMask |
                    ffi::FocusChangeMask,
                colormap,
                .. unsafe { mem::zeroed() }
            };

            let window = unsafe { (xlib.XCreateWindow)(
                display, root,
                0, 0,
                width, height,
                0, // Border

                (*visual).depth,
                ffi::InputOutput as _,
                (*visual).visual,

                ffi::CWColormap | ffi::CWEventMask,
                &mut win_attributes,
            ) };
            unsafe { (xlib.XFree)(visual as *mut _) };

            let title = CString::new(title).unwrap_or_default();
            unsafe { (xlib.XStoreName)(display, window, title.as_ptr() as *mut _) };

            let context = unsafe {
                let create_fn = (glx.glXGetProcAddress)(b"glXCreateContextAttribsARB\0".as_ptr());
                let create_fn = match create_fn {
                    Some(f) => mem::transmute::<_, ffi::glXCreateContextAttribsARB>(f),
                    None => {
                        (xlib.XDestroyWindow)(display, window);
                        (xlib.XCloseDisplay)(display);
                        return Err(Error::Window("glXCreateContextAttribsARB is not supported".into()));
                    },
                };

                let mut flags = 0;
                if gl_request.debug {
                    flags |= ffi::GLX_CONTEXT_DEBUG_BIT_ARB;
                }

                let context_attributes = [
                    ffi::GLX_CONTEXT_MAJOR_VERSION_ARB, gl_request.version.0 as i32,
                    ffi::GLX_CONTEXT_MINOR_VERSION_ARB, gl_request.version.1 as i32,
                    ffi::GLX_CONTEXT_FLAGS_ARB, flags,
                    ffi::GLX_CONTEXT_PROFILE_MASK_ARB, ffi::GLX_CONTEXT_CORE_PROFILE_BIT_ARB,
                    0,
                ];

                let context = create_fn(
                    display, fb_config,
                    ptr::null_mut(), 1,
                    context_attributes.as_ptr(),
                );

                if context.is_null() {
                    (xlib.XDestroyWindow)(display, window);
                    (xlib.XCloseDisplay)(display);
                    return Err(Error::Window(format!("Could not create GLX context for {:?}", gl_request)));
                }

                (glx.glXMakeCurrent)(display, window, context);
                context
            };

            let mut gl_name_buf = Vec::with_capacity(100);
            gl::load_with(|name| {
                gl_name_buf.clear();
                gl_name_buf.extend_from_slice(name.as_bytes());
                gl_name_buf.push(0);

                unsafe {
                    match (glx.glXGetProcAddress)(gl_name_buf.as_ptr()) {
                        Some(f) => f as *const _,
                        None => ptr::null(),
                    }
                }
            });

            // TODO: Check GLX_EXT_swap_control in the extension string before using this
            let swap_function = unsafe {
                (glx.glXGetProcAddress)(b"glXSwapIntervalEXT\0".as_ptr())
                    .map(|f| mem::transmute::<_, ffi::glXSwapIntervalEXT>(f))
            };
            if swap_function.is_none() {
                warn!("glXSwapIntervalEXT is not available, vsync can not be changed");
            }

            // Listen for close events
            let wm_delete_window = unsafe {
                let mut atom = (xlib.XInternAtom)(
                    display,
                    b"WM_DELETE_WINDOW\0".as_ptr() as *const _,
                    0
                );
                (xlib.XSetWMProtocols)(display, window, &mut atom, 1);
                atom
            };

            // From here on dropping the window releases the context, the window and the display
            let window = Window {
                xlib, glx,
                display,
                window,
                context,
                wm_delete_window,
                swap_function,

                close_requested: false,
                resized: false,
                size: Vec2::new(width, height),
            };

            let version = unsafe { version_string(gl::GetString(gl::VERSION))? };
            info!("OpenGL {}", version);
            debug!("Created {}x{} window", width, height);

            Ok(window)
        }

        pub fn show(&mut self) {
            unsafe { (self.xlib.XMapWindow)(self.display, self.window) };
        }

        /// Handles all pending events. Key events are recorded in `input`.
        pub fn poll_events(&mut self, input: &mut Input) {
            input.refresh();
            self.resized = false;

            unsafe { while (self.xlib.XPending)(self.display) > 0 {
                let mut event = mem::zeroed::<ffi::XEvent>();
                (self.xlib.XNextEvent)(self.display, &mut event);
                let ty = event.get_type();

                match ty {
                    ffi::KeyPress | ffi::KeyRelease => {
                        let event: ffi::XKeyEvent = event.into();
                        trace!("Key {} {}", event.keycode, if ty == ffi::KeyPress { "down" } else { "up" });
                        input.handle_key(event.keycode as u8, ty == ffi::KeyPress);
                    },

                    ffi::ConfigureNotify => {
                        let event: ffi::XConfigureEvent = event.into();
                        let size = Vec2::new(event.width.max(0) as u32, event.height.max(0) as u32);

                        if size != self.size {
                            debug!("Window resized to {}x{}", size.x, size.y);
                            self.size = size;
                            self.resized = true;
                        }
                    },

                    ffi::ClientMessage => {
                        let event: ffi::XClientMessageEvent = event.into();

                        if event.data.get_long(0) == self.wm_delete_window as c_long {
                            self.close_requested = true;
                        }
                    },

                    ffi::MappingNotify => {
                        (self.xlib.XRefreshKeyboardMapping)(event.as_mut());
                    },

                    // We redraw every frame anyways
                    ffi::Expose | ffi::FocusIn | ffi::FocusOut | ffi::ReparentNotify | ffi::MapNotify => {},

                    other => trace!("Ignoring X event {}", other),
                }
            } }
        }

        pub fn swap_buffers(&mut self) {
            unsafe { (self.glx.glXSwapBuffers)(self.display, self.window) };
        }

        pub fn close_requested(&self) -> bool { self.close_requested }
        /// True if the window changed size during the last call to `poll_events`
        pub fn resized(&self) -> bool { self.resized }
        pub fn size(&self) -> Vec2<u32> { self.size }

        pub fn set_vsync(&mut self, vsync: bool) {
            if let Some(swap_function) = self.swap_function {
                unsafe { swap_function(self.display, self.window, if vsync { 1 } else { 0 }) };
            }
        }
    }

    impl Drop for Window {
        fn drop(&mut self) {
            unsafe {
                (self.glx.glXMakeCurrent)(self.display, 0, ptr::null_mut());
                (self.glx.glXDestroyContext)(self.display, self.context);

                (self.xlib.XDestroyWindow)(self.display, self.window);
                (self.xlib.XCloseDisplay)(self.display);
            }
        }
    }

    unsafe extern "C" fn x_error_callback(
        _display: *mut ffi::Display,
        event: *mut ffi::XErrorEvent
    ) -> i32
    {
        log::error!("X error: {}", (*event).error_code);
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unusable_context_is_an_error() {
        let result = unsafe { version_string(std::ptr::null()) };
        match result {
            Err(Error::Window(message)) => assert!(message.contains("GL_VERSION")),
            other => panic!("Expected a window error, got {:?}", other),
        }

        let version = unsafe { version_string(b"3.3.0 Mesa 23.1\0".as_ptr()) };
        assert_eq!("3.3.0 Mesa 23.1", version.unwrap());
    }
}
