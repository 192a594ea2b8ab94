
use std::path::Path;

use gl;
use gl::types::*;
use log::{debug, warn};

use crate::error::Result;
use crate::pixmap::Pixmap;

// From GL_EXT_texture_filter_anisotropic, which the `gl` crate does not generate bindings for
const TEXTURE_MAX_ANISOTROPY_EXT: GLenum = 0x84FE;
const MAX_TEXTURE_MAX_ANISOTROPY_EXT: GLenum = 0x84FF;

/// A wrapper around a OpenGL 2D texture object. Textures always store 8-bit RGBA data.
#[derive(Debug)]
pub struct Texture {
    texture: GLuint,
    pub width: u32,
    pub height: u32,
    has_mipmaps: bool,
}

impl Texture {
    /// Creates a new texture without any associated data
    pub fn new() -> Texture {
        let mut texture = 0;

        unsafe {
            gl::GenTextures(1, &mut texture);
            gl::BindTexture(gl::TEXTURE_2D, texture);
            gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_MAG_FILTER, gl::LINEAR as GLint);
            gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_MIN_FILTER, gl::LINEAR as GLint);
        }

        Texture {
            texture,
            width: 0,
            height: 0,
            has_mipmaps: false,
        }
    }

    pub fn from_pixmap(pixmap: &Pixmap) -> Texture {
        let mut texture = Texture::new();
        texture.load_data(&pixmap.data, pixmap.width, pixmap.height);
        texture
    }

    /// Creates a texture with the image data from a png file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Texture> {
        let pixmap = Pixmap::load(path)?;
        Ok(Texture::from_pixmap(&pixmap))
    }

    /// Loads `<assets>/<name>.png`. If the file is missing or broken a warning is logged and the
    /// given fallback is used instead.
    pub fn from_asset_or<F>(assets: &Path, name: &str, fallback: F) -> Texture
      where F: FnOnce() -> Pixmap,
    {
        let path = assets.join(format!("{}.png", name));
        match Texture::from_file(&path) {
            Ok(texture) => texture,
            Err(err) => {
                warn!("{}, using a generated \"{}\" texture", err, name);
                Texture::from_pixmap(&fallback())
            },
        }
    }

    /// Sets the RGBA data of this texture. The first row in `data` is the bottom row.
    pub fn load_data(&mut self, data: &[u8], width: u32, height: u32) {
        debug_assert_eq!(data.len(), (width * height * 4) as usize);

        unsafe {
            gl::BindTexture(gl::TEXTURE_2D, self.texture);
            gl::PixelStorei(gl::UNPACK_ALIGNMENT, 1);
            gl::TexImage2D(gl::TEXTURE_2D, 0, // Mipmap level
                           gl::RGBA8 as GLint, // Internal format
                           width as GLsizei, height as GLsizei, 0, // Size and border
                           gl::RGBA, // Data format
                           gl::UNSIGNED_BYTE, data.as_ptr() as *const GLvoid);
        }

        self.width = width;
        self.height = height;
        self.has_mipmaps = false;
    }

    /// Binds this texture to the given texture unit
    pub fn bind(&self, unit: u32) {
        unsafe {
            gl::ActiveTexture(gl::TEXTURE0 + unit as GLenum);
            gl::BindTexture(gl::TEXTURE_2D, self.texture);
        }
    }

    /// Generates the full mipmap chain from the current data
    pub fn generate_mipmaps(&mut self) {
        unsafe {
            gl::BindTexture(gl::TEXTURE_2D, self.texture);
            gl::GenerateMipmap(gl::TEXTURE_2D);
        }
        self.has_mipmaps = true;
    }

    /// Sets the filters that are applied when this texture is rendered larger or smaller than its
    /// native size. Only `Nearest` and `Linear` make sense for magnification. Generates mipmaps if
    /// a mipmapped minification filter is used.
    pub fn set_filter(&mut self, mag: TextureFilter, min: TextureFilter) {
        if min.uses_mipmaps() && !self.has_mipmaps {
            self.generate_mipmaps();
        }

        unsafe {
            gl::BindTexture(gl::TEXTURE_2D, self.texture);
            gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_MAG_FILTER, mag.mag_filter() as GLint);
            gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_MIN_FILTER, min as GLint);
        }
    }

    pub fn set_wrap(&mut self, wrap: TextureWrap) {
        unsafe {
            gl::BindTexture(gl::TEXTURE_2D, self.texture);
            gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_WRAP_S, wrap as GLint);
            gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_WRAP_T, wrap as GLint);
        }
    }

    /// Sets the anisotropy level of this texture. 1.0 disables anisotropic filtering. Values are
    /// clamped to `max_anisotropy()`.
    pub fn set_anisotropy(&mut self, level: f32) {
        let max = max_anisotropy();
        if max <= 1.0 && level > 1.0 {
            warn!("Anisotropic filtering is not supported");
            return;
        }

        let level = level.max(1.0).min(max.max(1.0));
        debug!("Setting anisotropy to {}", level);

        unsafe {
            gl::BindTexture(gl::TEXTURE_2D, self.texture);
            gl::TexParameterf(gl::TEXTURE_2D, TEXTURE_MAX_ANISOTROPY_EXT, level);
        }
    }
}

/// The largest anisotropy level the driver supports, or 1.0 when anisotropic filtering is not
/// available.
pub fn max_anisotropy() -> f32 {
    let mut max = 1.0;
    unsafe {
        gl::GetFloatv(MAX_TEXTURE_MAX_ANISOTROPY_EXT, &mut max);
        // Unknown enum without the extension
        while gl::GetError() != gl::NO_ERROR {}
    }
    max
}

impl Default for Texture {
    fn default() -> Texture { Texture::new() }
}

impl Drop for Texture {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteTextures(1, &self.texture);
        }
    }
}

/// Represents an OpenGL texture filter. Use in OpenGL functions like `TextureFilter::* as GLenum`
#[repr(u32)] // GLenum is u32
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TextureFilter {
    Nearest                 = gl::NEAREST,
    Linear                  = gl::LINEAR,
    NearestMipmapNearest    = gl::NEAREST_MIPMAP_NEAREST,
    NearestMipmapLinear     = gl::NEAREST_MIPMAP_LINEAR,
    LinearMipmapNearest     = gl::LINEAR_MIPMAP_NEAREST,
    LinearMipmapLinear      = gl::LINEAR_MIPMAP_LINEAR,
}

impl TextureFilter {
    /// All filters, in the order the anisotropic demo cycles through them
    pub const ALL: [TextureFilter; 6] = [
        TextureFilter::Nearest,
        TextureFilter::Linear,
        TextureFilter::NearestMipmapNearest,
        TextureFilter::NearestMipmapLinear,
        TextureFilter::LinearMipmapNearest,
        TextureFilter::LinearMipmapLinear,
    ];

    pub fn uses_mipmaps(self) -> bool {
        match self {
            TextureFilter::Nearest | TextureFilter::Linear => false,
            _ => true,
        }
    }

    /// The closest filter that is valid for magnification
    pub fn mag_filter(self) -> TextureFilter {
        match self {
            TextureFilter::Nearest | TextureFilter::NearestMipmapNearest | TextureFilter::NearestMipmapLinear
                => TextureFilter::Nearest,
            TextureFilter::Linear | TextureFilter::LinearMipmapNearest | TextureFilter::LinearMipmapLinear
                => TextureFilter::Linear,
        }
    }
}

#[repr(u32)] // GLenum is u32
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TextureWrap {
    Repeat          = gl::REPEAT,
    ClampToEdge     = gl::CLAMP_TO_EDGE,
    MirroredRepeat  = gl::MIRRORED_REPEAT,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters() {
        assert!(!TextureFilter::Linear.uses_mipmaps());
        assert!(TextureFilter::NearestMipmapLinear.uses_mipmaps());
        assert_eq!(TextureFilter::Linear, TextureFilter::LinearMipmapNearest.mag_filter());
        assert_eq!(TextureFilter::Nearest, TextureFilter::NearestMipmapLinear.mag_filter());
        assert_eq!(6, TextureFilter::ALL.len());
    }
}
