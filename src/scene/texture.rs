use crate::math::{Real, TexCoord};
use image::{ImageError, Rgba, RgbaImage};
use std::path::{Path, PathBuf};

/// Location of the checkerboard texture shipped with the reference scene.
pub const DEFAULT_TEXTURE_PATH: &str = "./textures/black_white.png";

/// Errors raised while loading a texture.
#[derive(thiserror::Error, Debug)]
pub enum AssetLoadError {
    /// The file could not be read.
    #[error("Could not read texture {path:?}: {source}")]
    Io {
        /// The requested file.
        path: PathBuf,
        /// The underlying error.
        source: std::io::Error,
    },

    /// The file was read but is not an image the `image` crate understands.
    #[error("Could not decode texture {path:?}: {source}")]
    Decode {
        /// The requested file.
        path: PathBuf,
        /// The underlying error.
        source: ImageError,
    },
}

/// How texture coordinates outside of `[0, 1]` are resolved.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum WrapMode {
    /// Only the fractional part of the coordinate is used.
    Repeat,
    /// The coordinate is clamped to `[0, 1]`.
    ClampToEdge,
}

impl WrapMode {
    #[inline]
    fn apply(self, t: Real) -> Real {
        match self {
            WrapMode::Repeat => t - t.floor(),
            WrapMode::ClampToEdge => t.clamp(0.0, 1.0),
        }
    }
}

/// An RGBA8 image wrapped around the frustum.
///
/// The texture repeats along `u` (around the axis) and is clamped along `v`.
#[derive(Clone, Debug, PartialEq)]
pub struct Texture {
    image: RgbaImage,
    wrap_u: WrapMode,
    wrap_v: WrapMode,
}

impl Texture {
    /// Loads and decodes the image at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AssetLoadError> {
        let path = path.as_ref();
        let image = image::open(path).map_err(|err| match err {
            ImageError::IoError(source) => AssetLoadError::Io {
                path: path.to_path_buf(),
                source,
            },
            source => AssetLoadError::Decode {
                path: path.to_path_buf(),
                source,
            },
        })?;

        log::debug!(
            "Loaded texture {:?} ({}×{}).",
            path,
            image.width(),
            image.height()
        );

        Ok(Self::from_image(image.to_rgba8()))
    }

    /// Wraps an already decoded image.
    pub fn from_image(image: RgbaImage) -> Self {
        Texture {
            image,
            wrap_u: WrapMode::Repeat,
            wrap_v: WrapMode::ClampToEdge,
        }
    }

    /// The width of the image, in pixels.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// The height of the image, in pixels.
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// The wrap modes along `u` and `v`.
    pub fn wrap_modes(&self) -> (WrapMode, WrapMode) {
        (self.wrap_u, self.wrap_v)
    }

    /// The decoded pixels.
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Nearest-pixel lookup.
    ///
    /// `v = 0` is the bottom row of the image, `v = 1` its top row. Returns
    /// `None` for an image without pixels.
    pub fn sample(&self, uv: &TexCoord<Real>) -> Option<Rgba<u8>> {
        let (width, height) = self.image.dimensions();

        if width == 0 || height == 0 {
            return None;
        }

        let u = self.wrap_u.apply(uv.x);
        let v = self.wrap_v.apply(uv.y);
        let px = ((u * width as Real) as u32).min(width - 1);
        let py = (((1.0 - v) * height as Real) as u32).min(height - 1);

        Some(*self.image.get_pixel(px, py))
    }
}
