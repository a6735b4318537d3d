use super::Texture;
use std::path::Path;

/// The appearance of the hull.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Material {
    /// The hull is drawn with a texture mapped through its UVs.
    Textured(Texture),
    /// The hull is drawn with a plain color.
    #[default]
    Untextured,
}

impl Material {
    /// Loads a textured material, falling back to [`Material::Untextured`] if the
    /// texture cannot be loaded.
    ///
    /// The failure is logged and otherwise ignored: geometry does not depend on it.
    pub fn from_texture_path(path: impl AsRef<Path>) -> Self {
        match Texture::load(path) {
            Ok(texture) => Material::Textured(texture),
            Err(err) => {
                log::warn!("{}. The hull will be rendered untextured.", err);
                Material::Untextured
            }
        }
    }

    /// The texture, if any.
    pub fn texture(&self) -> Option<&Texture> {
        match self {
            Material::Textured(texture) => Some(texture),
            Material::Untextured => None,
        }
    }
}
