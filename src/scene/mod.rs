//! Host-side state: the current mesh, its material, and the controls that drive
//! its regeneration.
//!
//! Nothing here opens a window. A renderer reads [`Scene::current_mesh`],
//! [`Scene::material`] and [`Scene::elevation`] after each call to
//! [`Scene::regenerate`].

pub use self::controls::{Controls, DEFAULT_POINT_COUNT, POINT_COUNT_RANGE};
pub use self::material::Material;
pub use self::scene::{Scene, SceneParameters, DEFAULT_ELEVATION};
pub use self::texture::{AssetLoadError, Texture, WrapMode, DEFAULT_TEXTURE_PATH};

mod controls;
mod material;
mod scene;
mod texture;
