//! Shapes supported by frusta.

pub use self::frustum::Frustum;

mod frustum;
