//! Selection of the points lying inside a frustum.

pub use self::region_filter::{filter_points, RegionFilter, SURFACE_TOLERANCE};

mod region_filter;
