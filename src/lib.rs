/*!
frusta
======

**frusta** builds render-ready, textured convex hulls of 3D frustums
(truncated cones) from point clouds, written with the rust programming language.

The pipeline has four stages:

1. [`sampling`]: generate candidate points, either uniformly at random inside a
   box enclosing the frustum or on a deterministic grid laid on its lateral surface.
2. [`region`]: keep the points lying inside the frustum.
3. [`transformation::HullBuilder`]: wrap the retained points in a convex triangle mesh.
4. [`transformation::project_uvs`]: give every corner of every hull face a cylindrical
   texture coordinate.

[`pipeline::Pipeline`] chains the stages and [`scene::Scene`] keeps the result
around for a renderer, replacing it wholesale whenever the controls change.

```
# #[cfg(feature = "f32")] {
use frusta3d::pipeline::{Pipeline, PipelineParameters};
use frusta3d::sampling::{SampleConfig, SamplingMode};
use rand::SeedableRng;

let pipeline = Pipeline::new(PipelineParameters::default());
let config = SampleConfig::new(5000, SamplingMode::Random, 500);
let mut rng = rand::rngs::StdRng::seed_from_u64(0);
let mesh = pipeline.run(&config, &mut rng).unwrap();
assert_eq!(mesh.uvs().len(), mesh.hull().indices().len());
# }
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![deny(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.

#[cfg(all(feature = "f32", feature = "f64"))]
std::compile_error!("The `f32` and `f64` features are mutually exclusive.");

#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate approx;

pub extern crate nalgebra as na;
pub extern crate parry;
pub extern crate rand;

pub use self::error::PipelineError;

pub mod math;
pub mod pipeline;
pub mod region;
pub mod sampling;
pub mod scene;
pub mod shape;
pub mod transformation;

mod error;
