use crate::pipeline::TexturedMesh;
use obj::{Group, IndexTuple, ObjData, ObjError, Object, SimplePolygon};
use std::path::Path;

impl TexturedMesh {
    /// Outputs a Wavefront (`.obj`) file at the given path.
    ///
    /// Every triangle corner gets its own texture coordinate, so the `vt` list has
    /// three entries per face while positions stay shared.
    ///
    /// This function is enabled by the `wavefront` feature flag.
    pub fn to_obj_file(&self, path: &Path) -> Result<(), ObjError> {
        let mut file = std::fs::File::create(path).map_err(ObjError::Io)?;

        ObjData {
            #[allow(clippy::unnecessary_cast)]
            position: self
                .hull()
                .vertices()
                .iter()
                .map(|v| [v.x as f32, v.y as f32, v.z as f32])
                .collect(),
            #[allow(clippy::unnecessary_cast)]
            texture: self
                .uvs()
                .iter()
                .flatten()
                .map(|uv| [uv.x as f32, uv.y as f32])
                .collect(),
            objects: vec![Object {
                groups: vec![Group {
                    polys: self
                        .hull()
                        .indices()
                        .iter()
                        .enumerate()
                        .map(|(iface, tri)| {
                            SimplePolygon(
                                (0..3)
                                    .map(|k| {
                                        IndexTuple(tri[k] as usize, Some(iface * 3 + k), None)
                                    })
                                    .collect(),
                            )
                        })
                        .collect(),
                    name: "frustum".to_string(),
                    index: 0,
                    material: None,
                }],
                name: "frustum".to_string(),
            }],
            ..Default::default()
        }
        .write_to_buf(&mut file)
    }
}
