use frusta3d::pipeline::{Pipeline, PipelineParameters};
use frusta3d::sampling::{SampleConfig, SamplingMode};
use std::path::Path;

fn main() {
    let pipeline = Pipeline::new(PipelineParameters::default());
    let config = SampleConfig::new(5000, SamplingMode::Random, 500);
    let mesh = pipeline.run(&config, &mut rand::thread_rng()).unwrap();

    let path = Path::new("frustum.obj");
    mesh.to_obj_file(path).unwrap();
    println!(
        "Wrote {} triangles to {}",
        mesh.hull().indices().len(),
        path.display()
    );
}
