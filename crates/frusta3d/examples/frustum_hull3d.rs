use frusta3d::sampling::SamplingMode;
use frusta3d::scene::{Controls, Scene, SceneParameters};

fn main() {
    let mut scene = Scene::new(SceneParameters::default());

    for controls in [
        Controls::default(),
        Controls::new(100, SamplingMode::Random),
        Controls::new(5000, SamplingMode::Precise),
    ] {
        if let Err(e) = scene.regenerate(&controls) {
            println!("{:?}: {}", controls, e);
            continue;
        }

        match scene.current_mesh() {
            Some(mesh) => println!(
                "{:?}: {} vertices, {} triangles, volume {}",
                controls.mode(),
                mesh.hull().vertices().len(),
                mesh.hull().indices().len(),
                mesh.hull().volume()
            ),
            None => println!("{:?}: nothing to render", controls.mode()),
        }
    }
}
