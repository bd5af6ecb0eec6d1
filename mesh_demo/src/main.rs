//! Mesh instantiation demo
//!
//! Loads a scene description (TOML or RON), builds every configured mesh and
//! instantiates it for each particle at each step, logging what was produced.
//!
//! ```text
//! mesh_demo [scene.toml]
//! ```
//!
//! Without an argument the built-in default scene is used.

use std::collections::HashMap;

use vis_mesh::foundation::logging;
use vis_mesh::prelude::*;

#[derive(thiserror::Error, Debug)]
enum DemoError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Mesh '{name}': {source}")]
    Mesh {
        name: String,
        #[source]
        source: MeshError,
    },

    #[error("Particle {particle} refers to unknown mesh '{mesh}'")]
    UnknownMesh { particle: usize, mesh: String },
}

/// Totals gathered over a run
#[derive(Debug, Default)]
struct RunSummary {
    instances: usize,
    vertices: usize,
    triangles: usize,
}

fn load_scene() -> Result<SceneConfig, DemoError> {
    match std::env::args().nth(1) {
        Some(path) => {
            log::info!("Loading scene from {path}");
            Ok(SceneConfig::load_from_file(&path)?)
        }
        None => {
            log::info!("No scene file given, using the default scene");
            Ok(SceneConfig::default())
        }
    }
}

fn run(scene: &SceneConfig) -> Result<RunSummary, DemoError> {
    let mut meshes = HashMap::new();
    for config in &scene.meshes {
        let mesh = config.build().map_err(|source| DemoError::Mesh {
            name: config.name.clone(),
            source,
        })?;
        log::info!(
            "Built mesh '{}' ({} material record(s))",
            config.name,
            mesh.rendering_material().record_count()
        );
        meshes.insert(config.name.as_str(), mesh);
    }

    let mut summary = RunSummary::default();
    for step in 0..scene.steps {
        for (particle_id, particle) in scene.particles.iter().enumerate() {
            let mesh = meshes
                .get(particle.mesh.as_str())
                .ok_or_else(|| DemoError::UnknownMesh {
                    particle: particle_id,
                    mesh: particle.mesh.clone(),
                })?;

            let instance = mesh
                .instantiate_mesh(
                    &particle.position_at(step),
                    particle.orientation.as_ref(),
                    step,
                    particle_id,
                )
                .map_err(|source| DemoError::Mesh {
                    name: particle.mesh.clone(),
                    source,
                })?;

            let center = instance.center();
            log::debug!(
                "step {step} particle {particle_id}: {} vertices, {} triangles, centre ({:.3}, {:.3}, {:.3})",
                instance.vertex_count(),
                instance.triangle_count(),
                center.x,
                center.y,
                center.z
            );

            summary.instances += 1;
            summary.vertices += instance.vertex_count();
            summary.triangles += instance.triangle_count();
        }
    }

    Ok(summary)
}

fn main() {
    logging::init_with_default("info");

    log::info!("Starting mesh instantiation demo");

    let result = load_scene().and_then(|scene| run(&scene));
    match result {
        Ok(summary) => log::info!(
            "Instantiated {} meshes: {} vertices, {} triangles",
            summary.instances,
            summary.vertices,
            summary.triangles
        ),
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scene_runs() {
        let scene = SceneConfig::default();
        let summary = run(&scene).unwrap();
        assert_eq!(summary.instances, scene.steps * scene.particles.len());
        assert!(summary.vertices > 0);
    }

    #[test]
    fn test_bundled_scene_runs() {
        let scene = SceneConfig::load_from_file("scenes/particles.toml").unwrap();
        let summary = run(&scene).unwrap();
        assert_eq!(summary.instances, 5 * 5);
    }

    #[test]
    fn test_unknown_mesh_reported() {
        let mut scene = SceneConfig::default();
        scene.particles[0].mesh = "missing".to_string();
        assert!(matches!(run(&scene), Err(DemoError::UnknownMesh { particle: 0, .. })));
    }
}
