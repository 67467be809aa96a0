#![allow(clippy::too_many_arguments)]

mod camera;
use camera::*;

mod simulation;
use simulation::*;

mod starfield;
use starfield::*;

mod trail;
use trail::*;

mod ui;
use ui::*;

use bevy::{log::LogPlugin, prelude::*};

/// Scene host settings.
#[derive(Resource, Clone, Copy)]
pub struct SceneSettings {
    pub camera_distance: f32,
    /// Vertical field of view, in degrees.
    pub fov: f32,
    pub star_count: usize,
    pub star_radius: f32,
    pub star_depth: f32,
    pub star_factor: f32,
    pub star_speed: f32,
    pub star_seed: u64,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            camera_distance: 80.0,
            fov: 45.0,
            star_count: 5000,
            star_radius: 100.0,
            star_depth: 50.0,
            star_factor: 4.0,
            star_speed: 2.0,
            star_seed: 0,
        }
    }
}

fn main() {
    App::new()
        .add_plugins((
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "GravitéLab".to_owned(),
                        #[cfg(not(target_arch = "wasm32"))]
                        resolution: bevy::window::WindowResolution::new(1600.0, 900.0),
                        fit_canvas_to_parent: true,
                        prevent_default_event_handling: false,
                        canvas: Some("#app".to_owned()),
                        ..default()
                    }),
                    ..default()
                })
                .set(LogPlugin {
                    filter: "wgpu=error,naga=warn,universal_gravitation=info".to_owned(),
                    ..default()
                }),
            CameraPlugin,
            SimulationPlugin,
            StarfieldPlugin,
            TrailPlugin,
            UiPlugin,
        ))
        .insert_resource(ClearColor(Color::BLACK))
        .insert_resource(AmbientLight {
            color: Color::WHITE,
            brightness: 0.5,
        })
        .init_resource::<SceneSettings>()
        .add_systems(Startup, setup_camera)
        .run();
}

fn setup_camera(mut commands: Commands, settings: Res<SceneSettings>) {
    commands.spawn((
        Camera3dBundle {
            transform: Transform::from_xyz(0.0, 0.0, settings.camera_distance)
                .looking_at(Vec3::ZERO, Vec3::Y),
            projection: PerspectiveProjection {
                fov: settings.fov.to_radians(),
                ..default()
            }
            .into(),
            ..default()
        },
        OrbitCamera::default(),
    ));

    info!("Camera placed {} units from the origin", settings.camera_distance);
}

pub fn format_duration(duration: std::time::Duration, precision: usize) -> String {
    humantime::format_duration(duration)
        .to_string()
        .split_inclusive(' ')
        .take(precision)
        .collect::<String>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn duration_precision() {
        let duration = Duration::from_secs(3_723) + Duration::from_millis(250);

        assert_eq!(format_duration(duration, 2), "1h 2m ");
        assert_eq!(format_duration(duration, 4), "1h 2m 3s 250ms");
    }
}
