use bevy::{
    input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel},
    prelude::*,
};
use bevy_egui::EguiContexts;

/// Camera circling the origin. Dragging with the left button rotates it and scrolling zooms.
#[derive(Component)]
pub struct OrbitCamera {
    pub min_distance: f32,
    pub max_distance: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            min_distance: 5.0,
            max_distance: 400.0,
        }
    }
}

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PostUpdate, camera_controls);
    }
}

pub fn camera_controls(
    mut ctxs: EguiContexts,
    query_windows: Query<&Window>,
    input_mouse: Res<Input<MouseButton>>,
    mut scroll_events: EventReader<MouseWheel>,
    mut motion_events: EventReader<MouseMotion>,
    mut query_camera: Query<(&mut Transform, &OrbitCamera)>,
) {
    // Dragging a slider or scrolling a combo box should not move the camera.
    if ctxs.ctx_mut().is_pointer_over_area() || ctxs.ctx_mut().is_using_pointer() {
        scroll_events.clear();
        motion_events.clear();
        return;
    }

    let Ok((mut transform, orbit)) = query_camera.get_single_mut() else {
        return;
    };
    let Ok(window) = query_windows.get_single() else {
        return;
    };

    let window_size = Vec2::new(window.width(), window.height());

    let scroll = scroll_events
        .read()
        .map(|ev| match ev.unit {
            MouseScrollUnit::Pixel => ev.y * 0.005,
            MouseScrollUnit::Line => ev.y * 1.0,
        })
        .sum::<f32>();

    let motion = input_mouse
        .pressed(MouseButton::Left)
        .then(|| motion_events.read().map(|ev| ev.delta).sum::<Vec2>())
        .unwrap_or_default();

    motion_events.clear();

    if motion.length_squared() == 0.0 && scroll == 0.0 {
        return;
    }

    let delta = motion / window_size * std::f32::consts::PI;
    let mut rotation = transform.rotation;
    rotation *= Quat::from_rotation_y(-delta.x * 2.0);
    rotation *= Quat::from_rotation_x(-delta.y);

    let mut distance = transform.translation.length();
    distance -= distance * scroll * 0.2;

    *transform = Transform {
        translation: Mat3::from_quat(rotation).mul_vec3(Vec3::new(
            0.0,
            0.0,
            distance.clamp(orbit.min_distance, orbit.max_distance),
        )),
        rotation,
        ..*transform
    };
}
