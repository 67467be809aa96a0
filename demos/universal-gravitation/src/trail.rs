use bevy::prelude::*;

use crate::Orbit;

const TRAIL_COLOR: Color = Color::WHITE;

pub struct TrailPlugin;

impl Plugin for TrailPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(GizmoConfig {
            line_width: 2.0,
            ..default()
        })
        .add_systems(Last, draw_trails);
    }
}

/// Rebuilt from the orbit history every frame, nothing is retained between frames.
fn draw_trails(mut gizmos: Gizmos, query: Query<&Orbit>) {
    for orbit in &query {
        gizmos.linestrip(
            orbit.trail().vertices().into_iter().map(Vec3::from_array),
            TRAIL_COLOR,
        );
    }
}
