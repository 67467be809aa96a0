use bevy::prelude::*;
use rand::prelude::*;

use crate::SceneSettings;

/// Parent of every star, slowly turning around the vertical axis.
#[derive(Component)]
pub struct Starfield {
    pub angular_speed: f32,
}

/// Radius multiplier of a star of size 1.
const STAR_SCALE: f32 = 0.05;

/// Radians per second per unit of starfield speed.
const DRIFT: f32 = 0.002;

pub struct StarfieldPlugin;

impl Plugin for StarfieldPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_starfield)
            .add_systems(Update, rotate_starfield);
    }
}

/// Random star positions in a spherical shell starting at `radius` and `depth` thick, with sizes
/// in `[factor / 2, factor)`.
///
/// Stars are spread uniformly over directions, inner ones being slightly less likely.
pub fn star_field(
    rng: &mut impl Rng,
    count: usize,
    radius: f32,
    depth: f32,
    factor: f32,
) -> Vec<(Vec3, f32)> {
    let mut r = radius + depth;
    let increment = depth / count.max(1) as f32;

    (0..count)
        .map(|_| {
            r -= increment * rng.gen::<f32>();
            let polar = (1.0 - 2.0 * rng.gen::<f32>()).clamp(-1.0, 1.0).acos();
            let azimuth = std::f32::consts::TAU * rng.gen::<f32>();
            let position = r * Vec3::new(
                polar.sin() * azimuth.cos(),
                polar.cos(),
                polar.sin() * azimuth.sin(),
            );

            (position, (0.5 + 0.5 * rng.gen::<f32>()) * factor)
        })
        .collect()
}

fn spawn_starfield(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    settings: Res<SceneSettings>,
) {
    let mesh = meshes.add(
        shape::UVSphere {
            radius: STAR_SCALE,
            sectors: 6,
            stacks: 4,
        }
        .into(),
    );
    let material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        unlit: true,
        ..default()
    });

    let stars = star_field(
        &mut StdRng::seed_from_u64(settings.star_seed),
        settings.star_count,
        settings.star_radius,
        settings.star_depth,
        settings.star_factor,
    );

    commands
        .spawn((
            Name::new("Starfield"),
            Starfield {
                angular_speed: settings.star_speed * DRIFT,
            },
            SpatialBundle::default(),
        ))
        .with_children(|parent| {
            for (position, size) in stars {
                parent.spawn(PbrBundle {
                    mesh: mesh.clone(),
                    material: material.clone(),
                    transform: Transform::from_translation(position).with_scale(Vec3::splat(size)),
                    ..default()
                });
            }
        });
}

fn rotate_starfield(time: Res<Time>, mut query: Query<(&Starfield, &mut Transform)>) {
    for (starfield, mut transform) in &mut query {
        transform.rotate_y(starfield.angular_speed * time.delta_seconds());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stars_fill_the_shell() {
        let stars = star_field(&mut StdRng::seed_from_u64(4), 5000, 100.0, 50.0, 4.0);

        assert_eq!(stars.len(), 5000);
        for (position, size) in stars {
            let distance = position.length();
            assert!((99.9..=150.1).contains(&distance), "{distance}");
            assert!((2.0..=4.0).contains(&size), "{size}");
        }
    }

    #[test]
    fn no_stars() {
        assert!(star_field(&mut StdRng::seed_from_u64(4), 0, 100.0, 50.0, 4.0).is_empty());
    }
}
