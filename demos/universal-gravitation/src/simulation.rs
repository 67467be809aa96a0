use std::time::Duration;

use bevy::prelude::*;
use gravitelab::{
    prelude::*,
    scene::{BodyAppearance, LightSpec, Scene, Srgb},
};

/// Lumens of a point light of relative intensity 1.
const LUMENS_PER_INTENSITY: f32 = 1E4;

/// Values typed by the user, possibly invalid.
#[derive(Resource, Clone, Copy, Default, PartialEq, Deref, DerefMut)]
pub struct Parameters(pub SimulationParameters);

/// Problem found in the last [`Parameters`], shown next to the inputs.
#[derive(Resource, Default, Deref)]
pub struct ParameterStatus(pub Option<ParameterError>);

#[derive(Resource, Default, Deref)]
pub struct Tuning(pub OrbitTuning);

/// Clamped parameters currently simulated and the scene they describe.
#[derive(Resource)]
pub struct ActiveScene {
    pub parameters: SimulationParameters,
    pub scene: Scene,
    pub reversed: bool,
}

impl ActiveScene {
    fn new(parameters: SimulationParameters) -> Self {
        Self {
            parameters,
            scene: Scene::from(&parameters),
            reversed: parameters.roles().reversed,
        }
    }
}

impl Default for ActiveScene {
    fn default() -> Self {
        Self::new(SimulationParameters::default())
    }
}

/// Last evaluation of the orbit.
#[derive(Resource, Default)]
pub struct OrbitReadout {
    pub sample: OrbitSample,
    pub elapsed: Duration,
    pub trail_len: usize,
    pub trail_capacity: usize,
}

#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Central,
    Orbiting,
}

impl Role {
    pub fn appearance(self, scene: &Scene) -> &BodyAppearance {
        match self {
            Self::Central => &scene.central,
            Self::Orbiting => &scene.orbiting,
        }
    }
}

#[derive(Component, Deref, DerefMut)]
pub struct Orbit(pub OrbitState);

#[derive(Component)]
pub struct BodyLight;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct SimulationSet;

pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Parameters>()
            .init_resource::<ParameterStatus>()
            .init_resource::<Tuning>()
            .init_resource::<ActiveScene>()
            .init_resource::<OrbitReadout>()
            .add_systems(Startup, spawn_bodies)
            .add_systems(
                Update,
                (apply_parameters, update_appearance, advance_orbit)
                    .chain()
                    .in_set(SimulationSet),
            );
    }
}

fn srgb([r, g, b]: Srgb) -> Color {
    Color::rgb(r, g, b)
}

fn body_material(appearance: &BodyAppearance) -> StandardMaterial {
    StandardMaterial {
        base_color: srgb(appearance.color),
        emissive: srgb(appearance.emissive()),
        perceptual_roughness: appearance.roughness,
        metallic: appearance.metalness,
        ..default()
    }
}

fn point_light(light: &LightSpec) -> PointLight {
    PointLight {
        color: srgb(light.color),
        intensity: light.intensity * LUMENS_PER_INTENSITY,
        range: light.range,
        ..default()
    }
}

fn spawn_bodies(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    active: Res<ActiveScene>,
    tuning: Res<Tuning>,
) {
    for role in [Role::Central, Role::Orbiting] {
        let appearance = role.appearance(&active.scene);

        let mut cmds = commands.spawn((
            Name::new(match role {
                Role::Central => "Central body",
                Role::Orbiting => "Orbiting body",
            }),
            role,
            PbrBundle {
                mesh: meshes.add(
                    shape::UVSphere {
                        radius: appearance.radius,
                        sectors: 32,
                        stacks: 32,
                    }
                    .into(),
                ),
                material: materials.add(body_material(appearance)),
                ..default()
            },
        ));

        if role == Role::Orbiting {
            cmds.insert(Orbit(OrbitState::new(**tuning)));
        }

        cmds.with_children(|child| {
            child.spawn((
                BodyLight,
                PointLightBundle {
                    point_light: appearance.light.as_ref().map(point_light).unwrap_or_default(),
                    visibility: match appearance.light {
                        Some(_) => Visibility::Inherited,
                        None => Visibility::Hidden,
                    },
                    ..default()
                },
            ));
        });
    }

    info!(
        "Simulating {:e} kg around {:e} kg at {} m",
        active.scene.orbiting_mass, active.scene.central_mass, active.scene.distance
    );
}

/// Validates the user input and publishes the clamped parameters.
fn apply_parameters(
    parameters: Res<Parameters>,
    mut status: ResMut<ParameterStatus>,
    mut active: ResMut<ActiveScene>,
) {
    if !parameters.is_changed() {
        return;
    }

    let error = parameters.validate().err();
    if let Some(error) = error.filter(|e| status.0 != Some(*e)) {
        warn!("{error}, using the smallest accepted value instead");
    }
    status.0 = error;

    let clamped = parameters.clamped();
    if clamped == active.parameters {
        return;
    }

    let next = ActiveScene::new(clamped);
    if next.reversed != active.reversed {
        info!(
            "Body {} is now central",
            if next.reversed { 2 } else { 1 }
        );
    }
    *active = next;
}

/// Applies materials and lights of the current scene to both bodies.
fn update_appearance(
    active: Res<ActiveScene>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    query_bodies: Query<(&Role, &Handle<StandardMaterial>, &Children)>,
    mut query_lights: Query<(&mut PointLight, &mut Visibility), With<BodyLight>>,
) {
    if !active.is_changed() {
        return;
    }

    for (role, handle, children) in &query_bodies {
        let appearance = role.appearance(&active.scene);

        if let Some(material) = materials.get_mut(handle) {
            *material = body_material(appearance);
        }

        for &child in children.iter() {
            let Ok((mut light, mut visibility)) = query_lights.get_mut(child) else {
                continue;
            };

            match &appearance.light {
                Some(source) => {
                    *light = point_light(source);
                    *visibility = Visibility::Inherited;
                }
                None => *visibility = Visibility::Hidden,
            }
        }
    }
}

fn advance_orbit(
    time: Res<Time>,
    active: Res<ActiveScene>,
    mut readout: ResMut<OrbitReadout>,
    mut query: Query<(&mut Orbit, &mut Transform)>,
) {
    for (mut orbit, mut transform) in &mut query {
        let Scene {
            central_mass,
            distance,
            ..
        } = active.scene;

        if orbit.sync(central_mass, distance) {
            debug!(
                "Orbit reset: a = {}, ω = {:e} rad/s",
                orbit.constants().semi_major_axis,
                orbit.constants().angular_speed
            );
        }

        let sample = orbit.advance(time.delta_seconds_f64());
        transform.translation = Vec3::from_array(sample.position.as_vec3().to_array());

        *readout = OrbitReadout {
            sample,
            elapsed: Duration::try_from_secs_f64(orbit.elapsed()).unwrap_or_default(),
            trail_len: orbit.trail().len(),
            trail_capacity: orbit.trail().capacity(),
        };
    }
}
