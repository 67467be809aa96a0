use crate::{
    format_duration, ActiveScene, OrbitReadout, ParameterStatus, Parameters, Role, SimulationSet,
};

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts, EguiPlugin};
use gravitelab::{
    readout::{format_exponential_exact, format_grouped, info_lines, speed_line},
    BodyKind,
};

/// Text drawn next to a body, `offset` world units away from its center.
#[derive(Component)]
pub struct Labelled {
    pub target: Role,
    pub offset: Vec3,
}

#[derive(Component, Clone, Copy, PartialEq, Eq)]
enum LabelContent {
    Info,
    Speed,
}

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            EguiPlugin,
            bevy::diagnostic::FrameTimeDiagnosticsPlugin,
            LabelPlugin,
        ))
        .add_systems(PostStartup, setup_egui)
        .add_systems(
            Update,
            (
                (panel_header, window_parameters).chain().before(SimulationSet),
                window_simulation.after(window_parameters),
            ),
        );
    }
}

/// Text labels following the bodies, refreshed once the simulation has run for the frame.
pub struct LabelPlugin;

impl Plugin for LabelPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_labels).add_systems(
            Update,
            (update_labels_text, update_labels_position).after(SimulationSet),
        );
    }
}

fn setup_egui(mut ctxs: EguiContexts) {
    ctxs.ctx_mut().set_visuals(egui::Visuals {
        window_fill: egui::Color32::from_rgba_premultiplied(27, 27, 27, 225),
        window_stroke: egui::Stroke::NONE,
        ..egui::Visuals::dark()
    });
}

fn panel_header(mut ctxs: EguiContexts) {
    egui::TopBottomPanel::top("header").show(ctxs.ctx_mut(), |ui| {
        ui.horizontal(|ui| {
            ui.heading("🌌 GravitéLab");
            ui.separator();
            ui.selectable_label(true, "Universal Gravitation");
        });
    });
}

/// Accepts `5.972e24`, `384,400,000` or plain decimals.
fn parse_number(text: &str) -> Option<f64> {
    text.trim().replace(',', "").parse().ok()
}

fn scientific(value: &mut f64) -> egui::DragValue<'_> {
    let speed = value.abs().max(1.0) * 1E-2;
    egui::DragValue::new(value)
        .speed(speed)
        .custom_formatter(|v, _| format_exponential_exact(v))
        .custom_parser(parse_number)
}

fn kind_combo(ui: &mut egui::Ui, id: &str, kind: &mut BodyKind) {
    egui::ComboBox::from_id_source(id)
        .selected_text(kind.to_string())
        .show_ui(ui, |ui| {
            for option in BodyKind::ALL {
                ui.selectable_value(kind, option, option.to_string());
            }
        });
}

fn window_parameters(
    mut ctxs: EguiContexts,
    mut parameters: ResMut<Parameters>,
    status: Res<ParameterStatus>,
) {
    let mut edited = *parameters;

    egui::Window::new("Parameters")
        .default_width(245.0)
        .resizable(false)
        .collapsible(false)
        .anchor(egui::Align2::LEFT_TOP, [0.0, 0.0])
        .show(ctxs.ctx_mut(), |ui| {
            egui::Grid::new("parameters")
                .num_columns(2)
                .spacing([12.0, 6.0])
                .show(ui, |ui| {
                    ui.label("Mass 1 (kg):");
                    ui.add(scientific(&mut edited.mass1));
                    ui.end_row();

                    ui.label("Type 1:");
                    kind_combo(ui, "kind1", &mut edited.kind1);
                    ui.end_row();

                    ui.label("Mass 2 (kg):");
                    ui.add(scientific(&mut edited.mass2));
                    ui.end_row();

                    ui.label("Type 2:");
                    kind_combo(ui, "kind2", &mut edited.kind2);
                    ui.end_row();

                    let speed = edited.distance.abs().max(1.0) * 1E-2;
                    ui.label("Distance (m):");
                    ui.add(
                        egui::DragValue::new(&mut edited.distance)
                            .speed(speed)
                            .custom_formatter(|v, _| format_grouped(v))
                            .custom_parser(parse_number),
                    );
                    ui.end_row();
                });

            if let Some(error) = &**status {
                ui.separator();
                ui.colored_label(egui::Color32::RED, error.to_string());
            }
        });

    parameters.set_if_neq(edited);
}

fn window_simulation(
    mut ctxs: EguiContexts,
    diagnostics: Res<bevy::diagnostic::DiagnosticsStore>,
    readout: Res<OrbitReadout>,
    active: Res<ActiveScene>,
) {
    egui::Window::new("Simulation")
        .default_width(220.0)
        .resizable(false)
        .anchor(egui::Align2::RIGHT_TOP, [0.0, 0.0])
        .show(ctxs.ctx_mut(), |ui| {
            if let Some(fps) = diagnostics.get(bevy::diagnostic::FrameTimeDiagnosticsPlugin::FPS) {
                if let Some(value) = fps.smoothed() {
                    ui.horizontal(|ui| {
                        ui.label("FPS:");
                        ui.label(format!("{value:.2}"));
                    });
                }
            }

            ui.horizontal(|ui| {
                ui.label("Orbit time:");
                ui.label(format_duration(readout.elapsed, 2));
            });

            ui.horizontal(|ui| {
                ui.label("Trail:");
                ui.label(format!("{} / {}", readout.trail_len, readout.trail_capacity));
            });

            ui.horizontal(|ui| {
                ui.label("Central body:");
                ui.label(if active.reversed { "Mass 2" } else { "Mass 1" });
            });
        });
}

fn spawn_labels(mut commands: Commands, active: Res<ActiveScene>) {
    let style = TextStyle {
        font_size: 16.0,
        color: Color::WHITE,
        ..default()
    };

    commands.spawn((
        TextBundle::from_section(info_lines(&active.scene).join("\n"), style.clone()),
        Labelled {
            target: Role::Central,
            offset: Vec3::Y * 4.0,
        },
        LabelContent::Info,
    ));

    commands.spawn((
        TextBundle::from_section(speed_line(0.0), style),
        Labelled {
            target: Role::Orbiting,
            offset: Vec3::Y * 2.5,
        },
        LabelContent::Speed,
    ));
}

fn update_labels_text(
    active: Res<ActiveScene>,
    readout: Res<OrbitReadout>,
    mut query_labels: Query<(&mut Text, &LabelContent)>,
) {
    for (mut text, content) in &mut query_labels {
        match content {
            LabelContent::Info if active.is_changed() => {
                text.sections[0].value = info_lines(&active.scene).join("\n");
            }
            LabelContent::Speed => {
                text.sections[0].value = speed_line(readout.sample.speed);
            }
            LabelContent::Info => {}
        }
    }
}

fn update_labels_position(
    query_camera: Query<(&Camera, &GlobalTransform)>,
    query_bodies: Query<(&Role, &GlobalTransform)>,
    mut query_labels: Query<(&Labelled, &mut Style, &Node)>,
) {
    let Ok((camera, camera_transform)) = query_camera.get_single() else {
        return;
    };

    for (label, mut style, node) in &mut query_labels {
        let anchor = query_bodies
            .iter()
            .find(|(role, _)| **role == label.target)
            .map(|(_, transform)| transform.translation() + label.offset);

        let viewport_position = anchor
            .and_then(|anchor| camera.world_to_viewport(camera_transform, anchor))
            .map(|position| position - node.size() / 2.0);

        if let Some(viewport_position) = viewport_position {
            style.position_type = PositionType::Absolute;
            style.left = Val::Px(viewport_position.x);
            style.top = Val::Px(viewport_position.y);
            style.display = Display::Flex;
        } else {
            style.display = Display::None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_numbers() {
        assert_eq!(parse_number("5.972e24"), Some(5.972e24));
        assert_eq!(parse_number(" 384,400,000 "), Some(384_400_000.0));
        assert_eq!(parse_number("-3"), Some(-3.0));
        assert_eq!(parse_number("earth"), None);
    }

    #[test]
    fn speed_label_matches_the_current_frame() {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, AssetPlugin::default()))
            .insert_resource(bevy::time::TimeUpdateStrategy::ManualDuration(
                std::time::Duration::from_millis(100),
            ))
            .init_asset::<Mesh>()
            .init_asset::<StandardMaterial>()
            .add_plugins((crate::SimulationPlugin, LabelPlugin));

        for _ in 0..3 {
            app.update();
        }

        let speed = app.world.resource::<OrbitReadout>().sample.speed;
        let labels = app
            .world
            .query::<(&Text, &LabelContent)>()
            .iter(&app.world)
            .map(|(text, content)| (*content, text.sections[0].value.clone()))
            .collect::<Vec<_>>();

        assert!(labels.contains(&(LabelContent::Speed, speed_line(speed))));
    }

    #[test]
    fn displayed_masses_keep_their_value() {
        for mass in [1.23456e24, 5.972e24, 7.348e22, 1.0] {
            assert_eq!(parse_number(&format_exponential_exact(mass)), Some(mass));
        }
    }
}
