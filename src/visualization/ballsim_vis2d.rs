use std::time::Duration;

use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResolution};

use crate::simulation::engine::World as SimWorld;
use crate::simulation::params::Parameters;
use crate::simulation::render::Canvas;

/// Open a window the size of the scenario and run the simulation in it
///
/// `FixedUpdate` fires at the scenario's tick interval and calls
/// `World::update`; the left mouse button drags bodies.
pub fn run_2d(world: SimWorld) {
    let resolution = WindowResolution::new(world.parameters.width as f32, world.parameters.height as f32);
    let tick = Duration::from_millis(world.parameters.tick_interval_ms);

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "ballsim".into(),
                resolution,
                resizable: false,
                ..default()
            }),
            ..default()
        }))
        .insert_resource(world)
        .insert_resource(Time::<Fixed>::from_duration(tick))
        .add_systems(Startup, setup_camera_system)
        .add_systems(FixedUpdate, tick_system)
        .add_systems(Update, (pointer_input_system, draw_system).chain())
        .run();
}

fn setup_camera_system(mut commands: Commands, world: Res<SimWorld>) {
    commands.spawn(Camera2dBundle::default());
    info!(bodies = world.system.len(), "run_2d: starting Bevy 2D viewer");
}

fn tick_system(mut world: ResMut<SimWorld>) {
    world.update();
}

// Window cursor coordinates are top-left origin, y down, same as the simulation
fn pointer_input_system(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut world: ResMut<SimWorld>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };

    if let Some(cursor) = window.cursor_position() {
        let (x, y) = (cursor.x as f64, cursor.y as f64);
        world.update_pointer(x, y);
        if buttons.just_pressed(MouseButton::Left) {
            let hit = world.body_at(x, y);
            world.begin_hold(hit);
        }
    }

    if buttons.just_released(MouseButton::Left) {
        world.end_hold();
    }
}

fn draw_system(world: Res<SimWorld>, mut gizmos: Gizmos) {
    let mut canvas = GizmoCanvas::new(&mut gizmos, &world.parameters);
    world.render(&mut canvas);
}

/// `Canvas` backed by Bevy gizmos, mapping simulation coordinates onto the
/// centered, y-up 2D camera
struct GizmoCanvas<'a, 'w, 's> {
    gizmos: &'a mut Gizmos<'w, 's>,
    half: Vec2,
    body_color: Color,
    line_color: Color,
}

impl<'a, 'w, 's> GizmoCanvas<'a, 'w, 's> {
    fn new(gizmos: &'a mut Gizmos<'w, 's>, params: &Parameters) -> Self {
        Self {
            gizmos,
            half: Vec2::new(params.width as f32, params.height as f32) * 0.5,
            body_color: Color::WHITE,
            line_color: Color::srgb(1.0, 0.8, 0.2),
        }
    }

    fn to_screen(&self, x: f64, y: f64) -> Vec2 {
        Vec2::new(x as f32 - self.half.x, self.half.y - y as f32)
    }
}

impl Canvas for GizmoCanvas<'_, '_, '_> {
    // Gizmos only live for one frame, the camera clear does the rest
    fn clear(&mut self) {}

    fn draw_circle(&mut self, x: f64, y: f64, radius: f64) {
        let center = self.to_screen(x, y);
        self.gizmos.circle_2d(center, radius as f32, self.body_color);
    }

    fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        let start = self.to_screen(x1, y1);
        let end = self.to_screen(x2, y2);
        self.gizmos.line_2d(start, end, self.line_color);
    }
}
