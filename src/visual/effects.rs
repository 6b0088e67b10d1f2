//! Decorative embers drifting up the screen. Pure set dressing: nothing in
//! the game logic reads any of this.

use bevy::prelude::*;
use rand::prelude::*;

use crate::camera::{LAYOUT_HEIGHT, LAYOUT_WIDTH};

const EMBER_COUNT: usize = 24;
const EMBER_COLOR: Color = Color::srgba(1.0, 0.42, 0.21, 0.45);

/// A single drifting ember
#[derive(Component, Debug)]
pub struct Ember {
    /// Upward drift in world units per second
    rise: f32,
    /// Horizontal wobble phase, advanced per frame
    phase: f32,
}

pub fn spawn_embers(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    let material = materials.add(EMBER_COLOR);
    let mut rng = rand::rng();

    for _ in 0..EMBER_COUNT {
        let radius = rng.random_range(1.5..4.5);
        let mesh = meshes.add(Circle::new(radius));

        commands.spawn((
            Ember {
                rise: rng.random_range(25.0..70.0),
                phase: rng.random_range(0.0..std::f32::consts::TAU),
            },
            Mesh2d(mesh),
            MeshMaterial2d(material.clone()),
            Transform::from_translation(random_position(&mut rng)),
        ));
    }
}

pub fn animate_embers(time: Res<Time>, mut embers: Query<(&mut Transform, &mut Ember)>) {
    let dt = time.delta_secs();
    let top = LAYOUT_HEIGHT * 0.55;

    for (mut transform, mut ember) in &mut embers {
        ember.phase += dt * 2.0;

        transform.translation.y += ember.rise * dt;
        transform.translation.x += ember.phase.sin() * 12.0 * dt;

        if transform.translation.y > top {
            let mut rng = rand::rng();
            transform.translation = random_position(&mut rng).with_y(-top);
        }
    }
}

fn random_position(rng: &mut impl Rng) -> Vec3 {
    Vec3::new(
        rng.random_range(-LAYOUT_WIDTH * 0.55..LAYOUT_WIDTH * 0.55),
        rng.random_range(-LAYOUT_HEIGHT * 0.55..LAYOUT_HEIGHT * 0.55),
        // Behind the roads and mountains
        -1.0,
    )
}
