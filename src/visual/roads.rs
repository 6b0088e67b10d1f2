use bevy::prelude::*;

use crate::{
    game::session::FireSession,
    graph::{Edge, Verdict},
    visual::verdict::VerdictDisplay,
};

/// A road entity between two mountains
#[derive(Component, Debug)]
pub struct Road {
    pub edge: Edge,
}

pub const ROAD_COVERED: Color = Color::srgb(0.06, 0.73, 0.51);
pub const ROAD_BURNING: Color = Color::srgb(0.94, 0.27, 0.27);
pub const ROAD_BLAZE: Color = Color::srgb(1.0, 0.42, 0.21);
pub const ROAD_SOAKED: Color = Color::srgb(0.23, 0.51, 0.96);

/// Road pulse speed in radians per second
const PULSE_RATE: f32 = 5.0;

/// Recolor roads from coverage; burning roads pulse, and the whole board
/// turns blue while a success verdict is on display.
pub fn update_road_visuals(
    time: Res<Time>,
    session: Res<FireSession>,
    display: Res<VerdictDisplay>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    roads: Query<(&Road, &MeshMaterial2d<ColorMaterial>)>,
) {
    let pulse = 0.5 + 0.5 * (time.elapsed_secs() * PULSE_RATE).sin();
    let verdict = display.current();

    for (road, material) in &roads {
        let covered = session.is_road_covered(road.edge);

        let color = match verdict {
            Some(Verdict::Success) => ROAD_SOAKED,
            // During a failure display, uncovered roads flare up
            Some(Verdict::NotCovered) if !covered => ROAD_BLAZE.mix(&ROAD_BURNING, pulse),
            _ if covered => ROAD_COVERED,
            _ => ROAD_BURNING.mix(&ROAD_BLAZE, pulse * 0.6),
        };

        if let Some(mat) = materials.get_mut(&material.0) {
            mat.color = color;
        }
    }
}
