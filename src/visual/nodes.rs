use bevy::prelude::*;

use crate::{
    game::session::FireSession,
    graph::{NodeId, Verdict},
    visual::{interactions::HoverState, verdict::VerdictDisplay},
};

/// A mountain on the board
#[derive(Component, Debug)]
pub struct Mountain {
    pub id: NodeId,
}

/// The water-tank overlay drawn on a marked mountain
#[derive(Component, Debug)]
pub struct TankMarker {
    pub id: NodeId,
}

// Palette lifted from the original widget
pub const MOUNTAIN_GREEN: Color = Color::srgb(0.08, 0.50, 0.24);
pub const MOUNTAIN_HOVER: Color = Color::srgb(0.13, 0.65, 0.33);
pub const MOUNTAIN_SOAKED: Color = Color::srgb(0.15, 0.39, 0.92);
pub const TANK_YELLOW: Color = Color::srgb(0.98, 0.75, 0.14);
pub const TANK_SOAKED: Color = Color::srgb(0.38, 0.65, 0.98);

/// Recolor mountains for hover/success and show or hide tank overlays
pub fn update_mountain_visuals(
    session: Res<FireSession>,
    display: Res<VerdictDisplay>,
    hover: Res<HoverState>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mountains: Query<(&Mountain, &MeshMaterial2d<ColorMaterial>)>,
    mut tanks: Query<(&TankMarker, &mut Visibility, &MeshMaterial2d<ColorMaterial>)>,
) {
    let soaked = display.current() == Some(Verdict::Success);

    for (mountain, material) in &mountains {
        let color = if soaked {
            MOUNTAIN_SOAKED
        } else if hover.hovered == Some(mountain.id) {
            MOUNTAIN_HOVER
        } else {
            MOUNTAIN_GREEN
        };

        if let Some(mat) = materials.get_mut(&material.0) {
            mat.color = color;
        }
    }

    for (marker, mut visibility, material) in &mut tanks {
        *visibility = if session.has_tank(marker.id) {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };

        if let Some(mat) = materials.get_mut(&material.0) {
            mat.color = if soaked { TANK_SOAKED } else { TANK_YELLOW };
        }
    }
}
