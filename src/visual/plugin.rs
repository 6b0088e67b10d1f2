use bevy::prelude::*;

use crate::visual::effects::{animate_embers, spawn_embers};
use crate::visual::interactions::{HoverState, handle_keyboard, handle_pointer_input};
use crate::visual::nodes::update_mountain_visuals;
use crate::visual::roads::update_road_visuals;
use crate::visual::scene::{setup_scene, setup_session};
use crate::visual::ui::{
    Popups, UiState, handle_buttons, spawn_hud, sync_popups, update_hud_text, watch_first_tank,
};
use crate::visual::verdict::{VerdictDisplay, tick_verdict_display};

pub struct ForestPlugin;

impl Plugin for ForestPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<HoverState>()
            .init_resource::<VerdictDisplay>()
            .init_resource::<Popups>()
            .init_resource::<UiState>()
            // Session first; the scene spawns from it
            .add_systems(
                Startup,
                (setup_session, setup_scene, spawn_embers, spawn_hud).chain(),
            )
            .add_systems(
                Update,
                (
                    // Input
                    handle_pointer_input,
                    handle_keyboard,
                    handle_buttons,
                    watch_first_tank,
                    // Round progression
                    tick_verdict_display,
                    // Visual updates
                    update_mountain_visuals,
                    update_road_visuals,
                    animate_embers,
                    // HUD
                    sync_popups,
                    update_hud_text,
                )
                    .chain(),
            );
    }
}
