use bevy::prelude::*;

use crate::{
    camera::MainCamera,
    game::session::{FireSession, SessionResult},
    graph::NodeId,
    input::{PointerEvent, PointerEventType},
    visual::{
        nodes::Mountain,
        scene::MOUNTAIN_RADIUS,
        ui::{Popups, UiState},
        verdict::{VerdictDisplay, begin_check, clear_board},
    },
};

/// How close (world units) a click must land to a mountain to toggle it
const CLICK_RADIUS: f32 = MOUNTAIN_RADIUS * 1.3;

#[derive(Resource, Default)]
pub struct HoverState {
    pub hovered: Option<NodeId>,
}

/// System: handle pointer input for toggling tanks
pub fn handle_pointer_input(
    mut pointer_events: MessageReader<PointerEvent>,
    camera_query: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    mountains: Query<(&Mountain, &GlobalTransform)>,
    mut session: ResMut<FireSession>,
    mut hover_state: ResMut<HoverState>,
    ui_state: Res<UiState>,
) {
    let Ok((camera, camera_transform)) = camera_query.single() else {
        return;
    };

    for event in pointer_events.read() {
        let Some(world_pos) = event.to_world_position(camera, camera_transform) else {
            continue;
        };

        hover_state.hovered = nearest_mountain(&mountains, world_pos);

        match event.event_type {
            PointerEventType::Down => {
                // Clicks pass through to the board only once the start
                // overlay is gone
                if !ui_state.started {
                    continue;
                }

                let Some(node) = nearest_mountain(&mountains, world_pos) else {
                    continue;
                };

                match session.toggle_tank(node) {
                    SessionResult::TankPlaced(node) => {
                        info!("Tank placed on mountain {node}");
                    }
                    SessionResult::TankRemoved(node) => {
                        info!("Tank removed from mountain {node}");
                    }
                    SessionResult::Rejected(err) => warn!("Toggle ignored: {err}"),
                    _ => {}
                }
            }
            PointerEventType::Move | PointerEventType::Up => {}
        }
    }
}

fn nearest_mountain(
    mountains: &Query<(&Mountain, &GlobalTransform)>,
    world_pos: Vec2,
) -> Option<NodeId> {
    mountains
        .iter()
        .map(|(mountain, transform)| {
            (mountain.id, world_pos.distance(transform.translation().truncate()))
        })
        .min_by(|(_, da), (_, db)| da.total_cmp(db))
        .filter(|&(_, distance)| distance < CLICK_RADIUS)
        .map(|(id, _)| id)
}

/// System: keyboard shortcuts mirroring the HUD buttons
/// (Space = check, R = reset)
pub fn handle_keyboard(
    keys: Res<ButtonInput<KeyCode>>,
    ui_state: Res<UiState>,
    mut session: ResMut<FireSession>,
    mut display: ResMut<VerdictDisplay>,
    mut popups: ResMut<Popups>,
) {
    if !ui_state.started {
        return;
    }

    if keys.just_pressed(KeyCode::Space) {
        begin_check(&mut session, &mut display);
    }
    if keys.just_pressed(KeyCode::KeyR) {
        clear_board(&mut session, &mut display, &mut popups);
    }
}
