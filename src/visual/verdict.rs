use bevy::prelude::*;

use crate::{
    game::session::{FireSession, SessionResult},
    graph::Verdict,
    visual::ui::{Popup, PopupKind, Popups},
};

/// How long each verdict stays on screen before the round returns to idle.
/// Timings from the original widget: success lingers, failures clear faster.
const SUCCESS_DISPLAY_SECS: f32 = 3.0;
const FAILURE_DISPLAY_SECS: f32 = 2.0;

/// Owns the timed verdict display. While `active` is set the core sits in
/// `Evaluating` and rejects input; when the timer runs out the popup appears
/// and the core goes back to idle.
#[derive(Resource, Debug, Default)]
pub struct VerdictDisplay {
    active: Option<ActiveVerdict>,
    /// A success stays visible (soaked board) after its display ends
    last_success: bool,
}

#[derive(Debug)]
struct ActiveVerdict {
    verdict: Verdict,
    timer: Timer,
}

impl VerdictDisplay {
    /// Verdict currently driving board colors, if any
    pub fn current(&self) -> Option<Verdict> {
        match &self.active {
            Some(active) => Some(active.verdict),
            None if self.last_success => Some(Verdict::Success),
            None => None,
        }
    }

    fn begin(&mut self, verdict: Verdict) {
        let secs = match verdict {
            Verdict::Success => SUCCESS_DISPLAY_SECS,
            _ => FAILURE_DISPLAY_SECS,
        };
        self.active = Some(ActiveVerdict {
            verdict,
            timer: Timer::from_seconds(secs, TimerMode::Once),
        });
    }
}

/// Run a check and start the verdict display. Shared by the keyboard
/// shortcut and the HUD button.
pub fn begin_check(session: &mut FireSession, display: &mut VerdictDisplay) {
    match session.check() {
        SessionResult::VerdictPending(verdict) => {
            info!("Checking layout ({} tanks): {verdict}", session.tank_count());
            if verdict == Verdict::NotCovered {
                info!("{} roads still burning", session.burning_roads().len());
            }
            display.begin(verdict);
        }
        SessionResult::Rejected(err) => warn!("Check ignored: {err}"),
        _ => {}
    }
}

/// Clear the board. Shared by the keyboard shortcut and the HUD button.
pub fn clear_board(session: &mut FireSession, display: &mut VerdictDisplay, popups: &mut Popups) {
    match session.reset() {
        SessionResult::Cleared => {
            display.last_success = false;
            popups.clear();
            info!("Board cleared");
        }
        SessionResult::Rejected(err) => warn!("Reset ignored: {err}"),
        _ => {}
    }
}

/// System: advance the verdict timer; when it elapses, release the core back
/// to idle and post the verdict message.
pub fn tick_verdict_display(
    time: Res<Time>,
    mut display: ResMut<VerdictDisplay>,
    mut session: ResMut<FireSession>,
    mut popups: ResMut<Popups>,
) {
    let Some(active) = &mut display.active else {
        return;
    };

    if !active.timer.tick(time.delta()).finished() {
        return;
    }

    let verdict = session
        .finish_verdict()
        .expect("a verdict display implies a pending verdict");
    let progress = session.progress();
    popups.push(verdict_popup(verdict, progress.minimum_tank_count));
    display.last_success = verdict == Verdict::Success;
    display.active = None;

    info!("Verdict displayed: {verdict}");
    if progress.found_minimum() {
        info!("Progress: {}", progress.display_string());
    }
}

fn verdict_popup(verdict: Verdict, minimum: usize) -> Popup {
    match verdict {
        Verdict::Success => Popup {
            id: "victory",
            message: "Congratulations! You placed the minimum tanks and stopped the fire."
                .to_string(),
            kind: PopupKind::Success,
        },
        Verdict::NotMinimal => Popup {
            id: "suboptimal",
            message: format!(
                "You used more tanks than needed. Try again with fewer (minimum is {minimum})."
            ),
            kind: PopupKind::Warning,
        },
        Verdict::NotCovered => Popup {
            id: "failure",
            message: "Some roads are still burning! Place more water tanks or choose better \
                      mountains."
                .to_string(),
            kind: PopupKind::Error,
        },
    }
}
