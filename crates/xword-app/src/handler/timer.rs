//! Tick handling

use xword_core::prelude::*;

use crate::state::AppState;

use super::UpdateResult;

/// Advance the active puzzle's clock by one second and persist it.
///
/// Ticks from a replaced schedule are dropped so a switch never leaks time
/// into the new puzzle.
pub(crate) fn handle_tick(state: &mut AppState, generation: u64) -> UpdateResult {
    if generation != state.timer_generation {
        trace!(
            "Dropping stale tick (generation {}, current {})",
            generation,
            state.timer_generation
        );
        return UpdateResult::none();
    }

    let Some(session) = state.session.as_mut() else {
        return UpdateResult::none();
    };

    if let Some(elapsed) = session.tick() {
        state.timer.persist(&session.active_puzzle_id, elapsed);
    }
    UpdateResult::none()
}
