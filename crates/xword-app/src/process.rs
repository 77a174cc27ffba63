//! Message processing
//!
//! Runs a message through the TEA update function, following up-chained
//! messages and handing actions to the [`TimerScheduler`].

use crate::actions::TimerScheduler;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update loop
pub fn process_message(state: &mut AppState, message: Message, scheduler: &mut TimerScheduler) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            scheduler.handle_action(action);
        }

        msg = result.message;
    }
}
