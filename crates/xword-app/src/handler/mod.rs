//! Message handlers (the Update half of TEA)
//!
//! [`update`] dispatches; `session` owns the controller actions, `grid`
//! forwards input to the grid widget and folds its events back in, `timer`
//! accepts ticks and `keys` maps key presses to messages per UI mode.

pub(crate) mod grid;
pub(crate) mod keys;
pub(crate) mod session;
pub(crate) mod timer;
pub(crate) mod update;


use crate::message::Message;

pub use update::update;

#[cfg(test)]
pub(crate) use keys::handle_key;

/// Side effects the event loop carries out for the handlers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Replace the tick schedule with one tagged `generation`
    StartTimer { generation: u64 },
    StopTimer,
}

/// What a handler asks for after mutating state
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Processed before control returns to the event loop
    pub message: Option<Message>,
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            ..Self::default()
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            action: Some(action),
            ..Self::default()
        }
    }

    pub fn start_timer(generation: u64) -> Self {
        Self::action(UpdateAction::StartTimer { generation })
    }

    pub fn stop_timer() -> Self {
        Self::action(UpdateAction::StopTimer)
    }
}
