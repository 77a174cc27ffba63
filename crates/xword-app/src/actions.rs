//! Action handlers: UpdateAction dispatch and the tick task

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use xword_core::prelude::*;

use crate::message::Message;
use crate::timer::TICK_INTERVAL;
use crate::UpdateAction;

/// Owns the single background task that emits [`Message::TimerTick`].
///
/// At most one schedule is alive at a time. Starting a new one aborts the
/// previous task, and every tick carries the generation it was started with
/// so the update loop can discard anything already queued from the old one.
#[derive(Debug)]
pub struct TimerScheduler {
    msg_tx: mpsc::Sender<Message>,
    interval: Duration,
    handle: Option<JoinHandle<()>>,
}

impl TimerScheduler {
    pub fn new(msg_tx: mpsc::Sender<Message>) -> Self {
        Self::with_interval(msg_tx, TICK_INTERVAL)
    }

    pub fn with_interval(msg_tx: mpsc::Sender<Message>, interval: Duration) -> Self {
        Self {
            msg_tx,
            interval,
            handle: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Execute an action returned by the update function
    pub fn handle_action(&mut self, action: UpdateAction) {
        match action {
            UpdateAction::StartTimer { generation } => self.start(generation),
            UpdateAction::StopTimer => self.stop(),
        }
    }

    /// Replace the running schedule with one tagged `generation`
    pub fn start(&mut self, generation: u64) {
        self.stop();

        let tx = self.msg_tx.clone();
        let period = self.interval;
        self.handle = Some(tokio::spawn(async move {
            // First tick one full period from now, not immediately
            let mut ticker = time::interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                if tx.send(Message::TimerTick { generation }).await.is_err() {
                    // Channel closed - app is shutting down
                    break;
                }
            }
        }));
        debug!("Timer schedule {} started", generation);
    }

    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            trace!("Timer schedule stopped");
        }
    }
}

impl Drop for TimerScheduler {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FAST: Duration = Duration::from_millis(10);

    #[tokio::test]
    async fn test_start_emits_tagged_ticks() {
        let (tx, mut rx) = mpsc::channel(16);
        let mut scheduler = TimerScheduler::with_interval(tx, FAST);

        scheduler.handle_action(UpdateAction::StartTimer { generation: 7 });
        assert!(scheduler.is_active());

        let msg = time::timeout(Duration::from_secs(1), rx.recv())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(msg, Message::TimerTick { generation: 7 });
    }

    #[tokio::test]
    async fn test_restart_replaces_schedule() {
        let (tx, mut rx) = mpsc::channel(16);
        let mut scheduler = TimerScheduler::with_interval(tx, FAST);

        scheduler.start(1);
        scheduler.start(2);

        for _ in 0..3 {
            let msg = time::timeout(Duration::from_secs(1), rx.recv())
                .await
                .unwrap()
                .unwrap();
            assert_eq!(msg, Message::TimerTick { generation: 2 });
        }
    }

    #[tokio::test]
    async fn test_stop_ends_ticks() {
        let (tx, mut rx) = mpsc::channel(16);
        let mut scheduler = TimerScheduler::with_interval(tx, FAST);

        scheduler.start(1);
        scheduler.handle_action(UpdateAction::StopTimer);
        assert!(!scheduler.is_active());

        time::sleep(FAST * 5).await;
        assert!(rx.try_recv().is_err());
    }
}
