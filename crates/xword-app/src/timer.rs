//! Timer service - per-puzzle progress, persisted across runs
//!
//! Elapsed seconds for a puzzle live under `timer-<puzzle id>` as a decimal
//! string; grid entries live under `guesses-<puzzle id>` as a snapshot JSON.
//! Without a store the service still answers (always 0) and silently drops
//! writes, so the timer keeps running in memory only.

use xword_core::prelude::*;

use crate::storage::KeyValueStore;

/// Tick period for the solve timer
pub const TICK_INTERVAL: std::time::Duration = std::time::Duration::from_secs(1);

/// Storage key holding the elapsed seconds for a puzzle
pub fn timer_key(puzzle_id: &str) -> String {
    format!("timer-{puzzle_id}")
}

/// Storage key holding the saved grid entries for a puzzle
pub fn guesses_key(puzzle_id: &str) -> String {
    format!("guesses-{puzzle_id}")
}

#[derive(Debug, Default)]
pub struct TimerService {
    store: Option<Box<dyn KeyValueStore>>,
}

impl TimerService {
    pub fn new(store: Option<Box<dyn KeyValueStore>>) -> Self {
        Self { store }
    }

    /// Service with no backing store
    pub fn in_memory() -> Self {
        Self { store: None }
    }

    pub fn is_persistent(&self) -> bool {
        self.store.is_some()
    }

    /// Persisted elapsed seconds for `puzzle_id`, or 0
    pub fn load(&self, puzzle_id: &str) -> u64 {
        let Some(store) = &self.store else {
            return 0;
        };

        match store.get(&timer_key(puzzle_id)) {
            Some(value) => value.trim().parse().unwrap_or_else(|_| {
                warn!("Ignoring unparseable timer value {:?} for {}", value, puzzle_id);
                0
            }),
            None => 0,
        }
    }

    /// Record elapsed seconds for `puzzle_id`
    pub fn persist(&mut self, puzzle_id: &str, seconds: u64) {
        let Some(store) = self.store.as_mut() else {
            return;
        };

        if let Err(e) = store.set(&timer_key(puzzle_id), &seconds.to_string()) {
            warn!("Failed to persist timer for {}: {}", puzzle_id, e);
        }
    }

    /// Saved grid entries for `puzzle_id`, if any
    pub fn load_guesses(&self, puzzle_id: &str) -> Option<String> {
        self.store.as_ref()?.get(&guesses_key(puzzle_id))
    }

    pub fn persist_guesses(&mut self, puzzle_id: &str, json: &str) {
        let Some(store) = self.store.as_mut() else {
            return;
        };

        if let Err(e) = store.set(&guesses_key(puzzle_id), json) {
            warn!("Failed to persist grid for {}: {}", puzzle_id, e);
        }
    }

    pub fn clear_guesses(&mut self, puzzle_id: &str) {
        let Some(store) = self.store.as_mut() else {
            return;
        };

        if let Err(e) = store.remove(&guesses_key(puzzle_id)) {
            warn!("Failed to clear grid for {}: {}", puzzle_id, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn service() -> TimerService {
        TimerService::new(Some(Box::new(MemoryStore::new())))
    }

    #[test]
    fn test_timer_key_format() {
        assert_eq!(timer_key("cpu"), "timer-cpu");
        assert_eq!(guesses_key("cpu"), "guesses-cpu");
    }

    #[test]
    fn test_persist_then_load_round_trip() {
        let mut timer = service();
        timer.persist("p1", 125);
        assert_eq!(timer.load("p1"), 125);
    }

    #[test]
    fn test_load_absent_is_zero() {
        let timer = service();
        assert_eq!(timer.load("never-played"), 0);
    }

    #[test]
    fn test_keys_are_per_puzzle() {
        let mut timer = service();
        timer.persist("p1", 5);
        timer.persist("p2", 9);
        assert_eq!(timer.load("p1"), 5);
        assert_eq!(timer.load("p2"), 9);
    }

    #[test]
    fn test_without_store_loads_zero_and_ignores_writes() {
        let mut timer = TimerService::in_memory();
        assert!(!timer.is_persistent());

        timer.persist("p1", 30);
        assert_eq!(timer.load("p1"), 0);

        timer.persist_guesses("p1", "[]");
        assert_eq!(timer.load_guesses("p1"), None);
    }

    #[test]
    fn test_unparseable_value_loads_zero() {
        let mut store = MemoryStore::new();
        store.set("timer-p1", "twelve").unwrap();
        let timer = TimerService::new(Some(Box::new(store)));
        assert_eq!(timer.load("p1"), 0);
    }

    #[test]
    fn test_clear_guesses() {
        let mut timer = service();
        timer.persist_guesses("p1", "[\"AB\"]");
        assert!(timer.load_guesses("p1").is_some());

        timer.clear_guesses("p1");
        assert!(timer.load_guesses("p1").is_none());
    }
}
