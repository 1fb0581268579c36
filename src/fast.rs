use crate::session::{SessionState, SessionStore};
use chrono::{DateTime, Utc};

/// Seconds in a complete fast (100%).
pub const FASTING_DURATION_SECS: i64 = 3600;

/// Timer controller for a single fasting session.
///
/// Elapsed time is always derived from the stored absolute start instant and
/// the current wall clock, never accumulated tick by tick. Missed or delayed
/// ticks therefore never cause drift, and the persisted state survives the
/// process being killed and relaunched.
#[derive(Debug)]
pub struct Fast<S: SessionStore> {
    session: SessionState,
    elapsed_secs: i64,
    store: S,
}

/// Effective start instant of a resumed fast: shifted back from `now` by the
/// duration that had elapsed before the pause, so the fast continues as if
/// the pause had not occurred. The paused interval itself is intentionally
/// not reflected in elapsed time.
fn restart_time(now: DateTime<Utc>, start: DateTime<Utc>, stop: DateTime<Utc>) -> DateTime<Utc> {
    now - (stop - start)
}

impl<S: SessionStore> Fast<S> {
    pub fn new(store: S) -> Self {
        Self {
            session: SessionState::default(),
            elapsed_secs: 0,
            store,
        }
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn is_counting(&self) -> bool {
        self.session.counting
    }

    pub fn elapsed_secs(&self) -> i64 {
        self.elapsed_secs
    }

    /// Start or stop the fast.
    ///
    /// Stopping records `stop_time` and resets the displayed elapsed time to
    /// zero; the start timestamp stays persisted so the session remains
    /// resumable. Starting resumes from a paused `(start, stop)` pair via
    /// [`restart_time`], or begins fresh at `now`.
    pub fn toggle(&mut self, now: DateTime<Utc>) {
        if self.session.counting {
            self.session.stop_time = Some(now);
            self.session.counting = false;
            self.elapsed_secs = 0;
        } else {
            self.session.start_time = match (self.session.start_time, self.session.stop_time) {
                (Some(start), Some(stop)) => Some(restart_time(now, start, stop)),
                _ => Some(now),
            };
            self.session.stop_time = None;
            self.session.counting = true;
            self.tick(now);
        }
        self.persist();
    }

    /// Reload persisted state, e.g. at launch or when the app regains focus.
    ///
    /// While counting, elapsed time picks up live from the stored start.
    /// A paused resumable pair shows its frozen pre-pause elapsed time.
    pub fn on_foreground(&mut self, now: DateTime<Utc>) {
        self.session = self.store.load();

        if self.session.counting {
            self.tick(now);
        } else if let (Some(start), Some(stop)) = (self.session.start_time, self.session.stop_time)
        {
            let diff = now - restart_time(now, start, stop);
            self.elapsed_secs = diff.num_seconds().max(0);
        } else {
            self.elapsed_secs = 0;
        }
    }

    /// Recompute elapsed time from the stored start instant. Display-only;
    /// idempotent and free of persisted mutation.
    pub fn tick(&mut self, now: DateTime<Utc>) {
        if !self.session.counting {
            return;
        }
        if let Some(start) = self.session.start_time {
            self.elapsed_secs = (now - start).num_seconds().max(0);
        }
    }

    pub fn percentage_completed(&self) -> u8 {
        if self.elapsed_secs >= FASTING_DURATION_SECS {
            100
        } else {
            (self.elapsed_secs * 100 / FASTING_DURATION_SECS) as u8
        }
    }

    /// Discard the session entirely, returning to the initial idle state.
    pub fn reset(&mut self) {
        self.session = SessionState::default();
        self.elapsed_secs = 0;
        self.persist();
    }

    // Best effort: a failed write degrades to an in-memory-only session.
    fn persist(&self) {
        let _ = self.store.save(&self.session);
    }
}
