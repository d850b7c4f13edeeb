use gloo_timers::callback::Timeout;
use log::{debug, info};
use yew::Callback;

use crate::demo::form_state::FormState;

/// Identity of one opening of the demo dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SessionId(pub u64);

/// Schedules the delayed auto-close of a dialog session.
///
/// At most one auto-close is pending at a time; scheduling again replaces it.
pub trait AutoCloseScheduler {
    fn schedule(&mut self, session: SessionId, delay_ms: u32);
    fn cancel(&mut self);
}

/// Browser scheduler backed by a `setTimeout` handle. Dropping the handle
/// clears the timeout, so replacing or cancelling never leaks a callback.
pub struct TimeoutScheduler {
    on_elapsed: Callback<SessionId>,
    pending: Option<Timeout>,
}

impl TimeoutScheduler {
    pub fn new(on_elapsed: Callback<SessionId>) -> Self {
        Self { on_elapsed, pending: None }
    }
}

impl AutoCloseScheduler for TimeoutScheduler {
    fn schedule(&mut self, session: SessionId, delay_ms: u32) {
        let on_elapsed = self.on_elapsed.clone();
        self.pending = Some(Timeout::new(delay_ms, move || on_elapsed.emit(session)));
    }

    fn cancel(&mut self) {
        self.pending = None;
    }
}

/// Open/close lifecycle of the demo dialog and the form state it owns.
pub struct DialogLifecycle<S> {
    state: FormState,
    session: SessionId,
    open: bool,
    scheduler: S,
}

impl<S: AutoCloseScheduler> DialogLifecycle<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            state: FormState::default(),
            session: SessionId::default(),
            open: false,
            scheduler,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn session(&self) -> SessionId {
        self.session
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut FormState {
        &mut self.state
    }

    #[cfg(test)]
    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Applies the external open flag. Only transitions have an effect.
    pub fn set_open(&mut self, open: bool) {
        match (self.open, open) {
            (false, true) => self.open(),
            (true, false) => self.close(),
            _ => {}
        }
    }

    /// Starts a fresh session. Any session still open is closed first.
    pub fn open(&mut self) {
        if self.open {
            self.close();
        }
        self.session = SessionId(self.session.0 + 1);
        self.state.reset();
        self.open = true;
        info!("Demo dialog opened (session {})", self.session.0);
    }

    pub fn close(&mut self) {
        self.scheduler.cancel();
        self.state.reset();
        if self.open {
            info!("Demo dialog closed (session {})", self.session.0);
        }
        self.open = false;
    }

    pub(crate) fn schedule_auto_close(&mut self, delay_ms: u32) {
        debug!("Auto-close in {}ms for session {}", delay_ms, self.session.0);
        self.scheduler.schedule(self.session, delay_ms);
    }

    /// Handles an elapsed auto-close. Returns true when the dialog was closed
    /// and the owner must be told; stale sessions are ignored.
    pub fn auto_close_elapsed(&mut self, session: SessionId) -> bool {
        if !self.open || session != self.session {
            debug!("Ignoring stale auto-close for session {}", session.0);
            return false;
        }
        self.close();
        true
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::demo::form_state::SubmissionPhase;
    use crate::demo::validator::{validate, FormField};

    /// Scheduler driven by a simulated clock.
    #[derive(Debug, Default)]
    pub(crate) struct SimulatedScheduler {
        pub now_ms: u64,
        pub pending: Option<(SessionId, u64)>,
        pub cancelled: usize,
    }

    impl SimulatedScheduler {
        /// Moves the clock forward and returns the session whose timer fired.
        pub fn advance(&mut self, ms: u64) -> Option<SessionId> {
            self.now_ms += ms;
            match self.pending {
                Some((session, due)) if due <= self.now_ms => {
                    self.pending = None;
                    Some(session)
                }
                _ => None,
            }
        }
    }

    impl AutoCloseScheduler for SimulatedScheduler {
        fn schedule(&mut self, session: SessionId, delay_ms: u32) {
            self.pending = Some((session, self.now_ms + u64::from(delay_ms)));
        }

        fn cancel(&mut self) {
            if self.pending.take().is_some() {
                self.cancelled += 1;
            }
        }
    }

    fn dirty(dialog: &mut DialogLifecycle<SimulatedScheduler>) {
        dialog.state_mut().edit(FormField::Name, "A".to_string());
        let errors = validate(&dialog.state().input);
        dialog.state_mut().errors = errors;
    }

    #[test]
    fn opening_starts_a_new_empty_session() {
        let mut dialog = DialogLifecycle::new(SimulatedScheduler::default());
        assert!(!dialog.is_open());

        dialog.set_open(true);

        assert!(dialog.is_open());
        assert_eq!(dialog.session(), SessionId(1));
        assert_eq!(dialog.state(), &FormState::default());
    }

    #[test]
    fn close_then_reopen_is_idle_and_clean() {
        for phase in [SubmissionPhase::Idle, SubmissionPhase::Submitting, SubmissionPhase::Success] {
            let mut dialog = DialogLifecycle::new(SimulatedScheduler::default());
            dialog.set_open(true);
            dirty(&mut dialog);
            dialog.state_mut().phase = phase;

            dialog.set_open(false);
            dialog.set_open(true);

            assert_eq!(dialog.state().phase, SubmissionPhase::Idle);
            assert!(dialog.state().errors.is_empty());
            assert_eq!(dialog.session(), SessionId(2));
        }
    }

    #[test]
    fn closing_cancels_the_pending_auto_close() {
        let mut dialog = DialogLifecycle::new(SimulatedScheduler::default());
        dialog.set_open(true);
        dialog.schedule_auto_close(3000);

        dialog.set_open(false);

        assert_eq!(dialog.scheduler_mut().cancelled, 1);
        assert_eq!(dialog.scheduler_mut().advance(5000), None);
    }

    #[test]
    fn repeated_open_flag_keeps_the_session() {
        let mut dialog = DialogLifecycle::new(SimulatedScheduler::default());
        dialog.set_open(true);
        dirty(&mut dialog);

        dialog.set_open(true);

        assert_eq!(dialog.session(), SessionId(1));
        assert!(!dialog.state().errors.is_empty());
    }

    #[test]
    fn reopening_drops_the_previous_session_timer() {
        let mut dialog = DialogLifecycle::new(SimulatedScheduler::default());
        dialog.open();
        dialog.schedule_auto_close(3000);

        dialog.open();

        assert_eq!(dialog.session(), SessionId(2));
        assert_eq!(dialog.scheduler_mut().pending, None);
        assert!(!dialog.auto_close_elapsed(SessionId(1)));
        assert!(dialog.is_open());
    }

    #[test]
    fn stale_auto_close_is_a_no_op() {
        let mut dialog = DialogLifecycle::new(SimulatedScheduler::default());
        dialog.open();
        dialog.close();
        dialog.open();
        dirty(&mut dialog);

        assert!(!dialog.auto_close_elapsed(SessionId(1)));
        assert!(dialog.is_open());
        assert!(!dialog.state().errors.is_empty());
    }

    #[test]
    fn current_auto_close_closes_once() {
        let mut dialog = DialogLifecycle::new(SimulatedScheduler::default());
        dialog.open();
        dialog.state_mut().phase = SubmissionPhase::Success;

        assert!(dialog.auto_close_elapsed(SessionId(1)));
        assert!(!dialog.is_open());
        assert_eq!(dialog.state().phase, SubmissionPhase::Idle);
        assert!(!dialog.auto_close_elapsed(SessionId(1)));
    }
}
