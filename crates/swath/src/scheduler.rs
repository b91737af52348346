//! Immediate-vs-debounced recomputation policy.
//!
//! Changes are classified by comparing the fields of [`UpdateKey`] against
//! the key of the last evaluation.

use foundation::time::Time;
use runtime::timer::DebounceTimer;

use crate::mode::VisibilityMode;

/// Every input the visibility pass depends on that can change per interaction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct UpdateKey {
    pub mode: VisibilityMode,
    pub selected: Option<String>,
    pub hovered: Option<String>,
    pub filtered_target: Option<String>,
    pub active_run: Option<String>,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ChangeKind {
    /// Nothing has been evaluated yet (or the cache was invalidated).
    Initial,
    Unchanged,
    /// Selection or hover differs.
    Interaction,
    Mode,
    FilterOnly,
}

impl ChangeKind {
    pub fn classify(previous: Option<&UpdateKey>, next: &UpdateKey) -> Self {
        let Some(prev) = previous else {
            return ChangeKind::Initial;
        };
        if prev == next {
            return ChangeKind::Unchanged;
        }
        if prev.selected != next.selected || prev.hovered != next.hovered {
            return ChangeKind::Interaction;
        }
        if prev.mode != next.mode {
            return ChangeKind::Mode;
        }
        ChangeKind::FilterOnly
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Decision {
    Skip,
    Immediate,
    Deferred { deadline: Time },
}

/// Decides when the visibility pass runs. Holds at most one pending deferral.
#[derive(Debug)]
pub struct UpdateScheduler {
    last_evaluated: Option<UpdateKey>,
    timer: DebounceTimer,
    debounce_ms: u64,
}

impl UpdateScheduler {
    pub fn new(debounce_ms: u64) -> Self {
        Self {
            last_evaluated: None,
            timer: DebounceTimer::new(),
            debounce_ms,
        }
    }

    /// Applies to deferrals armed after this call.
    pub fn set_debounce_ms(&mut self, debounce_ms: u64) {
        self.debounce_ms = debounce_ms;
    }

    pub fn pending_deadline(&self) -> Option<Time> {
        self.timer.deadline()
    }

    /// Classifies `key` and updates the pending deferral accordingly.
    ///
    /// Anything that is not a deferral cancels the pending one: an immediate
    /// pass already reads the latest filter values, and an unchanged key has
    /// nothing left to apply.
    pub fn request(&mut self, key: &UpdateKey, now: Time) -> Decision {
        match ChangeKind::classify(self.last_evaluated.as_ref(), key) {
            ChangeKind::Unchanged => {
                self.timer.cancel();
                Decision::Skip
            }
            ChangeKind::Initial | ChangeKind::Interaction | ChangeKind::Mode => {
                self.timer.cancel();
                Decision::Immediate
            }
            ChangeKind::FilterOnly => {
                self.timer.arm(now, self.debounce_ms);
                Decision::Deferred {
                    deadline: now.after_millis(self.debounce_ms),
                }
            }
        }
    }

    /// Returns `true` once when the pending deferral comes due.
    pub fn poll(&mut self, now: Time) -> bool {
        self.timer.poll(now).is_some()
    }

    /// Takes the pending deferral regardless of its deadline.
    pub fn take_pending(&mut self) -> bool {
        self.timer.fire_now().is_some()
    }

    /// Returns `true` if `key` matches the last evaluation.
    pub fn is_current(&self, key: &UpdateKey) -> bool {
        self.last_evaluated.as_ref() == Some(key)
    }

    pub fn mark_evaluated(&mut self, key: UpdateKey) {
        self.last_evaluated = Some(key);
    }

    /// Forgets the last evaluation so the next request runs immediately.
    pub fn invalidate(&mut self) {
        self.last_evaluated = None;
    }
}
