use foundation::time::Time;

/// Identifies one arming of a [`DebounceTimer`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerToken(pub u64);

#[derive(Debug, Copy, Clone, PartialEq)]
struct Pending {
    token: TimerToken,
    deadline: Time,
}

/// Cancellable single-slot timer driven by explicit engine time.
///
/// Key properties:
/// - At most one pending deadline; arming again supersedes the previous one.
/// - A superseded or cancelled arming never fires.
/// - Firing is observed through [`DebounceTimer::poll`], so there are no
///   callbacks and no hidden threads.
#[derive(Debug, Default)]
pub struct DebounceTimer {
    next_token: u64,
    pending: Option<Pending>,
}

impl DebounceTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms the timer to fire `delay_ms` after `now`, cancelling any pending arming.
    pub fn arm(&mut self, now: Time, delay_ms: u64) -> TimerToken {
        let token = TimerToken(self.next_token);
        self.next_token = self.next_token.wrapping_add(1);
        self.pending = Some(Pending {
            token,
            deadline: now.after_millis(delay_ms),
        });
        token
    }

    /// Returns `true` if a pending arming was cancelled.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn deadline(&self) -> Option<Time> {
        self.pending.map(|p| p.deadline)
    }

    /// Fires the pending arming if its deadline has been reached.
    ///
    /// A zero delay still requires a poll, so it never fires inside `arm`.
    pub fn poll(&mut self, now: Time) -> Option<TimerToken> {
        let pending = self.pending?;
        if now < pending.deadline {
            return None;
        }
        self.pending = None;
        Some(pending.token)
    }

    /// Takes the pending arming regardless of its deadline.
    pub fn fire_now(&mut self) -> Option<TimerToken> {
        self.pending.take().map(|p| p.token)
    }
}

#[cfg(test)]
mod tests {
    use super::DebounceTimer;
    use foundation::time::Time;

    #[test]
    fn fires_once_after_deadline() {
        let mut t = DebounceTimer::new();
        let token = t.arm(Time(0.0), 150);
        assert!(t.poll(Time(0.1)).is_none());
        assert_eq!(t.poll(Time(0.15)), Some(token));
        assert!(t.poll(Time(1.0)).is_none());
        assert!(!t.is_pending());
    }

    #[test]
    fn rearming_supersedes_previous_deadline() {
        let mut t = DebounceTimer::new();
        let first = t.arm(Time(0.0), 150);
        let second = t.arm(Time(0.1), 150);
        assert_ne!(first, second);
        assert!(t.poll(Time(0.2)).is_none());
        assert_eq!(t.poll(Time(0.25)), Some(second));
    }

    #[test]
    fn cancel_prevents_firing() {
        let mut t = DebounceTimer::new();
        t.arm(Time(0.0), 10);
        assert!(t.cancel());
        assert!(!t.cancel());
        assert!(t.poll(Time(5.0)).is_none());
    }

    #[test]
    fn zero_delay_waits_for_poll() {
        let mut t = DebounceTimer::new();
        let token = t.arm(Time(2.0), 0);
        assert!(t.is_pending());
        assert_eq!(t.deadline(), Some(Time(2.0)));
        assert_eq!(t.poll(Time(2.0)), Some(token));
    }

    #[test]
    fn fire_now_ignores_deadline() {
        let mut t = DebounceTimer::new();
        let token = t.arm(Time(0.0), 10_000);
        assert_eq!(t.fire_now(), Some(token));
        assert!(t.fire_now().is_none());
    }
}
