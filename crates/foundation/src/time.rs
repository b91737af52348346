use serde::{Deserialize, Serialize};

/// Engine time in seconds.
///
/// Hosts advance it explicitly (usually once per frame); nothing in the
/// engine reads a wall clock.
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Time(pub f64);

impl Time {
    pub const ZERO: Time = Time(0.0);

    pub fn seconds(self) -> f64 {
        self.0
    }

    /// Returns `self + ms` milliseconds.
    pub fn after_millis(self, ms: u64) -> Self {
        Time(self.0 + ms as f64 / 1000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::Time;

    #[test]
    fn after_millis_advances_in_seconds() {
        let t = Time(1.0).after_millis(150);
        assert!((t.seconds() - 1.15).abs() < 1e-12);
        assert_eq!(Time::ZERO.after_millis(2500), Time(2.5));
    }
}
