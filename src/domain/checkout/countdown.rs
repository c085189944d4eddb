//! Countdown to hold expiry.

use std::fmt;

use crate::domain::foundation::Timestamp;

/// Time left on a hold, truncated to whole seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Countdown {
    Remaining { minutes: i64, seconds: i64 },
    Expired,
}

impl Countdown {
    /// Countdown from `now` to `expires_at`.
    ///
    /// Anything at or past the expiry is `Expired`.
    pub fn between(now: Timestamp, expires_at: Timestamp) -> Self {
        let diff_ms = expires_at.duration_since(&now).num_milliseconds();
        if diff_ms <= 0 {
            return Countdown::Expired;
        }
        Countdown::Remaining {
            minutes: diff_ms / 60_000,
            seconds: (diff_ms % 60_000) / 1_000,
        }
    }

    pub fn is_expired(&self) -> bool {
        matches!(self, Countdown::Expired)
    }
}

/// `"4m 59s"` or `"Expired"`.
impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Countdown::Remaining { minutes, seconds } => write!(f, "{}m {}s", minutes, seconds),
            Countdown::Expired => f.write_str("Expired"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn base() -> Timestamp {
        Timestamp::from_unix_secs(1_700_000_000).unwrap()
    }

    #[test]
    fn formats_minutes_and_seconds() {
        let countdown = Countdown::between(base(), base().plus_secs(299));
        assert_eq!(countdown.to_string(), "4m 59s");
    }

    #[test]
    fn truncates_partial_seconds() {
        let expires = base().plus(Duration::milliseconds(61_999));
        assert_eq!(Countdown::between(base(), expires).to_string(), "1m 1s");
    }

    #[test]
    fn sub_second_remainder_shows_zero() {
        let expires = base().plus(Duration::milliseconds(400));
        assert_eq!(Countdown::between(base(), expires).to_string(), "0m 0s");
    }

    #[test]
    fn expired_at_and_after_expiry() {
        assert!(Countdown::between(base(), base()).is_expired());
        assert_eq!(
            Countdown::between(base().plus_secs(5), base()).to_string(),
            "Expired"
        );
    }

    #[test]
    fn counts_down_as_time_passes() {
        let expires = base().plus_secs(120);
        let first = Countdown::between(base(), expires);
        let later = Countdown::between(base().plus_secs(61), expires);
        assert_eq!(first, Countdown::Remaining { minutes: 2, seconds: 0 });
        assert_eq!(later, Countdown::Remaining { minutes: 0, seconds: 59 });
    }
}
