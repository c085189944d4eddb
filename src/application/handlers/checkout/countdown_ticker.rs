//! CountdownTicker - live countdown for the checkout view.

use std::time::Duration;

use crate::application::polling::{spawn_interval, Subscription, TickOutcome};
use crate::domain::checkout::Countdown;
use crate::domain::foundation::Timestamp;

/// Recomputes the countdown to `expires_at` every `period`. The final
/// value delivered is `Countdown::Expired`.
pub struct CountdownTicker {
    period: Duration,
}

impl Default for CountdownTicker {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PERIOD)
    }
}

impl CountdownTicker {
    pub const DEFAULT_PERIOD: Duration = Duration::from_secs(1);

    pub fn new(period: Duration) -> Self {
        Self { period }
    }

    pub fn start(&self, expires_at: Timestamp) -> Subscription<Countdown> {
        spawn_interval(self.period, move || {
            let countdown = Countdown::between(Timestamp::now(), expires_at);
            async move {
                if countdown.is_expired() {
                    TickOutcome::Finish(countdown)
                } else {
                    TickOutcome::Continue(countdown)
                }
            }
        })
    }
}
