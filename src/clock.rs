// Single-slot scheduler for the game tick. The owner reconciles the slot
// every frame against the period the game currently wants, so at most one
// ticker is live at any time and a difficulty change can never leave two
// cadences running.

pub struct Clock {
    slot: Option<Ticker>,
}

struct Ticker {
    period: f64,
    next_due: f64,
}

impl Clock {
    pub fn new() -> Self {
        Self { slot: None }
    }

    /// Reconcile the armed ticker with the wanted period. `None` cancels,
    /// a changed period replaces the ticker from `now`, an unchanged one
    /// keeps the current phase.
    pub fn sync(&mut self, period: Option<f64>, now: f64) {
        match (period, &self.slot) {
            (None, _) => self.slot = None,
            (Some(p), Some(ticker)) if ticker.period == p => {}
            (Some(p), _) => {
                self.slot = Some(Ticker { period: p, next_due: now + p });
            }
        }
    }

    /// Fires at most once per call; reschedules from `now`, so a long
    /// frame does not produce a burst of catch-up ticks.
    pub fn poll(&mut self, now: f64) -> bool {
        match self.slot.as_mut() {
            Some(ticker) if now >= ticker.next_due => {
                ticker.next_due = now + ticker.period;
                true
            }
            _ => false,
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn armed_ticker_fires_on_cadence() {
        let mut clock = Clock::new();
        clock.sync(Some(0.1), 0.0);
        assert!(!clock.poll(0.05));
        assert!(clock.poll(0.11));
        assert!(!clock.poll(0.15));
        assert!(clock.poll(0.22));
    }

    #[test]
    fn unarmed_clock_never_fires() {
        let mut clock = Clock::new();
        assert!(!clock.poll(10.0));
    }

    #[test]
    fn cancel_stops_firing() {
        let mut clock = Clock::new();
        clock.sync(Some(0.1), 0.0);
        clock.sync(None, 0.05);
        assert!(!clock.poll(1.0));
    }

    #[test]
    fn same_period_sync_keeps_phase() {
        let mut clock = Clock::new();
        clock.sync(Some(0.1), 0.0);
        // Per-frame reconciliation must not push the due time forever out.
        clock.sync(Some(0.1), 0.04);
        clock.sync(Some(0.1), 0.08);
        assert!(clock.poll(0.11));
    }

    #[test]
    fn period_change_replaces_the_ticker() {
        let mut clock = Clock::new();
        clock.sync(Some(0.15), 0.0);
        clock.sync(Some(0.07), 0.0);
        // Fires on the new cadence, once per interval.
        assert!(clock.poll(0.08));
        assert!(!clock.poll(0.1));
        assert!(clock.poll(0.16));
    }

    #[test]
    fn pause_and_resume_rearm_cleanly() {
        let mut clock = Clock::new();
        clock.sync(Some(0.1), 0.0);
        assert!(clock.poll(0.11));
        clock.sync(None, 0.12);
        assert!(!clock.poll(0.3));
        clock.sync(Some(0.1), 0.3);
        assert!(!clock.poll(0.35));
        assert!(clock.poll(0.41));
    }
}
