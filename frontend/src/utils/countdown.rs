/// Fixed starting point of the decorative countdown. Nothing is persisted, so
/// every page load starts here again.
pub const COUNTDOWN_SEED: CountdownState = CountdownState {
    days: 5,
    hours: 12,
    minutes: 30,
    seconds: 45,
};

pub const TICK_INTERVAL_MS: u32 = 1_000;

const MAX_HOURS: u8 = 23;
const MAX_MINUTES: u8 = 59;
const MAX_SECONDS: u8 = 59;

/// Days/hours/minutes/seconds of a ticking countdown.
///
/// Hours, minutes and seconds always stay inside their clock ranges, and
/// ticking an all-zero clock leaves it at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CountdownState {
    days: u32,
    hours: u8,
    minutes: u8,
    seconds: u8,
}

impl Default for CountdownState {
    fn default() -> Self {
        COUNTDOWN_SEED
    }
}

impl CountdownState {
    /// Returns `None` when a field is outside its clock range.
    pub fn new(days: u32, hours: u8, minutes: u8, seconds: u8) -> Option<Self> {
        if hours > MAX_HOURS || minutes > MAX_MINUTES || seconds > MAX_SECONDS {
            return None;
        }
        Some(Self {
            days,
            hours,
            minutes,
            seconds,
        })
    }

    pub fn days(&self) -> u32 {
        self.days
    }

    pub fn hours(&self) -> u8 {
        self.hours
    }

    pub fn minutes(&self) -> u8 {
        self.minutes
    }

    pub fn seconds(&self) -> u8 {
        self.seconds
    }

    pub fn is_zero(&self) -> bool {
        self.days == 0 && self.hours == 0 && self.minutes == 0 && self.seconds == 0
    }

    pub fn total_seconds(&self) -> u64 {
        u64::from(self.days) * 86_400
            + u64::from(self.hours) * 3_600
            + u64::from(self.minutes) * 60
            + u64::from(self.seconds)
    }

    /// One second later. Each field that underflows wraps to its maximum and
    /// borrows from the next larger field.
    pub fn tick(self) -> Self {
        if self.is_zero() {
            return self;
        }
        let mut next = self;
        if next.seconds > 0 {
            next.seconds -= 1;
            return next;
        }
        next.seconds = MAX_SECONDS;
        if next.minutes > 0 {
            next.minutes -= 1;
            return next;
        }
        next.minutes = MAX_MINUTES;
        if next.hours > 0 {
            next.hours -= 1;
            return next;
        }
        next.hours = MAX_HOURS;
        // is_zero() ruled out days == 0 here
        next.days -= 1;
        next
    }

    /// Zero-padded display values in days, hours, minutes, seconds order.
    pub fn padded(&self) -> [String; 4] {
        [
            format!("{:02}", self.days),
            format!("{:02}", self.hours),
            format!("{:02}", self.minutes),
            format!("{:02}", self.seconds),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tick_n(mut state: CountdownState, n: usize) -> CountdownState {
        for _ in 0..n {
            state = state.tick();
        }
        state
    }

    #[test]
    fn seed_counts_down_seconds_then_borrows_a_minute() {
        let after_45 = tick_n(COUNTDOWN_SEED, 45);
        assert_eq!(after_45, CountdownState::new(5, 12, 30, 0).unwrap());

        let after_46 = after_45.tick();
        assert_eq!(after_46, CountdownState::new(5, 12, 29, 59).unwrap());
    }

    #[test]
    fn borrow_propagates_through_every_field() {
        let state = CountdownState::new(2, 0, 0, 0).unwrap();
        assert_eq!(state.tick(), CountdownState::new(1, 23, 59, 59).unwrap());

        let state = CountdownState::new(0, 1, 0, 0).unwrap();
        assert_eq!(state.tick(), CountdownState::new(0, 0, 59, 59).unwrap());
    }

    #[test]
    fn holds_at_zero() {
        let last = CountdownState::new(0, 0, 0, 1).unwrap();
        let zero = last.tick();
        assert!(zero.is_zero());
        assert_eq!(tick_n(zero, 10), zero);
    }

    #[test]
    fn seed_reaches_zero_after_exactly_its_total_seconds() {
        let total = COUNTDOWN_SEED.total_seconds() as usize;
        let before_end = tick_n(COUNTDOWN_SEED, total - 1);
        assert!(!before_end.is_zero());
        assert_eq!(before_end.total_seconds(), 1);

        let end = before_end.tick();
        assert!(end.is_zero());
        assert_eq!(end.tick(), end);
    }

    #[test]
    fn every_tick_removes_exactly_one_second() {
        let mut state = CountdownState::new(1, 0, 1, 1).unwrap();
        while !state.is_zero() {
            let next = state.tick();
            assert_eq!(next.total_seconds() + 1, state.total_seconds());
            assert!(next.hours() <= 23 && next.minutes() <= 59 && next.seconds() <= 59);
            state = next;
        }
    }

    #[test]
    fn rejects_out_of_range_fields() {
        assert!(CountdownState::new(0, 24, 0, 0).is_none());
        assert!(CountdownState::new(0, 0, 60, 0).is_none());
        assert!(CountdownState::new(0, 0, 0, 60).is_none());
        assert!(CountdownState::new(99, 23, 59, 59).is_some());
    }

    #[test]
    fn padded_values() {
        assert_eq!(COUNTDOWN_SEED.padded(), ["05", "12", "30", "45"]);
    }
}
