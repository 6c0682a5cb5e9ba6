use chrono::{DateTime, Utc};
use serde::Serialize;

/// Time remaining until a target instant, decomposed into display units.
///
/// Collapses to all-zero once the target has passed, so consumers never see
/// a negative unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Countdown {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Countdown {
    pub fn until(target: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let difference = (target - now).num_milliseconds();

        if difference <= 0 {
            return Self::default();
        }

        Self {
            days: difference / 86_400_000,
            hours: (difference / 3_600_000) % 24,
            minutes: (difference / 60_000) % 60,
            seconds: (difference / 1_000) % 60,
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod test {
    use chrono::{Duration, TimeZone, Utc};

    use super::Countdown;

    #[test]
    fn test_unit_decomposition() {
        let target = Utc.with_ymd_and_hms(2026, 9, 18, 19, 0, 0).unwrap();
        let now = target - Duration::days(2) - Duration::hours(3) - Duration::minutes(25)
            - Duration::seconds(40);

        let countdown = Countdown::until(target, now);

        assert_eq!(countdown.days, 2);
        assert_eq!(countdown.hours, 3);
        assert_eq!(countdown.minutes, 25);
        assert_eq!(countdown.seconds, 40);
    }

    #[test]
    fn test_collapses_after_target() {
        let target = Utc.with_ymd_and_hms(2026, 9, 18, 19, 0, 0).unwrap();

        assert!(Countdown::until(target, target).is_zero());
        assert!(Countdown::until(target, target + Duration::hours(5)).is_zero());
    }

    #[test]
    fn test_monotonically_non_increasing() {
        let target = Utc.with_ymd_and_hms(2026, 9, 18, 19, 0, 0).unwrap();
        let mut now = target - Duration::hours(2);

        let mut previous = Countdown::until(target, now);

        while now < target + Duration::minutes(1) {
            now += Duration::seconds(73);
            let next = Countdown::until(target, now);

            let as_seconds = |c: Countdown| {
                ((c.days * 24 + c.hours) * 60 + c.minutes) * 60 + c.seconds
            };

            assert!(as_seconds(next) <= as_seconds(previous));
            previous = next;
        }

        assert!(previous.is_zero());
    }
}
