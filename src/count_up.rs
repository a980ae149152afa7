use std::time::Duration;

pub const DEFAULT_DURATION: Duration = Duration::from_millis(2000);

pub fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

/// Value shown `elapsed` into a count from zero up to `end`.
pub fn value_at(end: u64, elapsed: Duration, duration: Duration) -> u64 {
    if duration.is_zero() || elapsed >= duration {
        return end;
    }
    let progress = elapsed.as_secs_f64() / duration.as_secs_f64();
    (end as f64 * ease_out_cubic(progress)).round() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_zero_and_lands_on_end() {
        let duration = Duration::from_millis(2000);
        assert_eq!(value_at(1234, Duration::ZERO, duration), 0);
        assert_eq!(value_at(1234, duration, duration), 1234);
        assert_eq!(value_at(1234, Duration::from_secs(10), duration), 1234);
    }

    #[test]
    fn test_monotonic_and_front_loaded() {
        let duration = Duration::from_millis(2000);
        let values = (0..=200)
            .map(|ms| value_at(500, Duration::from_millis(ms * 10), duration))
            .collect::<Vec<_>>();
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
        // ease-out: past the halfway value by the halfway time
        assert!(value_at(500, duration / 2, duration) > 250);
    }

    #[test]
    fn test_zero_duration_shows_end() {
        assert_eq!(value_at(7, Duration::ZERO, Duration::ZERO), 7);
    }
}
