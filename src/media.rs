pub const SKIP_SECONDS: f64 = 10.0;
pub const DEFAULT_DURATION: f64 = 180.0;
pub const DEFAULT_VOLUME: f64 = 0.7;

/// `mm:ss` of the floored time.
pub fn format_time(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    format!("{:02}:{:02}", total / 60, total % 60)
}

/// Position after skipping `delta` seconds, kept inside the media.
///
/// A duration that isn't known yet (NaN) only bounds the lower end.
pub fn skip(current: f64, delta: f64, duration: f64) -> f64 {
    (current + delta).max(0.0).min(duration)
}

/// What a press of the play button asks the media to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackRequest {
    Play,
    Pause,
}

impl PlaybackRequest {
    pub fn toggle(playing: bool) -> Self {
        if playing {
            Self::Pause
        } else {
            Self::Play
        }
    }
}

pub fn volume_percent(volume: f64) -> u32 {
    (volume.clamp(0.0, 1.0) * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(0.0), "00:00");
        assert_eq!(format_time(59.9), "00:59");
        assert_eq!(format_time(180.0), "03:00");
        assert_eq!(format_time(3725.0), "62:05");
        assert_eq!(format_time(-3.0), "00:00");
        assert_eq!(format_time(f64::NAN), "00:00");
    }

    #[test]
    fn test_skip_clamps() {
        assert_eq!(skip(5.0, -SKIP_SECONDS, 180.0), 0.0);
        assert_eq!(skip(50.0, SKIP_SECONDS, 180.0), 60.0);
        assert_eq!(skip(175.0, SKIP_SECONDS, 180.0), 180.0);
        assert_eq!(skip(175.0, SKIP_SECONDS, f64::NAN), 185.0);
    }

    #[test]
    fn test_toggle_requests() {
        assert_eq!(PlaybackRequest::toggle(true), PlaybackRequest::Pause);
        assert_eq!(PlaybackRequest::toggle(false), PlaybackRequest::Play);
    }

    #[test]
    fn test_volume_percent() {
        assert_eq!(volume_percent(DEFAULT_VOLUME), 70);
        assert_eq!(volume_percent(1.4), 100);
    }
}
