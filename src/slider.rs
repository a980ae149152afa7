//! Pointer-driven value slider.
//!
//! The state machine here knows nothing about the DOM: callers hand it the
//! pointer's x coordinate and the track geometry read at the moment of the
//! event, and get back the value to emit (if any).
//!
//! `min < max` is a precondition. A reversed or empty range is not corrected:
//! every emitted value collapses to `max` and the caller owns that choice.

/// On-screen geometry of the slider track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Track {
    pub left: f64,
    pub width: f64,
}

impl Track {
    pub fn new(left: f64, width: f64) -> Self {
        Self { left, width }
    }

    /// Normalized position of `x` along the track, clamped to `[0, 1]`.
    ///
    /// Returns `None` when the track has no usable width, in which case no
    /// value should be computed at all.
    pub fn fraction_at(&self, x: f64) -> Option<f64> {
        if !self.width.is_finite() || self.width <= 0.0 {
            return None;
        }
        let fraction = (x - self.left) / self.width;
        if fraction.is_nan() {
            return None;
        }
        Some(fraction.clamp(0.0, 1.0))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderRange {
    pub min: f64,
    pub max: f64,
}

impl SliderRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn value_at(&self, fraction: f64) -> f64 {
        self.min + fraction * (self.max - self.min)
    }

    /// Position of `value` within the range, for rendering the fill and thumb.
    pub fn fraction_of(&self, value: f64) -> f64 {
        ((value - self.min) / (self.max - self.min)).clamp(0.0, 1.0)
    }

    // not f64::clamp, which panics when min > max
    pub fn clamp(&self, value: f64) -> f64 {
        value.max(self.min).min(self.max)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SliderState {
    range: SliderRange,
    value: f64,
    dragging: bool,
}

impl SliderState {
    pub fn new(range: SliderRange, value: f64) -> Self {
        Self {
            range,
            value: range.clamp(value),
            dragging: false,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn fraction(&self) -> f64 {
        self.range.fraction_of(self.value)
    }

    /// Re-seed from the controlling props.
    pub fn sync(&mut self, range: SliderRange, value: f64) {
        self.range = range;
        self.value = range.clamp(value);
    }

    pub fn pointer_down(&mut self, x: f64, track: Track) -> Option<f64> {
        self.dragging = true;
        self.update(x, track)
    }

    pub fn pointer_move(&mut self, x: f64, track: Track) -> Option<f64> {
        if !self.dragging {
            return None;
        }
        self.update(x, track)
    }

    pub fn pointer_up(&mut self) {
        self.dragging = false;
    }

    pub fn click(&mut self, x: f64, track: Track) -> Option<f64> {
        if self.dragging {
            return None;
        }
        self.update(x, track)
    }

    fn update(&mut self, x: f64, track: Track) -> Option<f64> {
        let fraction = track.fraction_at(x)?;
        // min + f * (max - min) can land one ulp past max
        self.value = self.range.clamp(self.range.value_at(fraction));
        Some(self.value)
    }
}

/// Window events that end a drag. A cancelled touch ends it like a lifted one.
pub const DRAG_END_EVENTS: [&str; 3] = ["mouseup", "touchend", "touchcancel"];

/// Host hook used to suspend text selection for the length of a drag.
pub trait SelectionControl {
    fn suspend(&self);
    fn restore(&self);
}

/// Holds text selection suspended until dropped.
#[derive(Debug)]
pub struct SelectionGuard<C: SelectionControl> {
    control: C,
}

impl<C: SelectionControl> SelectionGuard<C> {
    pub fn acquire(control: C) -> Self {
        control.suspend();
        Self { control }
    }
}

impl<C: SelectionControl> Drop for SelectionGuard<C> {
    fn drop(&mut self) {
        self.control.restore();
    }
}
