//! Slider definitions for the strip parameters.

/// A bounded numeric input with a fixed step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slider {
    /// Label shown next to the value.
    pub label: &'static str,
    /// Smallest selectable value.
    pub min: f64,
    /// Largest selectable value.
    pub max: f64,
    /// Initial value.
    pub default: f64,
    /// Distance between selectable values.
    pub step: f64,
}

/// Center-circle radius `R`.
pub const RADIUS: Slider = Slider {
    label: "Radius (R)",
    min: 0.5,
    max: 2.0,
    default: 1.0,
    step: 0.1,
};

/// Band width `w`.
pub const WIDTH: Slider = Slider {
    label: "Width (w)",
    min: 0.1,
    max: 1.0,
    default: 0.3,
    step: 0.05,
};

/// Samples per axis `n`.
pub const RESOLUTION: Slider = Slider {
    label: "Resolution (n)",
    min: 100.0,
    max: 500.0,
    default: 300.0,
    step: 50.0,
};

impl Slider {
    /// Nearest selectable value to `value`: on the step grid from `min`,
    /// inside `[min, max]`.
    pub fn snap(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.default;
        }
        let steps = ((value - self.min) / self.step).round();
        let snapped = self.min + steps * self.step;
        // Round away float noise such as 0.30000000000000004
        let snapped = (snapped * 1e9).round() / 1e9;
        snapped.clamp(self.min, self.max)
    }

    /// One step up from `value`, saturating at `max`.
    pub fn increment(&self, value: f64) -> f64 {
        self.snap(self.snap(value) + self.step)
    }

    /// One step down from `value`, saturating at `min`.
    pub fn decrement(&self, value: f64) -> f64 {
        self.snap(self.snap(value) - self.step)
    }

    /// Position of `value` within the range as a fraction in `[0, 1]`.
    pub fn fraction(&self, value: f64) -> f64 {
        ((value - self.min) / (self.max - self.min)).clamp(0.0, 1.0)
    }
}
