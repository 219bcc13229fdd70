//! Out-of-range detection for weather readings.
//!
//! Each reading has a comfort band; values at or beyond either bound are
//! flagged and the screen renderer draws them in red instead of black.

use serde::{Deserialize, Serialize};

/// An exclusive comfort band. A value is in range only when it lies
/// strictly between `low` and `high`; the bounds themselves count as
/// out of range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub low: f32,
    pub high: f32,
}

impl Bounds {
    pub const fn new(low: f32, high: f32) -> Self {
        Bounds { low, high }
    }

    /// `low < value < high`, both bounds exclusive.
    pub fn in_range(&self, value: f32) -> bool {
        self.low < value && value < self.high
    }
}

/// Comfort bands for every rendered reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Limits {
    pub temp: Bounds,
    pub humidity: Bounds,
    pub wind: Bounds,
    pub gusts: Bounds,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            temp: Bounds::new(-15.0, 25.0),
            humidity: Bounds::new(30.0, 70.0),
            wind: Bounds::new(0.0, 20.0),
            gusts: Bounds::new(0.0, 35.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_exclusive() {
        let b = Bounds::new(-15.0, 25.0);
        assert!(!b.in_range(-15.0));
        assert!(!b.in_range(25.0));
        assert!(b.in_range(10.0));
        assert!(b.in_range(-14.9));
        assert!(!b.in_range(-20.0));
        assert!(!b.in_range(30.0));
    }

    #[test]
    fn limits_parse_from_json() {
        let json = r#"{
            "temp": { "low": -15.0, "high": 25.0 },
            "humidity": { "low": 30.0, "high": 70.0 },
            "wind": { "low": 0.0, "high": 20.0 },
            "gusts": { "low": 0.0, "high": 35.0 }
        }"#;
        let limits: Limits = serde_json::from_str(json).unwrap();
        assert_eq!(limits, Limits::default());
    }
}
