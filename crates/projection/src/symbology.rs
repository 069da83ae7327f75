//! Magnitude-driven marker and badge styling.

use crate::surfaces::MarkerStyle;

/// Radius floor for absent or very low magnitudes.
pub const MIN_RADIUS: f64 = 4.0;
pub const RADIUS_PER_MAGNITUDE: f64 = 3.0;

pub const BASE_WEIGHT: f32 = 1.0;
pub const BASE_FILL_OPACITY: f32 = 0.65;
pub const ACTIVE_WEIGHT: f32 = 3.0;
pub const ACTIVE_FILL_OPACITY: f32 = 0.9;

/// Neutral fill for events without a magnitude.
pub const NEUTRAL_COLOR: [f32; 4] = [0.62, 0.62, 0.62, 1.0];

/// Marker radius grows monotonically with magnitude, never below the floor.
pub fn marker_radius(magnitude: Option<f64>) -> f64 {
    match magnitude {
        Some(mag) => (mag * RADIUS_PER_MAGNITUDE).max(MIN_RADIUS),
        None => MIN_RADIUS,
    }
}

/// Five-band magnitude color step function.
pub fn magnitude_color(magnitude: Option<f64>) -> [f32; 4] {
    let Some(mag) = magnitude else {
        return NEUTRAL_COLOR;
    };
    if mag < 2.5 {
        [0.30, 0.69, 0.31, 1.0] // green
    } else if mag < 4.0 {
        [0.99, 0.85, 0.21, 1.0] // yellow
    } else if mag < 5.5 {
        [0.96, 0.59, 0.12, 1.0] // orange
    } else if mag < 7.0 {
        [0.90, 0.32, 0.15, 1.0] // red
    } else {
        [0.60, 0.11, 0.11, 1.0] // dark red
    }
}

/// Resting style of a marker for the given magnitude.
pub fn base_style(magnitude: Option<f64>) -> MarkerStyle {
    MarkerStyle {
        radius: marker_radius(magnitude),
        color: magnitude_color(magnitude),
        weight: BASE_WEIGHT,
        fill_opacity: BASE_FILL_OPACITY,
    }
}

/// Emphasized style while a marker's list card is hovered or focused.
///
/// Only outline weight and fill opacity change, so dropping back to the base
/// style is an exact restore.
pub fn active_style(base: MarkerStyle) -> MarkerStyle {
    MarkerStyle {
        weight: ACTIVE_WEIGHT,
        fill_opacity: ACTIVE_FILL_OPACITY,
        ..base
    }
}

/// Magnitude badge tier on a list card.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Severity {
    Strong,
    Moderate,
    Light,
}

impl Severity {
    pub fn from_magnitude(magnitude: Option<f64>) -> Self {
        match magnitude {
            Some(mag) if mag >= 5.5 => Severity::Strong,
            Some(mag) if mag >= 4.5 => Severity::Moderate,
            _ => Severity::Light,
        }
    }
}

/// Low-magnitude events can carry an aftershock annotation.
pub const AFTERSHOCK_THRESHOLD: f64 = 3.5;

/// Absent magnitude is never annotated: it cannot be shown to be low.
pub fn is_aftershock(magnitude: Option<f64>) -> bool {
    matches!(magnitude, Some(mag) if mag < AFTERSHOCK_THRESHOLD)
}

#[cfg(test)]
mod tests {
    use super::{
        MIN_RADIUS, NEUTRAL_COLOR, Severity, active_style, base_style, is_aftershock,
        magnitude_color, marker_radius,
    };

    #[test]
    fn radius_has_a_floor_and_grows_with_magnitude() {
        assert_eq!(marker_radius(None), MIN_RADIUS);
        assert_eq!(marker_radius(Some(-0.5)), MIN_RADIUS);
        assert_eq!(marker_radius(Some(0.5)), MIN_RADIUS);
        assert!(marker_radius(Some(4.0)) < marker_radius(Some(6.0)));
    }

    #[test]
    fn color_bands_are_distinct_and_absent_is_neutral() {
        let bands = [
            magnitude_color(Some(1.0)),
            magnitude_color(Some(3.0)),
            magnitude_color(Some(4.5)),
            magnitude_color(Some(6.0)),
            magnitude_color(Some(7.5)),
        ];
        for (i, a) in bands.iter().enumerate() {
            for b in bands.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
        assert_eq!(magnitude_color(None), NEUTRAL_COLOR);
    }

    #[test]
    fn severity_tier_thresholds() {
        assert_eq!(Severity::from_magnitude(Some(5.5)), Severity::Strong);
        assert_eq!(Severity::from_magnitude(Some(4.5)), Severity::Moderate);
        assert_eq!(Severity::from_magnitude(Some(4.49)), Severity::Light);
        assert_eq!(Severity::from_magnitude(None), Severity::Light);
    }

    #[test]
    fn aftershock_requires_a_present_low_magnitude() {
        assert!(is_aftershock(Some(2.0)));
        assert!(!is_aftershock(Some(3.5)));
        assert!(!is_aftershock(None));
    }

    #[test]
    fn active_style_changes_only_weight_and_opacity() {
        let base = base_style(Some(4.2));
        let active = active_style(base);
        assert_eq!(active.radius, base.radius);
        assert_eq!(active.color, base.color);
        assert_ne!(active.weight, base.weight);
        assert_ne!(active.fill_opacity, base.fill_opacity);
    }
}
