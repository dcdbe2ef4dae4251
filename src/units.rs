//! Display-unit conversion for the control panel.
//!
//! Positions and scales are always stored in meters; the control panel may
//! render and accept values in meters, centimeters or inches. The functions
//! here are pure: the current unit is plain configuration passed in by the
//! caller, never shared mutable state.

/// The unit used to render and parse scale values in the control panel.
///
/// This is a process-wide UI choice held by the session; the canonical
/// stored values stay in meters regardless of it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DisplayUnit {
    #[default]
    Meter,
    Centimeter,
    Inch,
}

impl DisplayUnit {
    pub const ALL: [DisplayUnit; 3] = [
        DisplayUnit::Meter,
        DisplayUnit::Centimeter,
        DisplayUnit::Inch,
    ];

    /// Display units per meter.
    pub fn factor(self) -> f32 {
        match self {
            DisplayUnit::Meter => 1.0,
            DisplayUnit::Centimeter => 100.0,
            DisplayUnit::Inch => 39.37,
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            DisplayUnit::Meter => "m",
            DisplayUnit::Centimeter => "cm",
            DisplayUnit::Inch => "in",
        }
    }
}

/// Format a canonical value (meters) for display in the given unit,
/// with two decimal places.
pub fn to_display(value_meters: f32, unit: DisplayUnit) -> String {
    format!("{:.2}", value_meters * unit.factor())
}

/// Convert a value entered in the given display unit back to meters.
pub fn to_canonical(display_value: f32, unit: DisplayUnit) -> f32 {
    display_value / unit.factor()
}

/// Parse a control-panel field and convert it to meters.
///
/// Returns `None` when the text is not a finite number; deciding what to do
/// with a rejected edit is the caller's policy.
pub fn parse_display(text: &str, unit: DisplayUnit) -> Option<f32> {
    let value: f32 = text.trim().parse().ok()?;
    value.is_finite().then(|| to_canonical(value, unit))
}
