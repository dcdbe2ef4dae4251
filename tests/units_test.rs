use stow_ngin::units::{self, DisplayUnit};

#[test]
fn formats_two_decimal_places_per_unit() {
    assert_eq!(units::to_display(2.0, DisplayUnit::Meter), "2.00");
    assert_eq!(units::to_display(2.0, DisplayUnit::Centimeter), "200.00");
    assert_eq!(units::to_display(2.0, DisplayUnit::Inch), "78.74");
    assert_eq!(units::to_display(0.01, DisplayUnit::Centimeter), "1.00");
}

#[test]
fn converts_back_to_meters() {
    assert_eq!(units::to_canonical(100.0, DisplayUnit::Centimeter), 1.0);
    assert_eq!(units::to_canonical(2.0, DisplayUnit::Meter), 2.0);
    assert!((units::to_canonical(39.37, DisplayUnit::Inch) - 1.0).abs() < 1e-6);
}

#[test]
fn display_round_trip_stays_within_a_centimeter() {
    let values = [0.01, 0.05, 0.5, 1.0, 2.0, 3.7, 10.0];
    for unit in DisplayUnit::ALL {
        for value in values {
            let rendered = units::to_display(value, unit);
            let back = units::parse_display(&rendered, unit)
                .unwrap_or_else(|| panic!("{rendered} did not parse as {}", unit.suffix()));
            assert!(
                (back - value).abs() <= 0.01,
                "{value} {} -> {rendered} -> {back}",
                unit.suffix()
            );
        }
    }
}

#[test]
fn parse_display_rejects_junk_and_non_finite_input() {
    assert_eq!(units::parse_display("not a number", DisplayUnit::Meter), None);
    assert_eq!(units::parse_display("", DisplayUnit::Meter), None);
    assert_eq!(units::parse_display("NaN", DisplayUnit::Meter), None);
    assert_eq!(units::parse_display("inf", DisplayUnit::Centimeter), None);
}

#[test]
fn parse_display_trims_and_converts() {
    assert_eq!(
        units::parse_display(" 250 ", DisplayUnit::Centimeter),
        Some(2.5)
    );
    assert_eq!(units::parse_display("-0.5", DisplayUnit::Meter), Some(-0.5));
}
