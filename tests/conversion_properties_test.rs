use unit_converter::core::ratio::{convert, LENGTH_TABLE, SPEED_TABLE, WEIGHT_TABLE};
use unit_converter::core::temperature::convert_temperature;
use unit_converter::TemperatureUnit::{self, Celsius, Fahrenheit, Kelvin};

const SAMPLES: [f64; 6] = [0.0, 1.0, 0.001, 42.5, 12345.678, 1e9];

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

#[test]
fn test_ratio_round_trip_all_domains() {
    for table in [&LENGTH_TABLE, &WEIGHT_TABLE, &SPEED_TABLE] {
        for from in table.units {
            for to in table.units {
                for v in SAMPLES {
                    let there = convert(v, from.name, to.name, table).unwrap();
                    let back = convert(there, to.name, from.name, table).unwrap();
                    assert!(close(back, v), "{}: {} -> {} for {}", table.domain, from.name, to.name, v);
                }
            }
        }
    }
}

#[test]
fn test_identity_is_exact_everywhere() {
    for table in [&LENGTH_TABLE, &WEIGHT_TABLE, &SPEED_TABLE] {
        for unit in table.units {
            for v in SAMPLES {
                assert_eq!(convert(v, unit.name, unit.name, table).unwrap(), v);
            }
        }
    }
    for unit in TemperatureUnit::ALL {
        for v in [-459.67, -40.0, 0.0, 36.6, 1000.0] {
            assert_eq!(convert_temperature(v, unit, unit), v);
        }
    }
}

#[test]
fn test_meters_feet_meters_is_close_not_guaranteed_exact() {
    let feet = convert(1.0, "Meters", "Feet", &LENGTH_TABLE).unwrap();
    assert_eq!(feet, 3.28084);
    let back = convert(feet, "Feet", "Meters", &LENGTH_TABLE).unwrap();
    assert!((back - 1.0).abs() < f64::EPSILON * 4.0);
}

#[test]
fn test_reference_ratios() {
    assert_eq!(convert(1.0, "Kilometers", "Meters", &LENGTH_TABLE).unwrap(), 1000.0);
    assert!(close(convert(1.0, "Kilograms", "Pounds", &WEIGHT_TABLE).unwrap(), 2.20462));
    assert!(close(convert(1.0, "Kilograms", "Grams", &WEIGHT_TABLE).unwrap(), 1000.0));
    assert!(close(
        convert(1.0, "Miles per Hour", "Meters per Second", &SPEED_TABLE).unwrap(),
        1.0 / 2.23694
    ));
}

#[test]
fn test_temperature_formulas() {
    assert_eq!(convert_temperature(0.0, Celsius, Fahrenheit), 32.0);
    assert_eq!(convert_temperature(212.0, Fahrenheit, Celsius), 100.0);
    assert_eq!(convert_temperature(0.0, Celsius, Kelvin), 273.15);
    assert_eq!(convert_temperature(0.0, Kelvin, Celsius), -273.15);
    assert!(close(convert_temperature(0.0, Kelvin, Fahrenheit), -459.67));
    assert!(close(convert_temperature(-459.67, Fahrenheit, Kelvin), 0.0));
}

#[test]
fn test_temperature_round_trip() {
    for from in TemperatureUnit::ALL {
        for to in TemperatureUnit::ALL {
            for v in [-40.0, 0.0, 25.0, 100.0] {
                let back = convert_temperature(convert_temperature(v, from, to), to, from);
                assert!((back - v).abs() < 1e-9, "{} -> {} for {}", from, to, v);
            }
        }
    }
}
