use crate::domain::model::UnitDomain;
use crate::utils::error::{ConverterError, Result};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatioUnit {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    /// 等於一個參考單位的此單位數量
    pub factor: f64,
}

/// 單一物理量的比例表，恰有一個 factor 為 1 的參考單位
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatioTable {
    pub domain: UnitDomain,
    pub units: &'static [RatioUnit],
}

pub const LENGTH_TABLE: RatioTable = RatioTable {
    domain: UnitDomain::Length,
    units: &[
        RatioUnit { name: "Meters", aliases: &["m", "meter"], factor: 1.0 },
        RatioUnit { name: "Kilometers", aliases: &["km", "kilometer"], factor: 0.001 },
        RatioUnit { name: "Miles", aliases: &["mi", "mile"], factor: 0.000621371 },
        RatioUnit { name: "Yards", aliases: &["yd", "yard"], factor: 1.09361 },
        RatioUnit { name: "Feet", aliases: &["ft", "foot"], factor: 3.28084 },
        RatioUnit { name: "Inches", aliases: &["in", "inch"], factor: 39.3701 },
    ],
};

pub const WEIGHT_TABLE: RatioTable = RatioTable {
    domain: UnitDomain::Weight,
    units: &[
        RatioUnit { name: "Kilograms", aliases: &["kg", "kilogram"], factor: 1.0 },
        RatioUnit { name: "Grams", aliases: &["g", "gram"], factor: 1000.0 },
        RatioUnit { name: "Pounds", aliases: &["lb", "lbs", "pound"], factor: 2.20462 },
        RatioUnit { name: "Ounces", aliases: &["oz", "ounce"], factor: 35.274 },
    ],
};

pub const SPEED_TABLE: RatioTable = RatioTable {
    domain: UnitDomain::Speed,
    units: &[
        RatioUnit { name: "Meters per Second", aliases: &["mps", "m/s"], factor: 1.0 },
        RatioUnit { name: "Kilometers per Hour", aliases: &["kph", "kmh", "km/h"], factor: 3.6 },
        RatioUnit { name: "Miles per Hour", aliases: &["mph"], factor: 2.23694 },
        RatioUnit { name: "Feet per Second", aliases: &["fps", "ft/s"], factor: 3.28084 },
    ],
};

impl RatioTable {
    pub fn for_domain(domain: UnitDomain) -> Option<&'static RatioTable> {
        match domain {
            UnitDomain::Length => Some(&LENGTH_TABLE),
            UnitDomain::Weight => Some(&WEIGHT_TABLE),
            UnitDomain::Speed => Some(&SPEED_TABLE),
            UnitDomain::Temperature | UnitDomain::Currency => None,
        }
    }

    /// 依正式名稱或別名查找，不分大小寫
    pub fn resolve(&self, input: &str) -> Option<&'static RatioUnit> {
        let needle = input.trim();
        self.units.iter().find(|unit| {
            unit.name.eq_ignore_ascii_case(needle)
                || unit.aliases.iter().any(|alias| alias.eq_ignore_ascii_case(needle))
        })
    }

    pub fn resolve_or_err(&self, input: &str) -> Result<&'static RatioUnit> {
        self.resolve(input).ok_or_else(|| ConverterError::UnknownUnit {
            domain: self.domain.to_string(),
            unit: input.to_string(),
        })
    }

    pub fn unit_names(&self) -> Vec<&'static str> {
        self.units.iter().map(|unit| unit.name).collect()
    }
}

/// `value * (table[to] / table[from])`，不做任何捨入
pub fn convert(value: f64, from_unit: &str, to_unit: &str, table: &RatioTable) -> Result<f64> {
    let from = table.resolve_or_err(from_unit)?;
    let to = table.resolve_or_err(to_unit)?;
    Ok(value * (to.factor / from.factor))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
    }

    #[test]
    fn test_each_table_has_single_reference_unit() {
        for table in [LENGTH_TABLE, WEIGHT_TABLE, SPEED_TABLE] {
            let references = table.units.iter().filter(|u| u.factor == 1.0).count();
            assert_eq!(references, 1, "{} table", table.domain);
            assert!(table.units.iter().all(|u| u.factor > 0.0));
        }
    }

    #[test]
    fn test_known_ratios() {
        assert_eq!(convert(1.0, "Kilometers", "Meters", &LENGTH_TABLE).unwrap(), 1000.0);
        assert!(approx_eq(
            convert(1.0, "Kilograms", "Pounds", &WEIGHT_TABLE).unwrap(),
            2.20462
        ));
        assert!(approx_eq(
            convert(36.0, "Kilometers per Hour", "Meters per Second", &SPEED_TABLE).unwrap(),
            10.0
        ));
    }

    #[test]
    fn test_identity_is_exact() {
        for table in [LENGTH_TABLE, WEIGHT_TABLE, SPEED_TABLE] {
            for unit in table.units {
                let v = 123.456789;
                assert_eq!(convert(v, unit.name, unit.name, &table).unwrap(), v);
            }
        }
    }

    #[test]
    fn test_round_trip_within_tolerance() {
        for table in [LENGTH_TABLE, WEIGHT_TABLE, SPEED_TABLE] {
            for a in table.units {
                for b in table.units {
                    let v = 42.5;
                    let there = convert(v, a.name, b.name, &table).unwrap();
                    let back = convert(there, b.name, a.name, &table).unwrap();
                    assert!(approx_eq(back, v), "{} -> {} -> {}", a.name, b.name, a.name);
                }
            }
        }
    }

    #[test]
    fn test_resolve_aliases_case_insensitive() {
        assert_eq!(LENGTH_TABLE.resolve("KM").unwrap().name, "Kilometers");
        assert_eq!(LENGTH_TABLE.resolve("feet").unwrap().name, "Feet");
        assert_eq!(SPEED_TABLE.resolve("miles per hour").unwrap().name, "Miles per Hour");
        assert_eq!(WEIGHT_TABLE.resolve("lbs").unwrap().name, "Pounds");
    }

    #[test]
    fn test_unknown_unit_is_error() {
        let err = convert(1.0, "Furlongs", "Meters", &LENGTH_TABLE).unwrap_err();
        match err {
            ConverterError::UnknownUnit { domain, unit } => {
                assert_eq!(domain, "length");
                assert_eq!(unit, "Furlongs");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
