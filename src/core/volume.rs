use crate::domain::model::Unit;

const CUBIC_INCHES_PER_GALLON: f64 = 231.0;
const LITERS_PER_GALLON: f64 = 3.785;
const CUBIC_CM_PER_LITER: f64 = 1000.0;
/// Rough stocking rule: inches of adult fish per gallon.
const FISH_INCHES_PER_GALLON: f64 = 0.8;

/// 水族箱容積與建議飼養量
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolumeReport {
    pub unit: Unit,
    pub gallons: f64,
    pub liters: f64,
    pub capacity_inches: u64,
}

/// Rounds half away from zero to one decimal place.
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

impl VolumeReport {
    pub fn calculate(length: f64, width: f64, height: f64, unit: Unit) -> Self {
        let cubic = length * width * height;
        let (gallons, liters) = match unit {
            Unit::Inch => {
                let gallons = cubic / CUBIC_INCHES_PER_GALLON;
                (gallons, gallons * LITERS_PER_GALLON)
            }
            Unit::Cm => {
                let liters = cubic / CUBIC_CM_PER_LITER;
                (liters / LITERS_PER_GALLON, liters)
            }
        };

        Self {
            unit,
            gallons,
            liters,
            capacity_inches: (gallons * FISH_INCHES_PER_GALLON).floor().max(0.0) as u64,
        }
    }

    pub fn rounded_gallons(&self) -> f64 {
        round_one_decimal(self.gallons)
    }

    pub fn rounded_liters(&self) -> f64 {
        round_one_decimal(self.liters)
    }

    /// Input unit system first: "311.7 gallons (1179.7 liters)" or "72.0 liters (19.0 gallons)".
    pub fn describe(&self) -> String {
        match self.unit {
            Unit::Inch => format!(
                "{:.1} gallons ({:.1} liters)",
                self.rounded_gallons(),
                self.rounded_liters()
            ),
            Unit::Cm => format!(
                "{:.1} liters ({:.1} gallons)",
                self.rounded_liters(),
                self.rounded_gallons()
            ),
        }
    }
}
