use serde::{Deserialize, Serialize};

/// Six-field decomposition of the gap between two instants.
///
/// Every field except `years` is reduced modulo the nominal size of the
/// next-larger unit: `months < 12`, `days < 30`, `hours < 24`,
/// `minutes < 60`, `seconds < 60`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Breakdown {
    pub years: u64,
    pub months: u64,
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl Breakdown {
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    pub fn get(&self, unit: Unit) -> u64 {
        match unit {
            Unit::Years => self.years,
            Unit::Months => self.months,
            Unit::Days => self.days,
            Unit::Hours => self.hours,
            Unit::Minutes => self.minutes,
            Unit::Seconds => self.seconds,
        }
    }

    /// Fields in display order. Years are left out while they are zero; the
    /// other five units are always shown.
    pub fn fields(&self) -> Vec<(Unit, u64)> {
        Unit::ALL
            .iter()
            .filter(|unit| **unit != Unit::Years || self.years > 0)
            .map(|unit| (*unit, self.get(*unit)))
            .collect()
    }
}

impl std::fmt::Display for Breakdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .fields()
            .into_iter()
            .map(|(unit, value)| format!("{}{}", value, unit.suffix()))
            .collect();
        write!(f, "{}", parts.join(" "))
    }
}

/// Whether the target is still ahead or already behind the current instant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Counting down to a future target.
    Until,
    /// Counting up from a past (or exactly current) target.
    #[default]
    Since,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Until => write!(f, "until"),
            Direction::Since => write!(f, "since"),
        }
    }
}

/// A breakdown together with its orientation relative to now.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Countdown {
    pub direction: Direction,
    pub breakdown: Breakdown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Years,
    Months,
    Days,
    Hours,
    Minutes,
    Seconds,
}

impl Unit {
    pub const ALL: [Unit; 6] = [
        Unit::Years,
        Unit::Months,
        Unit::Days,
        Unit::Hours,
        Unit::Minutes,
        Unit::Seconds,
    ];

    /// Label printed under a rendered digit card.
    pub fn label(&self) -> &'static str {
        match self {
            Unit::Years => "Yrs",
            Unit::Months => "Mos",
            Unit::Days => "Days",
            Unit::Hours => "Hrs",
            Unit::Minutes => "Min",
            Unit::Seconds => "Sec",
        }
    }

    /// Compact suffix for single-line output such as `1y 2mo 6d`.
    pub fn suffix(&self) -> &'static str {
        match self {
            Unit::Years => "y",
            Unit::Months => "mo",
            Unit::Days => "d",
            Unit::Hours => "h",
            Unit::Minutes => "m",
            Unit::Seconds => "s",
        }
    }
}
