//! Value types with normalization and display rules.

use std::fmt;
use std::ops::{Add, Mul, Sub};

const MIB: u64 = 1024 * 1024;

/// A percentage on the 0-100 scale that multiplies as a 0-1 ratio.
///
/// Out-of-range values are kept as reported; only the displayed text is
/// clamped to `0%..=100%`.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Percent(f64);

impl Percent {
    /// Creates a percent from a 0-100 scale value.
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    /// The value on the 0-100 scale, as supplied.
    pub fn value(self) -> f64 {
        self.0
    }

    /// The value as a fraction (`value / 100`).
    pub fn ratio(self) -> f64 {
        self.0 / 100.0
    }
}

impl From<f64> for Percent {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl Add for Percent {
    type Output = Percent;

    fn add(self, rhs: Percent) -> Percent {
        Percent(self.0 + rhs.0)
    }
}

impl Mul<f64> for Percent {
    type Output = f64;

    fn mul(self, rhs: f64) -> f64 {
        self.ratio() * rhs
    }
}

impl Mul<usize> for Percent {
    type Output = f64;

    fn mul(self, rhs: usize) -> f64 {
        self.ratio() * rhs as f64
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shown = if self.0.is_finite() {
            self.0.round().clamp(0.0, 100.0)
        } else {
            0.0
        };
        write!(f, "{}%", shown as u32)
    }
}

/// A byte count displayed as whole mebibytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ByteCount(u64);

impl ByteCount {
    pub fn new(bytes: u64) -> Self {
        Self(bytes)
    }

    pub fn bytes(self) -> u64 {
        self.0
    }
}

impl From<u64> for ByteCount {
    fn from(bytes: u64) -> Self {
        Self(bytes)
    }
}

impl Add for ByteCount {
    type Output = ByteCount;

    fn add(self, rhs: ByteCount) -> ByteCount {
        ByteCount(self.0.saturating_add(rhs.0))
    }
}

impl Sub for ByteCount {
    type Output = ByteCount;

    fn sub(self, rhs: ByteCount) -> ByteCount {
        ByteCount(self.0.saturating_sub(rhs.0))
    }
}

impl fmt::Display for ByteCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}M", self.0 / MIB)
    }
}
