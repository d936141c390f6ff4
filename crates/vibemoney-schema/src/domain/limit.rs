use crate::ValidationError;

/// A positive page size that has already been checked against its endpoint's maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Limit(u32);

impl Limit {
    pub const fn get(self) -> usize {
        self.0 as usize
    }
}

/// Default and maximum page size for one endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LimitBounds {
    pub default: u32,
    pub max: u32,
}

impl LimitBounds {
    pub const TIMESERIES: Self = Self::new(100, 5000);
    pub const LATEST_EVENTS: Self = Self::new(10, 100);
    pub const ESTIMATES: Self = Self::new(4, 20);
    pub const SENTIMENT: Self = Self::new(50, 1000);

    pub const fn new(default: u32, max: u32) -> Self {
        Self { default, max }
    }

    /// Apply the default when absent and reject anything outside `1..=max`.
    pub fn resolve(self, requested: Option<i64>) -> Result<Limit, ValidationError> {
        let value = requested.unwrap_or(i64::from(self.default));
        if value < 1 || value > i64::from(self.max) {
            return Err(ValidationError::LimitOutOfRange {
                value,
                max: self.max,
            });
        }
        Ok(Limit(value as u32))
    }
}
