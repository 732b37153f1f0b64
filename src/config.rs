//! Value generation settings.

/// Default upper bound for random integers in NUMBER columns with scale 0.
pub const DEFAULT_MAX_RANDOM_INTEGER: u32 = 9999;

/// Default value for NUMBER columns with a nonzero or undeclared scale.
pub const DEFAULT_SCALED_NUMBER_VALUE: f64 = 22.23;

/// Default value for INTEGER columns.
pub const DEFAULT_INTEGER_VALUE: f64 = 23.34;

/// Tunable constants used when generating random column values.
///
/// # Example
///
/// ```
/// use data_factory_rs::GeneratorConfig;
///
/// let config = GeneratorConfig::new()
///     .with_max_random_integer(100)
///     .with_scaled_number_value(1.5);
/// assert_eq!(config.max_random_integer, 100);
/// assert_eq!(config.integer_value, 23.34);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Upper bound (inclusive) for random integers.
    pub max_random_integer: u32,
    /// Value generated for NUMBER columns whose scale is not 0.
    pub scaled_number_value: f64,
    /// Value generated for INTEGER columns.
    pub integer_value: f64,
}

impl GeneratorConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self {
            max_random_integer: DEFAULT_MAX_RANDOM_INTEGER,
            scaled_number_value: DEFAULT_SCALED_NUMBER_VALUE,
            integer_value: DEFAULT_INTEGER_VALUE,
        }
    }

    /// Set the upper bound for random integers.
    pub fn with_max_random_integer(mut self, max: u32) -> Self {
        self.max_random_integer = max;
        self
    }

    /// Set the value for NUMBER columns with nonzero scale.
    pub fn with_scaled_number_value(mut self, value: f64) -> Self {
        self.scaled_number_value = value;
        self
    }

    /// Set the value for INTEGER columns.
    pub fn with_integer_value(mut self, value: f64) -> Self {
        self.integer_value = value;
        self
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new()
    }
}
