//! Report configuration.

/// Environment variable overriding the default best-sellers length.
pub const TOP_N_ENV: &str = "GROCERY_BEST_SELLERS_TOP_N";

/// Default number of rows in the best-sellers report.
pub const DEFAULT_TOP_N: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportConfig {
    /// Rows returned by `best_selling_products_default`.
    pub best_sellers_top_n: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            best_sellers_top_n: DEFAULT_TOP_N,
        }
    }
}

impl ReportConfig {
    /// Read overrides from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read overrides through `lookup` (unset keys keep their defaults).
    ///
    /// A negative top-N is clamped to 0, which yields an empty report.
    /// Unparsable values are logged and ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(TOP_N_ENV) {
            match raw.trim().parse::<i64>() {
                Ok(n) => config.best_sellers_top_n = usize::try_from(n).unwrap_or(0),
                Err(e) => tracing::warn!(
                    value = %raw,
                    error = %e,
                    "{TOP_N_ENV} is not an integer; using default {DEFAULT_TOP_N}"
                ),
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(value: &'static str) -> impl Fn(&str) -> Option<String> {
        move |key: &str| (key == TOP_N_ENV).then(|| value.to_string())
    }

    #[test]
    fn defaults_to_five() {
        let config = ReportConfig::from_lookup(|_| None);
        assert_eq!(config.best_sellers_top_n, 5);
        assert_eq!(config, ReportConfig::default());
    }

    #[test]
    fn reads_override() {
        assert_eq!(ReportConfig::from_lookup(lookup("3")).best_sellers_top_n, 3);
        assert_eq!(ReportConfig::from_lookup(lookup(" 12 ")).best_sellers_top_n, 12);
    }

    #[test]
    fn negative_clamps_to_zero() {
        assert_eq!(ReportConfig::from_lookup(lookup("-1")).best_sellers_top_n, 0);
    }

    #[test]
    fn garbage_keeps_default() {
        assert_eq!(ReportConfig::from_lookup(lookup("lots")).best_sellers_top_n, DEFAULT_TOP_N);
    }
}
