//! # Store Configuration
//!
//! Stores storefront configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`EDUMART_*`)
//! 2. Config file (`store.toml`)
//! 3. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.
//! If hot-reloading is added later, we'd wrap in `RwLock`.

use serde::{Deserialize, Serialize};

use edumart_core::pricing::{DiscountSchedule, DiscountTier};

use crate::error::SessionError;

/// Storefront configuration.
///
/// ## Fields
/// Most fields have sensible defaults for development.
/// Production deployments should configure these properly.
///
/// ## Example `store.toml`
/// ```toml
/// storeName = "EduMart Campus Store"
/// currencySymbol = "Rs "
/// currencyDecimals = 2
///
/// [[discountTiers]]
/// minQuantity = 20
/// rateBps = 500
///
/// [[discountTiers]]
/// minQuantity = 50
/// rateBps = 1000
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StoreConfig {
    /// Store name (displayed in the storefront header and order summary)
    pub store_name: String,

    /// Currency code (ISO 4217)
    pub currency_code: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Number of decimal places for currency
    pub currency_decimals: u8,

    /// Bulk discount tier table. Validated into a
    /// [`DiscountSchedule`] via [`StoreConfig::schedule`].
    pub discount_tiers: Vec<DiscountTier>,
}

impl Default for StoreConfig {
    /// Returns default configuration suitable for development.
    ///
    /// ## Default Values
    /// - Store: "EduMart Dev Store"
    /// - Currency: USD ($)
    /// - Bulk tiers: the standard retail schedule (20→5%, 50→10%, 100→15%)
    fn default() -> Self {
        StoreConfig {
            store_name: "EduMart Dev Store".to_string(),
            currency_code: "USD".to_string(),
            currency_symbol: "$".to_string(),
            currency_decimals: 2,
            discount_tiers: DiscountSchedule::standard_retail().tiers().to_vec(),
        }
    }
}

impl StoreConfig {
    /// Creates a new StoreConfig from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `EDUMART_STORE_NAME`: Override store name
    /// - `EDUMART_CURRENCY_SYMBOL`: Override currency symbol
    pub fn from_env() -> Self {
        let mut config = StoreConfig::default();

        if let Ok(store_name) = std::env::var("EDUMART_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Ok(symbol) = std::env::var("EDUMART_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        config
    }

    /// Parses configuration from a TOML document.
    ///
    /// Missing fields fall back to their defaults, so a deployment only
    /// overrides what it cares about.
    pub fn from_toml_str(raw: &str) -> Result<Self, SessionError> {
        toml::from_str(raw)
            .map_err(|e| SessionError::validation(format!("invalid store config: {}", e)))
    }

    /// Loads configuration from a `store.toml` file.
    pub fn from_toml_file(path: impl AsRef<std::path::Path>) -> Result<Self, SessionError> {
        let raw = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            SessionError::validation(format!(
                "cannot read store config {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        Self::from_toml_str(&raw)
    }

    /// Builds the validated discount schedule from the configured tiers.
    ///
    /// A malformed table (decreasing thresholds, shrinking rates) is a
    /// configuration error and is reported rather than silently reordered.
    pub fn schedule(&self) -> Result<DiscountSchedule, SessionError> {
        DiscountSchedule::new(self.discount_tiers.clone()).map_err(SessionError::from)
    }

    /// Formats a cent amount as a currency string.
    ///
    /// ## Example
    /// ```rust
    /// use edumart_session::StoreConfig;
    ///
    /// let config = StoreConfig::default();
    /// assert_eq!(config.format_currency(1234), "$12.34");
    /// ```
    pub fn format_currency(&self, cents: i64) -> String {
        let divisor = 10_i64.pow(self.currency_decimals as u32);
        let whole = cents / divisor;
        let frac = (cents % divisor).abs();

        format!(
            "{}{}{}",
            if cents < 0 { "-" } else { "" },
            self.currency_symbol,
            if self.currency_decimals > 0 {
                format!(
                    "{}.{:0width$}",
                    whole.abs(),
                    frac,
                    width = self.currency_decimals as usize
                )
            } else {
                whole.abs().to_string()
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_schedule_is_standard_retail() {
        let config = StoreConfig::default();
        let schedule = config.schedule().unwrap();
        assert_eq!(schedule, DiscountSchedule::standard_retail());
    }

    #[test]
    fn test_format_currency_positive() {
        let config = StoreConfig::default();
        assert_eq!(config.format_currency(1234), "$12.34");
        assert_eq!(config.format_currency(100), "$1.00");
        assert_eq!(config.format_currency(1), "$0.01");
        assert_eq!(config.format_currency(0), "$0.00");
    }

    #[test]
    fn test_format_currency_negative() {
        let config = StoreConfig::default();
        assert_eq!(config.format_currency(-1234), "-$12.34");
    }

    #[test]
    fn test_from_toml_overrides_and_defaults() {
        let raw = r#"
            storeName = "EduMart Campus Store"

            [[discountTiers]]
            minQuantity = 10
            rateBps = 250
        "#;
        let config = StoreConfig::from_toml_str(raw).unwrap();

        assert_eq!(config.store_name, "EduMart Campus Store");
        // Unspecified fields keep their defaults
        assert_eq!(config.currency_symbol, "$");

        let schedule = config.schedule().unwrap();
        assert_eq!(schedule.tiers().len(), 1);
        assert_eq!(schedule.tier_for(10).unwrap().rate_bps, 250);
    }

    #[test]
    fn test_from_toml_rejects_garbage() {
        assert!(StoreConfig::from_toml_str("storeName = [not toml").is_err());
    }

    #[test]
    fn test_malformed_tier_table_is_reported() {
        let raw = r#"
            [[discountTiers]]
            minQuantity = 50
            rateBps = 1000

            [[discountTiers]]
            minQuantity = 20
            rateBps = 500
        "#;
        let config = StoreConfig::from_toml_str(raw).unwrap();
        assert!(config.schedule().is_err());
    }
}
