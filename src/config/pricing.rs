//! Pricing configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Subscription pricing and the Master-upgrade donation amount, in cents.
#[derive(Debug, Clone, Deserialize)]
pub struct PricingConfig {
    /// Monthly price of the Daily Cultivator tier.
    #[serde(default = "default_daily_price_cents")]
    pub daily_price_cents: u64,

    /// Monthly price of the Master Cultivator tier.
    #[serde(default = "default_master_price_cents")]
    pub master_price_cents: u64,

    /// Donation collected once, on a member's first Master upgrade.
    #[serde(default = "default_donation_per_master_cents")]
    pub donation_per_master_cents: u64,
}

fn default_daily_price_cents() -> u64 {
    999
}

fn default_master_price_cents() -> u64 {
    2999
}

fn default_donation_per_master_cents() -> u64 {
    100
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            daily_price_cents: default_daily_price_cents(),
            master_price_cents: default_master_price_cents(),
            donation_per_master_cents: default_donation_per_master_cents(),
        }
    }
}

impl PricingConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.donation_per_master_cents == 0 {
            return Err(ValidationError::ZeroDonation);
        }
        if self.daily_price_cents >= self.master_price_cents {
            return Err(ValidationError::PriceOrderingInverted);
        }
        Ok(())
    }
}
