//! Module parameters and keeper configuration.
//!
//! [`Params`] are owned by governance and read-only to the handlers.
//! [`KeeperConfig`] names the module accounts the keeper moves coins through.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::{Address, DecCoin, DexError, Result, constants};

/// Fee amounts and the ownership confirmation window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Params {
    /// Charged to the owner when listing a pair.
    pub list_fee: DecCoin,
    /// Charged to the current owner when proposing a transfer.
    pub transfer_ownership_fee: DecCoin,
    /// Charged when registering an operator.
    pub register_operator_fee: DecCoin,
    /// How long a proposal stays confirmable, in seconds.
    pub ownership_confirm_window_secs: i64,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            list_fee: DecCoin::native(constants::DEFAULT_LIST_FEE),
            transfer_ownership_fee: DecCoin::native(constants::DEFAULT_TRANSFER_OWNERSHIP_FEE),
            register_operator_fee: DecCoin::native(constants::DEFAULT_REGISTER_OPERATOR_FEE),
            ownership_confirm_window_secs: constants::DEFAULT_OWNERSHIP_CONFIRM_WINDOW_SECS,
        }
    }
}

impl Params {
    /// The confirmation window as a duration.
    ///
    /// # Errors
    /// `Configuration` if the stored seconds do not fit a `Duration`.
    pub fn ownership_confirm_window(&self) -> Result<Duration> {
        Duration::try_seconds(self.ownership_confirm_window_secs).ok_or_else(|| {
            DexError::Configuration(format!(
                "ownership_confirm_window_secs out of range: {}",
                self.ownership_confirm_window_secs
            ))
        })
    }

    pub fn validate(&self) -> Result<()> {
        for (name, fee) in [
            ("list_fee", &self.list_fee),
            ("transfer_ownership_fee", &self.transfer_ownership_fee),
            ("register_operator_fee", &self.register_operator_fee),
        ] {
            if fee.amount.is_sign_negative() {
                return Err(DexError::Configuration(format!("{name} is negative: {fee}")));
            }
            if fee.denom.is_empty() {
                return Err(DexError::Configuration(format!("{name} has an empty denom")));
            }
        }
        if self.ownership_confirm_window_secs <= 0
            || self.ownership_confirm_window_secs > constants::MAX_OWNERSHIP_CONFIRM_WINDOW_SECS
        {
            return Err(DexError::Configuration(format!(
                "ownership_confirm_window_secs must be in 1..={}, got {}",
                constants::MAX_OWNERSHIP_CONFIRM_WINDOW_SECS,
                self.ownership_confirm_window_secs
            )));
        }
        Ok(())
    }
}

/// Module accounts and deposit denom used by the keeper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeeperConfig {
    /// Module account holding pair deposits.
    pub escrow_account: Address,
    /// Module account receiving fees.
    pub fee_collector: Address,
    /// The only denom accepted for deposits.
    pub deposit_denom: String,
}

impl Default for KeeperConfig {
    fn default() -> Self {
        Self {
            escrow_account: Address::module(constants::MODULE_NAME),
            fee_collector: Address::module(constants::FEE_COLLECTOR_NAME),
            deposit_denom: constants::NATIVE_TOKEN.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    #[test]
    fn params_defaults() {
        let p = Params::default();
        assert_eq!(p.list_fee, DecCoin::native(20_000));
        assert_eq!(p.transfer_ownership_fee, DecCoin::native(10));
        assert_eq!(p.ownership_confirm_window().unwrap(), Duration::hours(24));
        assert!(p.validate().is_ok());
    }

    #[test]
    fn negative_fee_rejected() {
        let p = Params {
            list_fee: DecCoin::new("okt", Decimal::NEGATIVE_ONE),
            ..Params::default()
        };
        let err = p.validate().unwrap_err();
        assert!(matches!(err, DexError::Configuration(_)));
    }

    #[test]
    fn zero_window_rejected() {
        let p = Params {
            ownership_confirm_window_secs: 0,
            ..Params::default()
        };
        assert!(p.validate().is_err());
    }

    #[test]
    fn oversized_window_rejected() {
        let at_max = Params {
            ownership_confirm_window_secs: constants::MAX_OWNERSHIP_CONFIRM_WINDOW_SECS,
            ..Params::default()
        };
        assert!(at_max.validate().is_ok());

        let huge = Params {
            ownership_confirm_window_secs: i64::MAX,
            ..Params::default()
        };
        assert!(matches!(huge.validate(), Err(DexError::Configuration(_))));
        assert!(matches!(
            huge.ownership_confirm_window(),
            Err(DexError::Configuration(_))
        ));
    }

    #[test]
    fn params_from_json() {
        let json = r#"{
            "list_fee": {"denom": "okt", "amount": "100"},
            "transfer_ownership_fee": {"denom": "okt", "amount": "1.5"},
            "register_operator_fee": {"denom": "okt", "amount": "0"},
            "ownership_confirm_window_secs": 60
        }"#;
        let p: Params = serde_json::from_str(json).unwrap();
        assert_eq!(p.transfer_ownership_fee.amount, Decimal::new(15, 1));
        assert_eq!(p.ownership_confirm_window().unwrap(), Duration::minutes(1));
    }

    #[test]
    fn keeper_config_uses_module_accounts() {
        let cfg = KeeperConfig::default();
        assert_eq!(cfg.escrow_account, Address::module("dex"));
        assert_ne!(cfg.escrow_account, cfg.fee_collector);
        assert_eq!(cfg.deposit_denom, "okt");
    }
}
