use {
    ppos::{
        error::{PposError::*, Result},
        DEFAULT_HRP, U256,
    },
    std::env,
};

/// Connection and chain parameters of a [`crate::Ppos`] client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// JSON-RPC endpoint
    pub provider: Option<String>,
    pub chain_id: Option<u64>,
    pub gas: Option<U256>,
    pub gas_price: Option<U256>,
    /// Human-readable part of bech32 addresses
    pub hrp: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            provider: None,
            chain_id: None,
            gas: None,
            gas_price: None,
            hrp: DEFAULT_HRP.to_string(),
        }
    }
}

impl Settings {
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: Some(provider.into()),
            ..Self::default()
        }
    }

    /// Reads `PLATON_RPC`, `PLATON_CHAIN_ID`, `PLATON_GAS`, `PLATON_GAS_PRICE` and `PLATON_HRP`.
    /// Every variable is optional.
    pub fn from_env() -> Result<Self> {
        let chain_id = env::var("PLATON_CHAIN_ID")
            .ok()
            .map(|s| {
                s.parse::<u64>()
                    .map_err(|e| Custom(format!("Failed to parse PLATON_CHAIN_ID {s:?}: {e}")))
            })
            .transpose()?;

        Ok(Self {
            provider: env::var("PLATON_RPC").ok(),
            chain_id,
            gas: dec_from_env("PLATON_GAS")?,
            gas_price: dec_from_env("PLATON_GAS_PRICE")?,
            hrp: env::var("PLATON_HRP")
                .ok()
                .filter(|hrp| !hrp.is_empty())
                .unwrap_or_else(|| DEFAULT_HRP.to_string()),
        })
    }
}

fn dec_from_env(name: &str) -> Result<Option<U256>> {
    env::var(name)
        .ok()
        .map(|s| {
            U256::from_dec_str(&s)
                .map_err(|e| Custom(format!("Failed to parse {name} {s:?}: {e:?}")))
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let settings = Settings::default();
        assert_eq!(settings.hrp, "lat");
        assert!(settings.provider.is_none());

        let settings = Settings::new("http://127.0.0.1:6789");
        assert_eq!(settings.provider.as_deref(), Some("http://127.0.0.1:6789"));
        assert_eq!(settings.hrp, "lat");
    }

    #[test]
    fn hrp_from_env() {
        env::set_var("PLATON_HRP", "");
        assert_eq!(Settings::from_env().unwrap().hrp, "lat");

        env::set_var("PLATON_HRP", "lax");
        assert_eq!(Settings::from_env().unwrap().hrp, "lax");

        env::remove_var("PLATON_HRP");
        assert_eq!(Settings::from_env().unwrap().hrp, "lat");
    }
}
