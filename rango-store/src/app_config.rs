use rango_order::TerminalPolicy;
use serde::Deserialize;
use std::env;
use std::path::Path;

use crate::StoreResult;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub currency: CurrencyConfig,
    pub lifecycle: LifecycleConfig,
    pub courier: CourierConfig,
    #[serde(default)]
    pub seed: SeedConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CurrencyConfig {
    pub code: String,
    pub symbol: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LifecycleConfig {
    #[serde(default)]
    pub terminal_policy: TerminalPolicy,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CourierConfig {
    pub start_online: bool,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct SeedConfig {
    /// JSON seed file; the bundled demo seed is used when unset.
    pub path: Option<String>,
}

impl Config {
    pub fn load() -> StoreResult<Self> {
        Self::load_from("config")
    }

    /// Layer `default`, `{RUN_MODE}` and `local` files from `dir`, then the environment.
    pub fn load_from(dir: impl AsRef<Path>) -> StoreResult<Self> {
        let dir = dir.as_ref();
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        let layer = |name: &str| {
            config::File::with_name(&dir.join(name).to_string_lossy()).required(false)
        };

        let s = Self::defaults()?
            .add_source(layer("default"))
            .add_source(layer(&run_mode))
            .add_source(layer("local"))
            // e.g. RANGO__LIFECYCLE__TERMINAL_POLICY=reject
            .add_source(config::Environment::with_prefix("RANGO").separator("__"))
            .build()?;

        Ok(s.try_deserialize()?)
    }

    /// Built-in values only, no files or environment.
    pub fn builtin() -> StoreResult<Self> {
        Ok(Self::defaults()?.build()?.try_deserialize()?)
    }

    fn defaults() -> StoreResult<config::ConfigBuilder<config::builder::DefaultState>> {
        Ok(config::Config::builder()
            .set_default("currency.code", "BRL")?
            .set_default("currency.symbol", "R$")?
            .set_default("lifecycle.terminal_policy", "ignore")?
            .set_default("courier.start_online", true)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_defaults() {
        let config = Config::builtin().unwrap();
        assert_eq!(config.currency.code, "BRL");
        assert_eq!(config.currency.symbol, "R$");
        assert_eq!(config.lifecycle.terminal_policy, TerminalPolicy::Ignore);
        assert!(config.courier.start_online);
        assert!(config.seed.path.is_none());
    }

    #[test]
    fn test_overrides_take_precedence() {
        let config: Config = Config::defaults()
            .unwrap()
            .set_override("lifecycle.terminal_policy", "reject")
            .unwrap()
            .set_override("courier.start_online", false)
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.lifecycle.terminal_policy, TerminalPolicy::Reject);
        assert!(!config.courier.start_online);
    }

    #[test]
    fn test_file_then_environment_layering() {
        let dir = env::temp_dir().join(format!("rango-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(
            dir.join("default.toml"),
            "[currency]\nsymbol = \"US$\"\n\n[lifecycle]\nterminal_policy = \"reject\"\n\n[courier]\nstart_online = true\n",
        ).unwrap();

        let from_file = Config::load_from(&dir).unwrap();
        assert_eq!(from_file.currency.symbol, "US$");
        assert_eq!(from_file.currency.code, "BRL");
        assert_eq!(from_file.lifecycle.terminal_policy, TerminalPolicy::Reject);
        assert!(from_file.courier.start_online);

        env::set_var("RANGO__COURIER__START_ONLINE", "false");
        let from_env = Config::load_from(&dir);
        env::remove_var("RANGO__COURIER__START_ONLINE");
        std::fs::remove_dir_all(&dir).unwrap();

        let from_env = from_env.unwrap();
        assert!(!from_env.courier.start_online);
        assert_eq!(from_env.lifecycle.terminal_policy, TerminalPolicy::Reject);
    }

    #[test]
    fn test_missing_directory_falls_back_to_defaults() {
        let config = Config::load_from("no/such/config/dir").unwrap();
        assert_eq!(config.currency.symbol, "R$");
        assert_eq!(config.lifecycle.terminal_policy, TerminalPolicy::Ignore);
    }
}
