use std::path::Path;

use config::Config as ConfigHelper;
use serde::Deserialize;
use thiserror::Error;

const ENV_PREFIX: &str = "SWAPROUTER";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load config: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Missing signer mnemonic, required to {0}")]
    MissingSigner(String),
}

#[derive(Debug, Clone, Deserialize)]
pub struct CliConfig {
    pub chain: ChainInfo,
    pub contract: ContractInfo,
    pub signer: Option<SignerInfo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChainInfo {
    pub grpc: String,
    pub chain_id: String,
    pub gas_price: Option<f64>,
    pub gas_adjustment: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContractInfo {
    pub address: String,
}

#[derive(Clone, Deserialize)]
pub struct SignerInfo {
    pub mnemonic: String,
}

// keeps the mnemonic out of logs
impl std::fmt::Debug for SignerInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignerInfo")
            .field("mnemonic", &"<redacted>")
            .finish()
    }
}

impl CliConfig {
    /// mnemonic of the signing account. `action` names what it is needed for.
    pub fn signer_mnemonic(&self, action: &str) -> Result<&str, ConfigError> {
        self.signer
            .as_ref()
            .map(|signer| signer.mnemonic.as_str())
            .filter(|mnemonic| !mnemonic.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingSigner(action.to_string()))
    }
}

/// loads the config file at `path`, with `SWAPROUTER_<SECTION>__<KEY>`
/// environment variables taking precedence over the file.
pub fn load_config(path: &Path) -> Result<CliConfig, ConfigError> {
    load_config_with_env(path, None)
}

/// same as [`load_config`], reading the overrides from `env` instead of the
/// process environment when given.
fn load_config_with_env(
    path: &Path,
    env: Option<config::Map<String, String>>,
) -> Result<CliConfig, ConfigError> {
    ConfigHelper::builder()
        .add_source(config::File::from(path.to_path_buf()))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .source(env),
        )
        .build()?
        .try_deserialize()
        .map_err(Into::into)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_valid_config() {
        let file = write_config(
            r#"
            [chain]
            grpc = "http://127.0.0.1:9090"
            chain_id = "localosmosis"
            gas_price = 0.025

            [contract]
            address = "osmo1swaprouter"

            [signer]
            mnemonic = "word word word"
            "#,
        );

        let config = load_config(file.path()).unwrap();

        assert_eq!(config.chain.grpc, "http://127.0.0.1:9090");
        assert_eq!(config.chain.chain_id, "localosmosis");
        assert_eq!(config.chain.gas_price, Some(0.025));
        assert_eq!(config.chain.gas_adjustment, None);
        assert_eq!(config.contract.address, "osmo1swaprouter");
        assert_eq!(config.signer_mnemonic("set a route").unwrap(), "word word word");
    }

    #[test]
    fn test_missing_signer() {
        let file = write_config(
            r#"
            [chain]
            grpc = "http://127.0.0.1:9090"
            chain_id = "localosmosis"

            [contract]
            address = "osmo1swaprouter"
            "#,
        );

        let config = load_config(file.path()).unwrap();

        match config.signer_mnemonic("set a route") {
            Err(ConfigError::MissingSigner(action)) => assert_eq!(action, "set a route"),
            _ => panic!("Expected MissingSigner error"),
        }
    }

    #[test]
    fn test_env_overrides_file() {
        let file = write_config(
            r#"
            [chain]
            grpc = "http://127.0.0.1:9090"
            chain_id = "localosmosis"

            [contract]
            address = "osmo1swaprouter"
            "#,
        );

        let env = config::Map::from_iter([
            (
                "SWAPROUTER_SIGNER__MNEMONIC".to_string(),
                "word from env".to_string(),
            ),
            (
                "SWAPROUTER_CONTRACT__ADDRESS".to_string(),
                "osmo1override".to_string(),
            ),
        ]);

        let config = load_config_with_env(file.path(), Some(env)).unwrap();

        assert_eq!(config.contract.address, "osmo1override");
        assert_eq!(config.signer_mnemonic("swap").unwrap(), "word from env");
    }

    #[test]
    fn test_env_without_prefix_separator_is_ignored() {
        let file = write_config(
            r#"
            [chain]
            grpc = "http://127.0.0.1:9090"
            chain_id = "localosmosis"

            [contract]
            address = "osmo1swaprouter"
            "#,
        );

        let env = config::Map::from_iter([(
            "SWAPROUTER__CONTRACT__ADDRESS".to_string(),
            "osmo1override".to_string(),
        )]);

        let config = load_config_with_env(file.path(), Some(env)).unwrap();

        assert_eq!(config.contract.address, "osmo1swaprouter");
    }

    #[test]
    fn test_missing_contract_section() {
        let file = write_config(
            r#"
            [chain]
            grpc = "http://127.0.0.1:9090"
            chain_id = "localosmosis"
            "#,
        );

        assert!(matches!(load_config(file.path()), Err(ConfigError::Load(_))));
    }
}
