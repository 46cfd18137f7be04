//! Configured Network Catalog
//!
//! Implements the NetworkCatalog gateway from the `[deployment]` config
//! section, resolving credentials from environment variables once at startup.

use std::collections::HashSet;

use config::ConfigError;

use crate::domain::gateways::NetworkCatalog;
use crate::domain::models::network::{CredentialSource, DeploymentNetwork, ExplorerUrls};
use crate::infrastructure::driven_adapters::config::DeploymentConfig;
use crate::shared::secret::SecretString;

/// Key substituted when a network's key variable is unset
const PLACEHOLDER_PRIVATE_KEY: &str = "0000000000000000000000000000000000000000000000000000000000000000";

/// Network catalog backed by validated configuration
pub struct ConfiguredNetworkCatalog {
    networks: Vec<DeploymentNetwork>,
}

impl ConfiguredNetworkCatalog {
    /// Build the catalog, reading process environment variables
    ///
    /// # Errors
    ///
    /// See [`ConfiguredNetworkCatalog::from_config_with_env`].
    pub fn from_config(config: &DeploymentConfig) -> Result<Self, ConfigError> {
        Self::from_config_with_env(config, |key| std::env::var(key).ok())
    }

    /// Build the catalog with an explicit environment lookup
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Message` if network names or chain ids repeat, a
    /// verification entry names an undeclared network or mismatched chain id,
    /// the default network is undeclared, or a private key is malformed.
    pub fn from_config_with_env<F>(config: &DeploymentConfig, env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut names = HashSet::new();
        let mut chain_ids = HashSet::new();
        for profile in &config.networks {
            if !names.insert(profile.name.as_str()) {
                return Err(invalid(format!("duplicate network name '{}'", profile.name)));
            }
            if !chain_ids.insert(profile.chain_id) {
                return Err(invalid(format!("duplicate chain id {}", profile.chain_id)));
            }
        }

        if let Some(default) = &config.default_network {
            if !names.contains(default.as_str()) {
                return Err(invalid(format!("default network '{default}' is not declared")));
            }
        }

        for key in &config.verification.api_keys {
            if !names.contains(key.network.as_str()) {
                return Err(invalid(format!("api key for undeclared network '{}'", key.network)));
            }
        }

        for chain in &config.verification.custom_chains {
            let profile = config
                .networks
                .iter()
                .find(|p| p.name == chain.network)
                .ok_or_else(|| invalid(format!("custom chain for undeclared network '{}'", chain.network)))?;
            if profile.chain_id != chain.chain_id {
                return Err(invalid(format!(
                    "custom chain '{}' has chain id {} but the network declares {}",
                    chain.network, chain.chain_id, profile.chain_id
                )));
            }
        }

        let mut networks = Vec::with_capacity(config.networks.len());
        for profile in &config.networks {
            let (accounts, credential_source) = match &profile.accounts_env {
                None => (vec![], CredentialSource::None),
                Some(var) => match env(var).filter(|v| !v.trim().is_empty()) {
                    Some(value) => {
                        let key = normalize_private_key(&value)
                            .ok_or_else(|| invalid(format!("{var} is not a 32-byte hex private key")))?;
                        (vec![key], CredentialSource::Environment)
                    }
                    None => {
                        tracing::warn!(
                            network = %profile.name,
                            variable = %var,
                            "Private key variable unset, using placeholder key"
                        );
                        (vec![SecretString::new(PLACEHOLDER_PRIVATE_KEY)], CredentialSource::Placeholder)
                    }
                },
            };

            let explorer = config
                .verification
                .custom_chains
                .iter()
                .find(|c| c.network == profile.name)
                .map(|c| ExplorerUrls {
                    api_url: c.urls.api_url.clone(),
                    browser_url: c.urls.browser_url.clone(),
                });

            // Missing key variables resolve to an empty key
            let verification_api_key = config
                .verification
                .api_keys
                .iter()
                .find(|k| k.network == profile.name)
                .map(|k| SecretString::new(env(&k.env).unwrap_or_default()));

            networks.push(DeploymentNetwork::new(
                profile.name.clone(),
                profile.chain_id,
                profile.url.clone(),
                accounts,
                credential_source,
                explorer,
                verification_api_key,
                config.default_network.as_deref() == Some(profile.name.as_str()),
            ));
        }

        tracing::info!(count = networks.len(), "Deployment networks loaded");
        Ok(Self { networks })
    }
}

impl NetworkCatalog for ConfiguredNetworkCatalog {
    fn list(&self) -> Vec<DeploymentNetwork> {
        self.networks.clone()
    }

    fn find_by_name(&self, name: &str) -> Option<DeploymentNetwork> {
        self.networks.iter().find(|n| n.name() == name).cloned()
    }
}

fn invalid(message: String) -> ConfigError {
    ConfigError::Message(format!("invalid deployment configuration: {message}"))
}

/// Accepts 64 hex chars with an optional `0x` prefix; returns the bare hex
fn normalize_private_key(value: &str) -> Option<SecretString> {
    let trimmed = value.trim();
    let hex = trimmed.strip_prefix("0x").unwrap_or(trimmed);
    (hex.len() == 64 && hex.chars().all(|c| c.is_ascii_hexdigit())).then(|| SecretString::new(hex))
}
