//! Network DTOs
//!
//! Deployment network responses. Keys and account secrets are reported only
//! as counts and flags.

use serde::{Deserialize, Serialize};

use crate::domain::models::network::DeploymentNetwork;

/// Explorer endpoints response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplorerUrlsDto {
    pub api_url: String,
    pub browser_url: String,
}

/// Deployment network response DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkResponseDto {
    pub name: String,
    pub chain_id: u64,
    pub rpc_url: Option<String>,
    pub account_count: usize,
    pub credential_source: String,
    pub explorer: Option<ExplorerUrlsDto>,
    pub verification_key_configured: bool,
    pub is_default: bool,
}

impl From<&DeploymentNetwork> for NetworkResponseDto {
    fn from(network: &DeploymentNetwork) -> Self {
        Self {
            name: network.name().to_string(),
            chain_id: network.chain_id(),
            rpc_url: network.rpc_url().map(ToString::to_string),
            account_count: network.accounts().len(),
            credential_source: network.credential_source().as_str().to_string(),
            explorer: network.explorer().map(|e| ExplorerUrlsDto {
                api_url: e.api_url.clone(),
                browser_url: e.browser_url.clone(),
            }),
            verification_key_configured: network.has_verification_key(),
            is_default: network.is_default(),
        }
    }
}

impl From<DeploymentNetwork> for NetworkResponseDto {
    fn from(network: DeploymentNetwork) -> Self {
        Self::from(&network)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::network::{CredentialSource, ExplorerUrls};
    use crate::shared::secret::SecretString;

    #[test]
    fn test_secrets_are_not_serialized() {
        let network = DeploymentNetwork::new(
            "sonic".to_string(),
            146,
            Some("https://rpc.soniclabs.com".to_string()),
            vec![SecretString::new("ab".repeat(32))],
            CredentialSource::Environment,
            Some(ExplorerUrls {
                api_url: "https://api.sonicscan.org/api".to_string(),
                browser_url: "https://sonicscan.org".to_string(),
            }),
            Some(SecretString::new("scan-key")),
            false,
        );

        let json = serde_json::to_string(&NetworkResponseDto::from(&network)).unwrap();

        assert!(!json.contains(&"ab".repeat(32)));
        assert!(!json.contains("scan-key"));
        assert!(json.contains(r#""accountCount":1"#));
        assert!(json.contains(r#""verificationKeyConfigured":true"#));
        assert!(json.contains(r#""apiUrl":"https://api.sonicscan.org/api""#));
    }
}
