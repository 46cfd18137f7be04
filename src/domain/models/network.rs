//! Deployment Network Domain Model
//!
//! A named chain profile the registry can be deployed to and verified on.

use crate::shared::secret::SecretString;

/// Where a network's signing accounts came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSource {
    /// The network signs with the local node's built-in accounts
    None,
    /// Keys were read from the configured environment variable
    Environment,
    /// The environment variable was unset and the all-zero key was substituted
    Placeholder,
}

impl CredentialSource {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Environment => "environment",
            Self::Placeholder => "placeholder",
        }
    }
}

/// Block explorer endpoints used for source verification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplorerUrls {
    pub api_url: String,
    pub browser_url: String,
}

/// Deployment network entity with resolved credentials
#[derive(Debug, Clone)]
pub struct DeploymentNetwork {
    name: String,
    chain_id: u64,
    rpc_url: Option<String>,
    accounts: Vec<SecretString>,
    credential_source: CredentialSource,
    explorer: Option<ExplorerUrls>,
    verification_api_key: Option<SecretString>,
    is_default: bool,
}

impl DeploymentNetwork {
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: String,
        chain_id: u64,
        rpc_url: Option<String>,
        accounts: Vec<SecretString>,
        credential_source: CredentialSource,
        explorer: Option<ExplorerUrls>,
        verification_api_key: Option<SecretString>,
        is_default: bool,
    ) -> Self {
        Self {
            name,
            chain_id,
            rpc_url,
            accounts,
            credential_source,
            explorer,
            verification_api_key,
            is_default,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    #[must_use]
    pub fn rpc_url(&self) -> Option<&str> {
        self.rpc_url.as_deref()
    }

    /// Signing keys for this network. Never serialize these.
    #[must_use]
    pub fn accounts(&self) -> &[SecretString] {
        &self.accounts
    }

    #[must_use]
    pub fn credential_source(&self) -> CredentialSource {
        self.credential_source
    }

    #[must_use]
    pub fn explorer(&self) -> Option<&ExplorerUrls> {
        self.explorer.as_ref()
    }

    #[must_use]
    pub fn verification_api_key(&self) -> Option<&SecretString> {
        self.verification_api_key.as_ref()
    }

    /// True when a non-empty explorer API key was resolved
    #[must_use]
    pub fn has_verification_key(&self) -> bool {
        self.verification_api_key.as_ref().is_some_and(|key| !key.is_empty())
    }

    #[must_use]
    pub fn is_default(&self) -> bool {
        self.is_default
    }
}
