//! npm registry client used for dependency version resolution
//!
//! One lookup per symbolic package name; a failed lookup fails the whole
//! batch so the scaffold never renders a manifest with placeholder versions.

use indexmap::IndexMap;
use serde::Deserialize;

use crate::core::{LaniaError, LaniaResult};

pub const DEFAULT_REGISTRY: &str = "https://registry.npmjs.org";

/// Registry the install step is pointed at
pub const INSTALL_REGISTRY: &str = "https://registry.npmmirror.com";

/// Mapping from symbolic package name to a concrete version requirement
pub type ResolvedDependencyMap = IndexMap<String, String>;

#[derive(Debug, Deserialize)]
struct VersionManifest {
    version: String,
}

/// npm registry client
pub struct RegistryClient {
    client: reqwest::Client,
    url: String,
}

impl RegistryClient {
    /// Create a new registry client against the default registry
    pub fn new() -> LaniaResult<Self> {
        Self::with_url(DEFAULT_REGISTRY)
    }

    /// Create a new registry client against a specific registry URL
    pub fn with_url(url: &str) -> LaniaResult<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::ACCEPT,
            "application/vnd.npm.install-v1+json; q=1.0, application/json; q=0.8"
                .parse()
                .map_err(|_| LaniaError::registry("Invalid accept header"))?,
        );
        headers.insert(
            reqwest::header::USER_AGENT,
            format!("lania/{}", env!("CARGO_PKG_VERSION"))
                .parse()
                .map_err(|_| LaniaError::registry("Invalid user agent"))?,
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(30))
            .gzip(true)
            .brotli(true)
            .build()
            .map_err(|e| LaniaError::Network(e.to_string()))?;

        Ok(Self {
            client,
            url: url.trim_end_matches('/').to_string(),
        })
    }

    /// Resolve every name to a `^version` requirement, in input order.
    ///
    /// Fails as a unit: a single failed lookup returns an error and no
    /// partial map. Lookups run sequentially; dev and runtime batches are
    /// resolved by separate calls and never interleave.
    pub async fn resolve(&self, names: &[String]) -> LaniaResult<ResolvedDependencyMap> {
        let mut resolved = ResolvedDependencyMap::new();
        for name in names {
            let version = self.latest_version(name).await?;
            resolved.insert(name.clone(), format!("^{}", version));
        }
        Ok(resolved)
    }

    /// Fetch the latest published version of a package
    async fn latest_version(&self, name: &str) -> LaniaResult<String> {
        let url = format!("{}/{}/latest", self.url, encode_name(name));

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| LaniaError::Network(e.to_string()))?;

        if !response.status().is_success() {
            if response.status() == reqwest::StatusCode::NOT_FOUND {
                return Err(LaniaError::PackageNotFound(name.to_string()));
            }
            return Err(LaniaError::registry(format!(
                "Failed to fetch {}: HTTP {}",
                name,
                response.status()
            )));
        }

        let manifest: VersionManifest = response
            .json()
            .await
            .map_err(|e| LaniaError::Network(e.to_string()))?;

        Ok(manifest.version)
    }
}

/// Scoped packages keep their `@scope/` prefix but the slash is encoded
fn encode_name(name: &str) -> String {
    if name.starts_with('@') {
        name.replace('/', "%2f")
    } else {
        name.to_string()
    }
}
