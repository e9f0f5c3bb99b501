//! Gateway credential configuration.
//!
//! This module defines the TOML-deserializable credential set for the
//! gateway header block. Every key is optional: absent keys are omitted from
//! the serialized header, never defaulted.

use serde::Deserialize;

use crate::error::{ConnectorError, Result};

/// Ordered header tag mapping for each recognized configuration key.
///
/// The serializer emits present keys in exactly this order.
const HEADER_TAGS: [&str; 8] = [
    "SecretAPIKey",
    "SiteId",
    "LicenseId",
    "DeviceId",
    "UserName",
    "Password",
    "DeveloperID",
    "VersionNbr",
];

/// Gateway credential configuration.
///
/// Any subset of keys may be present. Loading from TOML runs
/// [`validate`](Self::validate); a configuration assembled in code is not
/// validated unless the caller asks, and serialization accepts it either way.
///
/// # Examples
///
/// ```
/// use portico_connector::GatewayConfig;
///
/// let config = GatewayConfig::from_toml(r#"
///     secret_api_key = "skapi_cert_MTyMAQBiHVEAewvIzXVFcmUd2UcyBge_eCpaASUp0A"
///     device_id = "90911395"
/// "#)?;
///
/// assert!(config.secret_api_key.is_some());
/// assert!(config.site_id.is_none());
/// # Ok::<(), portico_connector::ConnectorError>(())
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GatewayConfig {
    /// Secret API key issued for the merchant account.
    pub secret_api_key: Option<String>,

    /// Numeric site identifier.
    pub site_id: Option<String>,

    /// Numeric license identifier.
    pub license_id: Option<String>,

    /// Numeric device identifier.
    pub device_id: Option<String>,

    /// Gateway account username.
    pub username: Option<String>,

    /// Gateway account password.
    pub password: Option<String>,

    /// Developer identifier assigned during certification.
    pub developer_id: Option<String>,

    /// Integration version number assigned during certification.
    pub version_number: Option<String>,
}

impl GatewayConfig {
    /// Creates a configuration from a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectorError::ConfigError`] if TOML parsing fails or
    /// validation rejects a value.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: Self = toml::from_str(toml_str)
            .map_err(|e| ConnectorError::ConfigError(format!("invalid TOML config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates present credential values.
    ///
    /// This method checks that:
    /// - Present values are not empty
    /// - `site_id`, `license_id`, and `device_id` contain only ASCII digits
    ///
    /// Absent keys are always valid. Validation is advisory: the serializer
    /// never calls it, and the header omission rule holds for any
    /// configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectorError::ConfigError`] if any present value is
    /// invalid.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in self.keyed_values() {
            if let Some(value) = value {
                if value.is_empty() {
                    return Err(ConnectorError::ConfigError(format!(
                        "{name} must not be empty when set"
                    )));
                }
            }
        }

        let numeric = [
            ("site_id", &self.site_id),
            ("license_id", &self.license_id),
            ("device_id", &self.device_id),
        ];
        for (name, value) in numeric {
            if let Some(value) = value {
                if !value.chars().all(|c| c.is_ascii_digit()) {
                    return Err(ConnectorError::ConfigError(format!(
                        "{name} must be numeric, got: {value}"
                    )));
                }
            }
        }

        Ok(())
    }

    /// Returns the header elements for present credentials, in schema order.
    ///
    /// Each pair is the wire tag name and the configured value. Absent keys
    /// contribute no pair.
    #[must_use]
    pub fn header_pairs(&self) -> Vec<(&'static str, &str)> {
        HEADER_TAGS
            .into_iter()
            .zip(self.values())
            .filter_map(|(tag, value)| value.as_deref().map(|v| (tag, v)))
            .collect()
    }

    /// Configured values in schema order.
    fn values(&self) -> [&Option<String>; 8] {
        [
            &self.secret_api_key,
            &self.site_id,
            &self.license_id,
            &self.device_id,
            &self.username,
            &self.password,
            &self.developer_id,
            &self.version_number,
        ]
    }

    /// Configuration key names paired with their values, in schema order.
    fn keyed_values(&self) -> [(&'static str, &Option<String>); 8] {
        [
            ("secret_api_key", &self.secret_api_key),
            ("site_id", &self.site_id),
            ("license_id", &self.license_id),
            ("device_id", &self.device_id),
            ("username", &self.username),
            ("password", &self.password),
            ("developer_id", &self.developer_id),
            ("version_number", &self.version_number),
        ]
    }
}
