use base64::Engine;
use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD};
use base64::engine::DecodePaddingMode;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::ConfigDecodeError;

const LENIENT: GeneralPurposeConfig =
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent);
const STANDARD_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::STANDARD, LENIENT);
const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::URL_SAFE, LENIENT);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RatingType {
    #[default]
    Stars,
    Numbers,
}

/// Per-request display options, carried in the badge URL as base64 JSON.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DisplayConfig {
    #[serde(default)]
    pub rating_type: RatingType,
}

impl DisplayConfig {
    pub fn encode(&self) -> String {
        // Serializing a fieldless enum struct cannot fail.
        let json = serde_json::to_vec(self).unwrap_or_default();
        STANDARD.encode(json)
    }

    /// Accepts the standard or URL-safe alphabet, with or without padding.
    pub fn decode(encoded: &str) -> Result<Self, ConfigDecodeError> {
        let encoded = encoded.trim();
        let bytes = STANDARD_LENIENT
            .decode(encoded)
            .or_else(|_| URL_SAFE_LENIENT.decode(encoded))?;

        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Decodes an optional URL segment, falling back to the default on failure.
    pub fn decode_or_default(encoded: Option<&str>) -> Self {
        let Some(encoded) = encoded else {
            return Self::default();
        };

        Self::decode(encoded).unwrap_or_else(|e| {
            tracing::warn!("Ignoring display config {:?}: {}", encoded, e);
            Self::default()
        })
    }
}
