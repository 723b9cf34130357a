use std::path::Path;

use secstr::SecUtf8;
use serde::{Deserialize, Deserializer};

/// OAuth 1.0a credentials for the posting account, re-read on every request.
#[derive(Debug, Clone, Deserialize)]
pub struct Credentials {
    #[serde(deserialize_with = "deserialize_secutf8")]
    pub consumer_key: SecUtf8,
    #[serde(deserialize_with = "deserialize_secutf8")]
    pub consumer_secret: SecUtf8,
    #[serde(deserialize_with = "deserialize_secutf8")]
    pub access_token: SecUtf8,
    // `access_token_tecret` is the field name deployed credential files
    // actually carry; the correctly spelled name is accepted too.
    #[serde(
        rename = "access_token_tecret",
        alias = "access_token_secret",
        deserialize_with = "deserialize_secutf8"
    )]
    pub access_token_secret: SecUtf8,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CredentialsError {
    #[error("Missing credentials file")]
    MissingFile,
    #[error("Missing credentials data")]
    MissingData,
}

impl Credentials {
    // Unparseable JSON is treated the same as missing fields.
    pub fn load(path: &Path) -> Result<Self, CredentialsError> {
        let raw = std::fs::read(path).map_err(|_| CredentialsError::MissingFile)?;
        let credentials: Self =
            serde_json::from_slice(&raw).map_err(|_| CredentialsError::MissingData)?;

        let complete = [
            &credentials.consumer_key,
            &credentials.consumer_secret,
            &credentials.access_token,
            &credentials.access_token_secret,
        ]
        .iter()
        .all(|secret| !secret.unsecure().is_empty());

        if complete {
            Ok(credentials)
        } else {
            Err(CredentialsError::MissingData)
        }
    }
}

fn deserialize_secutf8<'de, D>(de: D) -> Result<SecUtf8, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(de).map(SecUtf8::from)
}
