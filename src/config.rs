use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
    #[serde(default = "default_credentials_path")]
    pub credentials_path: PathBuf,
}

fn default_bind_addr() -> String {
    "127.0.0.1:8080".to_string()
}

fn default_credentials_path() -> PathBuf {
    PathBuf::from(".secret/twitter.json")
}
