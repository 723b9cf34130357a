mod oauth;

use awc::http::StatusCode;

use crate::credentials::Credentials;

const API_BASE: &str = "https://api.twitter.com";

/// Rejected or failed status update, carrying the API's error text where
/// one is available.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct DispatchError(pub String);

impl From<hmac::crypto_mac::InvalidKeyLength> for DispatchError {
    fn from(_: hmac::crypto_mac::InvalidKeyLength) -> Self {
        Self("HMAC key has invalid length".into())
    }
}

// Error body shape of the v1.1 API: {"errors": [{"code": 88, "message": "..."}]}
#[derive(Debug, serde::Deserialize)]
struct ApiErrors {
    errors: Vec<ApiError>,
}

#[derive(Debug, serde::Deserialize)]
struct ApiError {
    message: String,
}

pub struct Twitter {
    http: awc::Client,
    base_url: String,
}

impl Twitter {
    pub fn new(http: awc::Client) -> Self {
        Self::with_base_url(http, API_BASE.to_string())
    }

    pub fn with_base_url(http: awc::Client, base_url: String) -> Self {
        Self { http, base_url }
    }

    /// Posts `status` as a single tweet. One request, no retries.
    pub async fn update_status(
        &self,
        credentials: &Credentials,
        status: &str,
    ) -> Result<(), DispatchError> {
        let url = format!("{}/1.1/statuses/update.json", self.base_url);
        let authorization =
            oauth::authorization("POST", &url, &[("status", status)], credentials)?;

        let mut resp = self
            .http
            .post(&url)
            .header(awc::http::header::AUTHORIZATION, authorization)
            .content_type("application/x-www-form-urlencoded")
            .send_body(format!("status={}", oauth::percent_encode(status)))
            .await
            .map_err(|err| DispatchError(format!("failed to send request: {}", err)))?;

        if resp.status().as_u16() >= 400 {
            let status_code = resp.status();
            let body = resp
                .body()
                .await
                .map_err(|err| DispatchError(format!("failed to fetch response body: {}", err)))?;
            return Err(DispatchError(api_error_text(status_code, &body)));
        }

        Ok(())
    }
}

fn api_error_text(status: StatusCode, body: &[u8]) -> String {
    serde_json::from_slice::<ApiErrors>(body)
        .ok()
        .and_then(|api| api.errors.into_iter().next())
        .map(|err| err.message)
        .unwrap_or_else(|| format!("{}: {}", status, String::from_utf8_lossy(body)))
}
