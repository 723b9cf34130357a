//! OAuth 1.0a request signing (HMAC-SHA1), enough for a single
//! `statuses/update` call.

use std::time::{SystemTime, UNIX_EPOCH};

use hmac::crypto_mac::InvalidKeyLength;
use hmac::{Hmac, Mac as _, NewMac as _};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use rand::RngCore as _;
use sha1::Sha1;

use crate::credentials::Credentials;

// RFC 3986 unreserved characters stay literal, everything else is escaped.
const ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

pub fn percent_encode(input: &str) -> String {
    utf8_percent_encode(input, ENCODE_SET).to_string()
}

/// `Authorization` header value for a signed request, with a fresh nonce and
/// the current Unix time.
pub fn authorization(
    method: &str,
    url: &str,
    params: &[(&str, &str)],
    credentials: &Credentials,
) -> Result<String, InvalidKeyLength> {
    let mut nonce_bytes = [0_u8; 16];
    rand::thread_rng().fill_bytes(&mut nonce_bytes);
    let nonce = hex::encode(nonce_bytes);

    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or(0);

    sign(method, url, params, credentials, &nonce, timestamp)
}

fn sign(
    method: &str,
    url: &str,
    params: &[(&str, &str)],
    credentials: &Credentials,
    nonce: &str,
    timestamp: u64,
) -> Result<String, InvalidKeyLength> {
    let timestamp = timestamp.to_string();
    let oauth_params = [
        ("oauth_consumer_key", credentials.consumer_key.unsecure()),
        ("oauth_nonce", nonce),
        ("oauth_signature_method", "HMAC-SHA1"),
        ("oauth_timestamp", timestamp.as_str()),
        ("oauth_token", credentials.access_token.unsecure()),
        ("oauth_version", "1.0"),
    ];

    // Signature base string: method, url, and all parameters with their
    // keys and values encoded, sorted, and joined `k=v` with `&`.
    let mut encoded: Vec<(String, String)> = oauth_params
        .iter()
        .chain(params.iter())
        .map(|&(key, value)| (percent_encode(key), percent_encode(value)))
        .collect();
    encoded.sort();

    let param_string = encoded
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join("&");
    let base_string = format!(
        "{}&{}&{}",
        method,
        percent_encode(url),
        percent_encode(&param_string)
    );

    let signing_key = format!(
        "{}&{}",
        percent_encode(credentials.consumer_secret.unsecure()),
        percent_encode(credentials.access_token_secret.unsecure())
    );
    let mut mac = Hmac::<Sha1>::new_varkey(signing_key.as_bytes())?;
    mac.update(base_string.as_bytes());
    let signature = base64::encode(mac.finalize().into_bytes());

    let mut header_params: Vec<(&str, String)> = oauth_params
        .iter()
        .map(|&(key, value)| (key, percent_encode(value)))
        .collect();
    header_params.push(("oauth_signature", percent_encode(&signature)));
    header_params.sort();

    let header = header_params
        .iter()
        .map(|(key, value)| format!(r#"{}="{}""#, key, value))
        .collect::<Vec<_>>()
        .join(", ");

    Ok(format!("OAuth {}", header))
}
