use actix_web::{web, HttpResponse};

use crate::{
    config::Config,
    credentials::{Credentials, CredentialsError},
    github::PushEvent,
    http::Webhook,
    message,
    twitter::{DispatchError, Twitter},
};

#[derive(Debug, thiserror::Error)]
pub enum PushHookError {
    #[error("{0}")]
    Credentials(#[from] CredentialsError),
    #[error("Twitter API: {0}")]
    Dispatch(#[from] DispatchError),
}

impl actix_web::ResponseError for PushHookError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::InternalServerError()
            .content_type("text/plain; charset=UTF-8")
            .body(format!("500 Internal Server Error ({})", self))
    }
}

/// GitHub sends a `ping` delivery when the hook is installed; answer it
/// without touching credentials or the Twitter API.
pub async fn ping_hook() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=UTF-8")
        .body("OK")
}

pub async fn push_hook(
    Webhook(event): Webhook<PushEvent>,
    config: web::Data<Config>,
    twitter: web::Data<Twitter>,
) -> Result<HttpResponse, PushHookError> {
    let credentials = Credentials::load(&config.credentials_path)?;

    let commit = &event.head_commit;
    let status = message::compose(&commit.id, &event.pusher.name, &commit.message, &commit.url);
    tracing::info!(
        "posting {} pushed to {} by {}",
        commit.id,
        event.repository.name,
        event.pusher.name
    );

    if let Err(err) = twitter.update_status(&credentials, &status).await {
        tracing::error!("Failed posting status update: {}", err);
        return Err(err.into());
    }

    Ok(HttpResponse::Accepted()
        .content_type("text/plain; charset=UTF-8")
        .body(status))
}
