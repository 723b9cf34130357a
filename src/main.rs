mod config;
mod credentials;
mod github;
mod hooks;
mod http;
mod message;
mod twitter;

use actix_web::{guard, middleware::Logger, web, App, HttpServer};
use color_eyre::eyre;

#[actix_web::main]
async fn main() -> eyre::Result<()> {
    dotenv::dotenv().ok();
    color_eyre::install()?;
    tracing_log::LogTracer::init()?;
    tracing::subscriber::set_global_default(tracing_subscriber::fmt().finish())?;

    let config: config::Config = envy::prefixed("TWEETHOOK_").from_env()?;
    let bind_addr = config.bind_addr.clone();

    HttpServer::new(move || {
        App::new()
            .data(config.clone())
            .data(twitter::Twitter::new(awc::Client::new()))
            .wrap(Logger::default())
            .route(
                "/",
                web::post()
                    .guard(guard::Header("X-GitHub-Event", "ping"))
                    .to(hooks::ping_hook),
            )
            .route("/", web::post().to(hooks::push_hook))
    })
    .bind(&bind_addr)?
    .run()
    .await
    .map_err(Into::into)
}
