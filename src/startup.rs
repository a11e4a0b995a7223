use std::net::TcpListener;

use actix_cors::Cors;
use actix_web::middleware::{Condition, DefaultHeaders};
use actix_web::web::Data;
use actix_web::{App, HttpServer};

use crate::configuration::{ApplicationConfiguration, Environment};
use crate::database::Pool;
use crate::routes;

pub struct AppState {
    pub db: Pool,
    pub environment: Environment,
}

/// Helmet-style response headers, applied to every response.
pub fn security_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add(("X-Content-Type-Options", "nosniff"))
        .add(("X-Frame-Options", "SAMEORIGIN"))
        .add(("X-DNS-Prefetch-Control", "off"))
        .add(("X-Download-Options", "noopen"))
        .add(("X-XSS-Protection", "0"))
        .add(("Referrer-Policy", "no-referrer"))
}

pub async fn startup(
    database: Pool,
    configuration: ApplicationConfiguration,
    listener: TcpListener,
) -> std::io::Result<()> {
    let app_state = Data::new(AppState {
        db: database,
        environment: configuration.environment,
    });

    // No request logs in the test environment
    let log_requests = configuration.environment != Environment::Test;

    HttpServer::new(move || {
        App::new()
            .wrap(Condition::new(
                log_requests,
                tracing_actix_web::TracingLogger::default(),
            ))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header(),
            )
            .wrap(security_headers())
            .app_data(app_state.clone())
            .configure(routes::configure)
    })
    .listen(listener)?
    .run()
    .await
}
