use std::net::TcpListener;

use blogful_api::configuration::ApplicationConfiguration;
use blogful_api::{database, observability, startup};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Init dotenv
    dotenvy::dotenv().ok();

    let configuration = ApplicationConfiguration::from_env();

    let subscriber = observability::get_subscriber("info");
    observability::init_subscriber(subscriber);

    let postgres_connection = database::init_postgres_connection(&configuration.database_url).await;

    let listener = TcpListener::bind(&configuration.listen_on)?;

    startup::startup(postgres_connection, configuration, listener).await
}
