#![deny(warnings)]
#![deny(rust_2018_idioms)]

use engine::{settings::Settings, startup::App};
use tracing::{Level, event};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let settings = Settings::new().unwrap();

    let app = App::build(&settings).await;

    event!(Level::INFO, "starting harbor engine...");

    app.run().await;
}
