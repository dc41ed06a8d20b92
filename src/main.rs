use std::{env, io};

use log::info;
use tokio::{net::TcpListener, signal};

use managenplot::{cli, server, Store};

fn setup_logging() {
    if env::var("LOG").is_err() {
        env::set_var("LOG", "managenplot=info");
    }

    pretty_env_logger::init_custom_env("LOG");
}

async fn shutdown_signal() {
    if signal::ctrl_c().await.is_ok() {
        info!("Shutting down");
    }
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = cli::parse(env::args().skip(1).collect());

    setup_logging();

    info!("Reading plan from {}", args.data_file.display());
    let router = server::router(Store::new(args.data_file));

    let listener = TcpListener::bind(args.address).await?;
    info!("Listening at http://{}", args.address);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
}
