use actix_web::{web, HttpServer};
use anyhow::Result;
use clap::Parser;
use cli::Cli;
use dotenv::dotenv;
use env_logger::Env;
use log::{info, trace};
use vibemoney_service::Providers;
use vibemoney_web::{create_app, AppState, Settings};

mod cli;

fn preprocess(cli: &Cli) {
    dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or(cli.trace.as_filter())).init();
}

#[actix_web::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    preprocess(&cli);
    trace!("Command line input recorded: {cli:#?}");

    let mut settings = Settings::from_env()?;
    if let Some(host) = cli.host {
        settings.host = host;
    }
    if let Some(port) = cli.port {
        settings.port = port;
    }

    info!(
        "{} v{} listening on http://{}:{} (docs at {})",
        settings.app_name,
        settings.version,
        settings.host,
        settings.port,
        settings.docs_url()
    );

    let bind = (settings.host.clone(), settings.port);
    let state = web::Data::new(AppState::new(settings, Providers::stub()));

    // run server
    let mut server = HttpServer::new(move || create_app(state.clone()));
    if let Some(workers) = cli.workers {
        server = server.workers(workers);
    }
    server.bind(bind)?.run().await?;

    Ok(())
}
