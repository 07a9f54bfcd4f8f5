use anyhow::{Context, Result};
use clap::Parser;

use config::Cli;
use datamodel::Library;
use server::{GRAPHQL_PATH, build_schema, make_app};

mod config;
mod datamodel;
mod error;
mod logging;
mod server;

#[cfg(test)]
mod client;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let library = Library::seeded();

    if cli.print_schema {
        println!("{}", build_schema(library).sdl());
        return Ok(());
    }

    let app = make_app(library);

    let addr = cli.listen_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to listen on {addr}"))?;
    tracing::info!("GraphQL endpoint running on http://{addr}{GRAPHQL_PATH}");

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
