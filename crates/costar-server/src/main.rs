//! costar server - six-degrees link queries over the actor/film graph.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use costar_core::{dataset, Catalog};
use costar_server::fetch::{download_if_missing, DATA_URL};
use costar_server::{build_router, AppState};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// costar server - a six-degrees link finder over actors and films
#[derive(Parser, Debug)]
#[command(name = "costar-server")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the compressed dataset; downloaded here when missing
    #[arg(short, long, default_value = "data/data.txt.bz2", env = "COSTAR_DATA")]
    data: PathBuf,

    /// Host address to bind to
    #[arg(long, default_value = "127.0.0.1", env = "COSTAR_HOST")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value = "8239", env = "COSTAR_PORT")]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    tracing::info!(data = %args.data.display(), "starting costar server");

    download_if_missing(&args.data, DATA_URL).await?;

    // Parsing ~half a million records and building the CSR graph takes a
    // while; keep it off the async workers.
    let data_path = args.data.clone();
    let catalog = tokio::task::spawn_blocking(move || -> anyhow::Result<Catalog> {
        let movies = dataset::load_movies(&data_path)?;
        Ok(Catalog::from_movies(movies)?)
    })
    .await??;
    tracing::info!(
        cast = catalog.cast_count(),
        movies = catalog.movie_count(),
        "catalog ready"
    );

    let state = Arc::new(AppState { catalog });
    let app = build_router(state);

    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("costar server listening on http://{addr}");
    axum::serve(listener, app).await?;

    Ok(())
}
