use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;

#[derive(Parser)]
#[command(name = "jotter-server")]
struct Cli {
    /// Address to bind
    #[arg(long, env = "JOTTER_BIND", default_value = "0.0.0.0")]
    bind: String,

    /// Port to listen on
    #[arg(long, env = "JOTTER_PORT", default_value_t = 4720)]
    port: u16,

    /// Database file path (defaults to the XDG data dir)
    #[arg(long, env = "JOTTER_DB")]
    db: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let db = match &cli.db {
        Some(path) => jotter_db::Db::open(path)?,
        None => jotter_db::Db::open_default()?,
    };

    let addr = SocketAddr::new(cli.bind.parse()?, cli.port);
    let listener = TcpListener::bind(addr).await?;
    info!("jotter-server listening on http://{addr}");

    jotter_server::serve(listener, db).await
}
