mod render;
mod routes;
pub mod test_helpers;

use anyhow::Result;
use jotter_db::Db;
use tokio::net::TcpListener;

pub async fn serve(listener: TcpListener, db: Db) -> Result<()> {
    let app = routes::build_router(db);
    axum::serve(listener, app).await?;
    Ok(())
}
