use std::net::SocketAddr;

use f1_globe::{init_tracing, make_app, Config};
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    let config = Config::init();
    init_tracing(&config);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let app = make_app(&config);

    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(err) => {
            error!("Failed to bind {}: {}", addr, err);
            std::process::exit(1);
        }
    };
    info!("Server running at http://localhost:{}", addr.port());

    if let Err(err) = axum::serve(listener, app).await {
        error!("Server error: {}", err);
        std::process::exit(1);
    }
}
