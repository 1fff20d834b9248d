use tokio::net::TcpListener;

/// Serves the mock dispatch API on `127.0.0.1:$PORT` (default 3000).
#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(3000);
    let listener = TcpListener::bind(("127.0.0.1", port)).await?;
    println!("mock dispatch API listening on {}", listener.local_addr()?);
    mock_server::run(listener).await
}
