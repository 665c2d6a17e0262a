use std::env;
use std::net::SocketAddr;

use dotenvy::dotenv;

use activities_api::directory::{seed_activities, ActivityDirectory};
use activities_api::web;

#[tokio::main]
async fn main() {
    dotenv().ok();

    // 1. Start logging
    tracing_subscriber::fmt::init();

    // 2. Seed the in-memory activity directory (reset on every restart)
    let directory = ActivityDirectory::new(seed_activities());

    // 3. Build the application
    let static_dir = env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string());
    let app = web::app(directory, &static_dir);

    // 4. Start the server (with fallback port)
    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(3000);
    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .expect("Cannot parse host/port");

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!(
                "⚠️  Could not bind {}: {}. Trying fallback {}:{}",
                addr,
                e,
                host,
                port + 1
            );
            let fallback: SocketAddr = format!("{}:{}", host, port + 1)
                .parse()
                .expect("Cannot parse fallback address");
            tokio::net::TcpListener::bind(fallback)
                .await
                .expect("Cannot bind fallback port")
        }
    };

    let bound_addr = listener.local_addr().unwrap();
    println!("🚀 Server running at http://{}", bound_addr);
    println!(
        "📍 Open http://{}/static/index.html to manage signups",
        bound_addr
    );

    axum::serve(listener, app).await.unwrap();
}
