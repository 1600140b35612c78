use clap::Parser;
use tracing::info;

#[tokio::main]
async fn main() {
    let args = roster::config::StartArgs::parse();
    roster::app::state::init_tracing(&args.log());

    let state = match roster::app::state::AppState::new(&args).await {
        Ok(state) => state,
        Err(e) => {
            e.print();
            std::process::exit(1);
        }
    };

    let addr = args.address();
    let origins = args.allowed_origins();

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("error while starting TCP listener");

    let router = roster::app::server::router::router(state, args.public_path(), origins);

    info!("Listening on {addr}");

    axum::serve(listener, router)
        .await
        .expect("error while starting server");
}
