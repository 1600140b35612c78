use clap::Parser;

#[tokio::main]
async fn main() {
    let args = roster::cli::CliArgs::parse();
    roster::app::state::init_tracing(&args.start.log());

    if let Err(e) = roster::cli::run(args).await {
        e.print();
        std::process::exit(1);
    }
}
