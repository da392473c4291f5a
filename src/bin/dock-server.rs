use clap::Parser;
use page_record::{ServerConfig, server};

#[derive(Parser, Debug)]
#[command(name = "dock-server")]
#[command(about = "Serves the dock banner on GET /")]
#[command(version)]
struct Args {
    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 5000)]
    port: u16,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();

    let args = Args::parse();
    server::serve(ServerConfig::new(args.port, "This is PORT 5000 running on dock.!")).await
}
