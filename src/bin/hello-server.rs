use clap::Parser;
use page_record::{ServerConfig, server};

#[derive(Parser, Debug)]
#[command(name = "hello-server")]
#[command(about = "Serves a static greeting on GET /")]
#[command(version)]
struct Args {
    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 3000)]
    port: u16,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();

    let args = Args::parse();
    server::serve(ServerConfig::new(args.port, "Hello World!")).await
}
