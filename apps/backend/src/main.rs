use euchre_backend::config::ServerConfig;
use euchre_backend::net;

mod telemetry;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    println!("🚀 Starting Euchre table on {}", config.addr());
    if config.seed.is_some() {
        println!("🎲 Fixed shuffle seed in use");
    }

    if let Err(e) = net::run(config).await {
        eprintln!("❌ Server stopped: {e}");
        std::process::exit(1);
    }
    Ok(())
}
