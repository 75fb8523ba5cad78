use anyhow::Context;

use carhealth_core::TimestampFormat;
use carhealth_server::ServerConfig;

pub fn run(config: ServerConfig, history: usize, format: TimestampFormat) -> anyhow::Result<()> {
    let monitor = super::make_monitor(history, format)?;

    let base = format!("http://{}:{}", config.host, config.port);

    println!("Car Health Monitoring API v{}", carhealth_core::VERSION);
    println!("   {base}");
    println!();
    println!("   Endpoints:");
    println!("     GET /              API banner");
    println!("     GET /car/status    New simulated reading (recorded in history)");
    println!("     GET /car/history   Last {history} readings, oldest first");
    println!("     GET /health        Liveness and history fill");
    println!();
    println!("   Settings:");
    println!("     timestamps         {format} (UTC)");
    println!(
        "     status errors      {}",
        if config.strict_errors {
            "500 + {\"error\": ...}"
        } else {
            "200 + {\"error\": ...}"
        }
    );
    println!(
        "     CORS               {}",
        if config.cors_credentials {
            "mirror origin, credentials allowed"
        } else {
            "any origin (*)"
        }
    );
    println!();
    println!("   Examples:");
    println!("     curl {base}/car/status");
    println!("     curl {base}/car/history");
    println!();

    log::info!(
        "starting server on {} (history={history}, timestamps={format})",
        config.bind_addr()
    );

    let rt = tokio::runtime::Runtime::new().context("failed to start tokio runtime")?;
    rt.block_on(carhealth_server::run_server(monitor, &config))
        .with_context(|| format!("server on {} failed", config.bind_addr()))
}
