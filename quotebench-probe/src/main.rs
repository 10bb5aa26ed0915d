use quotebench_probe::api::ApiClient;
use quotebench_probe::config::ProbeConfig;
use quotebench_probe::harness::{InvalidationProbe, ProbeError};
use tokio_util::sync::CancellationToken;
use tracing::{Level, info};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    // Load environment variables from .env file (if exists)
    match dotenvy::dotenv() {
        Ok(_) => info!("Loaded environment variables from .env file"),
        Err(_) => info!("No .env file found, using system environment variables"),
    }

    let config = ProbeConfig::from_env();
    info!("Probing {}", config.base_url);

    let api = ApiClient::new(config.base_url.clone());
    let mut probe = InvalidationProbe::new(api, config.poll.clone());

    // Ctrl+C aborts the poll loop through the cancellation token
    let cancel = CancellationToken::new();
    let canceller = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Received Ctrl+C, cancelling the poll loop");
            canceller.cancel();
        }
    });

    let result = probe.run(&cancel).await;

    println!("\nTimeline");
    print!("{}", probe.timeline());

    match result {
        Ok(report) => {
            println!(
                "\nUpdated content received after {:.2} seconds ({} polls).",
                report.elapsed.as_secs_f64(),
                report.attempts
            );
        }
        Err(e @ ProbeError::PollTimeout { .. }) => {
            eprintln!("\nCache test timed out: {e}");
            std::process::exit(2);
        }
        Err(e) => {
            eprintln!("\nCache test failed: {e}");
            std::process::exit(1);
        }
    }
}
