use stripe_webhook_probe::{ProbeConfig, Prober};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Fixed filter; the probe reads no environment.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("warn"))
        .with_writer(std::io::stderr)
        .init();

    match Prober::new(ProbeConfig::default()) {
        Ok(prober) => {
            let _ = prober.run().await;
        }
        Err(err) => {
            eprintln!("Request failed:");
            eprintln!("{}", err.message());
        }
    }
}
