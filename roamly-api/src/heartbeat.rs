use std::time::Duration;

use tracing::info;

/// Stub scheduler slot. The site has no background jobs; this keeps a
/// periodic line in the logs so operators can see the process is alive.
pub async fn run(period_seconds: u64) {
    let mut ticker = tokio::time::interval(Duration::from_secs(period_seconds.max(1)));
    loop {
        ticker.tick().await;
        info!("scheduled tasks: nothing to run");
    }
}
