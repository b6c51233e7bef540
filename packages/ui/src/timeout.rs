//! Time limit for calls that leave the browser.

use std::future::Future;
use std::time::Duration;

use futures::future::{select, Either};

/// Default limit for any call into the OAuth provider client.
pub const EXTERNAL_CALL_TIMEOUT: Duration = Duration::from_secs(15);

/// Run `fut`, giving up after `limit`. `Err` carries the limit that elapsed.
pub async fn with_timeout<F: Future>(limit: Duration, fut: F) -> Result<F::Output, Duration> {
    let fut = std::pin::pin!(fut);
    let timer = std::pin::pin!(sleep(limit));

    match select(fut, timer).await {
        Either::Left((output, _)) => Ok(output),
        Either::Right(_) => Err(limit),
    }
}

async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ready_future_wins() {
        assert_eq!(with_timeout(Duration::from_secs(5), async { 7 }).await, Ok(7));
    }

    #[tokio::test]
    async fn test_pending_future_times_out() {
        let limit = Duration::from_millis(10);
        let result = with_timeout(limit, futures::future::pending::<()>()).await;
        assert_eq!(result, Err(limit));
    }
}
