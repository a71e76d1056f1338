use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::debug;

/// Destination seam for the post-success navigation. The host environment
/// (router, shell, test double) decides what "navigate" means.
pub trait NavigationSink: Send + Sync {
    fn navigate(&self, path: &str);
}

/// Route shown after a successful upload.
pub const LISTINGS_ROUTE: &str = "/";

/// Handle for the scheduled post-success navigation. Cancelable, and
/// canceled automatically on drop so a torn-down session never fires a
/// stale redirect.
#[derive(Debug)]
pub struct RedirectTimer {
    handle: Option<JoinHandle<()>>,
}

impl RedirectTimer {
    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            debug!("post-success redirect canceled");
        }
    }

    /// Waits for the navigation to fire. Test hook; production callers keep
    /// the timer alive in session state instead.
    pub async fn wait(mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
    }
}

impl Drop for RedirectTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Schedules a navigation to `path` after `delay`. The sink is invoked at
/// most once, and never after the returned timer is canceled or dropped.
pub fn schedule<N>(sink: Arc<N>, delay: Duration, path: &'static str) -> RedirectTimer
where
    N: NavigationSink + 'static,
{
    let handle = tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        sink.navigate(path);
    });
    RedirectTimer {
        handle: Some(handle),
    }
}
