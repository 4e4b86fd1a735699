use std::sync::Arc;

use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::query::run_queries;
use crate::refresh::refresh_links;
use crate::state::AppState;

/// Spawns the long-running tasks and cancels them on shutdown
pub struct AppController {
    state: Arc<AppState>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(state: Arc<AppState>) -> Self {
        Self {
            state,
            cancel_token: CancellationToken::new(),
        }
    }

    /// The lookup task finishes once its input is exhausted; the refresh
    /// task only stops when cancelled.
    pub fn spawn_tasks(&self, queries: Vec<String>, pretty: bool) -> JoinSet<anyhow::Result<()>> {
        let mut tasks = JoinSet::new();

        tasks.spawn(run_queries(
            self.state.clone(),
            queries,
            pretty,
            self.cancel_token.child_token(),
        ));

        match self.state.config.lookup.refresh_interval() {
            Some(every) => {
                tasks.spawn(refresh_links(
                    self.state.clone(),
                    every,
                    self.cancel_token.child_token(),
                ));
            }
            None => tracing::info!("Link index refresh disabled"),
        }

        tasks
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}
