use std::sync::Arc;
use std::time::Duration;

use omnikanji_lang_japanese::load_link_index;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

use crate::state::AppState;

/// Rebuild the link index every `every` until cancelled
pub async fn refresh_links(
    state: Arc<AppState>,
    every: Duration,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let mut interval = tokio::time::interval(every);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick fires at once and the index was just loaded
    interval.tick().await;

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::debug!("Link index refresh stopped");
                return Ok(());
            }
            _ = interval.tick() => {
                refresh_once(&state).await;
            }
        }
    }
}

/// Swap in a freshly built index; on failure the current one stays.
/// Returns whether the index was replaced.
pub async fn refresh_once(state: &AppState) -> bool {
    let sources = &state.config.sources;

    match load_link_index(
        state.transport.as_ref(),
        &sources.kanjidmg_list_url,
        &sources.kanjidmg_base_url,
    )
    .await
    {
        Ok(index) if index.is_empty() => {
            tracing::warn!("Refreshed link index is empty, keeping the current one");
            false
        }
        Ok(index) => {
            let size = index.len();
            let previous = state.links.replace(index);
            tracing::info!("Link index refreshed: {} -> {size} kanji", previous.len());
            true
        }
        Err(e) => {
            tracing::warn!("Link index refresh failed, keeping the current one: {e}");
            false
        }
    }
}
