use std::sync::Arc;

use anyhow::Context;
use omnikanji_core::types::AggregateResult;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_util::sync::CancellationToken;

use crate::state::AppState;

/// Look up every query and print one JSON document per result.
///
/// With no queries given, lines are read from stdin until EOF.
pub async fn run_queries(
    state: Arc<AppState>,
    queries: Vec<String>,
    pretty: bool,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    if !queries.is_empty() {
        for query in queries {
            if cancel.is_cancelled() {
                break;
            }
            let result = state.aggregator.lookup(&query).await;
            println!("{}", render(&result, pretty)?);
        }
        return Ok(());
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = tokio::select! {
            _ = cancel.cancelled() => break,
            line = lines.next_line() => line.context("failed to read stdin")?,
        };

        let Some(query) = line else {
            tracing::debug!("stdin closed");
            break;
        };
        if query.trim().is_empty() {
            continue;
        }

        let result = state.aggregator.lookup(&query).await;
        println!("{}", render(&result, pretty)?);
    }

    Ok(())
}

pub fn render(result: &AggregateResult, pretty: bool) -> anyhow::Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(result)
    } else {
        serde_json::to_string(result)
    };
    json.context("failed to serialize lookup result")
}
