use std::sync::Arc;

use anyhow::Context;
use omnikanji_config::Config;
use omnikanji_core::{Aggregator, LinkIndexHandle, Transport};
use omnikanji_http::HttpClient;
use omnikanji_lang_japanese::{Jisho, KanjiDamage, load_link_index};

pub type JapaneseAggregator = Aggregator<Jisho, KanjiDamage>;

pub struct AppState {
    pub config: Config,
    pub transport: Arc<dyn Transport>,
    pub links: LinkIndexHandle,
    pub aggregator: JapaneseAggregator,
}

impl AppState {
    /// Build the HTTP client and the initial link index
    pub async fn load(config: Config) -> anyhow::Result<Self> {
        let client = HttpClient::new(config.http_timeout())
            .context("failed to build HTTP client")?;
        let transport: Arc<dyn Transport> = Arc::new(client);

        let index = load_link_index(
            transport.as_ref(),
            &config.sources.kanjidmg_list_url,
            &config.sources.kanjidmg_base_url,
        )
        .await
        .context("failed to load KanjiDamage link index")?;

        Ok(Self::with_transport(config, transport, LinkIndexHandle::new(index)))
    }

    pub fn with_transport(
        config: Config,
        transport: Arc<dyn Transport>,
        links: LinkIndexHandle,
    ) -> Self {
        let aggregator = Aggregator::new(
            Jisho::new(&config.sources.jisho_search_url, transport.clone()),
            KanjiDamage::new(
                &config.sources.kanjidmg_base_url,
                links.clone(),
                transport.clone(),
            ),
        )
        .with_task_timeout(config.lookup.task_timeout());

        Self {
            config,
            transport,
            links,
            aggregator,
        }
    }
}
