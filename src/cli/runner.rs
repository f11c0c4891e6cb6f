//! CLI runner - executes commands

use crate::api::Pr0grammClient;
use crate::cli::commands::{Cli, Commands, FilterArgs, OutputFormat, PageDirection, StreamDirection};
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use futures::StreamExt;
use serde::Serialize;
use std::io::Write;
use std::time::Instant;
use tracing::{debug, info};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let client = Pr0grammClient::new(self.client_config()?)?;
        self.run_with(&client, &mut std::io::stdout().lock()).await
    }

    /// Run the CLI command against `client`, writing results to `out`
    pub async fn run_with<W: Write>(&self, client: &Pr0grammClient, out: &mut W) -> Result<()> {
        match &self.cli.command {
            Commands::Items {
                direction,
                id,
                filters,
            } => self.items(client, out, *direction, *id, filters).await,
            Commands::Stream {
                direction,
                id,
                limit,
                filters,
            } => {
                self.stream(client, out, *direction, *id, *limit, filters)
                    .await
            }
            Commands::Info { item_id } => self.info(client, out, *item_id).await,
            Commands::Whoami => self.whoami(client, out),
        }
    }

    /// Build the client configuration from `--config`, `--base-url` and `--cookie`
    pub fn client_config(&self) -> Result<ClientConfig> {
        let mut config = match &self.cli.config {
            Some(path) => {
                debug!("Loading client config from {}", path.display());
                ClientConfig::load(path)?
            }
            None => ClientConfig::default(),
        };

        if let Some(base_url) = &self.cli.base_url {
            config.base_url.clone_from(base_url);
        }
        if let Some(cookie) = &self.cli.cookie {
            config.cookies = Some(cookie.clone());
        }

        config.validate()?;
        Ok(config)
    }

    async fn items<W: Write>(
        &self,
        client: &Pr0grammClient,
        out: &mut W,
        direction: PageDirection,
        id: u64,
        filters: &FilterArgs,
    ) -> Result<()> {
        let query = filters.to_query();
        let page = client
            .items()
            .get_page(&query, direction.into(), id)
            .await?;

        info!(
            "Fetched {} items (atStart={}, atEnd={})",
            page.len(),
            page.at_start,
            page.at_end
        );
        self.emit(out, &page)
    }

    async fn stream<W: Write>(
        &self,
        client: &Pr0grammClient,
        out: &mut W,
        direction: StreamDirection,
        id: u64,
        limit: Option<usize>,
        filters: &FilterArgs,
    ) -> Result<()> {
        let query = filters.to_query();
        let items = client.items();
        let stream = match direction {
            StreamDirection::Newer => items.stream_newer(query, id),
            StreamDirection::Older => items.stream_older(query, id),
        };
        let mut stream = match limit {
            Some(n) => stream.take(n).boxed(),
            None => stream,
        };

        let start = Instant::now();
        let mut count = 0usize;
        while let Some(item) = stream.next().await {
            let item = item?;
            self.emit(out, &item)?;
            count += 1;
        }

        info!(
            "Streamed {} items in {:.2}s",
            count,
            start.elapsed().as_secs_f64()
        );
        Ok(())
    }

    async fn info<W: Write>(&self, client: &Pr0grammClient, out: &mut W, item_id: u64) -> Result<()> {
        let info = client.items().info(item_id).await?;
        self.emit(out, &info)
    }

    fn whoami<W: Write>(&self, client: &Pr0grammClient, out: &mut W) -> Result<()> {
        let session = client
            .session()
            .ok_or_else(|| Error::unauthenticated("no session cookie (use --cookie)"))?;
        self.emit(out, &session)
    }

    fn emit<W: Write, T: Serialize>(&self, out: &mut W, value: &T) -> Result<()> {
        let line = match self.cli.format {
            OutputFormat::Json => serde_json::to_string(value)?,
            OutputFormat::Pretty => serde_json::to_string_pretty(value)?,
        };
        writeln!(out, "{line}")?;
        Ok(())
    }
}
