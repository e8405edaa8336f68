use anyhow::Context;
use clap::{Parser, ValueEnum};
use quakemap::{
    AccessToken, FeedKind, HttpFeedSource, LeafletDocument, MapComposer, QuakeMapConfig,
    SceneRecorder,
};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Self-contained Leaflet page
    Html,
    /// Recorded scene as JSON
    Json,
}

/// Fetches a USGS earthquake feed and writes an interactive map page
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Summary feed to plot, e.g. `1.0_day`, `4.5_week`, `significant_month`
    #[arg(long)]
    feed: Option<FeedKind>,

    /// Explicit feed URL; overrides `--feed`
    #[arg(long)]
    feed_url: Option<String>,

    /// JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, short, default_value = "index.html")]
    output: PathBuf,

    #[arg(long, value_enum, default_value_t = OutputFormat::Html)]
    format: OutputFormat,

    /// Tile provider token; read from the environment when omitted
    #[arg(long)]
    access_token: Option<String>,

    /// Feed request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,
}

impl Args {
    fn load_config(&self) -> anyhow::Result<QuakeMapConfig> {
        let mut config = match &self.config {
            Some(path) => QuakeMapConfig::from_json_file(path)
                .with_context(|| format!("loading config from {}", path.display()))?,
            None => QuakeMapConfig::default(),
        };
        if let Some(kind) = self.feed {
            config.feed.kind = kind;
            config.feed.url = None;
        }
        if let Some(url) = &self.feed_url {
            config.feed.url = Some(url.clone());
        }
        if let Some(timeout) = self.timeout {
            config.feed.timeout_secs = Some(timeout);
        }
        Ok(config)
    }

    fn access_token(&self) -> quakemap::Result<AccessToken> {
        self.access_token_with(|name| std::env::var(name).ok())
    }

    /// The flag wins; otherwise `lookup` is asked for each known variable
    fn access_token_with<F>(&self, lookup: F) -> quakemap::Result<AccessToken>
    where
        F: Fn(&str) -> Option<String>,
    {
        match &self.access_token {
            Some(token) => AccessToken::new(token.clone()),
            None => AccessToken::from_lookup(lookup),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = args.load_config()?;
    let token = args.access_token()?;
    let title = config.view.title.clone();

    let source = HttpFeedSource::from_config(&config.feed)?;
    let composer = MapComposer::new(source, token, config);
    let mut recorder = SceneRecorder::new();

    if let Err(e) = composer.render(&mut recorder).await {
        log::error!("Failed to build the map: {}", e);
        if args.format == OutputFormat::Html {
            let page = LeafletDocument::error_page(&title, &e.to_string())?;
            tokio::fs::write(&args.output, page)
                .await
                .with_context(|| format!("writing error page to {}", args.output.display()))?;
        }
        return Err(e.into());
    }

    let scene = recorder.into_scene();
    let body = match args.format {
        OutputFormat::Html => LeafletDocument::new(title, scene).to_html()?,
        OutputFormat::Json => scene.to_json_pretty()?,
    };
    tokio::fs::write(&args.output, body)
        .await
        .with_context(|| format!("writing {}", args.output.display()))?;
    log::info!("Wrote {}", args.output.display());

    Ok(())
}
