use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use latest_versions::app;
use latest_versions::config::{
    Config, DEFAULT_API_URL, DEFAULT_CONCURRENCY, DEFAULT_PER_PAGE,
};
use latest_versions::logging;
use latest_versions::version::registries::GitHubRegistry;

#[derive(Parser)]
#[command(name = "latest-versions")]
#[command(
    version,
    about = "Print the newest stable release of every minor line of GitHub repositories"
)]
struct Cli {
    /// Input file: a header line, then `owner/repo,min_version` records
    input: PathBuf,

    /// GitHub token used to raise the API rate limit
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    github_token: Option<String>,

    /// GitHub API base URL
    #[arg(long, env = "LATEST_VERSIONS_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Releases requested per repository
    #[arg(long, default_value_t = DEFAULT_PER_PAGE, value_parser = clap::value_parser!(u32).range(1..=100))]
    per_page: u32,

    /// Repositories fetched at the same time
    #[arg(long, default_value_t = DEFAULT_CONCURRENCY)]
    concurrency: usize,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            input: cli.input,
            api_url: cli.api_url,
            github_token: cli.github_token,
            per_page: cli.per_page,
            concurrency: cli.concurrency,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _guard = logging::init(cli.log_file.as_deref(), cli.log_json)?;
    let config = Config::from(cli);

    let registry = GitHubRegistry::new(&config.api_url)?
        .with_per_page(config.per_page)
        .with_token(config.github_token.clone());

    let summary = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let mut out = std::io::stdout().lock();
            let summary = app::run(&config, &registry, &mut out).await?;
            out.flush()?;
            anyhow::Ok(summary)
        })?;

    info!(
        "Done: {} printed, {} skipped",
        summary.printed, summary.skipped
    );
    Ok(())
}
