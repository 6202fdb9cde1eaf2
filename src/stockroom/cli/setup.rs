use clap::Parser;
use std::path::PathBuf;

/// Returns the version string, including git hash for non-release builds.
/// Format: "0.3.1" for releases, "0.3.1@abc1234" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "stockroom", bin_name = "stockroom", version = get_version())]
#[command(about = "Terminal inventory manager for a CSV product catalog", long_about = None)]
pub struct Cli {
    /// Catalog file (defaults to the configured file, then db_products.csv)
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Directory holding config.json
    #[arg(long, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Verbose logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}
