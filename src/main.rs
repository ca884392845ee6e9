use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use sitegen::Config;

#[derive(Parser)]
#[command(name = "sitegen")]
#[command(version, about = "Build a static HTML site from Markdown content")]
struct Cli {
    /// URL prefix for root-relative links (overrides `site.basepath`)
    basepath: Option<String>,

    /// Config file
    #[arg(short, long, default_value = "sitegen.toml")]
    config: PathBuf,

    /// Log progress at info level
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    // --verbose enables INFO, otherwise RUST_LOG, falling back to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Config::load(&cli.config).with_basepath(cli.basepath);

    match sitegen::build_site(&config) {
        Ok(summary) => {
            println!(
                "Generated {} pages into {}",
                summary.pages_generated,
                config.paths.output_dir.display()
            );
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
