mod catalog;
mod console;
mod recommend;

use std::io;
use std::path::PathBuf;

use anyhow::Context as _;
use tracing::info;
use tracing_subscriber::EnvFilter;

use console::Console;

fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| "product_picker=info".into());

    // Logs go to stderr so prompts on stdout stay clean.
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .compact()
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let products = match std::env::var_os("PRODUCT_CATALOG") {
        Some(path) => {
            let path = PathBuf::from(path);
            info!(path = %path.display(), "loading catalog from file");
            catalog::load_from_file(&path)
                .with_context(|| format!("loading catalog from {}", path.display()))?
        }
        None => {
            info!("using built-in demo catalog");
            catalog::default_catalog()
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());
    console.run(&products)?;

    Ok(())
}
