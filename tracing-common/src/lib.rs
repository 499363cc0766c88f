use color_eyre::{eyre::Context, Result};
use tracing_subscriber::{prelude::*, EnvFilter, Registry};
use tracing_tree::HierarchicalLayer;

fn default_directives(service: &str) -> String {
    format!("warn,{service}=info,posts=info")
}

/// Installs the global subscriber for `service`.
///
/// `RUST_LOG` overrides the default filter. Output goes to stderr so it
/// never mixes with what a command prints.
pub fn setup_tracing(service: &str) -> Result<()> {
    let rust_log = std::env::var("RUST_LOG").unwrap_or_else(|_| default_directives(service));

    let env_filter = EnvFilter::builder()
        .parse(&rust_log)
        .wrap_err_with(|| format!("Couldn't create env filter from {rust_log}"))?;

    let heirarchical = HierarchicalLayer::default()
        .with_writer(std::io::stderr)
        .with_indent_lines(true)
        .with_indent_amount(2)
        .with_thread_names(true)
        .with_thread_ids(true)
        .with_verbose_exit(true)
        .with_verbose_entry(true)
        .with_targets(true);

    Registry::default()
        .with(heirarchical)
        .with(env_filter)
        .try_init()
        .wrap_err("Tracing was already initialized")?;

    tracing::debug!(filter = %rust_log, "Tracing initialized");

    Ok(())
}
