pub mod cli;
pub mod commands;
pub mod config;
pub mod datastore;
pub mod render;
pub mod terminal;

use std::ffi::OsString;
use std::io;

use anyhow::Context;
use tether_core::{TaskStore, ThemeStore};
use tracing::{debug, info};

#[tracing::instrument(skip_all)]
pub fn run(raw_args: Vec<OsString>) -> anyhow::Result<()> {
    let cli = cli::parse(raw_args);

    cli::init_tracing(cli.verbose, cli.quiet)?;

    info!(
        verbose = cli.verbose,
        quiet = cli.quiet,
        "starting tether CLI"
    );

    let mut cfg = config::Config::load(cli.tetherrc.as_deref())?;
    cfg.apply_overrides(
        cli.rc_overrides
            .into_iter()
            .map(|kv| (kv.key, kv.value)),
    );
    debug!(sources = ?cfg.sources, "configuration ready");

    let data_dir = config::resolve_data_dir(&cfg, cli.data.as_deref())
        .context("failed to resolve data directory")?;

    let storage = datastore::FileStorage::open(&data_dir)
        .with_context(|| format!("failed to open datastore at {}", data_dir.display()))?;

    let settings = cfg.link_settings()?;
    debug!(?settings, "link settings");

    let mut tasks = TaskStore::load(
        storage.clone(),
        terminal::TerminalPrompter::new(cli.yes),
        settings,
    )
    .context("failed to load tasks")?;
    let mut theme = ThemeStore::load(storage, terminal::TerminalPalette::default())
        .context("failed to load theme")?;

    let renderer = render::Renderer::new(&cfg)?;
    let command = cli.command.unwrap_or(cli::Command::List);

    commands::dispatch(
        &mut tasks,
        &mut theme,
        &renderer,
        &mut io::stdout().lock(),
        command,
    )?;

    info!("done");
    Ok(())
}
