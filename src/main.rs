mod cli;
mod settings;

use std::sync::Arc;

use anyhow::{Context, Result, bail};
use tracing::{debug, info};

use cli::{CliArgs, OutputFormat, parse_cli, print_json, print_plain};
use filepeek::{SharedContainer, extension, io, logging, renderers, viewer};
use settings::ResolvedConfig;

fn main() -> Result<()> {
    logging::init();
    let cli = parse_cli();
    let resolved = settings::load(&cli)?;

    if cli.print_config {
        resolved.print_summary();
    }

    let locale = resolved
        .locale
        .clone()
        .or_else(sys_locale::get_locale)
        .unwrap_or_else(|| "en".to_string());
    rust_i18n::set_locale(&locale);

    run_preview(&cli, &resolved)
}

/// Read the file, dispatch the matching renderer, and emit the result in the
/// chosen format.
fn run_preview(cli: &CliArgs, settings: &ResolvedConfig) -> Result<()> {
    let file_name = cli
        .file
        .file_name()
        .and_then(|name| name.to_str())
        .map(str::to_owned)
        .with_context(|| format!("cannot derive a file name from {}", cli.file.display()))?;

    let type_key = cli
        .type_override
        .clone()
        .unwrap_or_else(|| extension::extension_of(&file_name).to_string());

    let size = std::fs::metadata(&cli.file)
        .with_context(|| format!("cannot access {}", cli.file.display()))?
        .len();
    if size > settings.max_preview_size {
        bail!(
            "{} is {size} bytes, above the preview limit of {} bytes",
            cli.file.display(),
            settings.max_preview_size
        );
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    let registry = renderers::registry(
        &settings.extra_text_extensions,
        Some(Arc::new(|| debug!("presentation layout changed"))),
    );
    let recognized = registry.contains(&type_key);
    let target = SharedContainer::new();

    let mut handle = runtime.block_on(async {
        let buffer = io::read_buffer(&cli.file).await?;
        let handle = registry.render(&buffer, &type_key, &target).await?;
        Ok::<_, anyhow::Error>(handle)
    })?;

    target.set_title(file_name);
    info!(file = %cli.file.display(), type_key, recognized, "render complete");

    match cli.output {
        OutputFormat::Tui => viewer::run(&target)?,
        OutputFormat::Plain => print_plain(&target),
        OutputFormat::Json => print_json(&cli.file, &type_key, recognized, &target)?,
    }

    handle.dispose();
    Ok(())
}
