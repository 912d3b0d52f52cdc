//! Configuration resolution: defaults, then config file, then CLI flags.

use std::path::Path;

use anyhow::{Context, Result};
use config::{Config, File};
use serde::Deserialize;

use filepeek::app_dirs;

use crate::cli::CliArgs;

/// Files larger than this are refused before reading.
const DEFAULT_MAX_PREVIEW_SIZE: u64 = 512 * 1024;

const CONFIG_FILE_NAME: &str = "filepeek.toml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct RawConfig {
    preview: PreviewSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct PreviewSection {
    extra_text_extensions: Vec<String>,
    max_preview_size: Option<u64>,
    locale: Option<String>,
}

/// Fully resolved runtime configuration.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Extensions appended to the text-viewer registration.
    pub extra_text_extensions: Vec<String>,
    /// Maximum file size accepted for preview, in bytes.
    pub max_preview_size: u64,
    /// Locale override for user-facing messages.
    pub locale: Option<String>,
}

impl ResolvedConfig {
    /// Print a human-readable summary of the resolved values.
    pub fn print_summary(&self) {
        println!("max preview size: {} bytes", self.max_preview_size);
        println!(
            "extra text extensions: {}",
            if self.extra_text_extensions.is_empty() {
                "(none)".to_string()
            } else {
                self.extra_text_extensions.join(", ")
            }
        );
        println!(
            "locale: {}",
            self.locale.as_deref().unwrap_or("(system default)")
        );
    }
}

/// Resolve configuration from the config file and CLI flags.
///
/// CLI values win over file values; file values win over defaults.
pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
    let raw = load_raw(cli.config.as_deref())?;

    let mut extra_text_extensions = raw.preview.extra_text_extensions;
    extra_text_extensions.extend(cli.text_extensions.iter().cloned());

    Ok(ResolvedConfig {
        extra_text_extensions,
        max_preview_size: raw
            .preview
            .max_preview_size
            .unwrap_or(DEFAULT_MAX_PREVIEW_SIZE),
        locale: cli.locale.clone().or(raw.preview.locale),
    })
}

fn load_raw(override_path: Option<&Path>) -> Result<RawConfig> {
    let mut builder = Config::builder();

    if let Ok(dir) = app_dirs::get_config_dir() {
        builder = builder.add_source(File::from(dir.join(CONFIG_FILE_NAME)).required(false));
    }
    // An explicitly named config file must exist.
    if let Some(path) = override_path {
        builder = builder.add_source(File::from(path.to_path_buf()).required(true));
    }

    let config = builder.build().context("failed to load configuration")?;
    config
        .try_deserialize()
        .context("invalid configuration file")
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use clap::Parser;
    use tempfile::NamedTempFile;

    use super::*;

    fn args(argv: &[&str]) -> CliArgs {
        CliArgs::try_parse_from(argv).unwrap()
    }

    #[test]
    fn defaults_apply_without_any_sources() {
        let cli = args(&["filepeek", "notes.txt"]);
        let resolved = load(&cli).unwrap();
        assert_eq!(resolved.max_preview_size, DEFAULT_MAX_PREVIEW_SIZE);
        assert!(resolved.extra_text_extensions.is_empty());
        assert!(resolved.locale.is_none());
    }

    #[test]
    fn config_file_values_are_picked_up() {
        let mut file = NamedTempFile::with_suffix(".toml").unwrap();
        writeln!(
            file,
            "[preview]\nextra_text_extensions = [\"conf\"]\nmax_preview_size = 1024\nlocale = \"zh-CN\""
        )
        .unwrap();

        let path = file.path().to_str().unwrap().to_string();
        let cli = args(&["filepeek", "notes.txt", "--config", &path]);
        let resolved = load(&cli).unwrap();

        assert_eq!(resolved.extra_text_extensions, vec!["conf".to_string()]);
        assert_eq!(resolved.max_preview_size, 1024);
        assert_eq!(resolved.locale.as_deref(), Some("zh-CN"));
    }

    #[test]
    fn cli_flags_win_over_file_values() {
        let mut file = NamedTempFile::with_suffix(".toml").unwrap();
        writeln!(file, "[preview]\nlocale = \"zh-CN\"").unwrap();

        let path = file.path().to_str().unwrap().to_string();
        let cli = args(&[
            "filepeek",
            "notes.txt",
            "--config",
            &path,
            "--locale",
            "en",
            "--text-extension",
            "ini",
        ]);
        let resolved = load(&cli).unwrap();

        assert_eq!(resolved.locale.as_deref(), Some("en"));
        assert_eq!(resolved.extra_text_extensions, vec!["ini".to_string()]);
    }
}
