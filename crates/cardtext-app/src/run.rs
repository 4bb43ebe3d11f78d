use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::Path;

use cardtext_core::config::{Settings, config_path_str, load_config};
use cardtext_core::types::Locale;
use cardtext_rfc::rfc::vcard::{Captions, parse_reader, write_contacts};

use crate::cli::Cli;
use crate::error::{AppError, AppResult};
use crate::logging::{FilterHandle, apply_level};

/// ## Summary
/// Resolves settings from the config sources and CLI overrides.
///
/// ## Errors
/// Returns an error if configuration cannot be loaded or the locale is unknown.
pub fn resolve_settings(cli: &Cli) -> AppResult<Settings> {
    let config_path = cli
        .config
        .as_deref()
        .map(config_path_str)
        .transpose()?;

    let mut settings = load_config(config_path)?;

    if let Some(level) = &cli.log_level {
        settings.logging.level.clone_from(level);
    }
    if let Some(locale) = &cli.locale {
        settings.render.locale = locale.parse::<Locale>()?;
    }

    Ok(settings)
}

fn open_input(path: &Path) -> AppResult<BufReader<File>> {
    match File::open(path) {
        Ok(file) => Ok(BufReader::new(file)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            Err(AppError::InputNotFound(path.to_path_buf()))
        }
        Err(source) => Err(AppError::InputError {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// ## Summary
/// Runs the tool for parsed command line arguments.
///
/// The output file is only created once every contact was read successfully.
///
/// ## Errors
/// Returns an error if configuration, reading, extraction or writing fails.
pub fn run(cli: &Cli, filter: Option<&FilterHandle>) -> AppResult<usize> {
    let settings = resolve_settings(cli)?;
    if let Some(handle) = filter {
        apply_level(handle, &settings.logging.level);
    }
    tracing::debug!(settings = ?settings, "Settings resolved");

    let captions = Captions::for_locale(settings.render.locale);
    let reader = open_input(&cli.input)?;
    let contacts = parse_reader(reader)?;

    match &cli.output {
        Some(path) => {
            let write = || -> io::Result<()> {
                let mut writer = BufWriter::new(File::create(path)?);
                write_contacts(&mut writer, &contacts, &captions)
            };
            write().map_err(|source| AppError::OutputError {
                path: path.clone(),
                source,
            })?;
            tracing::info!(
                count = contacts.len(),
                output = %path.display(),
                locale = %settings.render.locale,
                "Contacts written"
            );
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_contacts(&mut writer, &contacts, &captions).map_err(|source| {
                AppError::OutputError {
                    path: "<stdout>".into(),
                    source,
                }
            })?;
        }
    }

    Ok(contacts.len())
}
