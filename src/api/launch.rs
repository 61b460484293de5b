use std::env;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::core::{Catalog, TimestampSource};
use crate::error::{TimelineError, TimelineResult};

use super::TimelineConfig;
use super::label_format::{TimeLabelPolicy, format_timestamp};

/// Environment variable naming an optional JSON config file.
pub const CONFIG_ENV_VAR: &str = "PHOTO_TIMELINE_CONFIG";

const DEFAULT_PROGRAM_NAME: &str = "photo-timeline";

#[must_use]
pub fn usage(program: &str) -> String {
    format!("usage: {program} <directory>")
}

/// Validates the command line (program name first) and returns the directory.
///
/// Exactly one argument naming an existing directory is accepted.
pub fn parse_args<I>(args: I) -> TimelineResult<PathBuf>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let program = args
        .next()
        .unwrap_or_else(|| DEFAULT_PROGRAM_NAME.to_owned());
    let rest: Vec<String> = args.collect();

    let [directory] = rest.as_slice() else {
        return Err(TimelineError::Usage(usage(&program)));
    };

    let directory = PathBuf::from(directory);
    if !directory.exists() {
        return Err(TimelineError::Usage(format!(
            "`{}` does not exist\n{}",
            directory.display(),
            usage(&program)
        )));
    }
    if !directory.is_dir() {
        return Err(TimelineError::Usage(format!(
            "`{}` is not a directory\n{}",
            directory.display(),
            usage(&program)
        )));
    }

    Ok(directory)
}

/// Loads the config named by [`CONFIG_ENV_VAR`], or defaults when unset.
pub fn load_config_from_env() -> TimelineResult<TimelineConfig> {
    match env::var_os(CONFIG_ENV_VAR) {
        Some(path) if !path.is_empty() => TimelineConfig::from_json_file(Path::new(&path)),
        _ => Ok(TimelineConfig::default()),
    }
}

/// Scans `directory`, reports every skipped file and entry, and rejects an empty result.
pub fn load_catalog(
    directory: &Path,
    source: &impl TimestampSource,
    policy: TimeLabelPolicy,
) -> TimelineResult<Catalog> {
    let build = Catalog::build(directory, source)?;

    for skipped in &build.skipped {
        warn!(
            path = %skipped.path.display(),
            reason = %skipped.reason,
            "skipping file without capture timestamp"
        );
    }

    if build.catalog.is_empty() {
        return Err(TimelineError::EmptyCatalog {
            directory: directory.to_path_buf(),
        });
    }

    for entry in build.catalog.iter() {
        info!(
            name = %entry.name,
            time = %format_timestamp(entry.timestamp, policy),
            "catalog entry"
        );
    }

    Ok(build.catalog)
}
