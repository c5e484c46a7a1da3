//! Output file policy: never clobber hand-written files, replace atomically.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::Command;

use regex_automata::Input;
use regex_automata::dfa::{Automaton, dense};

/// File name used when no output path is given.
pub const DEFAULT_OUTPUT: &str = "bencode_gen.rs";

/// A file containing a line matching this was written by a generator.
const AUTOGEN_PATTERN: &str = r"(?m)^// Code generated .* DO NOT EDIT\.$";

#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error(
        "{} does not seem to be auto-generated; not overwriting it. Use --force to override this.",
        .0.display()
    )]
    NotGenerated(PathBuf),

    #[error("could not read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("could not create output file in {}: {source}", dir.display())]
    Create { dir: PathBuf, source: io::Error },

    #[error("failed to write output: {0}")]
    Write(#[source] io::Error),

    #[error("failed to run rustfmt: {0}")]
    Format(#[source] io::Error),

    #[error("failed to replace {}: {source}", path.display())]
    Persist { path: PathBuf, source: io::Error },

    #[error("invalid generated-file pattern: {0}")]
    Pattern(String),
}

/// `bencode_gen.rs` in the schema's directory; the working directory for stdin.
pub fn default_output_path(schema_path: &Path) -> PathBuf {
    if schema_path.as_os_str() == "-" {
        return PathBuf::from(DEFAULT_OUTPUT);
    }
    schema_path
        .parent()
        .unwrap_or_else(|| Path::new(""))
        .join(DEFAULT_OUTPUT)
}

pub fn is_autogenerated(contents: &str) -> Result<bool, OutputError> {
    let dfa = dense::DFA::new(AUTOGEN_PATTERN).map_err(|e| OutputError::Pattern(e.to_string()))?;
    let found = dfa
        .try_search_fwd(&Input::new(contents))
        .map_err(|e| OutputError::Pattern(e.to_string()))?;
    Ok(found.is_some())
}

/// Fails if `path` exists and was not generated, unless `force` is set.
pub fn check_overwrite(path: &Path, force: bool) -> Result<(), OutputError> {
    if force {
        return Ok(());
    }
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(source) => {
            return Err(OutputError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    if is_autogenerated(&contents)? {
        Ok(())
    } else {
        Err(OutputError::NotGenerated(path.to_path_buf()))
    }
}

/// Write `contents` to a temporary file next to `path`, optionally run
/// rustfmt on it, then rename it over `path`.
pub fn write_output(path: &Path, contents: &str, format: bool) -> Result<(), OutputError> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let mut builder = tempfile::Builder::new();
    builder.prefix(".bencode_gen.").suffix(".rs");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o644));
    }
    let mut file = builder
        .tempfile_in(dir)
        .map_err(|source| OutputError::Create {
            dir: dir.to_path_buf(),
            source,
        })?;
    log::debug!("temporary output file is {}", file.path().display());

    file.write_all(contents.as_bytes())
        .and_then(|()| file.flush())
        .map_err(OutputError::Write)?;

    if format {
        run_rustfmt(file.path())?;
    }

    file.persist(path).map_err(|err| OutputError::Persist {
        path: path.to_path_buf(),
        source: err.error,
    })?;
    Ok(())
}

/// A formatter that runs but fails leaves the file unformatted.
fn run_rustfmt(path: &Path) -> Result<(), OutputError> {
    log::debug!("running rustfmt on {}", path.display());
    let status = Command::new("rustfmt")
        .arg("--edition")
        .arg("2024")
        .arg(path)
        .status()
        .map_err(OutputError::Format)?;
    if !status.success() {
        log::warn!("rustfmt exited with {status}; output left unformatted");
    }
    Ok(())
}
