/*!
 * fsinfo - Long Listing Entry Point
 *
 * Prints one line per path in `ls -l` form, built from the path's native
 * status. Configuration comes from the environment:
 * - FSINFO_FORMAT: `long` (default) or `json`
 * - FSINFO_TRACE_JSON / RUST_LOG: log output, see `init_tracing`
 */

use std::error::Error;
use std::path::Path;

use tracing::{debug, warn};

use fsinfo::{init_tracing, monitoring::span_path, FileInfoRecord, NativeAttributes};

const FORMAT_ENV: &str = "FSINFO_FORMAT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Long,
    Json,
}

impl OutputFormat {
    fn from_env() -> Self {
        match std::env::var(FORMAT_ENV).as_deref() {
            Ok("json") => OutputFormat::Json,
            Ok("long") | Err(_) => OutputFormat::Long,
            Ok(other) => {
                warn!(format = %other, "Unknown output format, using long listing");
                OutputFormat::Long
            }
        }
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Build a record from the path's native status, without following symlinks
#[cfg(any(target_os = "linux", target_os = "macos"))]
fn inspect(path: &Path) -> Result<FileInfoRecord, Box<dyn Error>> {
    let stat = nix::sys::stat::lstat(path)?;
    Ok(fsinfo::new_file_info(display_name(path), None, None, None, Some(stat)))
}

/// Build a record from portable metadata only
#[cfg(not(any(target_os = "linux", target_os = "macos")))]
fn inspect(path: &Path) -> Result<FileInfoRecord, Box<dyn Error>> {
    use fsinfo::{FileMode, FileType, Permissions};

    let md = std::fs::symlink_metadata(path)?;
    let ft = md.file_type();
    let file_type = if ft.is_dir() {
        FileType::Directory
    } else if ft.is_symlink() {
        FileType::Symlink
    } else {
        FileType::File
    };
    let perm = if md.permissions().readonly() {
        Permissions::readonly()
    } else {
        Permissions::readwrite()
    };
    let mode = FileMode::from_type(file_type).with_permissions(perm.mode);
    Ok(fsinfo::new_file_info(
        display_name(path),
        Some(mode),
        md.modified().ok(),
        Some(md.len()),
        None,
    ))
}

fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();

    let format = OutputFormat::from_env();
    let mut paths: Vec<String> = std::env::args().skip(1).collect();
    if paths.is_empty() {
        paths.push(".".to_string());
    }

    let mut failures = 0usize;
    for path in &paths {
        let _span = span_path(path).entered();
        match inspect(Path::new(path)) {
            Ok(info) => {
                let attrs = info.attributes();
                debug!(
                    ?info,
                    file_type = %attrs.file_type,
                    special = attrs.is_special(),
                    native_times = attrs.has_native_times(),
                    "Inspected path"
                );
                match format {
                    OutputFormat::Long => println!("{}", info),
                    OutputFormat::Json => println!("{}", serde_json::to_string(&attrs)?),
                }
            }
            Err(e) => {
                warn!(error = %e, "Could not read file status");
                failures += 1;
            }
        }
    }

    if failures > 0 {
        std::process::exit(1);
    }
    Ok(())
}
