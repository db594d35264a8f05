use crate::error::{Result, SequenceError};
use crate::utils::permutation::Permutation;
use log::{debug, info};
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::Builder;

/// Writes one decimal value per line, every line `\n`-terminated.
///
/// The text goes to a temporary file next to the target which then replaces
/// it. A symlink at `path` is written through, and an existing target keeps
/// its permissions. On failure the temporary file is removed and any previous
/// file at `path` is left as it was.
pub fn write_sequence<P: AsRef<Path>>(permutation: &Permutation, path: P) -> Result<()> {
    let path = path.as_ref();
    let fail = |err| SequenceError::write_failure(path, err);

    let target = resolve_target(path);
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let existing = fs::metadata(&target)
        .ok()
        .filter(|meta| meta.is_file())
        .map(|meta| meta.permissions());

    let mut staged = staging_builder().tempfile_in(dir).map_err(fail)?;
    if let Some(permissions) = existing {
        staged.as_file().set_permissions(permissions).map_err(fail)?;
    }
    debug!(
        "staging {} values in {}",
        permutation.len(),
        staged.path().display()
    );

    {
        let mut writer = BufWriter::new(staged.as_file_mut());
        write_lines(&mut writer, permutation).map_err(fail)?;
        writer.flush().map_err(fail)?;
    }

    staged.persist(&target).map_err(|err| fail(err.error))?;
    info!("wrote {} values to {}", permutation.len(), target.display());
    Ok(())
}

/// Follows a symlink at `path` to the file it names, dangling or not.
fn resolve_target(path: &Path) -> PathBuf {
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.file_type().is_symlink() => fs::canonicalize(path)
            .or_else(|_| {
                fs::read_link(path).map(|link| match path.parent() {
                    Some(parent) => parent.join(link),
                    None => link,
                })
            })
            .unwrap_or_else(|_| path.to_path_buf()),
        _ => path.to_path_buf(),
    }
}

// tempfile defaults to 0600; ask for 0666 so a fresh file ends up with the
// same umask-filtered mode `File::create` would give it.
#[cfg(unix)]
fn staging_builder<'a, 'b>() -> Builder<'a, 'b> {
    use std::os::unix::fs::PermissionsExt;

    let mut builder = Builder::new();
    builder.permissions(fs::Permissions::from_mode(0o666));
    builder
}

#[cfg(not(unix))]
fn staging_builder<'a, 'b>() -> Builder<'a, 'b> {
    Builder::new()
}

fn write_lines<W: Write>(writer: &mut W, permutation: &Permutation) -> std::io::Result<()> {
    for value in permutation {
        writeln!(writer, "{value}")?;
    }
    Ok(())
}

pub fn read_sequence<P: AsRef<Path>>(path: P) -> Result<Permutation> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| SequenceError::ReadFailure {
        path: path.to_path_buf(),
        source,
    })?;
    parse_sequence(&text)
}

/// Parses the on-disk format. Line numbers in errors are 1-based.
pub fn parse_sequence(text: &str) -> Result<Permutation> {
    let mut values = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let value = line
            .trim()
            .parse::<u32>()
            .map_err(|err| SequenceError::MalformedSequence {
                line: idx + 1,
                reason: format!("`{line}` is not a decimal value ({err})"),
            })?;
        values.push(value);
    }
    Permutation::from_values(values)
}
