//! Wraps a tree literal into the script loaded by the visualization front end.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::debug;

const USERDATA_PREFIX: &str = "function userdata() { fulltree = new midnode(\"";
const USERDATA_SUFFIX: &str = ";\"); }";

/// Wraps a tree literal (without `;`) into the `userdata` function.
///
/// # Example
/// ```
/// use gedwick::tree::writer::to_userdata;
///
/// assert_eq!(
///     to_userdata("(A:1,B:2)1:0"),
///     "function userdata() { fulltree = new midnode(\"(A:1,B:2)1:0;\"); }"
/// );
/// ```
pub fn to_userdata(tree: &str) -> String {
    let mut script = String::with_capacity(USERDATA_PREFIX.len() + tree.len() + USERDATA_SUFFIX.len());
    script.push_str(USERDATA_PREFIX);
    script.push_str(tree);
    script.push_str(USERDATA_SUFFIX);
    script
}

/// Extracts the tree literal (with `;`) from a userdata script,
/// `None` if the script is not shaped like [to_userdata] output.
pub fn extract_literal(script: &str) -> Option<&str> {
    let literal = script.trim().strip_prefix(USERDATA_PREFIX)?.strip_suffix("\"); }")?;
    Some(literal)
}

/// Writes `contents` to `path`, replacing any existing file and creating
/// missing parent directories.
///
/// # Arguments
/// * `path` - Target file
/// * `contents` - Full script, see [to_userdata]
///
/// # Returns
/// * `Ok(())` - File fully written and flushed
/// * `Err(io::Error)` - If a directory or the file could not be created or written
pub fn write_userdata_file<P: AsRef<Path>>(path: P, contents: &str) -> io::Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(contents.as_bytes())?;
    writer.flush()?;
    debug!(path = %path.display(), bytes = contents.len(), "Wrote userdata script");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_tree_still_wrapped() {
        assert_eq!(to_userdata(""), "function userdata() { fulltree = new midnode(\";\"); }");
    }

    #[test]
    fn test_extract_literal() {
        let script = to_userdata("(A:1,B:2)1:0");
        assert_eq!(extract_literal(&script), Some("(A:1,B:2)1:0;"));
        assert_eq!(extract_literal("var x = 1;"), None);
    }

    #[test]
    fn test_write_creates_directories_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("web").join("archdale.js");

        write_userdata_file(&path, "first").unwrap();
        write_userdata_file(&path, &to_userdata("A:1")).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, "function userdata() { fulltree = new midnode(\"A:1;\"); }");
    }
}
