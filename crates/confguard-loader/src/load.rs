//! Top-level load operations.

use std::fs;
use std::path::Path;

use confguard_types::ConfigMap;

use crate::error::{LoadError, LoadResult};
use crate::format::Format;
use crate::{ini, yaml};

/// Maximum document nesting depth.
///
/// Comparison recurses as deep as the loaded trees nest, so the depth cap
/// sits here at the trust boundary: a document nested deeper than this is
/// rejected, and everything downstream can recurse freely.
pub const MAX_DEPTH: usize = 64;

/// Parse a configuration document of a known format into a tree.
pub fn parse_str(input: &str, format: Format) -> LoadResult<ConfigMap> {
    match format {
        Format::Yaml => yaml::parse(input),
        Format::Ini => ini::parse(input),
    }
}

/// Load a configuration file, detecting the format from its extension.
///
/// Fails with [`LoadError::NotFound`] if the path is not an existing file
/// and [`LoadError::UnsupportedFormat`] if the extension is not
/// recognized. Parse failures surface as [`LoadError::MalformedDocument`].
pub fn load_path(path: &Path) -> LoadResult<ConfigMap> {
    if !path.is_file() {
        return Err(LoadError::NotFound(path.to_path_buf()));
    }
    let format = Format::from_path(path)
        .ok_or_else(|| LoadError::UnsupportedFormat(path.to_path_buf()))?;
    let input = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), %format, "loading configuration file");
    parse_str(&input, format)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_file(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn loads_yaml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "app.yaml", "server:\n  port: 8080\n");
        let map = load_path(&path).unwrap();
        assert!(map["server"].is_map());
    }

    #[test]
    fn loads_ini_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "app.ini", "[server]\nport = 8080\n");
        let map = load_path(&path).unwrap();
        assert!(map["server"].is_map());
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_path(&dir.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(err, LoadError::NotFound(_)));
    }

    #[test]
    fn unknown_extension_is_unsupported() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "app.toml", "x = 1\n");
        let err = load_path(&path).unwrap_err();
        assert!(matches!(err, LoadError::UnsupportedFormat(_)));
    }

    #[test]
    fn malformed_yaml_surfaces_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "bad.yml", "a: [unclosed\n");
        let err = load_path(&path).unwrap_err();
        assert!(matches!(err, LoadError::MalformedDocument { .. }));
    }

    #[test]
    fn parse_str_dispatches_on_format() {
        let yaml = parse_str("a:\n  b: 1\n", Format::Yaml).unwrap();
        assert!(yaml["a"].is_map());
        let ini = parse_str("[a]\nb = 1\n", Format::Ini).unwrap();
        assert!(ini["a"].is_map());
    }
}
