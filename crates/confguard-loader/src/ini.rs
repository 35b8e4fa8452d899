//! INI parsing into the configuration tree model.
//!
//! INI has exactly one level of nesting, so a document flattens into a map
//! of section names to `{key -> string}` maps. All values are string
//! scalars by convention; nothing is coerced. Keys are lowercased, section
//! names keep their case.

use confguard_types::{ConfigMap, ConfigValue};

use crate::error::{LoadError, LoadResult};
use crate::format::Format;

/// Parse an INI document into a [`ConfigMap`] of section maps.
pub(crate) fn parse(input: &str) -> LoadResult<ConfigMap> {
    let mut root = ConfigMap::new();
    let mut current: Option<(String, ConfigMap)> = None;

    for (index, raw) in input.lines().enumerate() {
        let lineno = index + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
            continue;
        }

        if line.starts_with('[') {
            let name = line
                .strip_prefix('[')
                .and_then(|rest| rest.strip_suffix(']'))
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .ok_or_else(|| malformed(lineno, "invalid section header"))?;
            if root.contains_key(name) || current.as_ref().is_some_and(|(n, _)| n == name) {
                return Err(malformed(lineno, format!("duplicate section [{name}]")));
            }
            flush(&mut root, current.take());
            current = Some((name.to_string(), ConfigMap::new()));
            continue;
        }

        let sep = line
            .find(['=', ':'])
            .ok_or_else(|| malformed(lineno, "expected `key = value`"))?;
        let key = line[..sep].trim().to_ascii_lowercase();
        if key.is_empty() {
            return Err(malformed(lineno, "empty key"));
        }
        let value = line[sep + 1..].trim().to_string();

        let Some((_, section)) = current.as_mut() else {
            return Err(malformed(lineno, "key before any section header"));
        };
        if section.contains_key(&key) {
            return Err(malformed(lineno, format!("duplicate key `{key}`")));
        }
        section.insert(key, ConfigValue::from(value));
    }

    flush(&mut root, current.take());
    Ok(root)
}

fn flush(root: &mut ConfigMap, section: Option<(String, ConfigMap)>) {
    if let Some((name, entries)) = section {
        root.insert(name, ConfigValue::Map(entries));
    }
}

fn malformed(lineno: usize, reason: impl std::fmt::Display) -> LoadError {
    LoadError::malformed(Format::Ini, format!("line {lineno}: {reason}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_flatten_to_map_of_maps() {
        let map = parse(
            "[database]\nhost = localhost\nport = 3306\n\n[cache]\nbackend = redis\n",
        )
        .unwrap();
        let db = map["database"].as_map().unwrap();
        assert_eq!(db["host"], ConfigValue::from("localhost"));
        // INI values are always strings; 3306 stays "3306".
        assert_eq!(db["port"], ConfigValue::from("3306"));
        let cache = map["cache"].as_map().unwrap();
        assert_eq!(cache["backend"], ConfigValue::from("redis"));
    }

    #[test]
    fn colon_separator_accepted() {
        let map = parse("[s]\nkey: value\n").unwrap();
        assert_eq!(map["s"].as_map().unwrap()["key"], ConfigValue::from("value"));
    }

    #[test]
    fn keys_lowercased_sections_keep_case() {
        let map = parse("[Database]\nHost = x\n").unwrap();
        let db = map["Database"].as_map().unwrap();
        assert!(db.contains_key("host"));
        assert!(!db.contains_key("Host"));
    }

    #[test]
    fn comments_and_blank_lines_ignored() {
        let map = parse("; leading comment\n\n[s]\n# another\nk = v\n").unwrap();
        assert_eq!(map["s"].as_map().unwrap()["k"], ConfigValue::from("v"));
    }

    #[test]
    fn empty_document_is_empty_map() {
        assert!(parse("").unwrap().is_empty());
    }

    #[test]
    fn value_may_contain_separator() {
        let map = parse("[s]\nurl = http://example.com:8080/path?a=b\n").unwrap();
        assert_eq!(
            map["s"].as_map().unwrap()["url"],
            ConfigValue::from("http://example.com:8080/path?a=b")
        );
    }

    #[test]
    fn key_before_section_rejected() {
        let err = parse("k = v\n").unwrap_err();
        assert!(matches!(err, LoadError::MalformedDocument { .. }));
        assert!(err.to_string().contains("line 1"));
    }

    #[test]
    fn unterminated_section_rejected() {
        let err = parse("[broken\n").unwrap_err();
        assert!(matches!(err, LoadError::MalformedDocument { .. }));
    }

    #[test]
    fn duplicate_section_rejected() {
        let err = parse("[s]\na = 1\n[s]\nb = 2\n").unwrap_err();
        assert!(err.to_string().contains("duplicate section"));
    }

    #[test]
    fn duplicate_key_rejected() {
        let err = parse("[s]\na = 1\na = 2\n").unwrap_err();
        assert!(err.to_string().contains("duplicate key"));
    }

    #[test]
    fn bare_word_line_rejected() {
        let err = parse("[s]\nnot-a-pair\n").unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }
}
