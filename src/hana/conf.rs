//! Configuration Template Patching
//!
//! Installer configuration templates are line-oriented `key=value` text. Only
//! lines whose key is named in the substitutions are rewritten; everything
//! else, including comments and line endings, is copied byte for byte.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{HanaError, Result};

/// Key/value separator used by installer templates
const SEPARATOR: char = '=';

/// Rewrite the values of the named keys in `path` in place
///
/// Substitution names that do not occur in the file are ignored. Returns `path`.
pub fn update_conf_file<P, I, K, V>(path: P, substitutions: I) -> Result<P>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let substitutions: HashMap<String, String> =
        substitutions.into_iter().map(|(k, v)| (k.into(), v.into())).collect();

    let file = path.as_ref();
    let contents = fs::read_to_string(file).map_err(|e| HanaError::conf_file(file, e))?;
    let patched = patch_lines(&contents, &substitutions);
    fs::write(file, patched).map_err(|e| HanaError::conf_file(file, e))?;

    debug!(path = %file.display(), keys = substitutions.len(), "Updated configuration file");
    Ok(path)
}

fn patch_lines(contents: &str, substitutions: &HashMap<String, String>) -> String {
    let mut patched = String::with_capacity(contents.len());
    for line in contents.split_inclusive('\n') {
        patched.push_str(&patch_line(line, substitutions));
    }
    patched
}

fn patch_line(line: &str, substitutions: &HashMap<String, String>) -> String {
    let Some(split) = line.find(SEPARATOR) else {
        return line.to_string();
    };

    let key = line[..split].trim();
    match substitutions.get(key) {
        Some(value) => {
            let body = line.trim_end_matches(&['\r', '\n'][..]);
            let ending = &line[body.len()..];
            format!("{}{value}{ending}", &line[..=split])
        }
        None => line.to_string(),
    }
}
