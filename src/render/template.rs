//! Template rendering.

use std::fs::OpenOptions;
use std::io::Write;
use std::os::unix::fs::OpenOptionsExt;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::params::registry::ConstraintRegistry;

/// Mode for a freshly created output file.
pub const OUTPUT_MODE: u32 = 0o644;

/// Errors reading the template or writing the rendered document.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to read template {}: {source}", path.display())]
    ReadTemplate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Replace every occurrence of `needle` in `haystack`.
///
/// `needle` must be non-empty; the registry guarantees this for tokens.
pub fn replace_all(haystack: &[u8], needle: &[u8], replacement: &[u8]) -> Vec<u8> {
    if needle.is_empty() || haystack.len() < needle.len() {
        return haystack.to_vec();
    }

    let mut out = Vec::with_capacity(haystack.len());
    let mut i = 0;
    while i < haystack.len() {
        if haystack[i..].starts_with(needle) {
            out.extend_from_slice(replacement);
            i += needle.len();
        } else {
            out.push(haystack[i]);
            i += 1;
        }
    }
    out
}

/// Substitute every registry token in `template` with its bound value.
pub fn substitute(registry: &ConstraintRegistry, template: &[u8]) -> Vec<u8> {
    registry.iter().fold(template.to_vec(), |doc, param| {
        replace_all(&doc, param.token().as_bytes(), param.value().as_bytes())
    })
}

/// Read `template_path`, substitute all tokens, and write to `output_path`.
///
/// The output is truncated if it exists and created with mode 0644 otherwise.
pub fn render(
    registry: &ConstraintRegistry,
    template_path: &Path,
    output_path: &Path,
) -> Result<(), RenderError> {
    let template = std::fs::read(template_path).map_err(|source| RenderError::ReadTemplate {
        path: template_path.to_path_buf(),
        source,
    })?;

    let rendered = substitute(registry, &template);

    let write_err = |source: std::io::Error| RenderError::WriteOutput {
        path: output_path.to_path_buf(),
        source,
    };
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(OUTPUT_MODE)
        .open(output_path)
        .map_err(write_err)?;
    file.write_all(&rendered).map_err(write_err)?;

    tracing::debug!(
        template = %template_path.display(),
        output = %output_path.display(),
        bytes = rendered.len(),
        "Template rendered"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::default_parameters;
    use crate::params::registry::RegistryBuilder;

    fn registry() -> ConstraintRegistry {
        let mut builder = RegistryBuilder::new(&default_parameters()).unwrap();
        builder.bind("replica-set-name", "rs0").unwrap();
        builder.bind("port", "27017").unwrap();
        builder.build()
    }

    #[test]
    fn test_replace_all_occurrences() {
        assert_eq!(replace_all(b"a PORT b PORT", b"PORT", b"1"), b"a 1 b 1");
        assert_eq!(replace_all(b"PORTPORT", b"PORT", b"x"), b"xx");
        assert_eq!(replace_all(b"nothing here", b"PORT", b"1"), b"nothing here");
        assert_eq!(replace_all(b"POR", b"PORT", b"1"), b"POR");
        assert_eq!(replace_all(b"", b"PORT", b"1"), b"");
    }

    #[test]
    fn test_replacement_is_not_rescanned() {
        assert_eq!(replace_all(b"AA", b"A", b"AA"), b"AAAA");
    }

    #[test]
    fn test_substitute_every_token() {
        let template =
            b"replication:\n  replSetName: REPLICA_SET_NAME\nnet:\n  port: PORT\n# PORT\n";
        let out = substitute(&registry(), template);
        assert_eq!(
            out,
            b"replication:\n  replSetName: rs0\nnet:\n  port: 27017\n# 27017\n".to_vec()
        );
    }

    #[test]
    fn test_absent_token_is_ignored() {
        let out = substitute(&registry(), b"storage:\n  dbPath: /data/db\n");
        assert_eq!(out, b"storage:\n  dbPath: /data/db\n".to_vec());
    }

    #[test]
    fn test_non_utf8_passes_through() {
        let out = substitute(&registry(), b"\xff\xfePORT\xff");
        assert_eq!(out, b"\xff\xfe27017\xff".to_vec());
    }
}
