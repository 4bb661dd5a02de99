//! Hosts table registration.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors appending to the hosts table.
#[derive(Debug, Error)]
pub enum HostsError {
    #[error("failed to open hosts file {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to append to hosts file {}: {source}", path.display())]
    Append {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Format the record appended for `ip` and `fqdn`.
///
/// The leading newline covers a table whose last line is unterminated.
pub fn hosts_record(ip: &str, fqdn: &str) -> String {
    format!("\n{} {}\n", ip, fqdn)
}

/// Appends hostname records to a hosts table.
#[derive(Debug, Clone)]
pub struct HostsRegistrar {
    path: PathBuf,
    create_if_missing: bool,
}

impl HostsRegistrar {
    /// Registrar for an existing hosts file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            create_if_missing: false,
        }
    }

    /// Create the file on first append instead of failing.
    pub fn create_if_missing(mut self, create: bool) -> Self {
        self.create_if_missing = create;
        self
    }

    /// Append `ip fqdn` to the table. Never touches existing content.
    pub fn register(&self, ip: &str, fqdn: &str) -> Result<(), HostsError> {
        let mut file = OpenOptions::new()
            .append(true)
            .create(self.create_if_missing)
            .open(&self.path)
            .map_err(|source| HostsError::Open {
                path: self.path.clone(),
                source,
            })?;

        file.write_all(hosts_record(ip, fqdn).as_bytes())
            .map_err(|source| HostsError::Append {
                path: self.path.clone(),
                source,
            })?;

        tracing::debug!(path = %self.path.display(), ip, fqdn, "Hosts entry appended");
        Ok(())
    }
}

/// Append `ip fqdn` to an existing hosts file at `hosts_path`.
pub fn register_host(ip: &str, fqdn: &str, hosts_path: &Path) -> Result<(), HostsError> {
    HostsRegistrar::new(hosts_path).register(ip, fqdn)
}
