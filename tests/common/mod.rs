//! Shared fixtures for pipeline tests.

use std::path::PathBuf;

use mongod_entrypoint::config::schema::EntrypointConfig;
use mongod_entrypoint::lifecycle::{DaemonCommand, Handoff, HandoffError};
use tempfile::TempDir;

pub const TEMPLATE: &str = "\
replication:
  replSetName: REPLICA_SET_NAME
net:
  port: PORT
  bindIp: 0.0.0.0
";

pub const HOSTS: &str = "127.0.0.1\tlocalhost\n::1\tlocalhost ip6-localhost\n";

/// A scratch directory holding a template, a hosts file and the output path.
pub struct Fixture {
    pub dir: TempDir,
    pub template: PathBuf,
    pub output: PathBuf,
    pub hosts: PathBuf,
}

impl Fixture {
    pub fn new() -> Self {
        Self::with_template(TEMPLATE)
    }

    pub fn with_template(template: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let fixture = Self {
            template: dir.path().join("mongod.conf.template"),
            output: dir.path().join("mongod.conf"),
            hosts: dir.path().join("hosts"),
            dir,
        };
        std::fs::write(&fixture.template, template).unwrap();
        std::fs::write(&fixture.hosts, HOSTS).unwrap();
        fixture
    }

    /// Default config with every path pointed into the fixture.
    pub fn config(&self) -> EntrypointConfig {
        let mut config = EntrypointConfig::default();
        config.paths.template = self.template.clone();
        config.paths.config = self.output.clone();
        config.paths.hosts = self.hosts.clone();
        config
    }

    pub fn hosts_content(&self) -> String {
        std::fs::read_to_string(&self.hosts).unwrap()
    }

    pub fn output_content(&self) -> Option<String> {
        std::fs::read_to_string(&self.output).ok()
    }
}

/// Records the command instead of replacing the process.
#[derive(Debug, Default)]
pub struct RecordingHandoff {
    pub commands: Vec<DaemonCommand>,
}

impl Handoff for RecordingHandoff {
    fn hand_off(&mut self, command: &DaemonCommand) -> Result<(), HandoffError> {
        self.commands.push(command.clone());
        Ok(())
    }
}
