//! ROOT toolkit adapter: stages the bundled traversal macro and drives the
//! `root` interpreter in batch mode, one process per volume query. The
//! traversal itself lives in the macro; this module only moves bytes across
//! the process boundary.
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use tempfile::TempDir;
use thiserror::Error;
use tracing::{debug, info};

use crate::api::{LookupReply, VolumeLookup};
use crate::error::Result;

/// Canonical macro file name. ROOT dispatches on the file stem, so the
/// staged copy must keep this name.
const MACRO_NAME: &str = "get_volume_position.C";

/// Traversal macro source, bundled into the binary.
const MACRO_SOURCE: &str = include_str!("../../resources/get_volume_position.C");

/// Marker prefixing the one machine-readable line the macro prints.
const REPLY_MARKER: &str = "VOLPOS_REPLY ";

/// Errors encountered when driving the ROOT toolkit
#[derive(Debug, Error)]
pub enum RootError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to launch `{program}` (is ROOT installed?): {source}")]
    Launch {
        program: String,
        source: std::io::Error,
    },

    #[error("`{program}` exited with {status}: {stderr}")]
    Toolkit {
        program: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("no reply line in toolkit output for volume {volume}")]
    MissingReply { volume: String },

    #[error("malformed toolkit reply: {0}")]
    Reply(#[from] serde_json::Error),

    #[error("input path is not valid UTF-8: {}", .path.display())]
    NonUtf8Path { path: PathBuf },
}

/// The staged traversal macro.
///
/// Owns the scratch directory holding the staged copy; keep it alive for as
/// long as lookups may run. Dropping it removes the directory.
pub struct RootMacro {
    dir: TempDir,
}

impl RootMacro {
    /// Write the bundled macro source to a scratch directory. Perform once,
    /// before the first lookup.
    pub fn stage() -> std::result::Result<Self, RootError> {
        let dir = TempDir::new()?;
        let staged = dir.path().join(MACRO_NAME);
        std::fs::write(&staged, MACRO_SOURCE)?;
        debug!("staged traversal macro at {:?}", staged);
        Ok(Self { dir })
    }

    /// Path of the staged macro file.
    pub fn path(&self) -> PathBuf {
        self.dir.path().join(MACRO_NAME)
    }
}

/// Production [`VolumeLookup`]: runs the staged macro through the ROOT
/// interpreter (`root -l -b -q`) and parses its reply line.
pub struct RootMacroLookup {
    traversal: RootMacro,
    program: String,
}

impl RootMacroLookup {
    pub fn new(traversal: RootMacro) -> Self {
        Self {
            traversal,
            program: "root".to_owned(),
        }
    }

    /// Use a different toolkit executable (test stubs, exotic installs).
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Macro invocation argument, e.g.
    /// `/tmp/x/get_volume_position.C("det.gdml",false,"volLAr")`.
    fn invocation(&self, input: &str, is_root: bool, volume: &str) -> String {
        format!(
            "{}({},{},{})",
            self.traversal.path().display(),
            cpp_str(input),
            is_root,
            cpp_str(volume)
        )
    }
}

/// Quote a string as a C++ string literal.
fn cpp_str(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        if c == '\\' || c == '"' {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
    out
}

/// Scan interpreter stdout for the marker-prefixed reply line. Everything
/// else (banners, macro chatter) is ignored.
fn parse_reply(stdout: &str, volume: &str) -> std::result::Result<LookupReply, RootError> {
    for line in stdout.lines() {
        if let Some(json) = line.trim_start().strip_prefix(REPLY_MARKER) {
            return Ok(serde_json::from_str(json)?);
        }
    }
    Err(RootError::MissingReply {
        volume: volume.to_owned(),
    })
}

impl VolumeLookup for RootMacroLookup {
    fn volume_positions(&self, input: &Path, is_root: bool, volume: &str) -> Result<LookupReply> {
        let input_str = input.to_str().ok_or_else(|| RootError::NonUtf8Path {
            path: input.to_path_buf(),
        })?;
        let arg = self.invocation(input_str, is_root, volume);
        info!("querying {} for volume {}", self.program, volume);
        debug!("toolkit invocation: {} -l -b -q {}", self.program, arg);

        let output = Command::new(&self.program)
            .args(["-l", "-b", "-q"])
            .arg(&arg)
            .output()
            .map_err(|source| RootError::Launch {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(RootError::Toolkit {
                program: self.program.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            }
            .into());
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let reply = parse_reply(&stdout, volume)?;
        debug!(
            "toolkit reply for {}: found={} instances={}",
            volume,
            reply.found,
            reply.origins.len()
        );
        Ok(reply)
    }
}
