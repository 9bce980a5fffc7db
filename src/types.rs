//! Shared types used across volpos.
//! Includes the input-format classifier (`InputFormat`), the fixed target
//! volume set, and the per-volume report types with their stdout rendering.
use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Volumes queried on every run, in query order: the primary active LAr
/// volume, the LAr bath, and the outer cryostat LAr volume.
pub const TARGET_VOLUMES: [&str; 3] = ["volTPCActive", "volLArBath", "volLAr"];

/// Input geometry flavor, derived from the file extension.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum InputFormat {
    /// edep-sim simulation output (`.root`).
    Root,
    /// Raw geometry description (GDML or anything else).
    Gdml,
}

impl InputFormat {
    /// Classify an input by its extension: the last dot-delimited segment of
    /// the path string must equal `root` exactly (case-sensitive). No I/O —
    /// missing or mis-extensioned files fail at the lookup stage instead.
    pub fn from_path(path: &Path) -> Self {
        let raw = path.to_string_lossy();
        match raw.rsplit_once('.') {
            Some((_, ext)) if ext == "root" => InputFormat::Root,
            _ => InputFormat::Gdml,
        }
    }

    /// Format flag the external toolkit expects.
    pub fn is_root(self) -> bool {
        matches!(self, InputFormat::Root)
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputFormat::Root => write!(f, "ROOT"),
            InputFormat::Gdml => write!(f, "GDML"),
        }
    }
}

/// Result of querying one volume.
///
/// `GeometryMissing` means no geometry manager could be loaded from the
/// input at all; it is distinct from `NotFound` (geometry loaded, zero
/// matching instances) and suppresses every other line for that volume.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub enum VolumeOutcome {
    GeometryMissing,
    NotFound,
    /// World-space origin of each matching instance, one coordinate triple
    /// per instance, in traversal order.
    Found(Vec<Vec<f64>>),
}

/// Outcome for a single named volume.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct VolumeReport {
    pub volume: String,
    pub outcome: VolumeOutcome,
}

/// Per-volume outcomes for one input, in query order. `Display` renders the
/// operator-facing report lines exactly as they go to stdout.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct ModuleOffsetReport {
    pub input: PathBuf,
    pub volumes: Vec<VolumeReport>,
}

impl fmt::Display for ModuleOffsetReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for report in &self.volumes {
            match &report.outcome {
                VolumeOutcome::GeometryMissing => writeln!(
                    f,
                    "No TGeoManager found in {}, cannot get module offsets.",
                    self.input.display()
                )?,
                VolumeOutcome::NotFound => writeln!(
                    f,
                    "Volume {} not found in TGeoManager of input file, check volume name.",
                    report.volume
                )?,
                VolumeOutcome::Found(origins) => {
                    for origin in origins {
                        writeln!(f, "position of volume {} = {:?}\n", report.volume, origin)?;
                    }
                }
            }
        }
        Ok(())
    }
}
