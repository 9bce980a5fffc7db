//! High-level library API: the volume-lookup capability, the per-volume
//! lookup adapter, and the module-offset report driver. Prefer these
//! entrypoints over driving `io::root` directly when embedding volpos.
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::Result;
use crate::types::{InputFormat, ModuleOffsetReport, TARGET_VOLUMES, VolumeOutcome, VolumeReport};

/// Raw pair returned by the external toolkit for one volume query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LookupReply {
    /// Whether a geometry manager was constructed from the input.
    pub found: bool,
    /// World-space origin of each matching instance; outer index is the
    /// instance, inner index the coordinate component, orders as returned.
    pub origins: Vec<Vec<f64>>,
}

/// Capability for querying a geometry for the positions of a named volume.
///
/// The production implementation is [`crate::io::RootMacroLookup`], which
/// drives the native ROOT toolkit; tests substitute doubles returning canned
/// replies.
pub trait VolumeLookup {
    fn volume_positions(&self, input: &Path, is_root: bool, volume: &str) -> Result<LookupReply>;
}

/// Query one volume through the injected lookup.
///
/// `None` means no geometry manager could be loaded from the input — the
/// caller cannot proceed for this input, not "volume not found". An empty
/// `Some` is a valid result: geometry loaded, zero matching instances.
/// Transport failures from the lookup itself surface as `Err`.
pub fn locate_volume(
    lookup: &dyn VolumeLookup,
    input: &Path,
    format: InputFormat,
    volume: &str,
) -> Result<Option<Vec<Vec<f64>>>> {
    let reply = lookup.volume_positions(input, format.is_root(), volume)?;
    if !reply.found {
        return Ok(None);
    }
    Ok(Some(reply.origins))
}

/// Run the fixed query set against one input and collect per-volume
/// outcomes. Issues exactly one lookup per target volume, in
/// [`TARGET_VOLUMES`] order, regardless of individual outcomes.
pub fn module_offset_report(lookup: &dyn VolumeLookup, input: &Path) -> Result<ModuleOffsetReport> {
    let format = InputFormat::from_path(input);
    info!("input {:?} classified as {}", input, format);

    let mut volumes = Vec::with_capacity(TARGET_VOLUMES.len());
    for volume in TARGET_VOLUMES {
        let outcome = match locate_volume(lookup, input, format, volume)? {
            None => VolumeOutcome::GeometryMissing,
            Some(origins) if origins.is_empty() => VolumeOutcome::NotFound,
            Some(origins) => {
                debug!("volume {}: {} instance(s)", volume, origins.len());
                VolumeOutcome::Found(origins)
            }
        };
        volumes.push(VolumeReport {
            volume: volume.to_owned(),
            outcome,
        });
    }

    Ok(ModuleOffsetReport {
        input: input.to_path_buf(),
        volumes,
    })
}
