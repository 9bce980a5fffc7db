#![doc = r#"
volpos — query detector-simulation geometry for module offsets.

This crate reports the 3D world-space origin positions of the active
liquid-argon volumes (`volTPCActive`, `volLArBath`, `volLAr`) found anywhere
in the hierarchical geometry tree of an edep-sim ROOT file or a GDML. It
powers the `volpos` CLI and can be embedded in detector-simulation pipeline
tooling.

The geometry traversal itself runs inside CERN ROOT: volpos stages a bundled
traversal macro and drives the `root` interpreter in batch mode, one process
per volume query. volpos contributes the glue — input-format classification,
lookup orchestration, reply reshaping, and reporting.

Requirements
------------
- A ROOT installation with `root` on `PATH` (only needed at query time; the
  library's report types and test doubles work without it).
- Rust 2024 edition toolchain.

Quick start: report module offsets for an input
-----------------------------------------------
```rust,no_run
use std::path::Path;
use volpos::{RootMacro, RootMacroLookup, api::module_offset_report};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let lookup = RootMacroLookup::new(RootMacro::stage()?);
    let report = module_offset_report(&lookup, Path::new("detector.gdml"))?;
    print!("{report}");
    Ok(())
}
```

Query a single volume
---------------------
```rust,no_run
use std::path::Path;
use volpos::{InputFormat, RootMacro, RootMacroLookup, api::locate_volume};

fn main() -> volpos::Result<()> {
    let input = Path::new("run.root");
    let lookup = RootMacroLookup::new(RootMacro::stage()?);

    match locate_volume(&lookup, input, InputFormat::from_path(input), "volTPCActive")? {
        None => println!("no geometry manager in input"),
        Some(origins) if origins.is_empty() => println!("volume not found"),
        Some(origins) => println!("{} instance(s): {:?}", origins.len(), origins),
    }
    Ok(())
}
```

Error handling
--------------
Per-volume outcomes ("no geometry manager", "volume not found") are data,
not errors — they live in [`VolumeOutcome`] and render as report lines.
Transport failures (ROOT not installed, toolkit crash, malformed reply)
return `volpos::Error`; match on [`RootError`] variants for specifics.

Useful modules
--------------
- [`api`] — high-level entry points and the [`api::VolumeLookup`] seam.
- [`types`] — classifier, target volume set, and report types.
- [`io`] — the ROOT toolkit adapter.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
// Types
pub use error::{Error, Result};
pub use types::{InputFormat, ModuleOffsetReport, TARGET_VOLUMES, VolumeOutcome, VolumeReport};

// Toolkit adapter
pub use io::root::{RootError, RootMacro, RootMacroLookup};

// High-level API re-exports
pub use api::{LookupReply, VolumeLookup, locate_volume, module_offset_report};
