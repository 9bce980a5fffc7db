use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "volpos", version, about = "volpos CLI")]
pub struct CliArgs {
    /// Input geometry: an edep-sim ROOT file or a GDML
    pub input: PathBuf,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
