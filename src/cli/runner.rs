use tracing::info;

use volpos::api::module_offset_report;
use volpos::io::{RootMacro, RootMacroLookup};

use super::args::CliArgs;

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    // Stage the traversal macro once; every lookup borrows the staged copy.
    let traversal = RootMacro::stage()?;
    let lookup = RootMacroLookup::new(traversal);

    let report = module_offset_report(&lookup, &args.input)?;
    print!("{report}");
    info!("module offset report complete for {:?}", args.input);

    Ok(())
}
