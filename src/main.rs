use std::process::ExitCode;

use clap::Parser;
use rgb565_embed::{args::Args, error::ConvertError, init};
use tracing::info;

fn main() -> ExitCode {
    let args = Args::parse();
    init::init_logging(args.verbose);

    match real_main(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if e.is_decode() {
                // the blank line separates the message from any decoder output above it
                eprintln!();
                eprintln!("{e}");
            } else {
                eprintln!("Error: {e}");
            }
            ExitCode::from(e.kind.exit_code())
        }
    }
}

fn real_main(args: Args) -> Result<(), ConvertError> {
    let plan = args.into_plan()?;
    let artifact = plan.execute()?;
    info!(
        pixels = artifact.pixel_count,
        bytes = artifact.byte_len,
        "converted {}",
        plan.input.display()
    );
    Ok(())
}
