use anyhow::{Context, Result};
use clap::Parser;
use img_press::cli::{Args, Commands};
use img_press::processing::compress_image;
use img_press::{gui, logger};

fn main() -> Result<()> {
    let args = Args::parse();
    logger::init(args.quiet, args.verbose);

    let options = args.compression_options()?;

    match args.command {
        None | Some(Commands::Gui) => {
            gui::launch(options).context("the compressor window failed")?;
        }
        Some(Commands::Compress { input, output }) => {
            compress_image(input, output, &options)?;
        }
    }

    Ok(())
}
