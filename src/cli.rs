use crate::constants::DEFAULT_QUALITY;
use crate::error::Result;
use crate::formats::PngHandling;
use crate::processing::CompressionOptions;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "img-press",
    about = "Pick an image, re-encode it smaller and see how much was saved",
    long_about = "img-press opens a small window with a single button: pick a JPEG or PNG, \
                  choose where to save the result and it is re-encoded as JPEG at quality 85. \
                  The same pipeline is available headless through the `compress` subcommand.",
    version,
    after_help = "EXAMPLES:\n  \
    img-press\n  \
    img-press compress photo.jpg\n  \
    img-press compress logo.png logo_small.png --keep-png\n  \
    img-press compress scan.jpeg out.jpg -q 70 --verbose"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[arg(
        short,
        long,
        global = true,
        default_value_t = DEFAULT_QUALITY,
        help = "JPEG quality (1-100)"
    )]
    pub quality: u8,

    #[arg(
        long,
        global = true,
        help = "Write real PNG output for PNG sources saved as .png instead of JPEG bytes"
    )]
    pub keep_png: bool,

    #[arg(short = 'Q', long, global = true, help = "Suppress informational output")]
    pub quiet: bool,

    #[arg(short, long, global = true, help = "Print each workflow stage")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    #[command(about = "Open the compressor window (default)")]
    Gui,

    #[command(
        about = "Compress a single image without opening the window",
        long_about = "Decode INPUT, re-encode it with the same rules as the window and write it \
                      to OUTPUT, or to <name>_compressed<ext> next to INPUT when omitted."
    )]
    Compress {
        #[arg(help = "Source image (.jpg, .jpeg or .png)")]
        input: PathBuf,

        #[arg(help = "Destination path")]
        output: Option<PathBuf>,
    },
}

impl Args {
    pub fn compression_options(&self) -> Result<CompressionOptions> {
        let png_handling = if self.keep_png {
            PngHandling::MatchDestination
        } else {
            PngHandling::TranscodeToJpeg
        };
        CompressionOptions::new(Some(self.quality), png_handling)
    }
}
