use clap::{ArgAction, Parser, ValueEnum};

const DEFAULT_WIDTH: u32 = 400;
const DEFAULT_HEIGHT: u32 = 600;

/// Reports the contiguous fertile areas left after barren rectangles are carved out of a parcel.
///
/// Rectangles are entered as {"x1 y1 x2 y2", "x1 y1 x2 y2", ...}.
#[derive(Parser, Debug)]
#[command(author, version, long_about = None, disable_help_flag = true)]
pub(crate) struct Args {
    #[arg(short, long, help = "Keep prompting for input until 'quit' is entered")]
    pub interactive: bool,

    #[arg(
        short,
        long,
        help = "Print the land mass after each input (parcels up to 20x20 only)"
    )]
    pub print: bool,

    #[arg(
        short,
        long,
        value_parser = clap::value_parser!(u32).range(1..),
        help = "Width of the land mass [default: 400]"
    )]
    pub width: Option<u32>,

    #[arg(
        short = 'h',
        long,
        value_parser = clap::value_parser!(u32).range(1..),
        help = "Height of the land mass [default: 600]"
    )]
    pub height: Option<u32>,

    #[arg(short, long, help = "Read inputs from a file, one per line")]
    pub file: Option<String>,

    #[arg(long, help = "Output format")]
    pub out: Option<OutputFormat>,

    #[allow(dead_code)]
    #[arg(short = '?', long, action = ArgAction::Help, help = "Print help")]
    help: Option<bool>,
}

impl Args {
    pub fn width(&self) -> usize {
        self.width.unwrap_or(DEFAULT_WIDTH) as usize
    }

    pub fn height(&self) -> usize {
        self.height.unwrap_or(DEFAULT_HEIGHT) as usize
    }

    pub fn output_format(&self) -> OutputFormat {
        self.out.clone().unwrap_or(OutputFormat::Text)
    }
}

#[derive(ValueEnum, Debug, Clone, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}
