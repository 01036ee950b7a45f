use anyhow::Result;
use clap::{ArgAction, Parser, ValueEnum};
use color_convert::{convert, ColorError, ColorFormat};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod input;
mod output;

use input::UsageError;

/// Exit status for input that failed validation.
const EXIT_INVALID_COLOR: i32 = 1;
/// Exit status for bad flag usage; matches what clap uses for its own errors.
const EXIT_USAGE: i32 = 2;
/// sysexits `EX_SOFTWARE`: the converter broke its own contract.
const EXIT_INTERNAL: i32 = 70;

#[derive(Parser, Debug)]
#[command(
    name = "colorconv",
    about = "Convert a color between hex, RGB and CMYK",
    long_about = "Convert a color between hex, RGB and CMYK.\n\n\
                  Conversions are uncalibrated: CMYK is computed with the plain \
                  arithmetic formula and no color profile.",
    version,
    author
)]
struct Cli {
    /// Convert from hex: ffffff or "#ffffff" (case insensitive)
    #[arg(long)]
    hex: bool,

    /// Convert from RGB: R G B or "rgb(R, G, B)" (case and whitespace insensitive)
    #[arg(long)]
    rgb: bool,

    /// Convert from CMYK: C M Y K or "cmyk(C, M, Y, K)" (percent signs allowed)
    #[arg(long)]
    cmyk: bool,

    /// Only print these formats (default: every format except the input's)
    #[arg(short, long, value_enum)]
    to: Vec<Target>,

    /// Print a JSON object instead of text lines
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// The color to convert, as one quoted string or separate values
    color: Vec<String>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Target {
    Hex,
    Rgb,
    Cmyk,
}

impl From<Target> for ColorFormat {
    fn from(target: Target) -> Self {
        match target {
            Target::Hex => ColorFormat::Hex,
            Target::Rgb => ColorFormat::Rgb,
            Target::Cmyk => ColorFormat::Cmyk,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(&cli) {
        eprintln!("Error: {err}");
        std::process::exit(exit_code(&err));
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("colorconv={level},color_convert={level}").into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let input = input::build_input(cli.hex, cli.rgb, cli.cmyk, &cli.color)?;
    info!(format = %input.format(), "converting");

    let set = convert(&input)?;

    let requested: Vec<ColorFormat> = cli.to.iter().copied().map(ColorFormat::from).collect();
    let targets = output::targets(input.format(), &requested);

    // Render fully before printing so a failure never leaves partial output.
    let rendered = if cli.json {
        output::render_json(&set, &targets)?
    } else {
        output::render_text(&set, &targets)
    };
    print!("{rendered}");

    Ok(())
}

fn exit_code(err: &anyhow::Error) -> i32 {
    if err.downcast_ref::<UsageError>().is_some() {
        return EXIT_USAGE;
    }
    match err.downcast_ref::<ColorError>() {
        Some(color_error) if !color_error.is_user_error() => {
            error!(%color_error, "conversion broke an internal invariant");
            EXIT_INTERNAL
        }
        _ => EXIT_INVALID_COLOR,
    }
}
