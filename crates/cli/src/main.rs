use anyhow::{anyhow, Context};
use config::{Config, File};
use hexgrid::{
    FractionalHex, Hex, HexDirection, Layout, LayoutConfig, OrientationKind,
    Point,
};
use log::{debug, LevelFilter};
use serde::Serialize;
use simple_logger::SimpleLogger;
use std::{
    fmt,
    path::{Path, PathBuf},
    process,
};
use structopt::{clap::AppSettings, StructOpt};

/// CLI for converting between hex grid coordinates and screen coordinates.
#[derive(Debug, StructOpt)]
#[structopt(
    name = "hexgrid",
    global_settings = &[AppSettings::AllowNegativeNumbers]
)]
struct Opt {
    /// Path to a config file that defines the grid layout. Supported formats:
    /// JSON, TOML. If not given, a pointy-top layout with a size of 1 centered
    /// on the origin is used.
    #[structopt(short, long)]
    config: Option<PathBuf>,

    /// Override the orientation from the config. Supported values: pointy,
    /// pointy-top, flat, flat-top
    #[structopt(short, long)]
    orientation: Option<OrientationKind>,

    /// Print output as JSON instead of plain text
    #[structopt(long)]
    json: bool,

    /// The logging level to use. See
    /// https://docs.rs/log/0.4.11/log/enum.LevelFilter.html for options
    #[structopt(long, default_value = "warn")]
    log_level: LevelFilter,

    #[structopt(subcommand)]
    command: Command,
}

#[derive(Debug, StructOpt)]
enum Command {
    /// Get the screen position of a cell's center
    ToPixel { q: i32, r: i32 },
    /// Get the cell that contains a screen position
    ToHex { x: f64, y: f64 },
    /// List every cell on the line between two cells
    Line { q1: i32, r1: i32, q2: i32, r2: i32 },
    /// List the 6 corners of a cell, in screen space
    Corners { q: i32, r: i32 },
    /// Get the number of steps between two cells
    Distance { q1: i32, r1: i32, q2: i32, r2: i32 },
    /// List the 6 cells adjacent to a cell, in direction order
    Neighbors { q: i32, r: i32 },
}

/// The result of a single command, in a form that can be printed as text or
/// serialized as JSON
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Output {
    Pixel(Point),
    Hex { fractional: FractionalHex, cell: Hex },
    Cells(Vec<Hex>),
    Corners([Point; 6]),
    Distance(u32),
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pixel(point) => write!(f, "{}", point),
            Self::Hex { fractional, cell } => {
                write!(f, "{} (exact {})", cell, fractional)
            }
            Self::Cells(cells) => {
                for cell in cells {
                    writeln!(f, "{}", cell)?;
                }
                Ok(())
            }
            Self::Corners(corners) => {
                for corner in corners.iter() {
                    writeln!(f, "{}", corner)?;
                }
                Ok(())
            }
            Self::Distance(distance) => write!(f, "{}", distance),
        }
    }
}

fn load_config(config_path: &Path) -> anyhow::Result<LayoutConfig> {
    let mut settings = Config::new();
    let config_path = config_path.to_str().ok_or_else(|| {
        anyhow!("invalid character in path {:?}", config_path)
    })?;
    settings
        .merge(File::with_name(config_path))
        .context("error reading config file")?;
    settings.try_into().context("error reading config")
}

/// Execute a single command against the layout. Returns an error if any
/// input or output cell is out of range.
fn execute(layout: &Layout, command: Command) -> anyhow::Result<Output> {
    let output = match command {
        Command::ToPixel { q, r } => {
            Output::Pixel(layout.hex_to_pixel(Hex::try_new(q, r)?))
        }
        Command::ToHex { x, y } => {
            let fractional = layout.pixel_to_hex(Point::new(x, y));
            Output::Hex {
                fractional,
                cell: fractional.try_round()?,
            }
        }
        Command::Line { q1, r1, q2, r2 } => {
            let start = Hex::try_new(q1, r1)?;
            let end = Hex::try_new(q2, r2)?;
            Output::Cells(start.line_to(end).collect())
        }
        Command::Corners { q, r } => {
            Output::Corners(layout.polygon_corners(Hex::try_new(q, r)?))
        }
        Command::Distance { q1, r1, q2, r2 } => {
            let start = Hex::try_new(q1, r1)?;
            Output::Distance(start.distance_to(Hex::try_new(q2, r2)?))
        }
        Command::Neighbors { q, r } => {
            let hex = Hex::try_new(q, r)?;
            let neighbors = HexDirection::ALL
                .iter()
                .map(|direction| {
                    hex.checked_add(direction.to_vector()).ok_or_else(|| {
                        anyhow!(
                            "{:?} neighbor of {} is out of range",
                            direction,
                            hex
                        )
                    })
                })
                .collect::<anyhow::Result<Vec<Hex>>>()?;
            Output::Cells(neighbors)
        }
    };
    Ok(output)
}

/// Run the CLI with some options
fn run(opt: Opt) -> anyhow::Result<()> {
    SimpleLogger::new().with_level(opt.log_level).init()?;

    let mut config = match &opt.config {
        Some(config_path) => load_config(config_path)?,
        None => LayoutConfig::default(),
    };
    if let Some(orientation) = opt.orientation {
        config.orientation = orientation;
    }
    debug!("Using layout config {:?}", config);
    let layout = Layout::from_config(config).context("invalid layout config")?;

    let output = execute(&layout, opt.command)?;
    if opt.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        // Multi-line outputs already end in a newline
        print!("{}", output);
        if !matches!(output, Output::Cells(_) | Output::Corners(_)) {
            println!();
        }
    }

    Ok(())
}

fn main() {
    let exit_code = match run(Opt::from_args()) {
        Ok(_) => 0,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            1
        }
    };
    process::exit(exit_code);
}
