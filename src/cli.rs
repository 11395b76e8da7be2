// src/cli.rs

use getopts::{Matches, Options};

use crate::error::{FixtureError, Result};
use crate::generator::{FixtureGenerator, ScanRange};
use crate::geometry::{parse_points, Polygon};
use crate::number::{self, parse_scalar, Scalar};
use crate::presets::{self, DEFAULT_PRESET, PRESETS};

pub enum Command {
    Help(String),
    List(String),
    Generate(FixtureGenerator),
}

pub fn options() -> Options {
    let mut opts = Options::new();
    opts.optflag("h", "help", "print this help menu");
    opts.optflag("l", "list", "list the built-in polygons");
    opts.optopt("p", "preset", "built-in polygon and scan range (default: default)", "NAME");
    opts.optopt("", "polygon", "explicit vertex list, e.g. \"(1,3),(1,2),(5,2)\"", "VERTICES");
    opts.optopt("", "min", "first scan line y", "Y");
    opts.optopt("", "max", "last scan line y (inclusive)", "Y");
    opts.optopt("", "step", "distance between scan lines", "DY");
    opts.optopt("", "half-extent", "half length of each scan line (default: 1000)", "X");
    opts
}

fn usage(opts: &Options, program: &str) -> String {
    let brief = format!(
        "Usage: {} [options]\nPrints the x coordinates where horizontal scan lines cross a polygon \
         as float array initializers.",
        program
    );
    opts.usage(&brief)
}

fn listing() -> String {
    let mut out = String::new();
    for preset in PRESETS {
        out.push_str(&format!(
            "{:<10} y {}..{} step {}  {}\n",
            preset.name, preset.min, preset.max, preset.step, preset.vertices
        ));
    }
    out
}

fn scalar_opt(matches: &Matches, name: &str) -> Result<Option<Scalar>> {
    matches.opt_str(name).map(|text| parse_scalar(&text)).transpose()
}

/// Parses the command line, `args[0]` being the program name.
pub fn parse_args(args: &[String]) -> Result<Command> {
    let program = args.first().map(String::as_str).unwrap_or("scanline-fixtures");
    let opts = options();
    let matches = opts
        .parse(args.iter().skip(1))
        .map_err(|err| FixtureError::Usage(format!("{}\n{}", err, usage(&opts, program))))?;

    if matches.opt_present("h") {
        return Ok(Command::Help(usage(&opts, program)));
    }
    if matches.opt_present("l") {
        return Ok(Command::List(listing()));
    }
    if !matches.free.is_empty() {
        return Err(FixtureError::Usage(format!(
            "unexpected argument {}\n{}",
            matches.free[0],
            usage(&opts, program)
        )));
    }

    let preset = presets::find(matches.opt_str("p").as_deref().unwrap_or(DEFAULT_PRESET))?;
    let polygon = match matches.opt_str("polygon") {
        Some(text) => Polygon::from_points(&parse_points(&text)?)?,
        None => preset.polygon()?,
    };

    let range = ScanRange::new(
        scalar_opt(&matches, "min")?.map_or_else(|| parse_scalar(preset.min), Ok)?,
        scalar_opt(&matches, "max")?.map_or_else(|| parse_scalar(preset.max), Ok)?,
        scalar_opt(&matches, "step")?.map_or_else(|| parse_scalar(preset.step), Ok)?,
    )?;

    let mut generator = FixtureGenerator::new(polygon, range);
    if let Some(half_extent) = scalar_opt(&matches, "half-extent")? {
        generator = generator.with_half_extent(half_extent);
    }
    log::debug!(
        "{} vertices, {} scan lines from {}",
        generator.polygon().count(),
        generator.range().len(),
        number::format_fixture(generator.range().min())
    );
    Ok(Command::Generate(generator))
}
