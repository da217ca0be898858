#![deny(unsafe_code)]
//! CLI binary for axis-hsl.
//!
//! `axis-hsl <r> <g> <b>` prints the rotated hue/saturation/lightness of the
//! color and the RGB triple rebuilt from it:
//!
//! ```text
//! h:<deg> s:<sat> l:<light>
//! r:<r> g:<g> b:<b>
//! ```

mod error;

use axis_hsl_core::{convert, format_float, parse_component, Conversion, Rgb};
use clap::Parser;
use error::CliError;
use std::io::{self, Write};
use std::process;

#[derive(Parser)]
#[command(
    name = "axis-hsl",
    about = "Convert RGB to a rotated HSL frame and back"
)]
struct Cli {
    /// Red component (unclamped).
    #[arg(value_parser = parse_component, allow_hyphen_values = true)]
    r: f64,

    /// Green component (unclamped).
    #[arg(value_parser = parse_component, allow_hyphen_values = true)]
    g: f64,

    /// Blue component (unclamped).
    #[arg(value_parser = parse_component, allow_hyphen_values = true)]
    b: f64,

    /// Output the full conversion as JSON instead of two text lines.
    #[arg(long)]
    json: bool,

    /// Print intermediate Cartesian and polar values to stderr.
    #[arg(long)]
    trace: bool,
}

fn trace(c: &Conversion) {
    let f = c.forward;
    let r = c.reconstructed;
    eprintln!(
        "hx:{} hy:{} hz:{}",
        format_float(f.x),
        format_float(f.y),
        format_float(f.z)
    );
    eprintln!(
        "h:{} s:{} l:{}",
        format_float(c.hsl.h),
        format_float(c.hsl.s),
        format_float(c.hsl.l)
    );
    eprintln!(
        "x:{} y:{} z:{}",
        format_float(r.x),
        format_float(r.y),
        format_float(r.z)
    );
}

fn run(cli: &Cli, out: &mut impl Write) -> Result<(), CliError> {
    let conversion = convert(Rgb::new(cli.r, cli.g, cli.b));

    if cli.trace {
        trace(&conversion);
    }

    if cli.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&conversion)?)?;
    } else {
        writeln!(out, "{}", conversion.report)?;
        writeln!(out, "{}", conversion.output)?;
    }
    out.flush()?;

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let stdout = io::stdout();
    if let Err(e) = run(&cli, &mut stdout.lock()) {
        if cli.json {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
