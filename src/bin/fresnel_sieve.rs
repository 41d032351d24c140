//! fresnel-sieve: zone plate and photon sieve mask generator
//!
//! Run: `fresnel-sieve -w 500 --wu nm -f 10 --fu cm -n 100 -g fpr -s`

use anyhow::{Context, Result};
use clap::Parser;
use fresnel_sieve::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

/// Generate Fresnel zone plate and photon sieve image masks for a given
/// wavelength, focal length and number of rings
#[derive(Parser, Debug)]
#[command(name = "fresnel-sieve")]
#[command(version)]
#[command(about = "Fresnel zone plate and photon sieve mask generator", long_about = None)]
struct Cli {
    /// Wavelength value
    #[arg(short, long)]
    wavelength: f64,

    /// Wavelength unit (m, cm, mm, um, nm)
    #[arg(long, visible_alias = "wu", value_parser = parse_unit)]
    wavelength_unit: LengthUnit,

    /// Focal length value
    #[arg(short, long)]
    focal_length: f64,

    /// Focal length unit (m, cm, mm, um, nm)
    #[arg(long, visible_alias = "fu", value_parser = parse_unit)]
    focal_length_unit: LengthUnit,

    /// Number of rings to generate (min 2). Values between 10 and 1000 are recommended
    #[arg(short, long)]
    num_rings: usize,

    /// What to generate (f: Fresnel, p: photon sieve, r: random photon sieve), e.g. -g fp
    #[arg(short, long)]
    generate: String,

    /// Preview the generated masks in the terminal
    #[arg(short, long)]
    display: bool,

    /// Save the generated masks as PNG files
    #[arg(short, long)]
    save: bool,

    /// Directory for saved PNG files
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Seed for the random photon sieve (entropy if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// YAML file with rasterization settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Minimum ring thickness in pixels (overrides the config file)
    #[arg(long)]
    min_ring_px: Option<u32>,

    /// Dot placement attempts per random sieve dot (overrides the config file)
    #[arg(long)]
    max_placement_attempts: Option<u32>,

    /// Terminal preview width in characters
    #[arg(long, default_value = "80")]
    preview_width: u32,

    /// Preview with an ASCII ramp instead of Unicode half blocks
    #[arg(long)]
    ascii: bool,

    /// Preview open pixels as filled
    #[arg(long)]
    invert: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_unit(s: &str) -> std::result::Result<LengthUnit, String> {
    s.parse().map_err(|e: fresnel_sieve::Error| e.to_string())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if !cli.display && !cli.save {
        log::warn!("output is neither displayed nor saved");
    }

    let wavelength = cli.wavelength_unit.to_meters(cli.wavelength);
    let focal_length = cli.focal_length_unit.to_meters(cli.focal_length);
    let params = PhysicalParameters::new(wavelength, focal_length, cli.num_rings)?;
    let elements = Element::parse_selection(&cli.generate)?;

    let mut config = match &cli.config {
        Some(path) => MaskConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => MaskConfig::default(),
    };
    if let Some(px) = cli.min_ring_px {
        config.min_ring_px = px;
    }
    if let Some(attempts) = cli.max_placement_attempts {
        config.max_placement_attempts = attempts;
    }

    let generator = Generator::new(params, config).context("failed to size canvas")?;
    log::info!(
        "canvas {}px for {} rings",
        generator.canvas().size_px(),
        params.num_rings()
    );

    let preview = preview_encoder(&cli);

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    for element in elements {
        let mask = generator.render(element, &mut rng);
        let (min, max, mean) = mask.coverage_stats();
        log::info!("{element}: row coverage min {min:.3} max {max:.3} mean {mean:.3}");

        if cli.display {
            println!("{element}");
            preview.print(&mask);
        }

        if cli.save {
            let path = cli.output_dir.join(file_name(&cli, element));
            println!("Saving {} as '{}'", element.title(), path.display());
            PngEncoder::write_to_file(&mask, &path)
                .with_context(|| format!("failed to write {}", path.display()))?;
        }
    }

    println!("Lens diameter {}", format_length(generator.radii().outer_diameter()));

    Ok(())
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();
}

fn preview_encoder(cli: &Cli) -> TerminalEncoder {
    let mode = if cli.ascii { TerminalMode::Ascii } else { TerminalMode::UnicodeHalfBlock };
    TerminalEncoder::new().mode(mode).width(cli.preview_width).invert(cli.invert)
}

/// `{element}_f{focal}{unit}_w{wavelength}{unit}_n{rings}.png`
fn file_name(cli: &Cli, element: Element) -> String {
    format!(
        "{}_f{}{}_w{}{}_n{}.png",
        element.title(),
        cli.focal_length,
        cli.focal_length_unit,
        cli.wavelength,
        cli.wavelength_unit,
        cli.num_rings
    )
}
