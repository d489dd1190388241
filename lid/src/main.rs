use std::fs;
use std::fs::File;
use std::io::BufReader;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use lid::config::LidConfig;
use lid::io;
use lid::io::cli::Cli;
use lid::io::output::LidOutput;
use lid::io::svg_export::polygon_to_svg;
use log::{debug, info, warn};
use polydec::decomp::DecompRing;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let mut config = match args.config_file {
        None => {
            warn!("[MAIN] no config file provided, use --config-file to provide a custom config");
            LidConfig::default()
        }
        Some(config_file) => {
            let file = File::open(config_file)?;
            serde_json::from_reader(BufReader::new(file)).context("incorrect config file format")?
        }
    };
    if let Some(target) = args.target {
        config.target_percent = target;
    }

    info!("successfully parsed LidConfig: {config:?}");

    let input_file_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .context("input file has no usable name")?
        .to_string();

    if !args.output_folder.exists() {
        fs::create_dir_all(&args.output_folder)
            .with_context(|| format!("could not create output folder: {:?}", args.output_folder))?;
    }

    let points = io::read_points(args.input_file.as_path())?;
    let mut ring = DecompRing::new(points)?;
    info!(
        "[MAIN] built ring with {} vertices from {:?}",
        ring.n_initial(),
        args.input_file
    );

    ring.set_to_size(config.target_percent)?;
    debug!("[MAIN] ring dump:\n{ring}");

    let polygon = ring.to_polygon();

    let output = LidOutput {
        config,
        n_initial: ring.n_initial(),
        n_live: ring.n_live(),
        area: polygon.area(),
        vertices: polygon.vertices.iter().map(|&p| p.into()).collect(),
    };
    io::write_json(
        &output,
        &args.output_folder.join(format!("sol_{input_file_stem}.json")),
    )?;

    let svg = polygon_to_svg(&polygon, config.svg_draw_options);
    io::write_svg(
        &svg,
        &args.output_folder.join(format!("sol_{input_file_stem}.svg")),
    )?;

    Ok(())
}
