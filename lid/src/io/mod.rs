use std::fs;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use anyhow::{Context, Result};
use log::{LevelFilter, info};
use serde::Serialize;
use svg::Document;

use polydec::geometry::Point;

use crate::EPOCH;

pub mod cli;
pub mod output;
pub mod svg_export;
pub mod svg_util;

pub fn read_points(path: &Path) -> Result<Vec<Point>> {
    let file = File::open(path)
        .with_context(|| format!("could not open input file: {}", path.display()))?;
    let points = polydec::io::parse_points(BufReader::new(file))?;
    Ok(points)
}

pub fn write_json<T: Serialize>(output: &T, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("could not create output file: {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), output)?;
    info!("solution written to {:?}", fs::canonicalize(path)?);
    Ok(())
}

pub fn write_svg(document: &Document, path: &Path) -> Result<()> {
    svg::save(path, document)?;
    info!("svg written to {:?}", fs::canonicalize(path)?);
    Ok(())
}

pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            let elapsed = EPOCH.elapsed();
            let prefix = format!(
                "[{}] [{:0>2}:{:0>2}]",
                record.level(),
                elapsed.as_secs() / 60,
                elapsed.as_secs() % 60,
            );
            out.finish(format_args!("{prefix:<16}{message}"))
        })
        .level(level_filter)
        .chain(std::io::stdout())
        .apply()?;
    info!("epoch: {}", jiff::Timestamp::now());
    Ok(())
}
