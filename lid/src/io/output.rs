use serde::{Deserialize, Serialize};

use crate::config::LidConfig;

/// Full record of a decimation run, echoing the config it ran with
#[derive(Serialize, Deserialize, Clone)]
pub struct LidOutput {
    pub config: LidConfig,
    pub n_initial: usize,
    pub n_live: usize,
    /// Area enclosed by the decimated polygon
    pub area: f64,
    /// Live vertex coordinates in ring order
    pub vertices: Vec<(i32, i32)>,
}
