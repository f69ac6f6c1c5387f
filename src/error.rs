use thiserror::Error;

use crate::config::ConfigError;
use crate::geo::GeoError;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid matcher configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid geometry: {0}")]
    Geo(#[from] GeoError),
}
