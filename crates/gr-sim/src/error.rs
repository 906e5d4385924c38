use gr_core::ConfigError;
use gr_grid::GridError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("grid error: {0}")]
    Grid(#[from] GridError),
}

pub type PlanResult<T> = Result<T, PlanError>;
