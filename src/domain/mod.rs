// Domain layer: entity models and ports (repository and config traits).

pub mod model;
pub mod ports;
