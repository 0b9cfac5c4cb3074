// Domain layer: road model, query types and ports. No IO here.

pub mod model;
pub mod ports;
