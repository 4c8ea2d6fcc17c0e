// Domain layer: phrase tables, delimiters, reports and the storage port.

pub mod model;
pub mod ports;
