// Domain layer: the record type and the store interface. No I/O here.

pub mod model;
pub mod ports;
