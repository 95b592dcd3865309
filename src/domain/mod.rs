// Domain layer: request/response models, option contracts and the transport port.

pub mod model;
pub mod options;
pub mod ports;
