// Domain layer: card/reading models, the meaning table and the ports the
// services depend on. Concrete implementations live under adapters/.

pub mod meanings;
pub mod model;
pub mod ports;
