// Domain layer: the fixture payload, its destination, and the ports the writer depends on.

pub mod fixture;
pub mod model;
pub mod ports;
