// Domain layer: value objects, stored records and ports. Concrete adapters live under crate::adapters.

pub mod model;
pub mod ports;
pub mod records;
