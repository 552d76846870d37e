pub mod euler;
pub mod point;
pub mod remap;
