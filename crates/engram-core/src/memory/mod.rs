pub mod base;
pub mod half_lives;
pub mod layer;

pub use base::Memory;
pub use half_lives::half_life_days;
pub use layer::Layer;
