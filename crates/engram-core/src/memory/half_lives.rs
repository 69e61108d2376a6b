use super::layer::Layer;

/// Half-life in days for each layer.
/// `None` means infinite (never decays).
pub fn half_life_days(layer: Layer) -> Option<f64> {
    match layer {
        Layer::Identity => None, // ∞
        Layer::Project => Some(60.0),
        Layer::Session => Some(14.0),
        Layer::Task => Some(3.0),
    }
}
