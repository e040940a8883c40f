/// an auxiliary spatial dataset that can be sampled for raw demand at a location.
///
/// implementations are read-only and shared across concurrent requests.
pub trait DemandSource: Send + Sync {
    /// descriptive name used in logging
    fn name(&self) -> &str;

    /// raw, un-normalized demand at a location. returns None when the dataset has no
    /// coverage at this location, which is distinct from covered-but-zero demand.
    fn sample(&self, lat: f64, lon: f64) -> Option<f64>;
}
