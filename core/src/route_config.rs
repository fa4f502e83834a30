/// Average cruise speed, in distance units per hour, used for travel time estimates
pub const DEFAULT_CRUISE_SPEED: f64 = 800.0;

/// Configuration for turning a shortest route into a travel summary
#[derive(Debug, Clone)]
pub struct RouteConfig {
    /// Distance units covered per hour of flight
    pub cruise_speed: f64,
}

impl RouteConfig {
    pub fn new(cruise_speed: f64) -> Self {
        Self { cruise_speed }
    }
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            cruise_speed: DEFAULT_CRUISE_SPEED,
        }
    }
}
