use crate::constants::PI;
use crate::models::vehicle::VehicleProperties;

/// Single-stage demo launcher, loosely sized on a small-lift first stage.
pub struct LightLauncher;

impl LightLauncher {
    pub const MASS: f64 = 12_500.0; // kg, at liftoff
    pub const DRY_MASS: f64 = 1_700.0; // kg
    pub const THRUST: f64 = 190_000.0; // N, sea level
    pub const ISP: f64 = 296.0; // s
    pub const C_D: f64 = 0.45;
    pub const DIAMETER: f64 = 1.2; // m

    /// Propellant mass flow at full thrust (kg/s).
    pub fn mass_flow() -> f64 {
        Self::THRUST / (crate::constants::G0 * Self::ISP)
    }
}

impl VehicleProperties for LightLauncher {
    fn mass(&self) -> f64 {
        Self::MASS
    }

    fn dry_mass(&self) -> f64 {
        Self::DRY_MASS
    }

    fn drag_coefficient(&self) -> f64 {
        Self::C_D
    }

    fn reference_area(&self) -> f64 {
        PI * (Self::DIAMETER * 0.5).powi(2)
    }
}
