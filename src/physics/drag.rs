use crate::atmosphere::AtmosphericState;
use crate::models::vehicle::VehicleProperties;
use nalgebra as na;

/// Aerodynamic drag opposing the velocity vector, from the atmospheric
/// state sampled for the current integration step. Above the table ceiling
/// the extrapolated density is not physical, so aerodynamic force is zeroed
/// there and the vehicle flies ballistically.
pub fn drag_force<T: VehicleProperties>(
    vehicle: &T,
    air: &AtmosphericState,
    velocity: &na::Vector3<f64>,
) -> na::Vector3<f64> {
    let v = velocity.magnitude();
    if air.extrapolated || v < 1e-9 {
        return na::Vector3::zeros();
    }

    let force_magnitude =
        -0.5 * vehicle.drag_coefficient() * vehicle.reference_area() * air.density_kg_m3 * v * v;
    velocity.normalize() * force_magnitude
}

/// Dynamic pressure q = ½ρv² (Pa).
pub fn dynamic_pressure(air: &AtmosphericState, velocity: &na::Vector3<f64>) -> f64 {
    0.5 * air.density_kg_m3 * velocity.magnitude_squared()
}

/// Mach number of the current airspeed.
pub fn mach_number(air: &AtmosphericState, velocity: &na::Vector3<f64>) -> f64 {
    velocity.magnitude() / air.speed_of_sound_m_s
}
