// Atmosphere (USSA-76, SI units)
pub const G0: f64 = 9.80665; // Standard gravity (m/s²)
pub const R_AIR: f64 = 287.05287; // Specific gas constant for dry air (J/(kg·K))
pub const GAMMA_AIR: f64 = 1.4; // Heat capacity ratio cp/cv for dry air

// Gravitation
pub const G: f64 = 6.67430e-11; // Gravitational constant (m³/kg/s²)
pub const M_EARTH: f64 = 5.972e24; // Mass of Earth (kg)
pub const R_EARTH: f64 = 6.371e6; // Mean radius of Earth (m)

// Math
pub const PI: f64 = std::f64::consts::PI;
