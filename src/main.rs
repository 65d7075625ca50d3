use ascentsim::atmosphere::AtmosphereModel;
use ascentsim::config::vehicle::LightLauncher;
use ascentsim::constants::R_EARTH;
use ascentsim::integrators::rk4::RK4;
use ascentsim::models::state::AscentState;
use ascentsim::physics::drag::{drag_force, dynamic_pressure, mach_number};
use ascentsim::physics::dynamics::AscentDynamics;
use csv::Writer;
use hifitime::{Duration, Epoch};
use nalgebra as na;
use std::error::Error;
use std::fs::{self, File};
use std::path::Path;

const PITCH_KICK_ALTITUDE: f64 = 1_000.0; // meters
const PITCH_KICK_ANGLE: f64 = 4.0; // degrees off vertical

fn main() -> Result<(), Box<dyn Error>> {
    static VEHICLE: LightLauncher = LightLauncher;
    let atmosphere = AtmosphereModel::us_standard_1976();

    let liftoff = Epoch::from_gregorian_utc(2024, 6, 21, 12, 0, 0, 0);
    let mut state = AscentState::on_pad(&VEHICLE, liftoff);

    let dt = 0.05; // seconds
    let simulation_time = 400.0;
    let steps = (simulation_time / dt) as usize;
    let mass_flow = LightLauncher::mass_flow();

    // Create output directory if it doesn't exist
    let output_dir = Path::new("output");
    fs::create_dir_all(output_dir)?;

    let file = File::create(output_dir.join("ascent_trajectory.csv"))?;
    let mut writer = Writer::from_writer(file);

    writer.write_record(&[
        "UTC Time",
        "Time (s)",
        "Altitude (km)",
        "Velocity (m/s)",
        "Mach",
        "Dynamic Pressure (kPa)",
        "Temperature (K)",
        "Pressure (Pa)",
        "Density (kg/m³)",
        "Extrapolated",
        "Mass (kg)",
        "Drag Force (N)",
        "Thrust (N)",
    ])?;

    for i in 0..steps {
        let current_time = i as f64 * dt;
        state.mission_elapsed_time = current_time;
        state.epoch = liftoff + Duration::from_seconds(current_time);

        // One atmosphere query per integration step; the sampled state is
        // frozen across the RK4 substages.
        let altitude = state.altitude_m();
        let air = atmosphere.query(altitude)?;

        let thrust = if state.mass > LightLauncher::DRY_MASS {
            Some(thrust_direction(&state.position, &state.velocity, altitude) * LightLauncher::THRUST)
        } else {
            None
        };

        if i % 100 == 0 {
            let f_drag = drag_force(&VEHICLE, &air, &state.velocity).magnitude();
            let f_thrust = thrust.map_or(0.0, |t| t.magnitude());
            writer.write_record(&[
                &state.epoch.to_string(),
                &current_time.to_string(),
                &(altitude / 1000.0).to_string(),
                &state.velocity.magnitude().to_string(),
                &mach_number(&air, &state.velocity).to_string(),
                &(dynamic_pressure(&air, &state.velocity) / 1000.0).to_string(),
                &air.temperature_k.to_string(),
                &air.pressure_pa.to_string(),
                &air.density_kg_m3.to_string(),
                &air.extrapolated.to_string(),
                &state.mass.to_string(),
                &f_drag.to_string(),
                &f_thrust.to_string(),
            ])?;
        }

        let burning = thrust.is_some();
        let dynamics = AscentDynamics::new(
            &VEHICLE,
            thrust,
            if burning { mass_flow } else { 0.0 },
            air,
        );
        let integrator = RK4::new(dynamics);
        state = integrator.integrate(&state, dt);

        if state.position.magnitude() < R_EARTH {
            println!("Impact at t={:.2}s", current_time);
            break;
        }
    }

    writer.flush()?;
    println!("Trajectory data has been written to output/ascent_trajectory.csv");

    Ok(())
}

/// Vertical rise off the pad, a fixed pitch kick once clear of it, then
/// prograde (gravity-turn) thrust for the rest of the burn.
fn thrust_direction(
    position: &na::Vector3<f64>,
    velocity: &na::Vector3<f64>,
    altitude: f64,
) -> na::Vector3<f64> {
    let radial = position.normalize();
    if altitude < PITCH_KICK_ALTITUDE {
        return radial;
    }

    let east = na::Vector3::new(-radial.y, radial.x, 0.0).normalize();
    let kick = PITCH_KICK_ANGLE.to_radians();
    let kicked = (radial * kick.cos() + east * kick.sin()).normalize();

    // Follow the velocity vector once it dominates the pitch program.
    let prograde = velocity.normalize();
    if prograde.dot(&kicked) > kicked.dot(&radial) {
        prograde
    } else {
        kicked
    }
}
