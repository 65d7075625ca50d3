use ascentsim::atmosphere::AtmosphereModel;
use ascentsim::config::vehicle::LightLauncher;
use ascentsim::constants::G0;
use ascentsim::integrators::rk4::RK4;
use ascentsim::models::state::AscentState;
use ascentsim::models::vehicle::VehicleProperties;
use ascentsim::physics::drag::dynamic_pressure;
use ascentsim::physics::dynamics::AscentDynamics;
use csv::Writer;
use hifitime::{Duration, Epoch};
use rand::{Rng, SeedableRng};
use std::fs::{self, File};
use std::path::Path;
use std::sync::Arc;

// Integration test for a full vertical ascent: burn to propellant depletion,
// then coast through the atmosphere ceiling.
#[test]
fn ascent_through_the_atmosphere() -> Result<(), Box<dyn std::error::Error>> {
    static VEHICLE: LightLauncher = LightLauncher;
    let atmosphere = AtmosphereModel::us_standard_1976();

    let liftoff = Epoch::from_gregorian_utc(2024, 6, 21, 12, 0, 0, 0);
    let mut state = AscentState::on_pad(&VEHICLE, liftoff);

    let dt = 0.05;
    let simulation_time = 300.0;
    let steps = (simulation_time / dt) as usize;
    let mass_flow = LightLauncher::mass_flow();

    let output_dir = Path::new("output");
    fs::create_dir_all(output_dir)?;
    let file = File::create(output_dir.join("ascent_test.csv"))?;
    let mut writer = Writer::from_writer(file);
    writer.write_record(&[
        "Time (s)",
        "Altitude (km)",
        "Velocity (m/s)",
        "Dynamic Pressure (kPa)",
        "Pressure (Pa)",
        "Extrapolated",
    ])?;

    let mut max_q = 0.0_f64;
    let mut max_q_altitude = 0.0_f64;
    let mut max_altitude = 0.0_f64;
    let mut seen_extrapolated = false;
    let mut previous_sample: Option<(f64, f64)> = None; // (altitude, pressure)

    for i in 0..steps {
        let current_time = i as f64 * dt;
        state.mission_elapsed_time = current_time;
        state.epoch = liftoff + Duration::from_seconds(current_time);

        let altitude = state.altitude_m();
        let air = atmosphere.query(altitude)?;

        max_altitude = max_altitude.max(altitude);
        seen_extrapolated |= air.extrapolated;

        let q = dynamic_pressure(&air, &state.velocity);
        if q > max_q {
            max_q = q;
            max_q_altitude = altitude;
        }

        if i % 100 == 0 {
            writer.write_record(&[
                &current_time.to_string(),
                &(altitude / 1000.0).to_string(),
                &state.velocity.magnitude().to_string(),
                &(q / 1000.0).to_string(),
                &air.pressure_pa.to_string(),
                &air.extrapolated.to_string(),
            ])?;

            // The climb is monotonic, so sampled pressure must be too.
            if let Some((h_prev, p_prev)) = previous_sample {
                if altitude > h_prev {
                    assert!(
                        air.pressure_pa < p_prev,
                        "pressure did not decrease between {} m and {} m",
                        h_prev,
                        altitude
                    );
                }
            }
            previous_sample = Some((altitude, air.pressure_pa));
        }

        let thrust = if state.mass > LightLauncher::DRY_MASS {
            Some(state.position.normalize() * LightLauncher::THRUST)
        } else {
            None
        };
        let burning = thrust.is_some();
        let dynamics = AscentDynamics::new(
            &VEHICLE,
            thrust,
            if burning { mass_flow } else { 0.0 },
            air,
        );
        let integrator = RK4::new(dynamics);
        state = integrator.integrate(&state, dt);
    }
    writer.flush()?;

    // Max-Q belongs in the dense lower atmosphere.
    assert!(max_q > 10_000.0, "max-Q {} Pa is implausibly low", max_q);
    assert!(
        (2_000.0..20_000.0).contains(&max_q_altitude),
        "max-Q at {} m is outside the expected band",
        max_q_altitude
    );

    // The burn carries the vehicle well past the 47 km table ceiling, and
    // the flag must have been raised on the way.
    assert!(max_altitude > 100_000.0, "only reached {} m", max_altitude);
    assert!(seen_extrapolated);

    // All propellant was spent.
    assert!(state.mass <= LightLauncher::DRY_MASS + mass_flow * dt);

    Ok(())
}

/// Drag-coefficient dispersion sample for a Monte-Carlo style run.
struct DispersedVehicle {
    drag_coefficient: f64,
}

impl VehicleProperties for DispersedVehicle {
    fn mass(&self) -> f64 {
        LightLauncher::MASS
    }

    fn dry_mass(&self) -> f64 {
        LightLauncher::DRY_MASS
    }

    fn drag_coefficient(&self) -> f64 {
        self.drag_coefficient
    }

    fn reference_area(&self) -> f64 {
        LightLauncher.reference_area()
    }
}

// Monte-Carlo dispersion: several worker threads share one immutable
// atmosphere model and fly perturbed vehicles concurrently. The model needs
// no locks, and identical queries must come back bit-identical everywhere.
#[test]
fn dispersion_runs_share_one_atmosphere() {
    let atmosphere = Arc::new(AtmosphereModel::us_standard_1976());
    let probe_altitude = 10_000.0;

    let handles: Vec<_> = (0..8)
        .map(|seed| {
            let atmosphere = Arc::clone(&atmosphere);
            std::thread::spawn(move || {
                let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
                let vehicle = DispersedVehicle {
                    drag_coefficient: LightLauncher::C_D * rng.gen_range(0.85..1.15),
                };

                let liftoff = Epoch::from_gregorian_utc(2024, 6, 21, 12, 0, 0, 0);
                let mut state = AscentState::on_pad(&vehicle, liftoff);
                let dt = 0.1;
                let mass_flow = LightLauncher::mass_flow();

                for i in 0..600 {
                    state.mission_elapsed_time = i as f64 * dt;
                    let air = atmosphere.query(state.altitude_m()).expect("in-domain query");
                    let thrust = Some(state.position.normalize() * LightLauncher::THRUST);
                    let dynamics = AscentDynamics::new(&vehicle, thrust, mass_flow, air);
                    state = RK4::new(dynamics).integrate(&state, dt);
                }

                let altitude = state.altitude_m();
                assert!(
                    (5_000.0..40_000.0).contains(&altitude),
                    "60 s into the burn the vehicle is at {} m",
                    altitude
                );

                // Velocity never flips downward this early in the burn.
                assert!(state.velocity.dot(&state.position) > 0.0);

                atmosphere
                    .query(probe_altitude)
                    .expect("in-domain query")
                    .pressure_pa
                    .to_bits()
            })
        })
        .collect();

    let replies: Vec<u64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    let reference = atmosphere
        .query(probe_altitude)
        .expect("in-domain query")
        .pressure_pa
        .to_bits();
    for bits in replies {
        assert_eq!(bits, reference, "a thread observed a different atmosphere");
    }

    // Sanity on the shared constant used above.
    let expected_mass_flow = LightLauncher::THRUST / (G0 * LightLauncher::ISP);
    assert!((LightLauncher::mass_flow() - expected_mass_flow).abs() < 1e-12);
}
