use super::drag::drag_force;
use super::gravity::gravity_acceleration;
use crate::atmosphere::AtmosphericState;
use crate::models::state::AscentState;
use crate::models::vehicle::VehicleProperties;
use nalgebra as na;

pub trait EquationsOfMotion {
    type State;

    fn compute_derivative(&self, state: &Self::State) -> Self::State;
}

/// Point-mass translational dynamics for the ascent: gravity, optional
/// thrust with the matching propellant flow, and drag from the atmospheric
/// state sampled once for this step (frozen across the RK4 substages).
pub struct AscentDynamics<'a, T: VehicleProperties> {
    vehicle: &'a T,
    thrust: Option<na::Vector3<f64>>,
    mass_flow_kg_s: f64,
    air: AtmosphericState,
}

impl<'a, T: VehicleProperties> AscentDynamics<'a, T> {
    pub fn new(
        vehicle: &'a T,
        thrust: Option<na::Vector3<f64>>,
        mass_flow_kg_s: f64,
        air: AtmosphericState,
    ) -> Self {
        Self {
            vehicle,
            thrust,
            mass_flow_kg_s,
            air,
        }
    }
}

impl<'a, T: VehicleProperties> EquationsOfMotion for AscentDynamics<'a, T> {
    type State = AscentState<'a, T>;

    fn compute_derivative(&self, state: &Self::State) -> Self::State {
        let mut derivative = AscentState::derivative_zero(self.vehicle, state.epoch);

        // Position derivative is velocity
        derivative.position = state.velocity;

        // Velocity derivative (gravity + drag + thrust)
        derivative.velocity = gravity_acceleration(&state.position)
            + drag_force(self.vehicle, &self.air, &state.velocity) / state.mass;
        if let Some(thrust) = &self.thrust {
            derivative.velocity += thrust / state.mass;
            derivative.mass = -self.mass_flow_kg_s;
        }

        derivative
    }
}
