use crate::constants::R_EARTH;
use crate::models::vehicle::VehicleProperties;
use hifitime::Epoch;
use nalgebra as na;

/// Integrable 3-DOF point-mass state of the ascending vehicle. Mass is part
/// of the state because propellant depletes while the engine burns.
#[derive(Debug)]
pub struct AscentState<'a, T: VehicleProperties> {
    pub vehicle: &'a T,

    // Translational state in the launch inertial frame
    pub position: na::Vector3<f64>,
    pub velocity: na::Vector3<f64>,
    pub mass: f64,

    // Time properties
    pub epoch: Epoch,
    pub mission_elapsed_time: f64,
}

impl<'a, T: VehicleProperties> AscentState<'a, T> {
    /// Vehicle at rest on the pad, placed on the surface along +x.
    pub fn on_pad(vehicle: &'a T, epoch: Epoch) -> Self {
        AscentState {
            vehicle,
            position: na::Vector3::new(R_EARTH, 0.0, 0.0),
            velocity: na::Vector3::zeros(),
            mass: vehicle.mass(),
            epoch,
            mission_elapsed_time: 0.0,
        }
    }

    /// All-zero derivative accumulator for the integrator.
    pub fn derivative_zero(vehicle: &'a T, epoch: Epoch) -> Self {
        AscentState {
            vehicle,
            position: na::Vector3::zeros(),
            velocity: na::Vector3::zeros(),
            mass: 0.0,
            epoch,
            mission_elapsed_time: 0.0,
        }
    }

    pub fn altitude_m(&self) -> f64 {
        self.position.magnitude() - R_EARTH
    }
}

impl<'a, T: VehicleProperties> std::ops::Add for AscentState<'a, T> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        AscentState {
            vehicle: self.vehicle,
            position: self.position + other.position,
            velocity: self.velocity + other.velocity,
            mass: self.mass + other.mass,
            epoch: self.epoch,
            mission_elapsed_time: self.mission_elapsed_time + other.mission_elapsed_time,
        }
    }
}

impl<'a, T: VehicleProperties> std::ops::Mul<f64> for AscentState<'a, T> {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        AscentState {
            vehicle: self.vehicle,
            position: self.position * scalar,
            velocity: self.velocity * scalar,
            mass: self.mass * scalar,
            epoch: self.epoch,
            mission_elapsed_time: self.mission_elapsed_time * scalar,
        }
    }
}

impl<'a, T: VehicleProperties> Clone for AscentState<'a, T> {
    fn clone(&self) -> Self {
        AscentState {
            vehicle: self.vehicle,
            position: self.position,
            velocity: self.velocity,
            mass: self.mass,
            epoch: self.epoch,
            mission_elapsed_time: self.mission_elapsed_time,
        }
    }
}
