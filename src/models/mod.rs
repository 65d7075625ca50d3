pub mod state;
pub mod vehicle;

pub use state::AscentState;
pub use vehicle::VehicleProperties;
