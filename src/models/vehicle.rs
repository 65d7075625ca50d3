pub trait VehicleProperties {
    /// Liftoff (wet) mass in kg.
    fn mass(&self) -> f64;
    /// Mass with all propellant burned, in kg.
    fn dry_mass(&self) -> f64;
    fn drag_coefficient(&self) -> f64;
    fn reference_area(&self) -> f64;
}
