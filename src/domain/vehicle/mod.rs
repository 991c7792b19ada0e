pub mod model;
pub mod repository;

pub use model::{NewVehicle, Vehicle, VehicleFilter, VehiclePatch};
pub use repository::VehicleRepository;
