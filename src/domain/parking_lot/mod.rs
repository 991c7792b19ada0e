//! Parking lot aggregate

pub mod model;
pub mod repository;

pub use model::{NewParkingLot, ParkingLot, ParkingLotFilter, ParkingLotPatch};
pub use repository::ParkingLotRepository;
