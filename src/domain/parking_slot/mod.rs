//! Parking slot aggregate
//!
//! Slots, the availability window and block re-aggregation.

pub mod model;
pub mod repository;

pub use model::{
    group_by_block, AvailableBlock, NewParkingSlot, ParkingSlot, ParkingSlotFilter,
    ParkingSlotPatch, TimeWindow,
};
pub use repository::ParkingSlotRepository;
