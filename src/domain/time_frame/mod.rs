//! Time frame aggregate: duration-based pricing per parking lot

pub mod model;
pub mod repository;

pub use model::{common_parking_lot, NewTimeFrame, TimeFrame, TimeFramePatch};
pub use repository::TimeFrameRepository;
