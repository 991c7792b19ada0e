pub mod blocks;
pub mod companies;
pub mod favorites;
pub mod health;
pub mod migration;
pub mod parking_lots;
pub mod parking_slots;
pub mod request_id;
pub mod tickets;
pub mod time_frames;
pub mod users;
pub mod vehicles;
