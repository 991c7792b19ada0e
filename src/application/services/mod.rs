//! Application services

mod auth;
mod block;
mod company;
mod favorite;
mod parking_lot;
mod parking_slot;
mod ticket;
mod time_frame;
mod user;
mod vehicle;

pub use auth::{AccessToken, AuthService, AuthSettings, LoginResult};
pub use block::BlockService;
pub use company::{CompanyLogin, CompanyService};
pub use favorite::FavoriteService;
pub use parking_lot::ParkingLotService;
pub use parking_slot::ParkingSlotService;
pub use ticket::{CreateTicket, Extension, TicketService};
pub use time_frame::TimeFrameService;
pub use user::UserService;
pub use vehicle::VehicleService;
