//! Application layer: use cases over the domain repositories

pub mod services;

pub use services::{
    AccessToken, AuthService, AuthSettings, BlockService, CompanyLogin, CompanyService,
    CreateTicket, Extension, FavoriteService, LoginResult, ParkingLotService, ParkingSlotService,
    TicketService, TimeFrameService, UserService, VehicleService,
};
