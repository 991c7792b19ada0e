//! Database entities module

pub mod block;
pub mod company;
pub mod favorite;
pub mod long_term_ticket;
pub mod parking_lot;
pub mod parking_slot;
pub mod refresh_token;
pub mod ticket;
pub mod ticket_extend;
pub mod time_frame;
pub mod user;
pub mod vehicle;

pub use block::Entity as Block;
pub use company::Entity as Company;
pub use favorite::Entity as Favorite;
pub use long_term_ticket::Entity as LongTermTicket;
pub use parking_lot::Entity as ParkingLot;
pub use parking_slot::Entity as ParkingSlot;
pub use refresh_token::Entity as RefreshToken;
pub use ticket::Entity as Ticket;
pub use ticket_extend::Entity as TicketExtend;
pub use time_frame::Entity as TimeFrame;
pub use user::Entity as User;
pub use vehicle::Entity as Vehicle;
