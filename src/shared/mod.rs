pub mod merge;
pub mod messages;
pub mod shutdown;
pub mod types;

pub use messages::MessageTable;
pub use shutdown::*;
pub use types::*;
