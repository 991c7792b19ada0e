pub mod model;
pub mod repository;

pub use model::{Block, BlockFilter, BlockPatch, NewBlock};
pub use repository::BlockRepository;
