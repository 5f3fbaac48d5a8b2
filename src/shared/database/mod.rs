// Database module
pub mod connection;
pub mod constraint;
pub mod memory;
pub mod repositories;

pub use connection::*;
pub use constraint::*;
pub use memory::*;
pub use repositories::*;
