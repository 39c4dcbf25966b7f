//! Global Traffic Manager 2.0 (`*DnsGtm*` actions).

mod access_strategy;
mod address_pool;
mod instance;
mod monitor;

pub use access_strategy::*;
pub use address_pool::*;
pub use instance::*;
pub use monitor::*;
