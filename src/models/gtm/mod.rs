//! Global Traffic Manager, first generation API (`*Gtm*` actions).

mod access_strategy;
mod address_pool;
mod instance;
mod monitor;
mod recovery_plan;

pub use access_strategy::*;
pub use address_pool::*;
pub use instance::*;
pub use monitor::*;
pub use recovery_plan::*;
