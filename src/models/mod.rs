//! Wire messages of the Alidns `2015-01-09` API.
//!
//! Every message is a plain struct. Scalar and nested fields are optional
//! and unset ones are left out of the wire map entirely. List fields are
//! plain `Vec`s that decode as empty when the key is missing. Field names
//! map to PascalCase wire keys, with explicit renames where the API spells
//! a key irregularly (`RR`, `TTL`, `endDate`, ...).

pub mod batch;
pub mod common;
pub mod dns_gtm;
pub mod domain;
pub mod group;
pub mod gtm;
pub mod instance;
pub mod line;
pub mod record;
pub mod tag;

pub use batch::*;
pub use common::*;
pub use dns_gtm::*;
pub use domain::*;
pub use group::*;
pub use gtm::*;
pub use instance::*;
pub use line::*;
pub use record::*;
pub use tag::*;
