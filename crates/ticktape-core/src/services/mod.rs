//! Per-domain views over [`crate::PolygonClient`].
//!
//! Each service borrows the client and only shapes paths and query strings;
//! transport, auth, and status mapping live in [`crate::PolygonClient::get_json`].

mod options;
mod reference;
mod stocks;

pub use options::OptionsService;
pub use reference::ReferenceService;
pub use stocks::StocksService;
