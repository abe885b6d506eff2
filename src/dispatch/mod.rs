//! Request dispatch subsystem — the core of the mock.
//!
//! # Data Flow
//! ```text
//! Validated /video/{id} request
//!     → handler.rs (parse id, check forceError overrides)
//!     → attempts.rs (race-free per-id attempt count)
//!     → catalog.rs (pick redirect URL, id mod table size)
//!     → deterministic response (202 / 307 / 429 / 404)
//! ```

pub mod attempts;
pub mod catalog;
pub mod handler;

pub use attempts::AttemptTracker;
pub use catalog::VideoCatalog;
pub use handler::{invalid_endpoint, video_request};
