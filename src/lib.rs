//! Blocking client for the ExoFOP TESS target catalog.
//!
//! Resolves target names to TIC identifiers and fetches target metadata
//! (ICRS coordinates, distance, proper motion, V magnitude, candidate
//! parameters) over single-shot HTTP GETs. Nothing is cached or persisted;
//! each call builds its result and hands it to the caller.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ExofopClient`]: the three catalog operations plus configuration |
//! | [`position`] | [`SkyPosition`] record at epoch J2015.5 with proper-motion propagation |
//! | [`distance`] | [`Distance`] in parsecs with the unknown-distance placeholder |
//! | [`retry`] | Wall-clock-bounded [`retry_with_deadline`](retry::retry_with_deadline) combinator |
//! | [`errors`] | [`ExofopError`] taxonomy and [`ExofopResult`] alias |
//!
//! # Quick Start
//!
//! ```no_run
//! use exofop_client::ExofopClient;
//!
//! let client = ExofopClient::new();
//! if let Some(tic) = client.resolve_tic_id("Pi Men") {
//!     if let Some((position, vmag)) = client.composite_info(tic) {
//!         println!("{} V={:?}", position, vmag);
//!     }
//! }
//! ```
//!
//! # Failure contract
//!
//! The public operations never return an error: every failure (transport,
//! HTTP status, malformed JSON, missing required fields, service-reported
//! rejection) is logged through the [`log`] facade and collapsed to `None`.
//! Callers that need the cause use the `try_*` variants, which perform a
//! single attempt and return [`ExofopResult`].

pub mod client;
pub mod distance;
pub mod errors;
pub mod position;
mod response;
pub mod retry;

pub use client::{
    ExofopClient, TicId, DEFAULT_REQUEST_TIMEOUT, DEFAULT_RETRY_BUDGET, EXOFOP_BASE_URL,
};
pub use distance::Distance;
pub use errors::{ExofopError, ExofopResult};
pub use position::{SkyPosition, J2015_5_JD};
pub use retry::{retry_with_deadline, Retryable};
