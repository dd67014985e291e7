//! # Shell Types
//!
//! This crate defines the fundamental types shared across the Caddis host
//! shell.
//!
//! ## Philosophy
//!
//! - **Explicit over implicit**: Identities are typed and cannot be confused.
//! - **Opaque identifiers**: IDs carry no structure callers may depend on.
//! - **Validated at the edge**: Application identity values are checked when
//!   they enter the system, not every time they are used.
//!
//! ## Key Types
//!
//! - [`SurfaceId`]: Unique identifier for a render surface
//! - [`SubscriptionId`]: Unique identifier for a push subscription
//! - [`AppId`]: Reverse-DNS application identity
//! - [`AppKey`]: Push-notification application key

pub mod app;
pub mod ids;

pub use app::{AppId, AppIdError, AppKey, AppKeyError};
pub use ids::{SubscriptionId, SurfaceId};
