//! Google Calendar v3 API layer.
//!
//! One typed async function per endpoint, all funneled through
//! [`GcalClient::request`], which normalizes every call into the uniform
//! [`ApiResult`] envelope. The authenticated transport sits behind the
//! [`Dispatch`] trait; nothing in this module ever sees the OAuth token.
//!
//! Ref: https://developers.google.com/calendar/api/v3/reference

mod client;
mod connection;
mod dispatch;
mod query;

pub mod calendar_list;
pub mod calendars;
pub mod events;
pub mod misc;

#[cfg(test)]
pub mod testing;

pub use client::{ApiResult, GcalClient};
pub use connection::{CONNECTION_NAME, Connection};
pub use dispatch::{Dispatch, DispatchError, DispatchOutcome, HttpDispatcher, HttpMethod, HttpRequest};
pub use query::{QueryParams, clamp_max_results};
