//! The observable value store primitive.
//!
//! A [`Store`] holds one current value and notifies subscribers synchronously
//! on every write, decoupling producers from consumers.

mod store;

pub use store::{Store, Subscription};
