//! # Signalbox
//!
//! Observable value stores for sharing application state in Rust.
//!
//! Signalbox provides one reusable primitive and the wiring built on it:
//!
//! ## Store (the primitive)
//!
//! A [`Store<T>`] holds one current value. Subscribers receive the current
//! value immediately on subscription and every later value synchronously, in
//! subscription order. Every write notifies; there is no equality check.
//!
//! ## AppState (the wiring)
//!
//! [`AppState`] instantiates the five containers a front-end application
//! shares between its producers (wallet connector, theme toggle, task
//! management) and its consumers (UI components): two task lists, the
//! connected wallet address, and the theme and connection flags.
//!
//! ```
//! use signalbox::Store;
//!
//! let store = Store::new(0);
//! let sub = store.subscribe(|n| println!("value: {n}"));
//! store.set(42);
//! sub.unsubscribe();
//! ```

pub mod state;
pub mod store;

// Re-export main types for convenience
pub use state::AppState;
pub use store::{Store, Subscription};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() {
        // Basic smoke test
        let store = Store::new(0);
        assert_eq!(store.get(), 0);
        store.set(42);
        assert_eq!(store.get(), 42);
    }
}
