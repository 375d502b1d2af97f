//! Reactive value primitives shared by the state modules.

pub mod observable;

pub use observable::{Observable, SubscriptionId};
