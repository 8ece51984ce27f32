//! Session state: the flows created so far.

pub mod store;

pub use store::FlowStore;
