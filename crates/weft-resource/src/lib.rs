//! Request-scoped async resources.
//!
//! A `Resource` starts its computation the moment it is created and
//! memoizes the outcome for every read, across every clone.

mod resource;

pub use resource::*;
