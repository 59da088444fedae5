//! The two knowledge-base rewrites (C3, C4) that reshape a [`Framework`]
//! into the normal forms the argument deriver (C5) and attack calculator
//! (C6) require: non-circular (acyclic rule dependencies) and atomic (every
//! rule premise is an assumption).
//!
//! [`Framework`]: crate::framework::Framework

pub mod atomic;
pub mod non_circular;

pub use atomic::{atomize, AtomicMetadata};
pub use non_circular::{non_circularize, NonCircularMetadata};
