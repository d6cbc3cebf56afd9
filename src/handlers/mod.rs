//! HTTP handlers for application intake.

pub mod applications;
pub use applications::*;
