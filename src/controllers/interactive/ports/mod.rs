//! Port definitions for the render scheduler.
//!
//! Contains the trait the scheduler uses to hand results to the UI layer.

pub mod presenter_port;
