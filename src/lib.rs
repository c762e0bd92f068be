#![no_std]

// Export the logging macros for either defmt or log
#[macro_use]
pub mod logging;

pub mod consts;
pub mod hw_abstraction;
pub mod patterns;
pub mod signals;
pub mod tasks;
pub mod types;

// Re-exported for implementors
pub use embassy_futures;
pub use embassy_sync;
pub use embassy_time;
