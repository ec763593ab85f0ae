//! Numera demonstration driver.
//!
//! An external caller of the value library: constructs concrete numbers,
//! registers listeners on both notification channels, invokes the virtual
//! operations through `&dyn Number`, and collects a printable transcript.
//! Nothing here extends the value model itself.

pub mod commands;
