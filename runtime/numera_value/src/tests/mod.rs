//! Test modules relocated from implementation files.
//!
//! Inline test modules that outgrow their host file live here instead,
//! one file per subject area.
