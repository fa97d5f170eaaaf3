//! FlickUAC - RunAsInvoker compatibility-flag manager for Windows
//!
//! Lists the executables flagged with "RunAsInvoker" under the current
//! user's AppCompatFlags layers registry key, flags new executables chosen
//! through a file picker, removes flags, and reveals an entry's file
//! location in Explorer.
//!
//! Registry access is isolated behind the [`store::LayerStore`] capability
//! so the list-synchronization logic is testable without a live registry.

pub mod error;
#[cfg(windows)]
pub mod icon;
pub mod locale;
pub mod reveal;
pub mod store;

pub use error::FlickError;
