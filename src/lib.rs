//! Purpose: Shared core library crate used by the `rowscan` CLI and tests.
//! Exports: `core` (cursor, scanners, line processor, loaders, errors).
//! Role: Internal library backing the binary; not a stable public SDK.
//! Invariants: Treat the crate API as internal until a dedicated library release.
//! Invariants: Core modules prefer explicit inputs/outputs over hidden state.
pub mod core;

#[doc(hidden)]
pub use crate::core::error::to_exit_code;
pub use crate::core::error::{Error, ErrorKind};
pub use crate::core::loader::{load_rows, Strategy};
pub use crate::core::pow10::Pow10Cache;
pub use crate::core::scan::scan_number;
