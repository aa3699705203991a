// Core modules implementing scanning, line consumption, loading, and error modeling.
pub mod cursor;
pub mod error;
pub mod line;
pub mod loader;
pub mod pow10;
pub mod scan;
