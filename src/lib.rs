// Re-export modules
pub mod config;
pub mod error;
pub mod export;
pub mod formats;
pub mod results;
pub mod utils;

// Re-export commonly used types for convenience
pub use error::FormatError;
pub use export::{Destination, Export};
pub use formats::{Formatter, lookup};
pub use results::{Crawl, Page};
