pub mod config;
pub mod error;
pub mod logger;
pub mod utilities;

pub use error::LoggerError;

#[cfg(test)]
mod test_utilities;
