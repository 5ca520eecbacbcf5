#![forbid(unsafe_code)]

pub mod error;
pub mod grading;
pub mod model;
pub mod time;
pub mod wordlist;

pub use error::Error;
pub use time::Clock;
