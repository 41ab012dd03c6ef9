//! AOC HTTP Client Library
//!
//! Fetches personalized puzzle input from the Advent of Code website with a
//! single authenticated GET request.
//!
//! # Features
//!
//! - Puzzle input fetching for any year and day
//! - Secure TLS using rustls (no OpenSSL dependencies)
//! - Blocking synchronous API with a conservative request timeout
//! - Well-typed errors using thiserror
//!
//! # Example
//!
//! ```no_run
//! use aoc_http_client::AocClient;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = AocClient::new()?;
//!
//! // Your session cookie from adventofcode.com
//! let session = "your_session_cookie_here";
//!
//! let input = client.get_input(2022, 1, session)?;
//! println!("{} bytes", input.len());
//! # Ok(())
//! # }
//! ```

mod client;
mod error;

pub use client::{AocClient, AocClientBuilder, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use error::AocError;
