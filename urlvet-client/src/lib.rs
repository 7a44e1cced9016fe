//! Client for a remote URL validation service.
//!
//! [`ValidationClient::validate_url`] posts `{"url": ...}` to `<base>/validate`
//! and hands the service's reply back untouched. The client never retries,
//! never caches, and never reinterprets the body; decoding is left to the
//! caller through the helpers on [`ValidationResponse`].
//!
//! ```rust,no_run
//! use urlvet_client::ValidationClient;
//!
//! # async fn run() -> urlvet_client::ValidationResult<()> {
//! let client = ValidationClient::from_base_url("http://localhost:5005")?;
//! let response = client.validate_url("https://example.com").await?;
//! println!("{} {}", response.status(), response.text());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod report;
pub mod response;

pub use client::{VALIDATE_PATH, ValidateRequest, ValidationClient};
pub use error::{ValidationError, ValidationResult};
pub use report::{ServiceErrorBody, ValidationReport};
pub use response::ValidationResponse;
