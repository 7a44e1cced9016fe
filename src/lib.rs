//! # urlvet
//!
//! Command-line front end for a remote URL validation service. The binary
//! resolves configuration, posts the URL to `<base>/validate` through
//! [`urlvet_client::ValidationClient`] and prints whatever the service
//! returns.
//!
//! ```bash
//! # Default service at http://localhost:5005
//! urlvet https://example.com
//!
//! # Another service, body only
//! urlvet --base-url http://validator.internal:8080 --json https://example.com
//! ```
//!
//! Long-lived defaults belong in `urlvet.toml`:
//!
//! ```toml
//! [client]
//! base_url = "http://validator.internal:8080"
//! request_timeout_secs = 30
//! ```
//!
//! ## Workspace layout
//!
//! - `urlvet-client/` holds the validation client, its response and error types.
//! - `urlvet-config/` holds the layered TOML loader.
//! - `src/` is the thin CLI on top of both.

pub mod cli;
pub mod output;
pub mod startup;
