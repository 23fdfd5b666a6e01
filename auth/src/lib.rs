//! Authentication utilities library
//!
//! Provides the identity core shared by the API service:
//! - Deterministic credential hashing (salted SHA-256)
//! - Signed session token issuance and verification (JWT, HS256)
//!
//! The service defines its own ports around these primitives; keeping
//! them in a separate crate keeps the domain free of crypto details.
//!
//! # Examples
//!
//! ## Credential Hashing
//! ```
//! use auth::{CredentialHasher, Sha256Hasher};
//!
//! let hasher = Sha256Hasher::new("deployment-wide-salt");
//! let digest = hasher.hash("my_password");
//! assert_eq!(digest, hasher.hash("my_password"));
//! ```
//!
//! ## Session Tokens
//! ```
//! use auth::TokenCodec;
//! use chrono::{Duration, Utc};
//!
//! let codec = TokenCodec::new(b"secret_key_at_least_32_bytes_long!", Duration::hours(12));
//! let now = Utc::now();
//! let token = codec.issue(42, now).unwrap();
//! assert_eq!(codec.verify(&token, now).unwrap(), 42);
//! ```

pub mod hasher;
pub mod token;

// Re-export commonly used items
pub use hasher::CredentialHasher;
pub use hasher::Sha256Hasher;
pub use token::Claims;
pub use token::TokenCodec;
pub use token::TokenError;
