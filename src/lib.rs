//! # cuit - Argentine tax identifier validation
//!
//! A CUIT (Clave Única de Identificación Tributaria) is an 11 digit
//! identifier conventionally written `DD-DDDDDDDD-D`, whose last digit is a
//! weighted modulo-11 checksum of the first ten.
//!
//! ## Modules
//!
//! - [`cuit`] - Normalization, parsing and the boolean [`validate_cuit`] check
//! - [`check_digit`] - The weighted modulo-11 checksum
//! - [`batch`] - Line-oriented checking of many candidates
//! - [`formatters`] - Text and JSON rendering of verdicts
//! - [`config`] - Layered YAML configuration for the CLI
//! - [`output`] - Mode-aware diagnostic messages
//!
//! ## Example
//!
//! ```
//! use cuit::{validate_cuit, Cuit, CuitError};
//!
//! assert!(validate_cuit("20-12345674-3"));
//! assert!(validate_cuit("20123456743"));
//! assert!(!validate_cuit("10-12345674-3"));
//!
//! assert_eq!(
//!     Cuit::parse("20-12345674-5"),
//!     Err(CuitError::CheckDigitMismatch { expected: 3, found: 5 })
//! );
//! ```

pub mod batch;
pub mod check_digit;
pub mod config;
pub mod cuit;
pub mod formatters;
pub mod output;
pub mod ui;

pub use crate::cuit::{normalize, validate_cuit, Cuit, CuitError, CuitKind};
