//! Core library for bmi-calc.
//!
//! This crate turns raw height and weight text into a Body Mass Index and a
//! named category. It holds no state and depends on no presentation layer:
//! callers pass the current text of both fields and render whatever comes
//! back, or nothing when the result is absent.
//!
//! # Modules
//!
//! - [`parse`] - Free-text numeric input parsing
//! - [`calculator`] - BMI arithmetic and measurement validity
//! - [`category`] - Category band table and classification
//! - [`assessment`] - The full parse → calculate → classify pipeline
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use bmi_calc_core::{Category, assess};
//!
//! let result = assess("150", "40").expect("both fields are valid");
//! assert_eq!(result.category, Category::MildThinness);
//! println!("BMI: {:.2} ({})", result.bmi, result.category);
//!
//! // Empty or invalid fields produce no result rather than an error.
//! assert!(assess("abc", "60").is_none());
//! ```
#![deny(unsafe_code)]

pub mod assessment;
pub mod calculator;
pub mod category;
pub mod config;
pub mod error;
pub mod parse;

pub use assessment::{Assessment, Measurements, assess};
pub use calculator::calculate_bmi;
pub use category::{Category, CategoryBand, classify};
pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use error::{ConfigError, ConfigResult};
pub use parse::parse_number;
