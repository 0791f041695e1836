//! Turns a product record into FAQ, product and comparison page documents.
//!
//! ```no_run
//! use pagesmith::{Pipeline, RawProductRecord};
//!
//! let raw = RawProductRecord::from_json_str(r#"{"name": "GlowBoost Vitamin C Serum"}"#)?;
//! let pages = Pipeline::new().run(raw)?;
//! assert_eq!(pages.faq.content.total_questions, 16);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod output;
pub mod pipeline;
pub mod product;

pub use pipeline::{FinalPages, Pipeline, PipelineError};
pub use product::{NormalizedProduct, ProductError, RawProductRecord};
