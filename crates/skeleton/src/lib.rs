//! # Skeleton Crate
//!
//! Converts the raw Ali-CCP "sample skeleton" click/conversion log into a
//! flat CSV suitable for model training.
//!
//! ## Main Components
//!
//! - **types**: format constants and the record/selection/summary types
//! - **parser**: split raw lines and decode the nested feature blob
//! - **miner**: rank feature ids by frequency over a bounded input prefix
//! - **transform**: the one- or two-pass streaming driver
//! - **error**: error types for preprocessing
//!
//! ## Example Usage
//!
//! ```ignore
//! use skeleton::{transform_basic, transform_enhanced};
//! use std::path::Path;
//!
//! // Basic: label,user_id,item_id, capped at 100k rows
//! let summary = transform_basic(
//!     Path::new("sample_skeleton_train.csv"),
//!     Path::new("ali_ccp_train_small.csv"),
//!     Some(100_000),
//! )?;
//! println!("wrote {} rows", summary.rows_written);
//!
//! // Enhanced: adds the top-5 most frequent feature columns
//! let summary = transform_enhanced(
//!     Path::new("sample_skeleton_train.csv"),
//!     Path::new("ali_ccp_train_full.csv"),
//!     None,
//! )?;
//! ```

// Public modules
pub mod error;
pub mod miner;
pub mod parser;
pub mod transform;
pub mod types;

// Re-export commonly used items for convenience
pub use error::{PrepError, Result};
pub use miner::mine_top_features;
pub use transform::{transform_basic, transform_enhanced};
pub use types::{
    // Core types
    FeatureSelection,
    SampleRecord,
    TransformSummary,
    // Tuning constants
    MINING_SAMPLE_BOUND,
    MISSING_FEATURE_SENTINEL,
    PROGRESS_INTERVAL,
    TOP_K_FEATURES,
};
