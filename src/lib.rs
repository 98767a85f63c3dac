//! Policy-driven filename sanitization, validation, and batch advice.
//!
//! The engine is pure and stateless: every operation is a deterministic
//! function of a filename (or a list of them) and a [`FilenamePolicy`].
//! Nothing here touches the filesystem except the optional report writer.
//!
//! ```
//! use filepolicy::{sanitize_filename, validate_filename, FilenamePolicy};
//!
//! let policy = FilenamePolicy::strict();
//! assert_eq!(sanitize_filename("测试文件.mp4", &policy), "ceshi.mp4");
//! assert!(!validate_filename("my file.mp4", &policy).is_valid);
//! ```

pub mod advice;
pub mod core;
pub mod patterns;
pub mod policy;
pub mod report;
pub mod sanitize;
pub mod transliterate;
pub mod validate;

// Re-export commonly used types and entry points
pub use crate::core::{
    Advice, BatchAnalysis, BatchSummary, PolicyRecommendations, Severity, ValidationResult,
};

pub use crate::advice::{advise, analyze_batch};
pub use crate::policy::FilenamePolicy;
pub use crate::report::{format_batch_report, to_json, write_report};
pub use crate::sanitize::{sanitize_filename, FALLBACK_NAME};
pub use crate::validate::validate_filename;
