#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/chiprank/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod error;
pub mod snapshot;
pub mod yahoo;

pub use error::{DataError, Result};
pub use snapshot::{CompanyRecord, NormalizeReport, SchemaMapping, Snapshot, SnapshotRow};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
