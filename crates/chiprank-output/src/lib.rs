#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/chiprank/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod chart;
pub mod export;
pub mod table;

pub use chart::{ChartConfig, ChartError, render_score_chart};
pub use export::{ExportError, ExportFormat, Exporter, RankingRow};
pub use table::format_ranking_table;
