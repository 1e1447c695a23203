pub mod quote;
pub mod record;
pub mod report;

pub use quote::Quote;
pub use record::{AnalysisRecord, LabelCounts};
pub use report::{AnalysisReport, AnalysisSummary};
