pub mod commands;
pub mod report;
pub mod review_form;
pub mod session;

pub use report::{IssueReport, ReportCategory, ReportPanel, REPORT_ACK_DURATION};
pub use review_form::ReviewDraft;
pub use session::DetailSession;
