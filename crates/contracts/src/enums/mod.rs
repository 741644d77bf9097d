pub mod report_period;
pub mod report_type;

pub use report_period::ReportPeriod;
pub use report_type::ReportType;
