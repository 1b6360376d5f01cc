//! Reports module
//!
//! Read-only derivations over a club snapshot. Each report takes its
//! filter and the business date, returns typed rows and can be laid out
//! as a [`ReportDocument`] for export.

pub mod dashboard;
pub mod dues;
pub mod events;
pub mod export;
pub mod filter;
pub mod ledgers;
pub mod members;
pub mod minutes;
pub mod specialties;

pub use dashboard::{
    dashboard, member_finance, Dashboard, EnrollmentView, InstallmentView, MemberFinance,
};
pub use dues::{dues_report, DuesReport, DuesReportFilter, PaymentStanding};
pub use events::{event_report, EventReport, EventReportFilter};
pub use export::{Cell, Exportable, ReportDocument};
pub use filter::DateRange;
pub use ledgers::{
    asset_report, cash_report, cost_report, AssetReport, CashReport, CashReportFilter, CostReport,
    CostReportFilter,
};
pub use members::{member_report, MemberReport, MemberReportFilter};
pub use minutes::{minutes_report, MinutesReport, MinutesReportFilter};
pub use specialties::{specialty_report, SpecialtyReport, SpecialtyReportFilter};
