// Dashboard handlers (d100)
pub mod d100_financial_report;
