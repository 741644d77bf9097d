pub mod d100_financial_report;
