mod report_parser;

pub use report_parser::ReportParser;
