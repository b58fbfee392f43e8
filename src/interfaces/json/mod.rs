pub mod extraction_parser;
pub mod report;
