pub mod report_writer;
pub mod selection_reader;
