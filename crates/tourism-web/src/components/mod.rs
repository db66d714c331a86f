pub mod examples;
pub mod header;
pub mod query_bar;
pub mod result_panel;
