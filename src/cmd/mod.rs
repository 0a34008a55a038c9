pub mod client;
pub mod doc_id;
pub mod grid;
pub mod tables;
