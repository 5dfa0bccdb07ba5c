pub mod api_docs;
pub mod fleet;
