pub mod analysis;
pub mod context;
pub mod document;
pub mod extraction;
