pub mod ranking;
pub mod scoring;
pub mod selector;
