pub mod keys;
pub mod similarity;
pub mod vocabulary;
