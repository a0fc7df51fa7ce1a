pub mod batch;
pub mod cli;
pub mod error;
pub mod normalizer;
pub mod read;
pub mod report;
pub mod tokenizer;
