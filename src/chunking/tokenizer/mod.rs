//! Tokenizer abstraction module

pub mod base;
pub mod huggingface;

pub use base::Tokenizer;
pub use huggingface::HuggingFaceTokenizer;
