// src/core.rs
pub mod aggregate;
pub mod collect;
pub mod decode;
pub mod tokenizer;
