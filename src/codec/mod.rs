// src/codec/mod.rs

pub mod integer_token;
pub mod matrix_codec;

pub use matrix_codec::MatrixCodec;
