pub mod code_generator;
mod shorten_service;

pub use code_generator::{CodeGenerator, RandomCodeGenerator};
pub use shorten_service::{ShortenOutcome, ShortenService, ShortenSettings};
