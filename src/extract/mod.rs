// Free-text extraction of (value, source unit, target unit)

pub mod extractor;
pub mod request;
pub mod tokenizer;


pub use extractor::{extract, Extractor};
pub use request::ConversionRequest;
