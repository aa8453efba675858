pub mod ast;
pub mod error;
pub mod executor;
pub mod integration;
pub mod parser;
pub mod report;
pub mod session;
pub mod storage;
pub mod tokenizer;

pub use ast::*;
pub use error::*;
pub use executor::*;
pub use integration::*;
pub use parser::*;
pub use report::*;
pub use session::*;
pub use storage::*;
pub use tokenizer::*;
