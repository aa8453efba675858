use crate::executor::Engine;
use crate::parser::Parser;
use crate::report::{self, Reply};
use crate::tokenizer::tokenize;

/// The single entry point a front end calls: one instruction string in, one
/// reply out. Errors never propagate; each becomes a report line and the
/// caller reads the next instruction.
pub fn run_instruction(engine: &mut Engine, instruction: &str) -> Reply {
    // Step 1: Tokenization - split the instruction into tokens
    let tokens = tokenize(instruction);

    // Step 2: Parsing - turn the tokens into a statement
    let mut parser = Parser::new(tokens);
    let statement = match parser.parse() {
        Ok(Some(statement)) => statement,
        Ok(None) => return Reply::Silent,
        Err(error) => return report::render_error(&error),
    };

    // Step 3: Execution - translate the statement into filesystem operations
    match engine.execute(statement) {
        Ok(outcome) => report::render_outcome(outcome),
        Err(error) => report::render_error(&error),
    }
}
