mod ast;
mod error;
mod executor;
mod integration;
mod parser;
mod report;
mod session;
mod storage;
mod tokenizer;

use executor::Engine;
use integration::run_instruction;
use report::{Reply, SHELL_PREFIX};
use std::env;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

fn main() {
    println!("\nflatbase version {}", env!("CARGO_PKG_VERSION"));
    println!("Enter \".EXIT\" to exit the program.");

    let args: Vec<String> = env::args().skip(1).collect();
    let mut engine = Engine::new(".");

    match args.len() {
        0 => run_prompt(&mut engine),
        1 => run_batch(&mut engine, &args[0]),
        _ => {
            println!("\n{SHELL_PREFIX}Improper usage. Usage is of the form:\n\n\t\tflatbase [FILE]\n");
        }
    }
}

fn run_prompt(engine: &mut Engine) {
    loop {
        print!("\n{SHELL_PREFIX}");
        io::stdout().flush().unwrap();

        let mut instruction = String::new();
        match io::stdin().read_line(&mut instruction) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }

        match run_instruction(engine, instruction.trim()) {
            Reply::Output(line) => println!("{line}"),
            Reply::Silent => {}
            Reply::Exit => break,
        }
    }
}

fn run_batch(engine: &mut Engine, path: &str) {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(_) => {
            println!("\n{SHELL_PREFIX}File not found! Please restart and try again.");
            return;
        }
    };

    println!("\nReading from file {path} ...\n");

    for line in BufReader::new(file).lines() {
        let line = match line {
            Ok(line) => line,
            Err(_) => break,
        };
        match run_instruction(engine, line.trim()) {
            Reply::Output(report) => println!("{report}"),
            Reply::Silent => {}
            Reply::Exit => break,
        }
    }
}
