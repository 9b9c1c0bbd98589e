use std::{env, fs::read_to_string, process::exit, rc::Rc, time::Instant};

use rhl::{display_error, lexer::lexer::tokenize, parser::parser::parse};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("Usage: {} <input_path>", args[0]);
        exit(1);
    }

    let file_path: &str = &args[1];
    let file_name = if file_path.contains('/') {
        file_path.split('/').last().unwrap()
    } else {
        file_path
    };

    let source = read_to_string(file_path).expect("Failed to read file!");
    let file = Rc::new(String::from(file_name));

    let start = Instant::now();

    let tokens = match tokenize(source.clone(), Rc::clone(&file)) {
        Ok(tokens) => tokens,
        Err(error) => {
            display_error(&error, &source);
            exit(1);
        }
    };

    println!("Tokenized in {:?}", start.elapsed());

    let parse_start = Instant::now();

    let program = match parse(tokens, file) {
        Ok(program) => program,
        Err(error) => {
            display_error(&error, &source);
            exit(1);
        }
    };

    println!("Parsed in {:?}", parse_start.elapsed());
    println!("Total time: {:?}", start.elapsed());

    println!("{:#?}", program);
}
