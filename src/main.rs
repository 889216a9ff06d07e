use std::{fs::read_to_string, path::PathBuf, process::exit, rc::Rc, time::Instant};

use clap::{Parser, ValueEnum};
use csubset::{
    ast::dot::to_dot, lexer::lexer::tokenize, parser::parser::parse, render_error,
};
use log::info;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Emit {
    /// Debug dump of the tree
    Ast,
    /// The program printed back as source
    Source,
    /// One s-expression per program
    Sexpr,
    /// Graphviz digraph
    Dot,
}

#[derive(Parser)]
#[command(version, about = "Parses a C subset into an abstract syntax tree")]
struct Opts {
    file: PathBuf,

    #[arg(long, value_enum, default_value = "ast")]
    emit: Emit,

    /// Print the token stream before parsing
    #[arg(long)]
    tokens: bool,
}

fn main() {
    env_logger::init();
    let opts = Opts::parse();

    let file_name = opts
        .file
        .file_name()
        .map_or_else(|| opts.file.to_string_lossy(), |name| name.to_string_lossy())
        .into_owned();

    let source = match read_to_string(&opts.file) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("csubset: cannot read {}: {}", opts.file.display(), error);
            exit(2);
        }
    };

    let start = Instant::now();

    let tokens = match tokenize(source.clone(), Some(file_name.clone())) {
        Ok(tokens) => tokens,
        Err(error) => {
            eprintln!("{}", render_error(&error, &source));
            exit(1);
        }
    };
    info!("tokenized in {:?}", start.elapsed());

    if opts.tokens {
        for token in &tokens {
            println!("{}", token);
        }
    }

    let parse_start = Instant::now();
    let program = match parse(tokens, Rc::new(file_name)) {
        Ok(program) => program,
        Err(error) => {
            eprintln!("{}", render_error(&error, &source));
            exit(1);
        }
    };
    info!("parsed in {:?}", parse_start.elapsed());

    match opts.emit {
        Emit::Ast => println!("{:#?}", program),
        Emit::Source => print!("{}", program),
        Emit::Sexpr => println!("{}", program.sexpr()),
        Emit::Dot => println!("{}", to_dot(&program)),
    }
}
