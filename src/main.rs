use crate::analysis::SemanticAnalyzer;
use crate::codegen::{CGenerator, LuaGenerator};
use crate::config::Config;
use crate::error::CompilerError;
use crate::lexer::Lexer;
use crate::parser::Parser;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser as ClapParser;

mod analysis;
mod codegen;
mod config;
mod error;
mod lexer;
mod listing;
mod parser;
mod toolchain;
mod token;

#[derive(ClapParser)]
#[command(version, about = "Zilla source-to-source compiler")]
struct Cli {
    /// Source file to compile
    source: PathBuf,

    /// Emit a Lua script instead of a C program
    #[arg(long)]
    lua: bool,

    /// Build and run the generated program after compiling
    #[arg(long)]
    run: bool,

    /// Write a tokens.txt listing of the token stream
    #[arg(long)]
    tokens: bool,
}

/// Runs the pipeline in pass order: lex, optional token listing, parse,
/// analyze, generate, delegate to the target's toolchain. The first error
/// of any kind aborts; nothing downstream of a failed pass runs.
fn compile(cli: &Cli, config: &Config) -> Result<(), CompilerError> {
    let source = fs::read_to_string(&cli.source)?;

    let tokens = Lexer::new(&source).tokenize()?;

    if cli.tokens {
        fs::write("tokens.txt", listing::render(&tokens))?;
    }

    Parser::new(&tokens).parse()?;
    SemanticAnalyzer::new().analyze(&tokens)?;

    let output_file = config.output_file(cli.lua);
    if cli.lua {
        fs::write(&output_file, LuaGenerator::new().generate(&tokens))?;
        toolchain::build_lua(config, cli.run)?;
    } else {
        fs::write(&output_file, CGenerator::new().generate(&tokens))?;
        toolchain::build_c(config, cli.run)?;
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = Config::load();

    match compile(&cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
