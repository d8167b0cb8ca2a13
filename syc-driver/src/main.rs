//! SysY Compiler Driver
//!
//! Reads one SysY source file, lowers it to IR, and writes the rendered
//! text to the output file. Diagnostics go to stderr; only an unopenable
//! file or unparseable input is fatal.

use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};
use syc_common::CompilerError;
use syc_frontend::Frontend;

#[derive(Parser)]
#[command(name = "syc")]
#[command(about = "SysY Compiler - lowers SysY source to textual IR")]
#[command(version = "0.1.0")]
struct Cli {
    /// Input SysY source file
    input: PathBuf,

    /// Output IR file
    output: PathBuf,

    /// Print the generated IR to stdout as well
    #[arg(long)]
    print_ir: bool,

    /// Dump the parsed AST as JSON to the given file
    #[arg(long)]
    dump_ast: Option<PathBuf>,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = compile_file(&cli.input, &cli.output, cli.print_ir, cli.dump_ast.as_deref()) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn compile_file(
    input: &Path,
    output: &Path,
    print_ir: bool,
    dump_ast: Option<&Path>,
) -> Result<(), CompilerError> {
    let source = fs::read_to_string(input).map_err(|e| CompilerError::IoError {
        message: format!("Could not open input file {}: {}", input.display(), e),
    })?;

    if let Some(ast_path) = dump_ast {
        let ast = Frontend::parse_source(&source)?;
        let json = serde_json::to_string_pretty(&ast).map_err(|e| CompilerError::IoError {
            message: format!("Could not serialize AST: {}", e),
        })?;
        fs::write(ast_path, json).map_err(|e| CompilerError::IoError {
            message: format!("Could not open output file {}: {}", ast_path.display(), e),
        })?;
    }

    let (module, reporter) = Frontend::compile_to_ir(&source)?;

    reporter.print_diagnostics();
    if !reporter.diagnostics().is_empty() {
        eprintln!("{}", reporter.summary());
    }

    let ir_text = format!("{}", module);
    if print_ir {
        print!("{}", ir_text);
    }

    fs::write(output, &ir_text).map_err(|e| CompilerError::IoError {
        message: format!("Could not open output file {}: {}", output.display(), e),
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("syc-{}-{}", std::process::id(), name));
        path
    }

    #[test]
    fn test_compile_file_end_to_end() {
        let input = temp_path("ok.sy");
        let output = temp_path("ok.ll");
        fs::write(&input, "int main() { return 0; }").unwrap();

        compile_file(&input, &output, false, None).unwrap();

        let text = fs::read_to_string(&output).unwrap();
        assert!(text.starts_with("declare i32 @getint()"));
        assert!(text.contains("define i32 @main()"));

        fs::remove_file(&input).ok();
        fs::remove_file(&output).ok();
    }

    #[test]
    fn test_missing_input_is_an_error() {
        let input = temp_path("does-not-exist.sy");
        let output = temp_path("unused.ll");
        assert!(compile_file(&input, &output, false, None).is_err());
    }

    #[test]
    fn test_unparseable_input_is_an_error() {
        let input = temp_path("bad.sy");
        let output = temp_path("bad.ll");
        fs::write(&input, "int main( {").unwrap();

        assert!(compile_file(&input, &output, false, None).is_err());

        fs::remove_file(&input).ok();
    }

    #[test]
    fn test_dump_ast_writes_json() {
        let input = temp_path("ast.sy");
        let output = temp_path("ast.ll");
        let ast_out = temp_path("ast.json");
        fs::write(&input, "int main() { return 1; }").unwrap();

        compile_file(&input, &output, false, Some(&ast_out)).unwrap();

        let json = fs::read_to_string(&ast_out).unwrap();
        assert!(json.contains("\"main\""));

        fs::remove_file(&input).ok();
        fs::remove_file(&output).ok();
        fs::remove_file(&ast_out).ok();
    }
}
