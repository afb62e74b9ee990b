use crate::config::Config;
use crate::error::ToolchainError;
use std::process::Command;

/// External toolchain delegation: building and optionally running the
/// generated program. Not part of the compiler core; the core's only
/// obligation is that the text it wrote is valid input for these tools.

fn run(command: &str, args: &[&str]) -> Result<(), ToolchainError> {
    let status = Command::new(command)
        .args(args)
        .status()
        .map_err(|e| ToolchainError::new(command, e.to_string()))?;

    if !status.success() {
        return Err(ToolchainError::new(command, format!("exited with {status}")));
    }
    Ok(())
}

/// Compiles the emitted C file to a native executable, then optionally runs
/// it.
pub fn build_c(config: &Config, autorun: bool) -> Result<(), ToolchainError> {
    let source = config.output_file(false);
    let executable = config.executable_file();

    run(&config.c_compiler, &[&source, "-o", &executable])?;

    if autorun {
        run(&format!("./{executable}"), &[])?;
    }
    Ok(())
}

/// Compiles the emitted Lua file to bytecode, then optionally runs it.
pub fn build_lua(config: &Config, autorun: bool) -> Result<(), ToolchainError> {
    let source = config.output_file(true);

    run(&config.lua_compiler, &[&source])?;

    if autorun {
        run(&config.lua_runtime, &["luac.out"])?;
    }
    Ok(())
}
