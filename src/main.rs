mod builtins;
mod config;
mod env;
mod error;
mod eval_expr;
mod exec;
mod highlighter;
mod http_adapter;
mod interpreter;
mod keywords;
mod modules;
mod routes;
mod sandbox;
mod stdlib;
mod value;

use clap::Parser;
use config::{HttpConfig, SandboxConfig, VERSION, WELCOME_MESSAGE, WELCOME_SUBTITLE};
use env::Scope;
use exec::{run_program, split_source_lines, Signal};
use highlighter::ExoHelper;
use interpreter::Interpreter;
use keywords::is_block_opener;
use rustyline::error::ReadlineError;
use rustyline::{Config, Editor};
use sandbox::Sandbox;
use std::io::Write as _;
use std::path::PathBuf;

/// Exo, a bilingual English/Arabic scripting language
#[derive(Parser, Debug)]
#[command(name = "exo")]
#[command(version = VERSION)]
#[command(about = "A bilingual English/Arabic scripting language interpreter")]
struct CliArgs {
    /// Script file to execute (optional — if not provided, starts the REPL)
    #[arg(value_name = "FILE")]
    script: Option<PathBuf>,

    /// Add an allowed filesystem path (can be repeated)
    #[arg(long = "fs-sandbox", value_name = "PATH", action = clap::ArgAction::Append)]
    fs_paths: Vec<PathBuf>,

    /// Maximum file size in bytes for sandboxed reads/writes
    #[arg(long = "max-file-size", value_name = "BYTES", default_value = "10485760")]
    max_file_size: usize,

    /// Port the HTTP adapter binds to, if the user starts it
    #[arg(long = "port", value_name = "PORT", default_value = "8000")]
    port: u16,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    let sandbox_config = build_sandbox_config(&args);
    let sandbox = Sandbox::new(sandbox_config)?;
    let current_dir = std::env::current_dir()?;
    let http_config = HttpConfig { port: args.port };

    match &args.script {
        Some(script_path) => run_script(script_path, sandbox, current_dir, http_config),
        None => run_repl(sandbox, current_dir),
    }
}

fn build_sandbox_config(args: &CliArgs) -> SandboxConfig {
    let allowed_paths = if args.fs_paths.is_empty() {
        SandboxConfig::default().allowed_paths
    } else {
        args.fs_paths.clone()
    };
    SandboxConfig {
        allowed_paths,
        max_file_size: args.max_file_size,
    }
}

/// Execute a script file, then — if it registered any routes — offer to
/// start the HTTP adapter (spec §6.3).
fn run_script(
    path: &PathBuf,
    sandbox: Sandbox,
    current_dir: PathBuf,
    http_config: HttpConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let source = std::fs::read_to_string(path)
        .map_err(|e| format!("Cannot read script file {}: {}", path.display(), e))?;

    let mut interp = Interpreter::new(sandbox, current_dir);
    interp.current_file = Some(path.display().to_string());

    let lines = split_source_lines(&source);
    let scope = Scope::new_global();
    // Procedures/routes declared at top level must be visible to each
    // other regardless of order, same as the global scope an import runs
    // a module body against.
    let scope = env::Scope::with_parent(scope, "script");

    if let Err(err) = run_program(&lines, &scope, &mut interp) {
        eprintln!("{}", interp.error(err));
        std::process::exit(1);
    }

    if !interp.routes.is_empty() {
        print!(
            "Routes registered: {:?}. Start HTTP adapter on port {}? [y/N] ",
            interp.routes.paths(),
            http_config.port
        );
        std::io::stdout().flush()?;
        let mut answer = String::new();
        std::io::stdin().read_line(&mut answer)?;
        if answer.trim().eq_ignore_ascii_case("y") {
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(http_adapter::serve(interp, http_config.port))?;
        }
    }

    Ok(())
}

fn run_repl(sandbox: Sandbox, current_dir: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let mut interp = Interpreter::new(sandbox, current_dir);
    let scope = env::Scope::with_parent(Scope::new_global(), "repl");

    let rl_config = Config::builder().auto_add_history(true).build();
    let mut rl =
        Editor::with_config(rl_config).map_err(|e| format!("Failed to initialize REPL: {}", e))?;
    rl.set_helper(Some(ExoHelper::new()));

    let history_file = ".exo_history";
    let _ = rl.load_history(history_file);

    println!("{}", WELCOME_MESSAGE);
    println!("{}", WELCOME_SUBTITLE);

    loop {
        let readline = rl.readline("exo> ");
        match readline {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                match line.trim() {
                    "exit" | "quit" | "خروج" => {
                        println!("Goodbye!");
                        break;
                    }
                    "clear" => {
                        print!("\x1B[2J\x1B[H");
                        continue;
                    }
                    _ => {}
                }

                let source = collect_block(&mut rl, &line);
                let lines = split_source_lines(&source);
                match run_program(&lines, &scope, &mut interp) {
                    Ok(value::Value::Null) => {}
                    Ok(result) => println!("{}", result),
                    Err(err) => eprintln!("{}", interp.error(err)),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("\nGoodbye!");
                break;
            }
            Err(err) => {
                eprintln!("Error: {}", err);
                break;
            }
        }
    }

    let _ = rl.save_history(history_file);
    Ok(())
}

/// If `first_line` opens a block (`func`/`if`/`while`/`for`/`route` and
/// their Arabic aliases), keeps reading lines at the `... ` continuation
/// prompt until the matching `end`/`نهاية` is seen, so a multi-line
/// construct can be entered interactively as one unit.
fn collect_block(rl: &mut Editor<ExoHelper, rustyline::history::DefaultHistory>, first_line: &str) -> String {
    let first_word = keywords::leading_word(first_line.trim_start());
    if !is_block_opener(first_word) {
        return first_line.to_string();
    }

    // An inline block (spec §4.4's `for i in range(1, 5) s = s + i end` form)
    // can already close itself on this one line, in which case no
    // continuation prompt is needed at all.
    let mut depth = exec::net_depth(first_line);
    if depth <= 0 {
        return first_line.to_string();
    }

    let mut source = first_line.to_string();
    while depth > 0 {
        let next = match rl.readline("... ") {
            Ok(line) => line,
            Err(_) => break,
        };
        depth += exec::net_depth(&next);
        source.push('\n');
        source.push_str(&next);
    }
    source
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_sandbox_config_uses_defaults_when_no_paths_given() {
        let args = CliArgs {
            script: None,
            fs_paths: vec![],
            max_file_size: 10485760,
            port: 8000,
        };
        let config = build_sandbox_config(&args);
        assert_eq!(config.allowed_paths, SandboxConfig::default().allowed_paths);
        assert_eq!(config.max_file_size, 10485760);
    }

    #[test]
    fn build_sandbox_config_honors_custom_paths() {
        let args = CliArgs {
            script: None,
            fs_paths: vec![PathBuf::from("/tmp/safe")],
            max_file_size: 2048,
            port: 8000,
        };
        let config = build_sandbox_config(&args);
        assert_eq!(config.allowed_paths, vec![PathBuf::from("/tmp/safe")]);
        assert_eq!(config.max_file_size, 2048);
    }
}
