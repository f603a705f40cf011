// Command-line interface for fosdelta.
//
// Thin driver over the library: it only moves bytes between files/stdio
// and the three core operations.

use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{ArgAction, Args, Parser, Subcommand, ValueHint};

use crate::error::DeltaError;

// ---------------------------------------------------------------------------
// Clap CLI definition
// ---------------------------------------------------------------------------

/// Fossil-format delta encoder/decoder.
#[derive(Parser, Debug)]
#[command(
    name = "fosdelta",
    version,
    about = "Fossil-format binary delta encoder/decoder",
    arg_required_else_help = true
)]
struct Cli {
    #[command(subcommand)]
    command: Cmd,

    /// Force overwrite existing output files.
    #[arg(short = 'f', long, global = true)]
    force: bool,

    /// Quiet mode (suppress non-error output).
    #[arg(short = 'q', long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Verbose mode (use multiple times for more detail).
    #[arg(short = 'v', long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Output stats as JSON to stderr.
    #[arg(long = "json", global = true)]
    json_output: bool,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Create a delta from a source and target file.
    Create(CreateArgs),
    /// Apply a delta to a source file, reconstructing the target.
    Apply(ApplyArgs),
    /// Print the output size a delta predicts.
    Size(SizeArgs),
}

#[derive(Args, Debug)]
struct CreateArgs {
    /// Source file the delta copies from.
    #[arg(value_hint = ValueHint::FilePath)]
    source: PathBuf,

    /// Target file the delta reconstructs.
    #[arg(value_hint = ValueHint::FilePath)]
    target: PathBuf,

    /// Delta output file (default: stdout).
    #[arg(value_hint = ValueHint::FilePath)]
    delta: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct ApplyArgs {
    /// Source file the delta copies from.
    #[arg(value_hint = ValueHint::FilePath)]
    source: PathBuf,

    /// Delta file ('-' for stdin).
    #[arg(value_hint = ValueHint::FilePath)]
    delta: PathBuf,

    /// Reconstructed output file (default: stdout).
    #[arg(value_hint = ValueHint::FilePath)]
    output: Option<PathBuf>,

    /// Skip checksum verification of the reconstructed output.
    #[arg(long = "no-verify")]
    no_verify: bool,
}

#[derive(Args, Debug)]
struct SizeArgs {
    /// Delta file ('-' for stdin).
    #[arg(value_hint = ValueHint::FilePath)]
    delta: PathBuf,
}

// ---------------------------------------------------------------------------
// Shared options
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
struct GlobalOpts {
    force: bool,
    quiet: bool,
    verbose: u8,
    json: bool,
}

fn read_input(path: &Path) -> io::Result<Vec<u8>> {
    if path.as_os_str() == "-" {
        let mut buf = Vec::new();
        io::stdin().lock().read_to_end(&mut buf)?;
        Ok(buf)
    } else {
        std::fs::read(path)
    }
}

fn write_output(path: Option<&Path>, bytes: &[u8], force: bool) -> Result<(), String> {
    match path {
        Some(p) => {
            if p.exists() && !force {
                return Err(format!(
                    "output file exists, use -f to overwrite: {}",
                    p.display()
                ));
            }
            std::fs::write(p, bytes).map_err(|e| format!("write {}: {e}", p.display()))
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            out.write_all(bytes).map_err(|e| format!("write stdout: {e}"))
        }
    }
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_create(opts: GlobalOpts, args: CreateArgs) -> i32 {
    let source = match std::fs::read(&args.source) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("fosdelta: create: read {}: {e}", args.source.display());
            return 1;
        }
    };
    let target = match std::fs::read(&args.target) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("fosdelta: create: read {}: {e}", args.target.display());
            return 1;
        }
    };

    let delta = crate::create(&source, &target);

    if let Err(msg) = write_output(args.delta.as_deref(), &delta, opts.force) {
        eprintln!("fosdelta: create: {msg}");
        return 1;
    }

    if opts.json {
        let json = serde_json::json!({
            "command": "create",
            "source_bytes": source.len(),
            "target_bytes": target.len(),
            "delta_bytes": delta.len(),
            "ratio": delta.len() as f64 / target.len().max(1) as f64,
        });
        eprintln!("{}", serde_json::to_string_pretty(&json).unwrap());
    } else if opts.verbose > 0 && !opts.quiet {
        eprintln!(
            "fosdelta: create: {} -> {} bytes ({} byte delta)",
            source.len(),
            target.len(),
            delta.len()
        );
    }
    0
}

fn cmd_apply(opts: GlobalOpts, args: ApplyArgs) -> i32 {
    let source = match std::fs::read(&args.source) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("fosdelta: apply: read {}: {e}", args.source.display());
            return 1;
        }
    };
    let delta = match read_input(&args.delta) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("fosdelta: apply: read {}: {e}", args.delta.display());
            return 1;
        }
    };

    let output = match crate::apply(&source, &delta, !args.no_verify) {
        Ok(out) => out,
        Err(e @ DeltaError::ChecksumMismatch { .. }) => {
            eprintln!("fosdelta: apply: {e} (is this delta for a different source?)");
            return 1;
        }
        Err(e) => {
            eprintln!("fosdelta: apply: {e}");
            return 1;
        }
    };

    if let Err(msg) = write_output(args.output.as_deref(), &output, opts.force) {
        eprintln!("fosdelta: apply: {msg}");
        return 1;
    }

    if opts.json {
        let json = serde_json::json!({
            "command": "apply",
            "source_bytes": source.len(),
            "delta_bytes": delta.len(),
            "output_bytes": output.len(),
            "verified": !args.no_verify,
        });
        eprintln!("{}", serde_json::to_string_pretty(&json).unwrap());
    } else if opts.verbose > 0 && !opts.quiet {
        eprintln!(
            "fosdelta: apply: {} byte delta -> {} bytes",
            delta.len(),
            output.len()
        );
    }
    0
}

fn cmd_size(opts: GlobalOpts, args: SizeArgs) -> i32 {
    let delta = match read_input(&args.delta) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("fosdelta: size: read {}: {e}", args.delta.display());
            return 1;
        }
    };

    match crate::output_size(&delta) {
        Ok(size) => {
            if opts.json {
                let json = serde_json::json!({
                    "command": "size",
                    "delta_bytes": delta.len(),
                    "output_bytes": size,
                });
                eprintln!("{}", serde_json::to_string_pretty(&json).unwrap());
            }
            println!("{size}");
            0
        }
        Err(e) => {
            eprintln!("fosdelta: size: {e}");
            1
        }
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

/// Main CLI entry point. Parses arguments via clap, dispatches commands.
pub fn run() -> ! {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let cli = Cli::parse();
    let opts = GlobalOpts {
        force: cli.force,
        quiet: cli.quiet,
        verbose: cli.verbose,
        json: cli.json_output,
    };

    let code = match cli.command {
        Cmd::Create(args) => cmd_create(opts, args),
        Cmd::Apply(args) => cmd_apply(opts, args),
        Cmd::Size(args) => cmd_size(opts, args),
    };
    process::exit(code);
}
