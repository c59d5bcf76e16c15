use std::io::{self, Write};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;
use typed_vm::{pipeline, Error, Expr, Threaded, VmConfig, Walker, STACK_SIZE};

#[derive(Parser, Debug)]
#[command(name = "typed-vm", about = "Compile and run the built-in example expression")]
struct Args {
    /// Operand stack capacity in bytes
    #[arg(long, default_value_t = STACK_SIZE)]
    stack_size: usize,

    /// Execution strategy
    #[arg(long, value_enum, default_value_t = BackendKind::Threaded)]
    backend: BackendKind,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum BackendKind {
    Threaded,
    Walker,
}

fn main() -> ExitCode {
    // Logs go to stderr; stdout carries only program output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = VmConfig {
        stack_size: args.stack_size,
    };

    // print(123 + 69)
    let lhs = Expr::Value(123);
    let rhs = Expr::Value(69);
    let sum = Expr::Add(&lhs, &rhs);
    let expr = Expr::Print(&sum);

    info!(backend = ?args.backend, stack_size = config.stack_size, "running");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let res = match args.backend {
        BackendKind::Threaded => pipeline::run::<Threaded, _>(&expr, &config, &mut out),
        BackendKind::Walker => pipeline::run::<Walker, _>(&expr, &config, &mut out),
    };
    let res = res.and_then(|()| out.flush().map_err(|err| Error::Runtime(err.into())));

    match res {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
