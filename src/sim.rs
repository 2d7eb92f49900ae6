use std::io;
use std::io::BufWriter;
use std::io::Write;
use std::process::ExitCode;

use sim_lib::cpu::CPUPolicy;
use sim_lib::flags::SimArgs;
use sim_lib::run_wrapper;
use tracing_subscriber::EnvFilter;

fn logging_setup(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .init();
}

fn main() -> ExitCode {
    let args = match SimArgs::from_env() {
        Ok(args) => args,
        Err(err) if err.is_help() => {
            println!("{}", err);
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            let program = std::env::args().next().unwrap_or_else(|| "sim".into());
            eprintln!("error: usage: {} <machine-code file>", program);
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    let policy = CPUPolicy::from(&args);
    logging_setup(policy.verbose);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let result = run_wrapper::run(&args.machine_code, policy, &mut out);
    // Keep whatever trace was produced before a failure
    let flushed = out.flush();

    if let Err(err) = result {
        eprintln!("error: {}", err);
        return ExitCode::FAILURE;
    }
    if let Err(err) = flushed {
        eprintln!("error: {}", err);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
