use std::path::PathBuf;

use crate::cpu::CPUPolicy;

xflags::xflags! {
    /// LC-2K five-stage pipeline simulator.
    cmd SimArgs {
        /// Path to the machine-code file, one decimal word per line.
        required machine_code: PathBuf

        /// Enables history module, printing cycle, stall and squash counts
        /// after simulation.
        optional --history

        /// Enables verbose mode, logging stalls, forwards and squashes to
        /// stderr. Largely used for debugging purposes.
        optional -v, --verbose
    }
}

impl From<&SimArgs> for CPUPolicy {
    fn from(args: &SimArgs) -> Self {
        Self { verbose: args.verbose, history: args.history }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> xflags::Result<SimArgs> {
        SimArgs::from_vec(args.iter().map(|&s| s.into()).collect())
    }

    #[test]
    fn positional_only() {
        let args = parse(&["prog.mc"]).unwrap();
        assert_eq!(args.machine_code, PathBuf::from("prog.mc"));
        let policy = CPUPolicy::from(&args);
        assert!(!policy.verbose && !policy.history);
    }

    #[test]
    fn switches() {
        let args = parse(&["-v", "prog.mc", "--history"]).unwrap();
        let policy = CPUPolicy::from(&args);
        assert!(policy.verbose && policy.history);
    }

    #[test]
    fn wrong_argument_count() {
        assert!(parse(&[]).is_err());
        assert!(parse(&["a.mc", "b.mc"]).is_err());
    }
}
