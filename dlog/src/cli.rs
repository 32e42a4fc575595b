//! dlog: write one log line from the command line
//!
//! `dlog` writes its message through the process-wide default logger, so it
//! honours the `DEBUG` environment variable exactly like a program linking the
//! library would. Useful for shell scripts that want the same line format as
//! the services they wrap.
#![allow(clippy::multiple_crate_versions)]

/// Command-line interface for writing a log line.
#[cfg(feature = "cli")]
pub mod inner {
    use dlog::Flags;
    use facet::Facet;
    use std::io;
    use std::str::FromStr;

    #[derive(Facet)]
    struct Args {
        /// Message to write
        #[facet(positional, default)]
        message: String,

        /// Level: print, debug, fatal or panic
        #[facet(named, short = 'l', long, default = "print".to_string())]
        level: String,

        /// Prefix written at the start of the line
        #[facet(named, short = 'p', long, default)]
        prefix: Option<String>,

        /// Comma-separated header flags, replacing the defaults
        #[facet(named, short = 'F', long, default)]
        flags: Option<String>,

        /// Turn debug mode on regardless of DEBUG
        #[facet(named, short = 'd', long, default)]
        debug: bool,

        /// Show this help message
        #[facet(named, short = 'h', long, default)]
        help: bool,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Level {
        Print,
        Debug,
        Fatal,
        Panic,
    }

    impl FromStr for Level {
        type Err = String;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            match s.trim().to_ascii_lowercase().as_str() {
                "print" => Ok(Level::Print),
                "debug" => Ok(Level::Debug),
                "fatal" => Ok(Level::Fatal),
                "panic" => Ok(Level::Panic),
                other => Err(format!("unknown level: {other:?}")),
            }
        }
    }

    fn print_usage() {
        println!("Usage: dlog [OPTIONS] <MESSAGE>");
        println!();
        println!("Write a log line through the default logger.");
        println!();
        println!("Arguments:");
        println!("  <MESSAGE>              Message to write");
        println!();
        println!("Options:");
        println!("  -l, --level <LEVEL>    print (default), debug, fatal or panic");
        println!("  -p, --prefix <PREFIX>  Prefix written at the start of the line");
        println!("  -F, --flags <LIST>     Header flags, e.g. 'date,time,shortfile'");
        println!("  -d, --debug            Turn debug mode on regardless of DEBUG");
        println!("  -h, --help             Show this help message");
        println!();
        println!("Environment:");
        println!("  DEBUG                  Any non-empty value turns debug mode on");
        println!();
        println!("Examples:");
        println!("  # Only written when DEBUG is set");
        println!("  dlog --level debug 'cache warmed'");
        println!();
        println!("  # Write the line, then exit with status 1");
        println!("  dlog -l fatal -p 'deploy: ' 'missing artifact'");
    }

    fn invalid(msg: String) -> io::Error {
        io::Error::new(io::ErrorKind::InvalidInput, msg)
    }

    /// Entry point for the `dlog` command-line interface.
    ///
    /// # Errors
    ///
    /// Returns an [`io::Error`] if argument parsing fails, the level or flags
    /// are unknown, or the line cannot be written.
    ///
    /// The `fatal` level exits the process with status 1 after writing, and the
    /// `panic` level panics after writing.
    pub fn main() -> io::Result<()> {
        let args: Args = facet_args::from_std_args().map_err(|e| invalid(format!("{e}")))?;

        if args.help {
            print_usage();
            std::process::exit(0);
        }

        let level: Level = args.level.parse().map_err(invalid)?;

        if let Some(prefix) = args.prefix {
            dlog::set_prefix(prefix);
        }
        if let Some(list) = args.flags {
            let flags: Flags = list.parse().map_err(invalid)?;
            dlog::set_flags(flags);
        }
        if args.debug {
            dlog::set_debug(true);
        }

        let message = args.message;
        match level {
            Level::Print => dlog::output(&message)?,
            Level::Debug => dlog::debug!(message),
            Level::Fatal => dlog::fatal!(message),
            Level::Panic => dlog::log_panic!(message),
        }

        Ok(())
    }
}

/// Hint replacement CLI for when the cli module is used without building the cli feature.
#[cfg(not(feature = "cli"))]
pub mod inner {
    /// Provide a hint to the user that they did not build this crate with the cli feature.
    pub fn main() {
        eprintln!("Please build with the cli feature to run the CLI");
        eprintln!("Example: cargo install dlog --features cli");
        std::process::exit(1);
    }
}

pub use inner::main;
