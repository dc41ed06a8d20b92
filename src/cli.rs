use std::net::SocketAddr;
use std::path::PathBuf;
use std::process;

use getopts::{Matches, Options};

pub const DEFAULT_DATA_FILE: &str = "/tmp/data.txt";

#[derive(Debug)]
pub struct Args {
    pub address: SocketAddr,
    pub data_file: PathBuf,
}

/// What the command line asks for.
#[derive(Debug)]
pub enum Parsed {
    Run(Args),
    Help(String),
    Invalid(String),
}

fn opts() -> Options {
    let mut opts = Options::new();
    opts.optflag(
        "h",
        "help",
        concat!("Print the help output of ", env!("CARGO_PKG_NAME")),
    );
    opts.optopt(
        "a",
        "address",
        "Socket address (IP and port) to listen on [Default: 127.0.0.1:8080]",
        "SOCKET_ADDRESS",
    );
    opts.optopt(
        "f",
        "data-file",
        "Text file holding the plan [Default: /tmp/data.txt]",
        "PATH",
    );
    opts
}

pub fn try_parse(args: Vec<String>) -> Parsed {
    let opts = opts();

    let matches = match opts.parse(args) {
        Ok(matches) => matches,
        Err(fail) => return Parsed::Invalid(fail.to_string()),
    };

    if matches.opt_present("help") {
        return Parsed::Help(opts.usage(&opts.short_usage(env!("CARGO_PKG_NAME"))));
    }

    match args_from(&matches) {
        Ok(args) => Parsed::Run(args),
        Err(message) => Parsed::Invalid(message),
    }
}

fn args_from(matches: &Matches) -> Result<Args, String> {
    let address = matches
        .opt_get_default("address", SocketAddr::from(([127, 0, 0, 1], 8080)))
        .map_err(|err| format!("Provided value for option 'address' is invalid: {err}"))?;

    let data_file = matches
        .opt_str("data-file")
        .map_or_else(|| PathBuf::from(DEFAULT_DATA_FILE), PathBuf::from);

    if data_file.as_os_str().is_empty() {
        return Err("Provided value for option 'data-file' is empty".to_string());
    }

    Ok(Args { address, data_file })
}

/// Parses the arguments, exiting the process on `--help` or invalid input.
pub fn parse(args: Vec<String>) -> Args {
    match try_parse(args) {
        Parsed::Run(args) => args,
        Parsed::Help(usage) => {
            println!("{usage}");
            process::exit(0);
        }
        Parsed::Invalid(message) => {
            eprintln!("{message}");
            process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|arg| arg.to_string()).collect()
    }

    #[test]
    fn defaults() {
        let Parsed::Run(args) = try_parse(args(&[])) else {
            panic!("expected defaults to parse");
        };
        assert_eq!(args.address, SocketAddr::from(([127, 0, 0, 1], 8080)));
        assert_eq!(args.data_file, PathBuf::from(DEFAULT_DATA_FILE));
    }

    #[test]
    fn explicit_values() {
        let Parsed::Run(args) = try_parse(args(&["-a", "0.0.0.0:3000", "--data-file", "plan.txt"]))
        else {
            panic!("expected options to parse");
        };
        assert_eq!(args.address, SocketAddr::from(([0, 0, 0, 0], 3000)));
        assert_eq!(args.data_file, PathBuf::from("plan.txt"));
    }

    #[test]
    fn invalid_address() {
        assert!(matches!(
            try_parse(args(&["--address", "nowhere"])),
            Parsed::Invalid(message) if message.contains("'address'")
        ));
    }

    #[test]
    fn empty_data_file() {
        assert!(matches!(
            try_parse(args(&["--data-file", ""])),
            Parsed::Invalid(_)
        ));
    }

    #[test]
    fn help() {
        assert!(matches!(try_parse(args(&["-h"])), Parsed::Help(usage) if usage.contains("--data-file")));
    }

    #[test]
    fn unknown_flag() {
        assert!(matches!(try_parse(args(&["--cache"])), Parsed::Invalid(_)));
    }
}
