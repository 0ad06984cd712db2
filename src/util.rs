use argparse::{ArgumentParser, Print, Store, StoreOption, StoreTrue};
use std::{io, str};

use libc::{getrusage, rusage, RUSAGE_SELF};

pub struct Config {
    pub input: Option<String>,
    pub top: usize,
    pub log: Option<String>,
    pub verbose: bool,
}

pub fn parse_args(description: &str) -> Config {
    let mut conf: Config = Config {
        input: None,
        top: 20,
        log: None,
        verbose: false,
    };

    {
        // this block limits scope of borrows by ap.refer() method
        let mut ap = ArgumentParser::new();

        ap.set_description(description);
        ap.add_option(
            &["-V", "--version"],
            Print(env!("CARGO_PKG_VERSION").to_string()),
            "Show version",
        );

        ap.refer(&mut conf.input)
            .add_argument("input", StoreOption, "input file - default: stdin");

        ap.refer(&mut conf.top).add_option(
            &["-k", "--top"],
            Store,
            "number of words to report - default: 20",
        );

        ap.refer(&mut conf.log).add_option(
            &["--log"],
            StoreOption,
            "log sink, \"-\" for stderr - default: no logging",
        );

        ap.refer(&mut conf.verbose).add_option(
            &["-v", "--verbose"],
            StoreTrue,
            "debug-level logging",
        );

        ap.parse_args_or_exit();
    }

    conf
}

/// Accumulated (user, system) CPU time of this process, in microseconds.
pub fn get_cputime_usecs() -> (u64, u64) {
    let mut usage: rusage = unsafe { std::mem::zeroed() };
    unsafe {
        getrusage(RUSAGE_SELF, (&mut usage) as *mut rusage);
    }

    let u_secs = usage.ru_utime.tv_sec as u64;
    let u_usecs = usage.ru_utime.tv_usec as u64;
    let s_secs = usage.ru_stime.tv_sec as u64;
    let s_usecs = usage.ru_stime.tv_usec as u64;

    let u_time = (u_secs * 1_000_000) + u_usecs;
    let s_time = (s_secs * 1_000_000) + s_usecs;

    (u_time, s_time)
}

pub fn utf8(buf: &[u8]) -> Result<&str, io::Error> {
    str::from_utf8(buf)
        .map_err(|_| io::Error::new(io::ErrorKind::InvalidData, "Unable to decode input as UTF8"))
}
