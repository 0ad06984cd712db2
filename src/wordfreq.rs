use std::io;
use std::process::exit;
use std::time::Instant;

use bytes::Bytes;
use log::{debug, LevelFilter};

use wordfreq::input::{read_stdin, MappedFile};
use wordfreq::logging::set_logger_or_exit;
use wordfreq::util::{get_cputime_usecs, parse_args, utf8};
use wordfreq::Pipeline;

#[inline(never)]
fn write_out(ranked: &[(u32, Bytes)]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    for (count, word_raw) in ranked {
        let word = utf8(word_raw).expect("UTF8 encoding error");
        let out = &*format!("{:>10} {}\n", count, word);
        io::copy(&mut out.as_bytes(), &mut stdout)?;
    }
    Ok(())
}

fn main() {
    let conf = parse_args("Find the most frequently used words of an input with their frequency");

    if let Some(sink) = &conf.log {
        let level = if conf.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        };
        set_logger_or_exit(sink, level);
    }

    let (start_usr_time, start_sys_time) = get_cputime_usecs();
    let start_time = Instant::now();

    // whichever source backs `source` has to outlive the run
    let mapped;
    let slurped;
    let source: &[u8] = match &conf.input {
        Some(path) => match MappedFile::open(path) {
            Ok(file) => {
                mapped = file;
                mapped.bytes()
            }
            Err(err) => {
                eprintln!("ERROR: can't read '{}': {}", path, err);
                exit(1);
            }
        },
        None => match read_stdin() {
            Ok(bytes) => {
                slurped = bytes;
                &slurped
            }
            Err(err) => {
                eprintln!("ERROR: can't read stdin: {}", err);
                exit(1);
            }
        },
    };

    let mut pipeline = Pipeline::new(conf.top);
    pipeline.feed(source);
    pipeline.finish();

    write_out(&pipeline.emit_sorted()).expect("can't write results");

    let difference = start_time.elapsed();
    let (end_usr_time, end_sys_time) = get_cputime_usecs();
    let usr_time = (end_usr_time - start_usr_time) as f64 / 1000_000.0;
    let sys_time = (end_sys_time - start_sys_time) as f64 / 1000_000.0;
    let stats = pipeline.trie_stats();
    debug!(
        "input: {}B words: {} distinct: {} trie nodes: {}",
        source.len(),
        pipeline.total_words(),
        stats.word_count,
        stats.node_count
    );
    debug!(
        "walltime: {:?} (usr: {:.3}s sys: {:.3}s)",
        difference, usr_time, sys_time
    );
}
