// generate various types of words to feed suffix_rank
use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;

#[derive(Parser, Debug)]
#[clap(name = "gen", about = "generate various words")]
struct Args {
    /// Order of the generated words.
    #[clap(short = 'k', long, default_value = "5")]
    order: usize,

    #[clap(long)]
    fibonacci: bool,

    #[clap(long)]
    fibonacci_plus: bool,

    #[clap(long)]
    period_doubling: bool,

    #[clap(long)]
    thue_morse: bool,

    /// Print every word of length `order` over these letters.
    #[clap(default_value = "", long)]
    of_alphabet: String,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut words = Vec::new();
    if args.fibonacci {
        words.push(sufrank::words::fibonacci(args.order));
    }
    if args.fibonacci_plus {
        words.push(sufrank::words::fibonacci_plus(args.order));
    }
    if args.thue_morse {
        words.push(sufrank::words::thue_morse(args.order));
    }
    if args.period_doubling {
        words.push(sufrank::words::period_doubling(args.order));
    }
    if !args.of_alphabet.is_empty() {
        words.extend(sufrank::words::enumerate_all(
            args.of_alphabet.as_bytes(),
            args.order,
        ));
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for w in words {
        out.write_all(&w)?;
        out.write_all(b"\n")?;
    }
    Ok(())
}
