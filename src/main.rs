//! pwgen command-line frontend.
//!
//! Thin glue over the library: argument parsing, model selection, and
//! columnar terminal output. All generation logic lives in the library.

use std::io::stdout;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use crossterm::terminal;
use crossterm::tty::IsTty;

use pwgen_rs::{
    generate_batch, generate_random, models, GenerationRequest, OsRandomness, PoolRestrictions,
};

#[derive(Parser, Debug)]
#[command(name = "pwgen", about = "Generate pronounceable passwords", version)]
struct Args {
    /// Include at least one capital letter in the password
    #[arg(short = 'c', long, conflicts_with = "no_capitalize")]
    capitalize: bool,

    /// Don't include capital letters in the password
    #[arg(short = 'A', long)]
    no_capitalize: bool,

    /// Include at least one number in the password
    #[arg(short = 'n', long, conflicts_with = "no_numerals")]
    numerals: bool,

    /// Don't include numbers in the password
    #[arg(short = '0', long)]
    no_numerals: bool,

    /// Include at least one special symbol in the password
    #[arg(short = 'y', long)]
    symbols: bool,

    /// Don't include ambiguous characters in the password
    #[arg(short = 'B', long)]
    ambiguous: bool,

    /// Generate completely random passwords
    #[arg(short = 's', long)]
    secure: bool,

    /// Remove characters from the set used to generate passwords
    #[arg(short = 'r', long, value_name = "CHARS")]
    remove_chars: Option<String>,

    /// Do not use any vowels so as to avoid accidental nasty words
    #[arg(short = 'v', long)]
    no_vowels: bool,

    /// Number of passwords to generate
    #[arg(short = 'N', long, value_name = "COUNT")]
    num_passwords: Option<usize>,

    /// Language model to draw phonetic elements from
    #[arg(short = 'm', long, default_value = "english")]
    model: String,

    /// Load a language model definition from a JSON file
    #[arg(long, value_name = "PATH", conflicts_with = "model")]
    model_file: Option<PathBuf>,

    /// Password length
    pw_length: Option<usize>,

    /// Number of passwords (overrides -N)
    num_pw: Option<usize>,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("pwgen: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let length = args.pw_length.unwrap_or(8);
    // Below five characters the phonetic alternation has no room to work;
    // fall back to fully random output, as the classic tool does.
    let secure = args.secure || args.remove_chars.is_some() || args.no_vowels || length < 5;

    let mut include_digits = args.numerals || !args.no_numerals;
    let mut include_uppercase = args.capitalize || !args.no_capitalize;
    if !secure {
        // Short phonetic passwords cannot host the default classes.
        if length <= 2 {
            include_uppercase = false;
        }
        if length <= 1 {
            include_digits = false;
        }
    }

    let tty = stdout().is_tty();
    let term_width = terminal::size().map(|(w, _)| w as usize).unwrap_or(80);
    let num_cols = if tty {
        (term_width / (length + 1)).max(1)
    } else {
        1
    };
    let count = args
        .num_pw
        .or(args.num_passwords)
        .unwrap_or(if tty { num_cols * 20 } else { 1 });

    let request = GenerationRequest::builder()
        .length(length)
        .include_digits(include_digits)
        .include_uppercase(include_uppercase)
        .include_symbols(args.symbols)
        .avoid_ambiguous(args.ambiguous)
        .count(count)
        .build()?;

    let mut rng = OsRandomness;
    let passwords = if secure {
        let restrictions = PoolRestrictions {
            remove_chars: args.remove_chars.unwrap_or_default(),
            no_vowels: args.no_vowels,
        };
        let mut out = Vec::with_capacity(count);
        for _ in 0..count {
            out.push(generate_random(&request, &restrictions, &mut rng)?);
        }
        out
    } else {
        let model = match &args.model_file {
            Some(path) => models::load_file(path)?,
            None => models::resolve(&args.model)?,
        };
        log::debug!(
            "using language model '{}' ({} elements)",
            model.name(),
            model.elements().len()
        );
        generate_batch(&model, &request, &mut rng)?
    };

    print_columns(&passwords, num_cols);
    Ok(())
}

fn print_columns(passwords: &[String], num_cols: usize) {
    for (i, password) in passwords.iter().enumerate() {
        if num_cols == 1 || (i + 1) % num_cols == 0 || i + 1 == passwords.len() {
            println!("{password}");
        } else {
            print!("{password} ");
        }
    }
}
