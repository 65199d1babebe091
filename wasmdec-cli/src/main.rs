use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use patharg::InputArg;
use std::process::exit;
use wasmdec::decode::DEFAULT_MAX_NESTING_DEPTH;
use wasmdec::{DecodeOptions, Module};

#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// The module to decode. If not provided or is '-', read from
    /// standard input.
    #[arg(default_value_t)]
    pub input: InputArg,

    /// Enable verbose output, including a debug representation of
    /// the decoded module.
    #[arg(long, default_value_t = false)]
    pub verbose: bool,

    /// Maximum nesting depth of `block`, `loop` and `if` instructions.
    #[arg(long, default_value_t = DEFAULT_MAX_NESTING_DEPTH)]
    pub max_nesting_depth: usize,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("ERROR: {err}");

        let causes: Vec<_> = err.chain().skip(1).collect();
        if !causes.is_empty() {
            eprintln!("\nCaused by:");
            for (i, cause) in causes.iter().enumerate() {
                eprintln!("    {i}: {cause}");
            }
        }

        if cli.verbose {
            eprintln!("\nDEBUG OUTPUT:\n{err:#?}");
        }

        exit(1)
    }
}

fn run(cli: &Cli) -> Result<()> {
    let input = cli
        .input
        .open()
        .with_context(|| format!("failed opening {}", cli.input))?;

    let options = DecodeOptions {
        max_nesting_depth: cli.max_nesting_depth,
        ..Default::default()
    };
    let module = wasmdec::decode_reader_with(input, &options)
        .with_context(|| format!("failed decoding {}", cli.input))?;
    info!(
        "decoded {} sections from {}",
        module.section_headers.len(),
        cli.input
    );

    if cli.verbose {
        println!("{module:#?}");
    } else {
        print_summary(&module);
    }

    Ok(())
}

fn print_summary(module: &Module) {
    for header in &module.section_headers {
        println!(
            "{:>8} start={:#010x} size={:#x}",
            format!("{:?}", header.kind),
            header.offset,
            header.size
        );
    }

    println!();
    println!("types:     {}", module.types.len());
    println!("imports:   {}", module.imports.len());
    println!("functions: {}", module.functions.len());
    println!("tables:    {}", module.tables.len());
    println!("memories:  {}", module.mems.len());
    println!("globals:   {}", module.globals.len());
    println!("exports:   {}", module.exports.len());
    println!("elements:  {}", module.elems.len());
    println!("data:      {}", module.datas.len());
    if let Some(start) = module.start {
        println!("start:     {}", start.0);
    }
    for custom in &module.custom_sections {
        println!("custom:    {:?} ({} bytes)", custom.name, custom.contents.len());
    }
}
