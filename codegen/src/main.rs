use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use msgbind_codegen_lib::ada_binding::AdaBindingGenerator;
use msgbind_codegen_lib::{write_files, Codegen, SchemaGraph};

#[derive(Parser)]
#[command(name = "msgbind-codegen")]
#[command(about = "Generate message binding code from schema module graphs")]
struct Args {
    /// Input schema graph (JSON)
    #[arg(short, long)]
    input: PathBuf,

    /// Output directory
    #[arg(short, long)]
    output: PathBuf,

    /// Target language
    #[arg(short, long, default_value = "ada")]
    target: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    println!("📖 Reading schema: {}", args.input.display());
    let input = std::fs::read_to_string(&args.input)?;
    let graph = SchemaGraph::from_json(&input)?;

    let generator: Box<dyn Codegen> = match args.target.as_str() {
        "ada" => Box::new(AdaBindingGenerator),
        _ => anyhow::bail!("Unsupported target: {}", args.target),
    };

    println!("🎨 Generating {} bindings...", generator.language());
    let code = generator.generate(&graph)?;

    println!(
        "💾 Writing {} files to: {}",
        code.files.len(),
        args.output.display()
    );
    write_files(&args.output, &code)?;

    println!("✅ Done!");
    Ok(())
}
