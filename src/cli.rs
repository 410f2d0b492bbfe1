//! Minimal CLI: infer → (shape | serializer)
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use serde_json::{Map, Value};

use json_serializer_gen::config::{DEFAULT_ROOT_NAME, DEFAULT_SUFFIX};
use json_serializer_gen::{path_de, GeneratorConfig};

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// infer structure from a sample JSON document and output either the inferred shape or serializer classes
#[derive(Parser, Debug)]
#[command(version)]
pub struct CommandLineInterface {
    /// more logging on stderr (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// infer and print the shape tree as JSON (debug view)
    Shape(ShapeOut),
    /// infer and emit serializer classes
    Serializer(SerializerOut),
}

#[derive(Args, Debug, Clone)]
struct InputSettings {
    /// JSON Pointer to select a subnode of the document (e.g. /data/items/0)
    #[arg(long)]
    json_pointer: Option<String>,

    /// input JSON file, or '-' for stdin
    #[arg(long, short, default_value = "-")]
    input: String,
}

#[derive(clap::Parser, Debug)]
struct ShapeOut {
    #[command(flatten)]
    input_settings: InputSettings,

    /// output .json file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// debugging
    #[arg(long)]
    no_op: bool,
}

#[derive(clap::Parser, Debug)]
struct SerializerOut {
    #[command(flatten)]
    input_settings: InputSettings,

    /// top-level serializer class name
    #[arg(long, default_value = DEFAULT_ROOT_NAME)]
    root_name: String,

    /// naming suffix shared by all generated classes
    #[arg(long, default_value = DEFAULT_SUFFIX)]
    suffix: String,

    /// output .py file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// debugging
    #[arg(long)]
    no_op: bool,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl InputSettings {
    fn load(&self) -> Result<Map<String, Value>> {
        let source = if self.input == "-" {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf).context("failed to read stdin")?;
            buf
        } else {
            std::fs::read_to_string(&self.input)
                .with_context(|| format!("failed to read source file {}", self.input))?
        };
        let value = path_de::parse_with_path(&source)
            .with_context(|| format!("failed to parse JSON source ({})", self.input))?;
        let object = path_de::select_object(value, self.json_pointer.as_deref())
            .with_context(|| format!("unusable JSON source ({})", self.input))?;
        tracing::info!(input = %self.input, keys = object.len(), "loaded document");
        Ok(object)
    }
}

impl SerializerOut {
    fn config(&self) -> GeneratorConfig {
        GeneratorConfig::new()
            .with_root_name(&self.root_name)
            .with_suffix(&self.suffix)
    }
}

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }

    pub fn run(&self) -> Result<()> {
        match &self.cmd {
            Command::Shape(target) => {
                // debug path
                if target.no_op {
                    eprintln!("{self:#?}");
                    return Ok(())
                }
                let object = target.input_settings.load()?;
                let shape = json_serializer_gen::infer(&object);
                let mut shape_src = serde_json::to_string_pretty(&shape)?;
                shape_src.push('\n');
                write_output(target.out.as_deref(), &shape_src)
            }
            Command::Serializer(target) => {
                // debug path
                if target.no_op {
                    eprintln!("{self:#?}");
                    return Ok(())
                }
                let config = target.config();
                config.validate()?;
                let object = target.input_settings.load()?;
                let src = json_serializer_gen::generate_from_object(&object, &config)?;
                tracing::info!(root = %config.root_name, classes = src.matches("class ").count(), "generated serializers");
                write_output(target.out.as_deref(), &src)
            }
        }
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

fn write_output(out: Option<&Path>, src: &str) -> Result<()> {
    match out {
        Some(out) => {
            if let Some(parent) = out.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
            std::fs::write(out, src).with_context(|| format!("failed to write {}", out.display()))?;
            tracing::info!(path = %out.display(), "wrote output");
        }
        None => print!("{src}"),
    }
    Ok(())
}
