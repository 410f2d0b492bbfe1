//! Infer serializer classes from one sample JSON document.
//!
//! `JSON text → inference::infer → ShapeTree → lower::emit → Vec<Definition>
//! → codegen::Codegen → text`. Each stage is a pure function of its input.
pub mod codegen;
pub mod config;
pub mod error;
pub mod inference;
pub mod ir;
pub mod lower;
pub mod path_de;

pub use config::GeneratorConfig;
pub use error::{Error, Result};
pub use inference::{classify_scalar, infer, FieldKind, FieldSlot, ShapeTree};
pub use ir::Definition;

use serde_json::{Map, Value};

/// Definitions for an already-parsed top-level object.
pub fn definitions_for(object: &Map<String, Value>, config: &GeneratorConfig) -> Result<Vec<Definition>> {
    config.validate()?;
    let shape = infer(object);
    Ok(lower::emit(&shape, config))
}

/// Render definitions for an already-parsed top-level object.
pub fn generate_from_object(object: &Map<String, Value>, config: &GeneratorConfig) -> Result<String> {
    let defs = definitions_for(object, config)?;
    let mut cg = codegen::Codegen::new();
    cg.emit(&defs);
    Ok(cg.into_string())
}

/// JSON text in, serializer source out.
pub fn generate(json_src: &str, config: &GeneratorConfig) -> Result<String> {
    let object = path_de::parse_object(json_src)?;
    generate_from_object(&object, config)
}
