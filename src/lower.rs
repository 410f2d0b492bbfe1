//! Lower a shape tree to a flat, declaration-ordered list of definitions.
//!
//! Two passes. The render pass walks the tree depth first, pre-order: a
//! definition is complete before any of the nested definitions it references
//! are rendered, and those follow it in slot order. Every reference therefore
//! points forward. The ordering pass reverses the sequence block-wise so every
//! definition is declared before its first use.
use std::collections::HashSet;

use crate::config::{is_identifier, GeneratorConfig};
use crate::inference::{ElementKind, FieldKind, FieldSlot, ShapeTree};
use crate::ir::{Definition, FieldType};

// ------------------------------- Naming ----------------------------------- //

/// Uppercase the first character, lowercase the rest (`webHooks` → `Webhooks`).
pub fn capitalize(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
    }
}

/// Hands out definition names, unique within one emission.
#[derive(Debug)]
pub struct NameRegistry {
    suffix: String,
    taken: HashSet<String>,
}

impl NameRegistry {
    pub fn new(suffix: &str) -> Self {
        Self { suffix: suffix.to_string(), taken: HashSet::new() }
    }

    /// Child name: parent name without the suffix, capitalized key, suffix.
    /// On a clash the smallest free counter (from 2) goes before the suffix.
    pub fn derive(&mut self, parent: &str, key: &str) -> String {
        let stem = match self.suffix.as_str() {
            "" => parent,
            suffix => parent.strip_suffix(suffix).unwrap_or(parent),
        };
        let base = format!("{stem}{}", capitalize(key));
        let mut candidate = format!("{base}{}", self.suffix);
        let mut n = 2u32;
        while self.taken.contains(&candidate) {
            candidate = format!("{base}{n}{}", self.suffix);
            n += 1;
        }
        if !is_identifier(&candidate) {
            tracing::warn!(name = %candidate, key = %key, "derived class name is not an identifier");
        }
        self.taken.insert(candidate.clone());
        candidate
    }

    /// Claim a name verbatim (the root). Returns false if it was taken.
    pub fn reserve(&mut self, name: &str) -> bool {
        self.taken.insert(name.to_string())
    }
}

// ----------------------------- Render pass -------------------------------- //

/// Pre-order rendering: parents before children.
pub fn render_pass(root: &ShapeTree, root_name: &str, suffix: &str) -> Vec<Definition> {
    let mut names = NameRegistry::new(suffix);
    names.reserve(root_name);
    let mut out = Vec::new();
    render(root, root_name.to_string(), &mut names, &mut out);
    out
}

fn render(shape: &ShapeTree, name: String, names: &mut NameRegistry, out: &mut Vec<Definition>) {
    let mut def = Definition::new(name);
    let mut deferred: Vec<(String, &ShapeTree)> = Vec::new();

    for (key, slot) in shape.iter() {
        if !is_identifier(key) {
            tracing::warn!(definition = %def.name, key = %key, "key is not an identifier; field emitted verbatim");
        }
        let ty = match slot {
            FieldSlot::Scalar(kind) => FieldType::Kind(*kind),
            // never recurse into an empty shape: no zero-field definitions
            FieldSlot::Nested(inner) if inner.is_empty() => FieldType::Kind(FieldKind::GenericMap),
            FieldSlot::NestedList(inner) if inner.is_empty() => {
                FieldType::Kind(FieldKind::List(ElementKind::GenericMap))
            }
            FieldSlot::Nested(inner) => {
                let child = names.derive(&def.name, key);
                deferred.push((child.clone(), inner));
                FieldType::Reference(child)
            }
            FieldSlot::NestedList(inner) => {
                let child = names.derive(&def.name, key);
                deferred.push((child.clone(), inner));
                FieldType::ListOf(child)
            }
        };
        def.push(key, ty);
    }

    tracing::debug!(name = %def.name, fields = def.fields.len(), nested = deferred.len(), "rendered definition");
    out.push(def);

    for (child, inner) in deferred {
        render(inner, child, names, out);
    }
}

// ---------------------------- Ordering pass ------------------------------- //

/// Reverse whole definition blocks (never the fields inside one). Applied to
/// render-pass output this turns parent-before-child into child-before-parent.
pub fn declaration_order(mut rendered: Vec<Definition>) -> Vec<Definition> {
    rendered.reverse();
    rendered
}

// ------------------------------- Front API -------------------------------- //

/// Shape tree → definitions in declaration-before-use order.
pub fn emit(root: &ShapeTree, config: &GeneratorConfig) -> Vec<Definition> {
    declaration_order(render_pass(root, &config.root_name, &config.suffix))
}

// ------------------------------- Tests ------------------------------------ //
