// Typed IR between emission and codegen. No serde_json::Value here.

use crate::inference::FieldKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldType {
    Kind(FieldKind),
    /// The field holds one instance of another definition.
    Reference(String),
    /// The field holds a list of another definition.
    ListOf(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDecl {
    pub name: String,
    pub ty: FieldType,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    pub name: String,
    pub fields: Vec<FieldDecl>,   // source key order
}

impl FieldType {
    /// Name of the definition this field points at, if any.
    pub fn target(&self) -> Option<&str> {
        match self {
            FieldType::Kind(_) => None,
            FieldType::Reference(name) | FieldType::ListOf(name) => Some(name),
        }
    }
}

impl Definition {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), fields: Vec::new() }
    }

    pub fn push(&mut self, name: impl Into<String>, ty: FieldType) {
        self.fields.push(FieldDecl { name: name.into(), ty });
    }

    /// Definitions referenced by this one, in field order.
    pub fn references(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().filter_map(|f| f.ty.target())
    }
}

/// First reference (referrer, target) whose target is not declared earlier in
/// `defs`, or `None` when the sequence is in declaration-before-use order.
pub fn first_forward_reference(defs: &[Definition]) -> Option<(&str, &str)> {
    let mut declared = std::collections::HashSet::new();
    for def in defs {
        if let Some(target) = def.references().find(|t| !declared.contains(t)) {
            return Some((def.name.as_str(), target));
        }
        declared.insert(def.name.as_str());
    }
    None
}

/// First name declared more than once, if any.
pub fn first_duplicate_name(defs: &[Definition]) -> Option<&str> {
    let mut seen = std::collections::HashSet::new();
    defs.iter().map(|d| d.name.as_str()).find(|name| !seen.insert(*name))
}
