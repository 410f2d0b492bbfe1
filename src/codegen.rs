//! Render definitions as source text.
//!
//! The class syntax and field-type vocabulary belong to the target framework,
//! so they live behind [`Dialect`]. [`DrfDialect`] writes Django REST framework
//! serializers.
use crate::inference::{ElementKind, FieldKind};
use crate::ir::{Definition, FieldType};

// ————————————————————————————————————————————————————————————————————————————
// DIALECT
// ————————————————————————————————————————————————————————————————————————————

pub trait Dialect {
    /// Opening line of a definition block.
    fn header(&self, name: &str) -> String;
    fn kind(&self, kind: FieldKind) -> String;
    fn reference(&self, name: &str) -> String;
    fn list_of(&self, name: &str) -> String;
    fn field_line(&self, field: &str, ty: &str) -> String;
    /// Body line for a definition with no fields.
    fn empty_body(&self) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DrfDialect;

const INDENT: &str = "    ";

impl DrfDialect {
    fn element(elem: ElementKind) -> &'static str {
        match elem {
            ElementKind::Integer => "IntegerField",
            ElementKind::Float => "FloatField",
            ElementKind::Boolean => "BooleanField",
            ElementKind::String => "CharField",
            ElementKind::GenericMap => "DictField",
        }
    }
}

impl Dialect for DrfDialect {
    fn header(&self, name: &str) -> String {
        format!("class {name}(serializers.Serializer):")
    }

    fn kind(&self, kind: FieldKind) -> String {
        match kind {
            FieldKind::Integer => "serializers.IntegerField()".to_string(),
            FieldKind::Float => "serializers.FloatField()".to_string(),
            FieldKind::Boolean => "serializers.BooleanField()".to_string(),
            FieldKind::String => "serializers.CharField()".to_string(),
            FieldKind::GenericMap => "serializers.DictField()".to_string(),
            FieldKind::UntypedList => "serializers.ListField()".to_string(),
            FieldKind::List(elem) => {
                format!("serializers.ListField(child=serializers.{}())", Self::element(elem))
            }
        }
    }

    fn reference(&self, name: &str) -> String {
        format!("{name}()")
    }

    fn list_of(&self, name: &str) -> String {
        format!("serializers.ListField(child={name}())")
    }

    fn field_line(&self, field: &str, ty: &str) -> String {
        format!("{INDENT}{field} = {ty}")
    }

    fn empty_body(&self) -> String {
        format!("{INDENT}pass")
    }
}

// ————————————————————————————————————————————————————————————————————————————
// CODEGEN
// ————————————————————————————————————————————————————————————————————————————

/// Accumulates rendered lines; blocks are written back to back.
pub struct Codegen<D: Dialect = DrfDialect> {
    dialect: D,
    lines: Vec<String>,
}

impl Codegen<DrfDialect> {
    pub fn new() -> Self {
        Self::with_dialect(DrfDialect)
    }
}

impl Default for Codegen<DrfDialect> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Dialect> Codegen<D> {
    pub fn with_dialect(dialect: D) -> Self {
        Self { dialect, lines: Vec::new() }
    }

    pub fn emit(&mut self, defs: &[Definition]) {
        for def in defs {
            self.emit_definition(def);
        }
    }

    fn emit_definition(&mut self, def: &Definition) {
        self.lines.push(self.dialect.header(&def.name));
        if def.fields.is_empty() {
            self.lines.push(self.dialect.empty_body());
        }
        for field in &def.fields {
            let ty = match &field.ty {
                FieldType::Kind(kind) => self.dialect.kind(*kind),
                FieldType::Reference(name) => self.dialect.reference(name),
                FieldType::ListOf(name) => self.dialect.list_of(name),
            };
            self.lines.push(self.dialect.field_line(&field.name, &ty));
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Newline-terminated text of everything emitted so far.
    pub fn into_string(self) -> String {
        let mut out = String::new();
        for line in self.lines {
            out.push_str(&line);
            out.push('\n');
        }
        out
    }
}
