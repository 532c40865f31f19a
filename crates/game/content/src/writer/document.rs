use std::path::PathBuf;

use ron::{Map, Number, Value};
use tactics_core::{
    ActionAmount, Coords, DefinitionKind, DefinitionRef, Describe, Effect, FieldValue,
    FieldVisitor, Identifiable, Modifier, Size,
};

/// One rendered definition file.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    pub kind: DefinitionKind,
    pub id: String,
    /// Location relative to the writer root.
    pub path: PathBuf,
    pub value: Value,
}

/// [`FieldVisitor`] that builds a RON map from a definition's fields.
///
/// Empty strings are skipped. Referenced definitions are written as their id
/// and collected so the caller can enqueue them; effects are written inline,
/// tagged with their kind under `type`.
#[derive(Debug)]
pub struct DocumentBuilder<'a> {
    fields: Map,
    references: Vec<DefinitionRef<'a>>,
}

impl<'a> DocumentBuilder<'a> {
    pub fn new() -> Self {
        Self {
            fields: Map::new(),
            references: Vec::new(),
        }
    }

    /// Starts a document for a stored definition, keyed by `id`.
    pub fn identified(id: &str) -> Self {
        let mut builder = Self::new();
        builder.insert("id", string(id));
        builder
    }

    /// Builds the inline form of a single effect.
    pub fn effect(effect: &'a Effect) -> Self {
        let mut builder = Self::new();
        builder.insert("type", string(effect.id()));
        effect.describe(&mut builder);
        builder
    }

    /// Definitions referenced so far, in field order.
    pub fn references(&self) -> &[DefinitionRef<'a>] {
        &self.references
    }

    pub fn finish(self) -> (Value, Vec<DefinitionRef<'a>>) {
        (Value::Map(self.fields), self.references)
    }

    fn insert(&mut self, name: &str, value: Value) {
        self.fields.insert(string(name), value);
    }

    fn effects(&mut self, effects: &'a [Effect]) -> Value {
        let values = effects
            .iter()
            .map(|effect| {
                let (value, references) = Self::effect(effect).finish();
                self.references.extend(references);
                value
            })
            .collect();
        Value::Seq(values)
    }
}

impl Default for DocumentBuilder<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> FieldVisitor<'a> for DocumentBuilder<'a> {
    fn visit(&mut self, name: &'static str, value: FieldValue<'a>) {
        let value = match value {
            FieldValue::Str("") => return,
            FieldValue::Str(text) => string(text),
            FieldValue::Int(number) => int(number),
            FieldValue::Bool(flag) => Value::Bool(flag),
            FieldValue::Coords(coords) => coords_value(coords),
            FieldValue::Size(size) => size_value(size),
            FieldValue::Amount(amount) => amount_value(amount),
            FieldValue::Ref(reference) => {
                self.references.push(reference);
                string(reference.id())
            }
            FieldValue::Refs(references) => {
                let ids = references.iter().map(|reference| string(reference.id())).collect();
                self.references.extend(references);
                Value::Seq(ids)
            }
            FieldValue::Effects(effects) => self.effects(effects),
        };
        self.insert(name, value);
    }
}

fn string(text: &str) -> Value {
    Value::String(text.to_owned())
}

fn int(number: i64) -> Value {
    Value::Number(Number::from(number))
}

fn record<const N: usize>(fields: [(&str, Value); N]) -> Value {
    let mut map = Map::new();
    for (name, value) in fields {
        map.insert(string(name), value);
    }
    Value::Map(map)
}

fn coords_value(coords: Coords) -> Value {
    record([
        ("x", int(i64::from(coords.x))),
        ("y", int(i64::from(coords.y))),
    ])
}

fn size_value(size: Size) -> Value {
    record([
        ("width", int(i64::from(size.width))),
        ("height", int(i64::from(size.height))),
    ])
}

fn amount_value(amount: &ActionAmount) -> Value {
    if amount.modifiers.is_empty() {
        return int(i64::from(amount.base));
    }

    let modifiers = amount
        .modifiers
        .iter()
        .map(|modifier| match *modifier {
            Modifier::Flat(value) => record([("flat", int(i64::from(value)))]),
            Modifier::Percent(value) => record([("percent", int(i64::from(value)))]),
        })
        .collect();
    record([
        ("base", int(i64::from(amount.base))),
        ("modifiers", Value::Seq(modifiers)),
    ])
}
