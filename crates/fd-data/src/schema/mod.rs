//! Entity schemas: form fields, filters, identity allocation and derived
//! fields for every collection
//!
//! Field lists are data; the validation and record-building logic is shared.

mod catalog;

use fd_core::{EntityKind, Identity, Record, Value};
use indexmap::IndexMap;

use crate::ValidationError;

pub use catalog::labels;

/// Raw form input, field name to entered text
pub type Draft = IndexMap<String, String>;

/// Input type of a form field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text
    Text,
    /// Whole number with optional inclusive bounds
    Integer { min: Option<i64>, max: Option<i64> },
    /// One of a fixed list of options
    Choice(&'static [&'static str]),
    /// Computed from other fields, never entered
    Derived,
}

/// One field of an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub editable: bool,
    pub default: Option<&'static str>,
}

impl FieldSpec {
    pub const fn text(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Text,
            required: true,
            editable: true,
            default: None,
        }
    }

    pub const fn integer(name: &'static str, label: &'static str) -> Self {
        Self {
            kind: FieldKind::Integer { min: Some(0), max: None },
            ..Self::text(name, label)
        }
    }

    pub const fn ranged(name: &'static str, label: &'static str, min: i64, max: i64) -> Self {
        Self {
            kind: FieldKind::Integer {
                min: Some(min),
                max: Some(max),
            },
            ..Self::text(name, label)
        }
    }

    pub const fn choice(
        name: &'static str,
        label: &'static str,
        options: &'static [&'static str],
    ) -> Self {
        Self {
            kind: FieldKind::Choice(options),
            ..Self::text(name, label)
        }
    }

    pub const fn derived(name: &'static str, label: &'static str) -> Self {
        Self {
            kind: FieldKind::Derived,
            required: false,
            editable: false,
            ..Self::text(name, label)
        }
    }

    pub const fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Shown in the form but never overwritten
    pub const fn read_only(mut self) -> Self {
        self.editable = false;
        self
    }

    pub const fn with_default(mut self, default: &'static str) -> Self {
        self.default = Some(default);
        self
    }

    /// Whether the form accepts input for this field
    pub fn accepts_input(&self) -> bool {
        self.editable && self.kind != FieldKind::Derived
    }

    /// Parse one form input into a value
    pub fn parse(&self, input: &str) -> Result<Value, ValidationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            if self.required {
                return Err(ValidationError::Required {
                    field: self.name.to_string(),
                    label: self.label.to_string(),
                });
            }
            return Ok(Value::Text(String::new()));
        }

        match self.kind {
            FieldKind::Text | FieldKind::Derived => Ok(Value::Text(trimmed.to_string())),
            FieldKind::Integer { min, max } => {
                let n: i64 = trimmed.parse().map_err(|_| ValidationError::NotNumeric {
                    field: self.name.to_string(),
                    label: self.label.to_string(),
                    input: trimmed.to_string(),
                })?;
                if let Some(min) = min.filter(|min| n < *min) {
                    return Err(ValidationError::TooSmall {
                        field: self.name.to_string(),
                        label: self.label.to_string(),
                        min,
                    });
                }
                if let Some(max) = max.filter(|max| n > *max) {
                    return Err(ValidationError::TooLarge {
                        field: self.name.to_string(),
                        label: self.label.to_string(),
                        max,
                    });
                }
                Ok(Value::Int(n))
            }
            FieldKind::Choice(options) => {
                if options.contains(&trimmed) {
                    Ok(Value::Text(trimmed.to_string()))
                } else {
                    Err(ValidationError::InvalidChoice {
                        field: self.name.to_string(),
                        label: self.label.to_string(),
                        value: trimmed.to_string(),
                    })
                }
            }
        }
    }

    /// Initial form text for a new record
    pub fn initial_input(&self) -> String {
        match (self.default, self.kind) {
            (Some(default), _) => default.to_string(),
            (None, FieldKind::Choice(options)) => {
                options.first().map(|s| s.to_string()).unwrap_or_default()
            }
            _ => String::new(),
        }
    }
}

/// A dropdown filter offered by a view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSpec {
    pub field: &'static str,
    /// Label of the "no constraint" entry
    pub all_label: &'static str,
    pub options: &'static [&'static str],
}

/// How new identities are allocated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityScheme {
    /// Largest existing numeric id plus one
    Numeric,
    /// Prefixed zero-padded sequence such as `ORD-016`
    Sequence { prefix: &'static str, width: usize },
}

/// Recomputes derived fields; returns an alert to raise, if any
pub type DeriveFn = fn(&mut Record) -> Option<String>;

/// Field set and rules of one entity
#[derive(Debug, Clone, Copy)]
pub struct EntitySchema {
    pub kind: EntityKind,
    pub identity: IdentityScheme,
    pub fields: &'static [FieldSpec],
    pub filters: &'static [FilterSpec],
    pub derive: Option<DeriveFn>,
    pub creatable: bool,
    pub editable: bool,
    pub deletable: bool,
}

impl EntitySchema {
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Fields that take form input
    pub fn input_fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter().filter(|f| f.accepts_input())
    }

    /// Validate a complete draft for a new record
    pub fn validate_create(&self, draft: &Draft) -> Result<Vec<(&'static str, Value)>, ValidationError> {
        self.reject_unknown(draft)?;
        self.input_fields()
            .map(|spec| {
                let input = draft.get(spec.name).map(String::as_str).unwrap_or("");
                spec.parse(input).map(|v| (spec.name, v))
            })
            .collect()
    }

    /// Validate the fields present in a draft for an existing record
    pub fn validate_update(&self, draft: &Draft) -> Result<Vec<(&'static str, Value)>, ValidationError> {
        self.reject_unknown(draft)?;
        self.input_fields()
            .filter_map(|spec| draft.get(spec.name).map(|input| (spec, input)))
            .map(|(spec, input)| spec.parse(input).map(|v| (spec.name, v)))
            .collect()
    }

    fn reject_unknown(&self, draft: &Draft) -> Result<(), ValidationError> {
        match draft
            .keys()
            .find(|name| !self.field(name).map_or(false, FieldSpec::accepts_input))
        {
            Some(name) => Err(ValidationError::UnknownField {
                field: name.clone(),
            }),
            None => Ok(()),
        }
    }

    /// Build a record in schema field order, identity first
    pub fn new_record(&self, identity: &Identity, values: Vec<(&'static str, Value)>) -> Record {
        let mut record = Record::new().with(self.kind.identity_field(), identity.to_value());
        for spec in self.fields {
            record.set(spec.name, Value::Text(String::new()));
        }
        for (name, value) in values {
            record.set(name, value);
        }
        record
    }

    /// Run the derivation, if the entity has one
    pub fn apply_derivation(&self, record: &mut Record) -> Option<String> {
        self.derive.and_then(|derive| derive(record))
    }

    /// Form draft prefilled from `record`, or with defaults when `None`
    pub fn draft_for(&self, record: Option<&Record>) -> Draft {
        self.fields
            .iter()
            .filter(|f| f.kind != FieldKind::Derived)
            .map(|spec| {
                let text = match record {
                    Some(r) => r.display(spec.name),
                    None => spec.initial_input(),
                };
                (spec.name.to_string(), text)
            })
            .collect()
    }

    /// Draft restricted to the fields that accept input
    pub fn editable_draft(&self, draft: &Draft) -> Draft {
        draft
            .iter()
            .filter(|(name, _)| self.field(name).map_or(false, FieldSpec::accepts_input))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    pub fn filter(&self, field: &str) -> Option<&FilterSpec> {
        self.filters.iter().find(|f| f.field == field)
    }
}

/// Schema of `kind`
pub fn schema(kind: EntityKind) -> &'static EntitySchema {
    catalog::schema(kind)
}
