use serde::Serialize;
use std::collections::BTreeMap;

pub const FALLBACK_TEACHER_NAME: &str = "Guru Baru";
pub const FALLBACK_TEACHER_PHONE: &str = "-";
pub const FALLBACK_TEACHER_SUBJECT: &str = "Umum";
pub const FALLBACK_CLASS_NAME: &str = "Kelas Baru";
pub const FALLBACK_CLASS_SCHEDULE: &str = "Belum diatur";

/// Field name -> raw input, as typed into an add dialog.
pub type Draft = BTreeMap<String, String>;

/// Returns the drafted value, or `default` when the field is absent or empty.
pub fn with_fallback(value: Option<&str>, default: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => default.to_string(),
    }
}

/// Text form of a drafted param. Numbers and booleans keep their JSON text;
/// null and nested values have none.
pub fn scalar_text(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        serde_json::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Collects the scalar params into a draft.
pub fn draft_from_params(params: &serde_json::Value) -> Draft {
    params
        .as_object()
        .map(|obj| {
            obj.iter()
                .filter_map(|(k, v)| scalar_text(v).map(|s| (k.clone(), s)))
                .collect()
        })
        .unwrap_or_default()
}

pub trait Record {
    fn id(&self) -> u32;
}

/// Records that can be created from an add-dialog draft.
pub trait FromDraft: Record + Sized {
    fn from_draft(id: u32, draft: &Draft) -> Self;
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: u32,
    pub name: String,
    #[serde(rename = "class")]
    pub class_name: String,
    pub parent: String,
    pub attendance: u8,
    pub last_surah: String,
    pub last_ayat: u32,
}

impl Student {
    pub fn initial(&self) -> String {
        self.name.chars().next().map(String::from).unwrap_or_default()
    }
}

impl Record for Student {
    fn id(&self) -> u32 {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Teacher {
    pub id: u32,
    pub name: String,
    pub phone: String,
    pub subject: String,
}

impl Record for Teacher {
    fn id(&self) -> u32 {
        self.id
    }
}

impl FromDraft for Teacher {
    fn from_draft(id: u32, draft: &Draft) -> Self {
        Self {
            id,
            name: with_fallback(draft.get("name").map(String::as_str), FALLBACK_TEACHER_NAME),
            phone: with_fallback(draft.get("phone").map(String::as_str), FALLBACK_TEACHER_PHONE),
            subject: with_fallback(
                draft.get("subject").map(String::as_str),
                FALLBACK_TEACHER_SUBJECT,
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassGroup {
    pub id: u32,
    pub name: String,
    pub schedule: String,
}

impl Record for ClassGroup {
    fn id(&self) -> u32 {
        self.id
    }
}

impl FromDraft for ClassGroup {
    fn from_draft(id: u32, draft: &Draft) -> Self {
        Self {
            id,
            name: with_fallback(draft.get("name").map(String::as_str), FALLBACK_CLASS_NAME),
            schedule: with_fallback(
                draft.get("schedule").map(String::as_str),
                FALLBACK_CLASS_SCHEDULE,
            ),
        }
    }
}

/// Append-only, insertion-ordered list of records.
#[derive(Debug, Clone)]
pub struct Collection<T> {
    items: Vec<T>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Record> Collection<T> {
    pub fn new(seed: Vec<T>) -> Self {
        Self { items: seed }
    }

    pub fn list(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn get(&self, id: u32) -> Option<&T> {
        self.items.iter().find(|r| r.id() == id)
    }
}

impl<T: FromDraft> Collection<T> {
    /// Ids are `len + 1`. Nothing is ever removed, so they stay unique.
    pub fn add(&mut self, draft: &Draft) -> &T {
        let id = self.items.len() as u32 + 1;
        self.items.push(T::from_draft(id, draft));
        &self.items[self.items.len() - 1]
    }
}
