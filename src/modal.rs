use crate::entities::{ClassGroup, Collection, Draft, Teacher};
use serde::Serialize;
use serde_json::{json, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ModalTarget {
    #[default]
    None,
    Teacher,
    Class,
}

impl ModalTarget {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "teacher" => Some(ModalTarget::Teacher),
            "class" => Some(ModalTarget::Class),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
}

const TEACHER_FIELDS: [FormField; 3] = [
    FormField {
        name: "name",
        label: "Nama Guru",
        placeholder: "Nama Lengkap",
    },
    FormField {
        name: "subject",
        label: "Bidang Studi / Mengajar",
        placeholder: "Contoh: Tahfidz",
    },
    FormField {
        name: "phone",
        label: "No. Telepon / WA",
        placeholder: "08xx",
    },
];

const CLASS_FIELDS: [FormField; 2] = [
    FormField {
        name: "name",
        label: "Nama Kelas",
        placeholder: "Contoh: Jilid 1 / Tahfidz A",
    },
    FormField {
        name: "schedule",
        label: "Jadwal",
        placeholder: "Contoh: Senin - Kamis, 16.00",
    },
];

#[derive(Debug, Clone, PartialEq)]
pub enum Committed {
    Teacher(Teacher),
    Class(ClassGroup),
}

impl Committed {
    pub fn to_json(&self) -> Value {
        match self {
            Committed::Teacher(t) => json!({ "kind": "teacher", "teacher": t }),
            Committed::Class(c) => json!({ "kind": "class", "class": c }),
        }
    }
}

/// The add-teacher / add-class dialog.
#[derive(Debug, Clone, Default)]
pub struct ModalController {
    open: bool,
    target: ModalTarget,
    draft: Draft,
}

impl ModalController {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self, target: ModalTarget) {
        self.draft.clear();
        self.target = target;
        self.open = true;
    }

    pub fn set_field(&mut self, name: &str, value: &str) {
        self.draft.insert(name.to_string(), value.to_string());
    }

    /// Creates the drafted record (fallbacks fill empty fields) and closes.
    /// A closed dialog or one with no target creates nothing.
    pub fn commit(
        &mut self,
        teachers: &mut Collection<Teacher>,
        classes: &mut Collection<ClassGroup>,
    ) -> Option<Committed> {
        let created = if self.open {
            match self.target {
                ModalTarget::Teacher => Some(Committed::Teacher(teachers.add(&self.draft).clone())),
                ModalTarget::Class => Some(Committed::Class(classes.add(&self.draft).clone())),
                ModalTarget::None => None,
            }
        } else {
            None
        };
        self.open = false;
        created
    }

    pub fn cancel(&mut self) {
        self.open = false;
    }

    /// Closes and forgets the target and draft.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn fields(&self) -> &'static [FormField] {
        match self.target {
            ModalTarget::Teacher => &TEACHER_FIELDS,
            ModalTarget::Class => &CLASS_FIELDS,
            ModalTarget::None => &[],
        }
    }

    pub fn title(&self) -> Option<&'static str> {
        match self.target {
            ModalTarget::Teacher => Some("Tambah Data Guru"),
            ModalTarget::Class => Some("Tambah Data Kelas"),
            ModalTarget::None => None,
        }
    }

    pub fn to_json(&self) -> Value {
        let fields: Vec<Value> = self
            .fields()
            .iter()
            .map(|f| {
                json!({
                    "name": f.name,
                    "label": f.label,
                    "placeholder": f.placeholder,
                    "value": self.draft.get(f.name),
                })
            })
            .collect();
        json!({
            "isOpen": self.open,
            "target": self.target,
            "title": self.title(),
            "fields": fields,
            "draft": self.draft,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stores() -> (Collection<Teacher>, Collection<ClassGroup>) {
        (
            Collection::new(crate::seed::teachers()),
            Collection::new(crate::seed::classes()),
        )
    }

    #[test]
    fn open_resets_previous_draft() {
        let mut m = ModalController::default();
        m.open(ModalTarget::Teacher);
        m.set_field("name", "Ust. Ali");
        m.cancel();
        m.open(ModalTarget::Teacher);
        assert_eq!(m.to_json()["draft"], json!({}));
        assert!(m.is_open());
    }

    #[test]
    fn commit_adds_teacher_and_closes() {
        let (mut teachers, mut classes) = stores();
        let before = teachers.len();
        let mut m = ModalController::default();
        m.open(ModalTarget::Teacher);
        m.set_field("name", "Ust. Ali");
        m.set_field("subject", "Tahfidz");
        m.set_field("phone", "0811");
        let created = m.commit(&mut teachers, &mut classes);
        assert_eq!(
            created,
            Some(Committed::Teacher(Teacher {
                id: before as u32 + 1,
                name: "Ust. Ali".into(),
                phone: "0811".into(),
                subject: "Tahfidz".into(),
            }))
        );
        assert_eq!(teachers.len(), before + 1);
        assert_eq!(classes.len(), 3);
        assert!(!m.is_open());
    }

    #[test]
    fn commit_empty_class_uses_fallbacks() {
        let (mut teachers, mut classes) = stores();
        let mut m = ModalController::default();
        m.open(ModalTarget::Class);
        let Some(Committed::Class(c)) = m.commit(&mut teachers, &mut classes) else {
            panic!("expected a class");
        };
        assert_eq!(c.id, 4);
        assert_eq!(c.name, "Kelas Baru");
        assert_eq!(c.schedule, "Belum diatur");
    }

    #[test]
    fn cancel_and_closed_commit_create_nothing() {
        let (mut teachers, mut classes) = stores();
        let mut m = ModalController::default();
        m.open(ModalTarget::Teacher);
        m.set_field("name", "X");
        m.cancel();
        assert_eq!(m.commit(&mut teachers, &mut classes), None);
        assert_eq!(teachers.len(), 2);

        let mut idle = ModalController::default();
        assert_eq!(idle.commit(&mut teachers, &mut classes), None);
    }

    #[test]
    fn json_lists_fields_for_target() {
        let mut m = ModalController::default();
        m.open(ModalTarget::Class);
        m.set_field("schedule", "Sabtu");
        let v = m.to_json();
        assert_eq!(v["title"], "Tambah Data Kelas");
        assert_eq!(v["target"], "class");
        assert_eq!(v["fields"][1]["value"], "Sabtu");
        assert!(v["fields"][0]["value"].is_null());
    }
}
