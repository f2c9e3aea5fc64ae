use crate::rules::{render_grade, Grade, ModuleKind, ValueDomain};
use serde::Serialize;
use serde_json::{json, Value};

pub const SURAH_OPTIONS: [&str; 3] = ["An-Naba", "An-Nazi'at", "Abasa"];
pub const TILAWAH_CRITERIA: [&str; 3] = ["Makhraj", "Tajwid", "Kelancaran"];
pub const ADAB_CRITERIA: [&str; 2] = ["Kedisiplinan", "Sopan Santun"];

/// Criteria graded in the input form for a module. Tahfidz records a setoran
/// instead of criterion grades.
pub fn criteria_for(module: ModuleKind) -> &'static [&'static str] {
    match module {
        ModuleKind::Tahfidz => &[],
        ModuleKind::Tilawah => &TILAWAH_CRITERIA,
        ModuleKind::Adab => &ADAB_CRITERIA,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Setoran {
    pub surah: String,
    pub ayat_from: Option<i64>,
    pub ayat_to: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CriterionGrade {
    pub module: ModuleKind,
    pub criterion: String,
    pub grade: Grade,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssessmentDraft {
    pub student_id: u32,
    pub setoran: Option<Setoran>,
    pub grades: Vec<CriterionGrade>,
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assessment {
    pub id: u32,
    pub student_id: u32,
    pub setoran: Option<Setoran>,
    pub grades: Vec<CriterionGrade>,
    pub note: Option<String>,
}

impl Assessment {
    pub fn grades_for(&self, module: ModuleKind) -> impl Iterator<Item = &CriterionGrade> {
        self.grades.iter().filter(move |g| g.module == module)
    }

    pub fn mean_score(&self) -> Option<f64> {
        if self.grades.is_empty() {
            return None;
        }
        let sum: i128 = self
            .grades
            .iter()
            .map(|g| i128::from(g.grade.as_score()))
            .sum();
        Some(sum as f64 / self.grades.len() as f64)
    }

    pub fn to_json(&self, domain: ValueDomain) -> Value {
        let grades: Vec<Value> = self
            .grades
            .iter()
            .map(|g| {
                json!({
                    "module": g.module.key(),
                    "criterion": g.criterion,
                    "value": g.grade.to_json(),
                    "display": render_grade(domain, g.grade),
                })
            })
            .collect();
        json!({
            "id": self.id,
            "studentId": self.student_id,
            "setoran": self.setoran,
            "grades": grades,
            "note": self.note,
        })
    }
}

/// Saved grading entries, in the order they were submitted.
#[derive(Debug, Clone, Default)]
pub struct Gradebook {
    entries: Vec<Assessment>,
}

impl Gradebook {
    pub fn record(&mut self, draft: AssessmentDraft) -> &Assessment {
        let id = self.entries.len() as u32 + 1;
        self.entries.push(Assessment {
            id,
            student_id: draft.student_id,
            setoran: draft.setoran,
            grades: draft.grades,
            note: draft.note,
        });
        &self.entries[self.entries.len() - 1]
    }

    pub fn all(&self) -> &[Assessment] {
        &self.entries
    }

    pub fn for_student(&self, student_id: u32) -> Vec<&Assessment> {
        self.entries
            .iter()
            .filter(|a| a.student_id == student_id)
            .collect()
    }

    pub fn latest_for(&self, student_id: u32) -> Option<&Assessment> {
        self.entries.iter().rev().find(|a| a.student_id == student_id)
    }
}
