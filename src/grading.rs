use crate::config::InstitutionConfig;
use crate::entities::{with_fallback, Student};
use crate::gradebook::{
    criteria_for, Assessment, AssessmentDraft, CriterionGrade, Setoran, SURAH_OPTIONS,
};
use crate::rules::{
    module_rule, parse_grade, visible_modules, GradeError, ModuleKind, ModuleRule, ValueDomain,
};
use serde_json::{json, Value};

pub const NO_STUDENT_FOR_GRADING: &str = "Pilih santri terlebih dahulu dari menu Santri.";

#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error("{field} must be an object")]
    NotAnObject { field: &'static str },
    #[error("unknown {module} criterion: {criterion}")]
    UnknownCriterion {
        module: &'static str,
        criterion: String,
    },
    #[error("{module}.{criterion}: {source}")]
    Grade {
        module: &'static str,
        criterion: String,
        #[source]
        source: GradeError,
    },
    #[error("setoran.{field} must be an integer")]
    BadAyat { field: &'static str },
}

fn section_json(rule: ModuleRule) -> Value {
    match rule.module {
        ModuleKind::Tahfidz => json!({
            "module": rule.module.key(),
            "title": "Target Tahfidz",
            "fields": [
                { "name": "surah", "label": "Surah", "kind": "select", "options": SURAH_OPTIONS },
                { "name": "ayatFrom", "label": "Ayat", "kind": "number", "placeholder": "Dari" },
                { "name": "ayatTo", "label": "Ayat", "kind": "number", "placeholder": "Sampai" },
            ],
        }),
        ModuleKind::Tilawah | ModuleKind::Adab => {
            let title = if rule.module == ModuleKind::Tilawah {
                "Penilaian Kualitas"
            } else {
                "Penilaian Adab"
            };
            let domain = rule.domain.to_json();
            let criteria: Vec<Value> = criteria_for(rule.module)
                .iter()
                .map(|c| json!({ "name": c, "valueDomain": domain }))
                .collect();
            json!({
                "module": rule.module.key(),
                "title": title,
                "criteria": criteria,
            })
        }
    }
}

/// The input form for the selected student, shaped by the institution config.
pub fn grading_form(
    config: &InstitutionConfig,
    student: Option<&Student>,
    history: &[&Assessment],
) -> Value {
    let Some(student) = student else {
        return json!({ "ready": false, "message": NO_STUDENT_FOR_GRADING });
    };
    let domain = ValueDomain::for_grading(config.grading_type);
    let sections: Vec<Value> = visible_modules(config).into_iter().map(section_json).collect();
    let history: Vec<Value> = history.iter().map(|a| a.to_json(domain)).collect();
    json!({
        "ready": true,
        "title": "Input Setoran & Penilaian",
        "student": { "id": student.id, "name": student.name, "class": student.class_name },
        "sections": sections,
        "note": { "name": "note", "label": "Catatan Ustadz/Ustadzah" },
        "history": history,
    })
}

fn parse_ayat(value: Option<&Value>, field: &'static str) -> Result<Option<i64>, SubmissionError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n.as_i64().map(Some).ok_or(SubmissionError::BadAyat { field }),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(Value::String(s)) => s
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|_| SubmissionError::BadAyat { field }),
        Some(_) => Err(SubmissionError::BadAyat { field }),
    }
}

fn parse_setoran(value: &Value) -> Result<Setoran, SubmissionError> {
    let obj = value
        .as_object()
        .ok_or(SubmissionError::NotAnObject { field: "setoran" })?;
    Ok(Setoran {
        surah: with_fallback(obj.get("surah").and_then(|v| v.as_str()), SURAH_OPTIONS[0]),
        ayat_from: parse_ayat(obj.get("ayatFrom"), "ayatFrom")?,
        ayat_to: parse_ayat(obj.get("ayatTo"), "ayatTo")?,
    })
}

fn parse_criteria(
    rule: ModuleRule,
    value: &Value,
    out: &mut Vec<CriterionGrade>,
) -> Result<(), SubmissionError> {
    let module = rule.module.key();
    let obj = value
        .as_object()
        .ok_or(SubmissionError::NotAnObject { field: module })?;
    let known = criteria_for(rule.module);
    for (criterion, v) in obj {
        if !known.contains(&criterion.as_str()) {
            return Err(SubmissionError::UnknownCriterion {
                module,
                criterion: criterion.clone(),
            });
        }
        if v.is_null() {
            continue;
        }
        let grade = parse_grade(rule.domain, v).map_err(|source| SubmissionError::Grade {
            module,
            criterion: criterion.clone(),
            source,
        })?;
        out.push(CriterionGrade {
            module: rule.module,
            criterion: criterion.clone(),
            grade,
        });
    }
    // Form order, whatever order the keys arrived in.
    out.sort_by_key(|g| {
        criteria_for(g.module)
            .iter()
            .position(|c| *c == g.criterion)
            .unwrap_or(usize::MAX)
    });
    Ok(())
}

/// Reads a grading form submission. Sections of disabled modules are not
/// rendered, so anything sent for them is dropped.
pub fn parse_submission(
    config: &InstitutionConfig,
    student_id: u32,
    params: &Value,
) -> Result<AssessmentDraft, SubmissionError> {
    let mut draft = AssessmentDraft {
        student_id,
        ..AssessmentDraft::default()
    };

    for module in ModuleKind::ALL {
        let Some(value) = params.get(module_param(module)) else {
            continue;
        };
        let rule = module_rule(config, module);
        if !rule.visible {
            tracing::debug!(module = module.key(), "dropping input for disabled module");
            continue;
        }
        match module {
            ModuleKind::Tahfidz => draft.setoran = Some(parse_setoran(value)?),
            ModuleKind::Tilawah | ModuleKind::Adab => {
                let mut grades = Vec::new();
                parse_criteria(rule, value, &mut grades)?;
                draft.grades.extend(grades);
            }
        }
    }

    draft.note = params
        .get("note")
        .and_then(|v| v.as_str())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());
    Ok(draft)
}

fn module_param(module: ModuleKind) -> &'static str {
    match module {
        ModuleKind::Tahfidz => "setoran",
        ModuleKind::Tilawah => "tilawah",
        ModuleKind::Adab => "adab",
    }
}
