use crate::config::InstitutionConfig;
use crate::entities::Student;
use crate::gradebook::Assessment;
use crate::rules::{
    render_grade, visible_modules, Grade, ModuleKind, ModuleRule, Predicate, ValueDomain,
};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use serde_json::{json, Value};

pub const NO_STUDENT_FOR_REPORT: &str = "Pilih santri terlebih dahulu.";
pub const REPORT_SUBTITLE: &str = "Laporan Hasil Belajar Santri";
pub const HEADMASTER_NAME: &str = "H. Abdullah S.Pd.I";
pub const SIGNING_CITY: &str = "Jakarta";

const MONTHS_ID: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

/// `19 Oktober 2026`
pub fn format_date_id(date: NaiveDate) -> String {
    format!(
        "{} {} {}",
        date.day(),
        MONTHS_ID[date.month0() as usize],
        date.year()
    )
}

/// Academic years start in July.
pub fn academic_year(date: NaiveDate) -> String {
    let start = if date.month() >= 7 {
        date.year()
    } else {
        date.year() - 1
    };
    format!("{}/{}", start, start + 1)
}

pub fn semester(date: NaiveDate) -> &'static str {
    if date.month() >= 7 {
        "Ganjil"
    } else {
        "Genap"
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRow {
    pub item: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub achieved: Option<String>,
    pub grade: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSection {
    pub letter: char,
    pub module: ModuleKind,
    pub title: &'static str,
    pub columns: &'static [&'static str],
    pub rows: Vec<ReportRow>,
}

struct TemplateRow {
    item: &'static str,
    target: Option<&'static str>,
    achieved: Option<&'static str>,
    score: i64,
    predicate: Predicate,
    remark: Option<&'static str>,
}

impl TemplateRow {
    /// Program rows print their own predicate; it is not banded from the score.
    fn grade(&self, domain: ValueDomain) -> Grade {
        match domain {
            ValueDomain::Numeric { .. } => Grade::Score(self.score),
            ValueDomain::Predicate => Grade::Predicate(self.predicate),
        }
    }
}

/// Program rows printed on every report card before the student's own
/// assessments.
fn template_rows(module: ModuleKind) -> Vec<TemplateRow> {
    match module {
        ModuleKind::Tahfidz => vec![
            TemplateRow {
                item: "Juz 30 (An-Naba s.d An-Nas)",
                target: Some("37 Surah"),
                achieved: Some("35 Surah"),
                score: 92,
                predicate: Predicate::Mumtaz,
                remark: None,
            },
            TemplateRow {
                item: "Surah Pilihan (Al-Mulk)",
                target: Some("30 Ayat"),
                achieved: Some("30 Ayat"),
                score: 95,
                predicate: Predicate::Mumtaz,
                remark: None,
            },
        ],
        ModuleKind::Tilawah => vec![
            TemplateRow {
                item: "Makharijul Huruf",
                target: None,
                achieved: None,
                score: 88,
                predicate: Predicate::JayyidJiddan,
                remark: Some("Pengucapan huruf sudah sangat baik"),
            },
            TemplateRow {
                item: "Tajwid & Ghorib",
                target: None,
                achieved: None,
                score: 85,
                predicate: Predicate::Jayyid,
                remark: Some("Perhatikan panjang pendek mad"),
            },
        ],
        ModuleKind::Adab => vec![
            TemplateRow {
                item: "Kedisiplinan",
                target: None,
                achieved: None,
                score: 90,
                predicate: Predicate::Mumtaz,
                remark: Some("Hadir dan setor tepat waktu"),
            },
            TemplateRow {
                item: "Sopan Santun",
                target: None,
                achieved: None,
                score: 88,
                predicate: Predicate::JayyidJiddan,
                remark: Some("Santun kepada ustadz dan teman"),
            },
        ],
    }
}

/// Every grade the report card would print for a module, template first.
pub fn module_grades<'a>(
    rule: ModuleRule,
    assessments: &'a [&'a Assessment],
) -> impl Iterator<Item = Grade> + 'a {
    template_rows(rule.module)
        .into_iter()
        .map(move |r| r.grade(rule.domain))
        .chain(
            assessments
                .iter()
                .flat_map(move |a| a.grades_for(rule.module).map(|g| g.grade)),
        )
}

fn section_meta(module: ModuleKind) -> (&'static str, &'static [&'static str]) {
    match module {
        ModuleKind::Tahfidz => (
            "Program Tahfidz",
            &["Materi / Surah", "Target", "Capaian", "Predikat"],
        ),
        ModuleKind::Tilawah => (
            "Kualitas Bacaan (Tahsin)",
            &["Aspek Penilaian", "Nilai", "Keterangan"],
        ),
        ModuleKind::Adab => (
            "Adab & Karakter",
            &["Aspek Penilaian", "Nilai", "Keterangan"],
        ),
    }
}

fn build_section(letter: char, rule: ModuleRule, assessments: &[&Assessment]) -> ReportSection {
    let (title, columns) = section_meta(rule.module);
    let mut rows: Vec<ReportRow> = template_rows(rule.module)
        .into_iter()
        .map(|t| ReportRow {
            item: t.item.to_string(),
            target: t.target.map(str::to_string),
            achieved: t.achieved.map(str::to_string),
            grade: render_grade(rule.domain, t.grade(rule.domain)),
            remark: t.remark.map(str::to_string),
        })
        .collect();
    for a in assessments {
        for g in a.grades_for(rule.module) {
            rows.push(ReportRow {
                item: g.criterion.clone(),
                target: None,
                achieved: None,
                grade: render_grade(rule.domain, g.grade),
                remark: a.note.clone(),
            });
        }
    }
    ReportSection {
        letter,
        module: rule.module,
        title,
        columns,
        rows,
    }
}

pub fn report_sections(
    config: &InstitutionConfig,
    assessments: &[&Assessment],
) -> Vec<ReportSection> {
    visible_modules(config)
        .into_iter()
        .zip('A'..)
        .map(|(rule, letter)| build_section(letter, rule, assessments))
        .collect()
}

/// The printable report card for the selected student.
pub fn report_card(
    config: &InstitutionConfig,
    student: Option<&Student>,
    assessments: &[&Assessment],
    today: NaiveDate,
) -> Value {
    let Some(student) = student else {
        return json!({ "ready": false, "message": NO_STUDENT_FOR_REPORT });
    };
    let sections = report_sections(config, assessments);
    let address = Some(config.institution_address.as_str()).filter(|a| !a.is_empty());
    json!({
        "ready": true,
        "header": {
            "institutionName": config.institution_name,
            "institutionAddress": address,
            "institutionLogo": config.institution_logo,
            "subtitle": REPORT_SUBTITLE,
        },
        "student": {
            "name": student.name.to_uppercase(),
            "class": student.class_name,
            "academicYear": academic_year(today),
            "semester": semester(today),
        },
        "sections": sections,
        "footer": {
            "parentLabel": "Orang Tua Wali",
            "parentName": format!("({})", student.parent),
            "placeDate": format!("{}, {}", SIGNING_CITY, format_date_id(today)),
            "headLabel": format!("Kepala {}", config.institution_name),
            "headName": HEADMASTER_NAME,
        },
    })
}
