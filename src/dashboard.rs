use crate::config::InstitutionConfig;
use crate::entities::{Student, Teacher};
use crate::gradebook::{Assessment, Gradebook};
use crate::report::module_grades;
use crate::rules::{render_average, render_grade, visible_modules, Grade, ValueDomain};
use crate::seed::WeeklyProgress;
use serde_json::{json, Value};

const RECENT_LIMIT: usize = 4;
/// Shown on a recent-student card until the student has a saved assessment.
const UNGRADED_RECENT_GRADE: Grade = Grade::Score(90);

/// Sums in `i128`: scores have no lower bound, so an `i64` total can overflow.
fn mean(values: impl Iterator<Item = i64>) -> Option<f64> {
    let (sum, n) = values.fold((0i128, 0usize), |(s, n), v| (s + i128::from(v), n + 1));
    (n > 0).then(|| sum as f64 / n as f64)
}

/// Mean over every grade the report cards would print for enabled modules.
pub fn average_grade(
    config: &InstitutionConfig,
    students: &[Student],
    gradebook: &Gradebook,
) -> Option<f64> {
    let owned: Vec<&Assessment> = gradebook
        .all()
        .iter()
        .filter(|a| students.iter().any(|s| s.id == a.student_id))
        .collect();
    let assessments = owned.as_slice();
    mean(
        visible_modules(config)
            .into_iter()
            .flat_map(move |rule| module_grades(rule, assessments))
            .map(Grade::as_score),
    )
}

pub fn average_attendance(students: &[Student]) -> Option<i64> {
    mean(students.iter().map(|s| i64::from(s.attendance))).map(|m| m.round() as i64)
}

pub fn dashboard_summary(
    config: &InstitutionConfig,
    students: &[Student],
    teachers: &[Teacher],
    gradebook: &Gradebook,
    weekly: &[WeeklyProgress],
) -> Value {
    let domain = ValueDomain::for_grading(config.grading_type);
    let recent: Vec<Value> = students
        .iter()
        .take(RECENT_LIMIT)
        .map(|s| {
            let latest = gradebook
                .latest_for(s.id)
                .and_then(|a| a.mean_score())
                .map(|m| Grade::Score(m.round() as i64))
                .unwrap_or(UNGRADED_RECENT_GRADE);
            json!({
                "studentId": s.id,
                "name": s.name,
                "initial": s.initial(),
                "lastSurah": s.last_surah,
                "lastAyat": s.last_ayat,
                "latestGrade": render_grade(domain, latest),
            })
        })
        .collect();

    json!({
        "greeting": "Assalamu'alaikum, Ustadz",
        "institutionName": config.institution_name,
        "stats": {
            "totalStudents": students.len(),
            "totalTeachers": teachers.len(),
            "averageGrade": average_grade(config, students, gradebook).map(|a| render_average(domain, a)),
            "averageAttendance": average_attendance(students),
        },
        "recent": recent,
        "weeklyProgress": weekly,
    })
}
