use crate::config::{GradingType, InstitutionConfig, ModuleFlags};
use serde::{Serialize, Serializer};
use serde_json::{json, Value};

/// Highest score the numeric input accepts. There is no matching lower bound.
pub const NUMERIC_MAX: i64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleKind {
    Tahfidz,
    Tilawah,
    Adab,
}

impl ModuleKind {
    /// Render order for grading and report sections.
    pub const ALL: [ModuleKind; 3] = [ModuleKind::Tahfidz, ModuleKind::Tilawah, ModuleKind::Adab];

    pub fn key(self) -> &'static str {
        match self {
            ModuleKind::Tahfidz => "tahfidz",
            ModuleKind::Tilawah => "tilawah",
            ModuleKind::Adab => "adab",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ModuleKind::Tahfidz => "Tahfidz (Hafalan)",
            ModuleKind::Tilawah => "Tilawah & Tajwid",
            ModuleKind::Adab => "Adab & Karakter",
        }
    }

    fn enabled_in(self, flags: &ModuleFlags) -> bool {
        match self {
            ModuleKind::Tahfidz => flags.tahfidz,
            ModuleKind::Tilawah => flags.tilawah,
            ModuleKind::Adab => flags.adab,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Predicate {
    Mumtaz,
    JayyidJiddan,
    Jayyid,
    Maqbul,
}

/// Highest to lowest. Rendered in this order everywhere.
pub const PREDICATE_SCALE: [Predicate; 4] = [
    Predicate::Mumtaz,
    Predicate::JayyidJiddan,
    Predicate::Jayyid,
    Predicate::Maqbul,
];

impl Predicate {
    pub fn name(self) -> &'static str {
        match self {
            Predicate::Mumtaz => "Mumtaz",
            Predicate::JayyidJiddan => "Jayyid Jiddan",
            Predicate::Jayyid => "Jayyid",
            Predicate::Maqbul => "Maqbul",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Predicate::Mumtaz => "Mumtaz (Istimewa)",
            Predicate::JayyidJiddan => "Jayyid Jiddan (Sangat Baik)",
            Predicate::Jayyid => "Jayyid (Baik)",
            Predicate::Maqbul => "Maqbul (Cukup)",
        }
    }

    /// Accepts either the short name or the full option label.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        PREDICATE_SCALE
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s) || p.label().eq_ignore_ascii_case(s))
    }

    pub fn from_score(score: i64) -> Self {
        match score {
            s if s >= 90 => Predicate::Mumtaz,
            s if s >= 80 => Predicate::JayyidJiddan,
            s if s >= 70 => Predicate::Jayyid,
            _ => Predicate::Maqbul,
        }
    }

    /// Score shown for a predicate-graded cell when the institution grades
    /// numerically.
    pub fn representative_score(self) -> i64 {
        match self {
            Predicate::Mumtaz => 95,
            Predicate::JayyidJiddan => 85,
            Predicate::Jayyid => 75,
            Predicate::Maqbul => 65,
        }
    }
}

impl Serialize for Predicate {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueDomain {
    /// `0..=max` as shown in the UI, but only `max` is enforced.
    Numeric { max: i64 },
    Predicate,
}

impl ValueDomain {
    pub fn for_grading(grading_type: GradingType) -> Self {
        match grading_type {
            GradingType::Numeric => ValueDomain::Numeric { max: NUMERIC_MAX },
            GradingType::Predicate => ValueDomain::Predicate,
        }
    }

    pub fn to_json(self) -> Value {
        match self {
            ValueDomain::Numeric { max } => json!({
                "kind": "numeric",
                "min": null,
                "max": max,
            }),
            ValueDomain::Predicate => json!({
                "kind": "predicate",
                "options": PREDICATE_SCALE
                    .iter()
                    .map(|p| json!({ "value": p.name(), "label": p.label() }))
                    .collect::<Vec<_>>(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuleRule {
    pub module: ModuleKind,
    pub visible: bool,
    pub domain: ValueDomain,
}

impl ModuleRule {
    pub fn to_json(self) -> Value {
        json!({
            "module": self.module.key(),
            "label": self.module.label(),
            "visible": self.visible,
            "valueDomain": self.domain.to_json(),
        })
    }
}

/// The one gating check. Grading, report and dashboard all go through here.
pub fn module_rule(config: &InstitutionConfig, module: ModuleKind) -> ModuleRule {
    ModuleRule {
        module,
        visible: module.enabled_in(&config.modules),
        domain: ValueDomain::for_grading(config.grading_type),
    }
}

pub fn visible_modules(config: &InstitutionConfig) -> Vec<ModuleRule> {
    ModuleKind::ALL
        .into_iter()
        .map(|m| module_rule(config, m))
        .filter(|r| r.visible)
        .collect()
}

/// A grade as entered, before rendering against the active domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grade {
    Score(i64),
    Predicate(Predicate),
}

impl Grade {
    pub fn as_score(self) -> i64 {
        match self {
            Grade::Score(s) => s,
            Grade::Predicate(p) => p.representative_score(),
        }
    }

    pub fn to_json(self) -> Value {
        match self {
            Grade::Score(s) => json!(s),
            Grade::Predicate(p) => json!(p.name()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GradeError {
    #[error("score {score} is above the maximum of {max}")]
    AboveMaximum { score: i64, max: i64 },
    #[error("expected an integer score")]
    NotAScore,
    #[error("expected a predicate label")]
    NotAPredicate,
    #[error("unknown predicate: {0}")]
    UnknownPredicate(String),
}

pub fn parse_grade(domain: ValueDomain, value: &Value) -> Result<Grade, GradeError> {
    match domain {
        ValueDomain::Numeric { max } => {
            let score = match value {
                Value::Number(n) => n.as_i64().ok_or(GradeError::NotAScore)?,
                Value::String(s) => s.trim().parse::<i64>().map_err(|_| GradeError::NotAScore)?,
                _ => return Err(GradeError::NotAScore),
            };
            if score > max {
                return Err(GradeError::AboveMaximum { score, max });
            }
            Ok(Grade::Score(score))
        }
        ValueDomain::Predicate => {
            let s = value.as_str().ok_or(GradeError::NotAPredicate)?;
            Predicate::parse(s)
                .map(Grade::Predicate)
                .ok_or_else(|| GradeError::UnknownPredicate(s.to_string()))
        }
    }
}

pub fn render_grade(domain: ValueDomain, grade: Grade) -> String {
    match domain {
        ValueDomain::Numeric { .. } => grade.as_score().to_string(),
        ValueDomain::Predicate => match grade {
            Grade::Predicate(p) => p.name().to_string(),
            Grade::Score(s) => Predicate::from_score(s).name().to_string(),
        },
    }
}

/// Averages render with one decimal when numeric.
pub fn render_average(domain: ValueDomain, avg: f64) -> String {
    match domain {
        ValueDomain::Numeric { .. } => format!("{:.1}", avg),
        ValueDomain::Predicate => Predicate::from_score(avg.round() as i64).name().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg(grading_type: GradingType, tahfidz: bool, tilawah: bool, adab: bool) -> InstitutionConfig {
        InstitutionConfig {
            grading_type,
            modules: ModuleFlags {
                tilawah,
                tahfidz,
                adab,
            },
            ..InstitutionConfig::default()
        }
    }

    #[test]
    fn predicate_scale_order_is_fixed() {
        let labels: Vec<&str> = PREDICATE_SCALE.iter().map(|p| p.label()).collect();
        assert_eq!(
            labels,
            vec![
                "Mumtaz (Istimewa)",
                "Jayyid Jiddan (Sangat Baik)",
                "Jayyid (Baik)",
                "Maqbul (Cukup)"
            ]
        );
    }

    #[test]
    fn predicate_options_never_reorder_across_configs() {
        let expected: Vec<&str> = PREDICATE_SCALE.iter().map(|p| p.label()).collect();
        for mask in 0..8u8 {
            let c = cfg(GradingType::Predicate, mask & 1 != 0, mask & 2 != 0, mask & 4 != 0);
            for m in ModuleKind::ALL {
                let opts = module_rule(&c, m).domain.to_json();
                let labels: Vec<&str> = opts["options"]
                    .as_array()
                    .unwrap()
                    .iter()
                    .map(|o| o["label"].as_str().unwrap())
                    .collect();
                assert_eq!(labels, expected);
            }
        }
    }

    #[test]
    fn visibility_follows_module_flags_in_render_order() {
        let c = cfg(GradingType::Numeric, false, true, true);
        let mods: Vec<ModuleKind> = visible_modules(&c).iter().map(|r| r.module).collect();
        assert_eq!(mods, vec![ModuleKind::Tilawah, ModuleKind::Adab]);

        let all = cfg(GradingType::Numeric, true, true, true);
        let mods: Vec<ModuleKind> = visible_modules(&all).iter().map(|r| r.module).collect();
        assert_eq!(mods, ModuleKind::ALL.to_vec());

        assert!(!module_rule(&c, ModuleKind::Tahfidz).visible);
    }

    #[test]
    fn domain_follows_grading_type() {
        let n = cfg(GradingType::Numeric, true, true, true);
        assert_eq!(
            module_rule(&n, ModuleKind::Adab).domain,
            ValueDomain::Numeric { max: 100 }
        );
        let p = cfg(GradingType::Predicate, true, true, true);
        assert_eq!(module_rule(&p, ModuleKind::Adab).domain, ValueDomain::Predicate);
    }

    #[test]
    fn numeric_upper_bound_is_enforced() {
        let d = ValueDomain::Numeric { max: NUMERIC_MAX };
        assert_eq!(parse_grade(d, &json!(100)), Ok(Grade::Score(100)));
        assert_eq!(parse_grade(d, &json!("87")), Ok(Grade::Score(87)));
        assert_eq!(
            parse_grade(d, &json!(101)),
            Err(GradeError::AboveMaximum { score: 101, max: 100 })
        );
        assert_eq!(parse_grade(d, &json!(9.5)), Err(GradeError::NotAScore));
    }

    #[test]
    fn numeric_lower_bound_is_not_enforced() {
        // The input has max=100 but no min; negative scores pass through.
        let d = ValueDomain::Numeric { max: NUMERIC_MAX };
        assert_eq!(parse_grade(d, &json!(-5)), Ok(Grade::Score(-5)));
        assert_eq!(render_grade(d, Grade::Score(-5)), "-5");
    }

    #[test]
    fn predicate_parse_accepts_name_or_label() {
        let d = ValueDomain::Predicate;
        assert_eq!(
            parse_grade(d, &json!("Jayyid Jiddan")),
            Ok(Grade::Predicate(Predicate::JayyidJiddan))
        );
        assert_eq!(
            parse_grade(d, &json!("Maqbul (Cukup)")),
            Ok(Grade::Predicate(Predicate::Maqbul))
        );
        assert_eq!(parse_grade(d, &json!(90)), Err(GradeError::NotAPredicate));
        assert!(matches!(
            parse_grade(d, &json!("Rasib")),
            Err(GradeError::UnknownPredicate(_))
        ));
    }

    #[test]
    fn predicate_domain_never_renders_a_number() {
        let names: Vec<&str> = PREDICATE_SCALE.iter().map(|p| p.name()).collect();
        for score in -20..=100 {
            let out = render_grade(ValueDomain::Predicate, Grade::Score(score));
            assert!(names.contains(&out.as_str()), "{score} rendered as {out}");
        }
    }

    #[test]
    fn score_bands() {
        assert_eq!(Predicate::from_score(92), Predicate::Mumtaz);
        assert_eq!(Predicate::from_score(88), Predicate::JayyidJiddan);
        assert_eq!(Predicate::from_score(70), Predicate::Jayyid);
        assert_eq!(Predicate::from_score(69), Predicate::Maqbul);
    }

    #[test]
    fn numeric_domain_renders_predicates_as_scores() {
        let d = ValueDomain::Numeric { max: NUMERIC_MAX };
        assert_eq!(render_grade(d, Grade::Predicate(Predicate::Mumtaz)), "95");
        assert_eq!(render_average(d, 89.666), "89.7");
        assert_eq!(render_average(ValueDomain::Predicate, 89.666), "Mumtaz");
    }
}
