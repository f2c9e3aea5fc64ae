use serde::Serialize;
use serde_json::{json, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Dashboard,
    Students,
    Teachers,
    Classes,
    Grading,
    Settings,
    Report,
}

impl Tab {
    pub const ALL: [Tab; 7] = [
        Tab::Dashboard,
        Tab::Students,
        Tab::Teachers,
        Tab::Classes,
        Tab::Grading,
        Tab::Settings,
        Tab::Report,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Tab::Dashboard => "dashboard",
            Tab::Students => "students",
            Tab::Teachers => "teachers",
            Tab::Classes => "classes",
            Tab::Grading => "grading",
            Tab::Settings => "settings",
            Tab::Report => "report",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.key() == s)
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::Students => "Data Santri",
            Tab::Teachers => "Data Guru",
            Tab::Classes => "Data Kelas",
            Tab::Grading => "Input Nilai",
            Tab::Settings => "Pengaturan",
            Tab::Report => "Cetak Rapor",
        }
    }
}

/// Which top-level view is showing. Every tab is reachable from every other.
#[derive(Debug, Clone, Default)]
pub struct ViewRouter {
    active: Tab,
}

impl ViewRouter {
    pub fn active(&self) -> Tab {
        self.active
    }

    /// Returns true when the active tab changed.
    pub fn navigate(&mut self, tab: Tab) -> bool {
        let changed = self.active != tab;
        self.active = tab;
        changed
    }

    pub fn to_json(&self) -> Value {
        let tabs: Vec<Value> = Tab::ALL
            .iter()
            .map(|t| json!({ "id": t.key(), "label": t.label() }))
            .collect();
        json!({ "activeTab": self.active, "tabs": tabs })
    }
}
