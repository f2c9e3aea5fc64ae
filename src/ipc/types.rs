use crate::config::ConfigStore;
use crate::entities::{ClassGroup, Collection, Student, Teacher};
use crate::gradebook::Gradebook;
use crate::modal::ModalController;
use crate::seed::{self, WeeklyProgress};
use crate::view::{Tab, ViewRouter};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Request {
    pub id: String,
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
}

/// Everything the dashboard shows. Owned by the request loop and handed to
/// handlers one request at a time.
#[derive(Debug, Default)]
pub struct AppState {
    pub config: ConfigStore,
    pub students: Collection<Student>,
    pub teachers: Collection<Teacher>,
    pub classes: Collection<ClassGroup>,
    pub selected_student: Option<u32>,
    pub modal: ModalController,
    pub router: ViewRouter,
    pub gradebook: Gradebook,
    pub weekly: Vec<WeeklyProgress>,
}

impl AppState {
    pub fn seeded() -> Self {
        Self {
            students: Collection::new(seed::students()),
            teachers: Collection::new(seed::teachers()),
            classes: Collection::new(seed::classes()),
            weekly: seed::weekly_progress(),
            ..Self::default()
        }
    }

    pub fn selected(&self) -> Option<&Student> {
        self.selected_student.and_then(|id| self.students.get(id))
    }

    /// Points the shared selection at `student_id`. An unknown id leaves the
    /// previous selection in place.
    pub fn select_student(&mut self, student_id: u32) -> Option<&Student> {
        if self.students.get(student_id).is_none() {
            return None;
        }
        self.selected_student = Some(student_id);
        tracing::debug!(student_id, "student selected");
        self.selected()
    }

    /// Leaving a tab discards any open add dialog.
    pub fn navigate(&mut self, tab: Tab) {
        if self.router.navigate(tab) && self.modal.is_open() {
            tracing::debug!(tab = tab.key(), "closing add dialog on navigation");
            self.modal.reset();
        }
    }
}
