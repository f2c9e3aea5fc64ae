//! Mock data the dashboard starts with.

use crate::entities::{ClassGroup, Student, Teacher};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyProgress {
    pub day: &'static str,
    pub pages: f64,
}

fn student(
    id: u32,
    name: &str,
    class_name: &str,
    parent: &str,
    attendance: u8,
    last_surah: &str,
    last_ayat: u32,
) -> Student {
    Student {
        id,
        name: name.to_string(),
        class_name: class_name.to_string(),
        parent: parent.to_string(),
        attendance,
        last_surah: last_surah.to_string(),
        last_ayat,
    }
}

pub fn students() -> Vec<Student> {
    vec![
        student(1, "Ahmad Fatih", "Jilid 4", "Bpk. Budi", 95, "An-Naba", 10),
        student(2, "Siti Aisyah", "Al-Qur'an", "Bpk. Rahman", 88, "Al-Baqarah", 15),
        student(3, "Umar Faruq", "Tahfidz 1", "Bpk. Hasan", 92, "Ya-Sin", 83),
        student(4, "Fatimah Azzahra", "Jilid 2", "Bpk. Yusuf", 100, "Al-Falaq", 5),
    ]
}

pub fn teachers() -> Vec<Teacher> {
    vec![
        Teacher {
            id: 1,
            name: "Ustadz Abdullah".into(),
            phone: "081234567890".into(),
            subject: "Tahfidz".into(),
        },
        Teacher {
            id: 2,
            name: "Ustadzah Halimah".into(),
            phone: "081987654321".into(),
            subject: "Tilawati".into(),
        },
    ]
}

pub fn classes() -> Vec<ClassGroup> {
    vec![
        ClassGroup {
            id: 1,
            name: "Jilid 1 (Dasar)".into(),
            schedule: "Senin - Kamis, 16.00".into(),
        },
        ClassGroup {
            id: 2,
            name: "Tahfidz A".into(),
            schedule: "Senin - Jumat, 18.30".into(),
        },
        ClassGroup {
            id: 3,
            name: "Al-Qur'an Dewasa".into(),
            schedule: "Sabtu - Minggu, 08.00".into(),
        },
    ]
}

pub fn weekly_progress() -> Vec<WeeklyProgress> {
    [
        ("Sen", 1.0),
        ("Sel", 2.0),
        ("Rab", 1.5),
        ("Kam", 3.0),
        ("Jum", 2.0),
        ("Sab", 4.0),
    ]
    .into_iter()
    .map(|(day, pages)| WeeklyProgress { day, pages })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_ids_are_sequential() {
        for (i, s) in students().iter().enumerate() {
            assert_eq!(s.id as usize, i + 1);
        }
        for (i, t) in teachers().iter().enumerate() {
            assert_eq!(t.id as usize, i + 1);
        }
        for (i, c) in classes().iter().enumerate() {
            assert_eq!(c.id as usize, i + 1);
        }
    }

    #[test]
    fn attendance_stays_in_percent_range() {
        assert!(students().iter().all(|s| s.attendance <= 100));
    }
}
