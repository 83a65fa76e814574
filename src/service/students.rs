use crate::core::time::now_utc;
use crate::fixtures;
use crate::models::{Preferences, Student};
use crate::service::errors::ServiceError;
use crate::service::MockService;
use crate::store::keys;

/// Partial student update; unset fields keep their current value.
#[derive(Debug, Clone, Default)]
pub struct StudentPatch {
    pub enrolled_courses: Option<Vec<String>>,
    pub completed_lessons: Option<u32>,
    pub assignments_submitted: Option<u32>,
    pub attendance_rate: Option<f64>,
    pub learning_streak: Option<u32>,
    pub preferences: Option<Preferences>,
}

impl MockService {
    pub async fn get_student(&self, id: &str) -> Result<Option<Student>, ServiceError> {
        self.gate().await?;
        let students = self.collection(keys::STUDENTS, fixtures::students).await?;
        Ok(students.into_iter().find(|student| student.id == id))
    }

    /// Merges the set fields of `patch` into the student record. Unknown ids
    /// resolve without error and without a write.
    pub async fn update_student(&self, id: &str, patch: StudentPatch) -> Result<(), ServiceError> {
        self.gate().await?;
        let mut students = self.collection(keys::STUDENTS, fixtures::students).await?;
        let Some(student) = students.iter_mut().find(|student| student.id == id) else {
            return Ok(());
        };

        if let Some(enrolled_courses) = patch.enrolled_courses {
            student.enrolled_courses = enrolled_courses;
        }
        if let Some(completed_lessons) = patch.completed_lessons {
            student.completed_lessons = completed_lessons;
        }
        if let Some(assignments_submitted) = patch.assignments_submitted {
            student.assignments_submitted = assignments_submitted;
        }
        if let Some(attendance_rate) = patch.attendance_rate {
            student.attendance_rate = attendance_rate;
        }
        if let Some(learning_streak) = patch.learning_streak {
            student.learning_streak = learning_streak;
        }
        if let Some(preferences) = patch.preferences {
            student.preferences = preferences;
        }
        self.persist(keys::STUDENTS, &students).await
    }

    /// Marks a badge as earned with the current date. Badges are idempotent
    /// toggles: an already-earned badge is never re-earned or re-dated.
    pub async fn award_badge(&self, student_id: &str, badge_id: &str) -> Result<(), ServiceError> {
        self.gate().await?;
        let mut students = self.collection(keys::STUDENTS, fixtures::students).await?;
        let Some(student) = students.iter_mut().find(|student| student.id == student_id) else {
            return Ok(());
        };
        let Some(badge) = student.badges.iter_mut().find(|badge| badge.id == badge_id) else {
            return Ok(());
        };
        if badge.earned {
            return Ok(());
        }

        badge.earned = true;
        badge.earned_date = Some(now_utc());
        self.persist(keys::STUDENTS, &students).await
    }
}
