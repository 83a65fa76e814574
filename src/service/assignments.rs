use crate::core::time::now_utc;
use crate::fixtures;
use crate::models::types::AssignmentStatus;
use crate::models::{Assignment, SubmittedFile};
use crate::service::errors::ServiceError;
use crate::service::{format_kb, MockService};
use crate::store::keys;

/// File metadata handed over by the submission UI.
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub name: String,
    pub size_bytes: u64,
    pub file_type: String,
}

impl MockService {
    pub async fn get_assignments(
        &self,
        course_id: Option<&str>,
    ) -> Result<Vec<Assignment>, ServiceError> {
        self.gate().await?;
        let assignments = self.collection(keys::ASSIGNMENTS, fixtures::assignments).await?;
        Ok(match course_id {
            Some(course_id) => assignments
                .into_iter()
                .filter(|assignment| assignment.course_id == course_id)
                .collect(),
            None => assignments,
        })
    }

    pub async fn get_assignment(&self, id: &str) -> Result<Option<Assignment>, ServiceError> {
        self.gate().await?;
        let assignments = self.collection(keys::ASSIGNMENTS, fixtures::assignments).await?;
        Ok(assignments.into_iter().find(|assignment| assignment.id == id))
    }

    /// Moves a pending assignment to submitted. Status only ever advances, so
    /// a second submission (or submitting a graded assignment) is a no-op.
    pub async fn submit_assignment(
        &self,
        id: &str,
        files: &[UploadFile],
    ) -> Result<(), ServiceError> {
        self.gate().await?;
        let mut assignments = self.collection(keys::ASSIGNMENTS, fixtures::assignments).await?;
        let Some(assignment) = assignments.iter_mut().find(|assignment| assignment.id == id) else {
            return Ok(());
        };
        if assignment.status != AssignmentStatus::Pending {
            tracing::debug!(assignment_id = %id, status = ?assignment.status, "submit skipped");
            return Ok(());
        }

        assignment.status = AssignmentStatus::Submitted;
        assignment.submission_date = Some(now_utc());
        assignment.submitted_files = files
            .iter()
            .map(|file| SubmittedFile {
                name: file.name.clone(),
                size: format_kb(file.size_bytes),
                file_type: file.file_type.clone(),
                url: format!("/mock-files/{}", file.name),
            })
            .collect();
        self.persist(keys::ASSIGNMENTS, &assignments).await
    }

    /// Grades an assignment. Grading always ends in the graded state and never
    /// moves a status backward; re-grading overwrites the previous result.
    pub async fn grade_assignment(
        &self,
        id: &str,
        grade: &str,
        score: f64,
        feedback: &str,
    ) -> Result<(), ServiceError> {
        self.gate().await?;
        let mut assignments = self.collection(keys::ASSIGNMENTS, fixtures::assignments).await?;
        let Some(assignment) = assignments.iter_mut().find(|assignment| assignment.id == id) else {
            return Ok(());
        };

        assignment.status = AssignmentStatus::Graded;
        assignment.grade = Some(grade.to_string());
        assignment.score = Some(score);
        assignment.feedback = Some(feedback.to_string());
        self.persist(keys::ASSIGNMENTS, &assignments).await
    }
}
