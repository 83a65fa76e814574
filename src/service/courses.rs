use crate::fixtures;
use crate::models::Course;
use crate::service::errors::ServiceError;
use crate::service::MockService;
use crate::store::keys;

impl MockService {
    pub async fn get_courses(&self) -> Result<Vec<Course>, ServiceError> {
        self.gate().await?;
        self.collection(keys::COURSES, fixtures::courses).await
    }

    pub async fn get_course(&self, id: &str) -> Result<Option<Course>, ServiceError> {
        self.gate().await?;
        let courses = self.collection(keys::COURSES, fixtures::courses).await?;
        Ok(courses.into_iter().find(|course| course.id == id))
    }
}
