use uuid::Uuid;

use crate::core::time::now_utc;
use crate::fixtures;
use crate::models::Lesson;
use crate::service::errors::ServiceError;
use crate::service::{format_mb, MockService};
use crate::store::keys;

/// Teacher recordings land in the default course until a proper course picker
/// exists in the authoring panel.
const RECORDING_COURSE_ID: &str = "course-1";

const RECORDING_THUMBNAIL: &str =
    "https://images.pexels.com/photos/270404/pexels-photo-270404.jpeg?w=300&h=200";

impl MockService {
    pub async fn get_lessons(&self, course_id: Option<&str>) -> Result<Vec<Lesson>, ServiceError> {
        self.gate().await?;
        let lessons = self.collection(keys::LESSONS, fixtures::lessons).await?;
        Ok(match course_id {
            Some(course_id) => {
                lessons.into_iter().filter(|lesson| lesson.course_id == course_id).collect()
            }
            None => lessons,
        })
    }

    pub async fn get_lesson(&self, id: &str) -> Result<Option<Lesson>, ServiceError> {
        self.gate().await?;
        let lessons = self.collection(keys::LESSONS, fixtures::lessons).await?;
        Ok(lessons.into_iter().find(|lesson| lesson.id == id))
    }

    /// Records playback progress. Progress of 100 or more marks the lesson
    /// completed. An unknown id resolves without error and without a write.
    pub async fn update_lesson_progress(
        &self,
        id: &str,
        progress: u8,
        watch_time: u32,
    ) -> Result<(), ServiceError> {
        self.gate().await?;
        let mut lessons = self.collection(keys::LESSONS, fixtures::lessons).await?;
        let Some(lesson) = lessons.iter_mut().find(|lesson| lesson.id == id) else {
            return Ok(());
        };

        lesson.progress = progress.min(100);
        lesson.watch_time = watch_time;
        lesson.last_watched = Some(now_utc());
        if progress >= 100 {
            lesson.completed = true;
        }
        self.persist(keys::LESSONS, &lessons).await
    }

    pub async fn download_lesson(&self, id: &str) -> Result<(), ServiceError> {
        self.gate().await?;
        let mut lessons = self.collection(keys::LESSONS, fixtures::lessons).await?;
        let Some(lesson) = lessons.iter_mut().find(|lesson| lesson.id == id) else {
            return Ok(());
        };

        lesson.downloaded = true;
        self.persist(keys::LESSONS, &lessons).await
    }

    /// Synthesizes a lesson from a teacher recording and returns its id. The
    /// 2G size estimate follows the web client's 0.3 compression factor.
    pub async fn upload_recording(
        &self,
        title: &str,
        description: &str,
        audio_url: &str,
        size_bytes: u64,
    ) -> Result<String, ServiceError> {
        self.gate().await?;
        let mut lessons = self.collection(keys::LESSONS, fixtures::lessons).await?;

        let lesson = Lesson {
            id: format!("lesson-{}", Uuid::new_v4()),
            course_id: RECORDING_COURSE_ID.to_string(),
            title: title.to_string(),
            title_hi: title.to_string(),
            title_mar: title.to_string(),
            description: description.to_string(),
            description_hi: description.to_string(),
            description_mar: description.to_string(),
            duration: "00:00".to_string(),
            audio_url: audio_url.to_string(),
            slides_url: String::new(),
            transcript_url: String::new(),
            thumbnail: RECORDING_THUMBNAIL.to_string(),
            completed: false,
            downloaded: false,
            progress: 0,
            file_size: format_mb(size_bytes),
            estimated_size_2g: format_mb((size_bytes as f64 * 0.3) as u64),
            slides: Vec::new(),
            last_watched: None,
            watch_time: 0,
        };
        let id = lesson.id.clone();
        lessons.push(lesson);
        self.persist(keys::LESSONS, &lessons).await?;
        tracing::info!(lesson_id = %id, "recording uploaded as new lesson");
        Ok(id)
    }
}
