pub mod types;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::models::types::{AccountRole, AssignmentStatus, LiveClassStatus, NotificationKind};

// Snapshot records are serialized with the same camelCase layout the web client
// keeps in local storage, so a persisted data directory stays portable.

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub title: String,
    pub title_hi: String,
    pub title_mar: String,
    pub description: String,
    pub description_hi: String,
    pub description_mar: String,
    pub instructor: String,
    pub duration: String,
    pub level: String,
    pub enrolled: bool,
    pub progress: u8,
    pub total_lessons: u32,
    pub completed_lessons: u32,
    pub thumbnail: String,
    pub category: String,
    pub rating: f64,
    pub students_enrolled: u32,
    #[serde(with = "time::serde::rfc3339::option")]
    pub last_accessed: Option<OffsetDateTime>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    pub id: String,
    pub course_id: String,
    pub title: String,
    pub title_hi: String,
    pub title_mar: String,
    pub description: String,
    pub description_hi: String,
    pub description_mar: String,
    pub duration: String,
    pub audio_url: String,
    pub slides_url: String,
    pub transcript_url: String,
    pub thumbnail: String,
    pub completed: bool,
    pub downloaded: bool,
    pub progress: u8,
    pub file_size: String,
    #[serde(rename = "estimatedSize2G")]
    pub estimated_size_2g: String,
    pub slides: Vec<Slide>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub last_watched: Option<OffsetDateTime>,
    pub watch_time: u32,
}

/// One slide in a lesson deck, keyed into the audio track by a `mm:ss` offset.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    pub id: u32,
    pub title: String,
    pub timestamp: String,
    pub thumbnail: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub id: String,
    pub course_id: String,
    pub title: String,
    pub title_hi: String,
    pub title_mar: String,
    pub description: String,
    pub description_hi: String,
    pub description_mar: String,
    #[serde(with = "time::serde::rfc3339")]
    pub due_date: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339::option")]
    pub submission_date: Option<OffsetDateTime>,
    pub status: AssignmentStatus,
    pub grade: Option<String>,
    pub score: Option<f64>,
    pub max_score: f64,
    pub feedback: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback_hi: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback_mar: Option<String>,
    pub instructor: String,
    pub submitted_files: Vec<SubmittedFile>,
    pub rubric: Vec<RubricItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedFile {
    pub name: String,
    pub size: String,
    #[serde(rename = "type")]
    pub file_type: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RubricItem {
    pub criteria: String,
    pub points: f64,
    pub earned: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar: String,
    pub role: String,
    pub enrolled_courses: Vec<String>,
    pub completed_lessons: u32,
    pub total_lessons: u32,
    pub assignments_submitted: u32,
    pub total_assignments: u32,
    pub attendance_rate: f64,
    pub learning_streak: u32,
    pub badges: Vec<Badge>,
    pub recent_activity: Vec<Activity>,
    pub weekly_progress: Vec<WeeklyProgress>,
    pub preferences: Preferences,
    pub parent_info: ParentInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
    pub id: String,
    pub name: String,
    pub name_hi: String,
    pub name_mar: String,
    pub icon: String,
    pub earned: bool,
    #[serde(with = "time::serde::rfc3339::option")]
    pub earned_date: Option<OffsetDateTime>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    #[serde(rename = "type")]
    pub activity_type: String,
    pub title: String,
    pub title_hi: String,
    pub title_mar: String,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    pub score: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyProgress {
    pub week: String,
    pub progress: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub language: String,
    pub low_bandwidth_mode: bool,
    pub audio_only_mode: bool,
    pub notifications: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParentInfo {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub receive_updates: bool,
}

/// Demo login record. The password is a plaintext demo credential by design;
/// nothing here is real identity management.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub username: String,
    pub password: String,
    pub role: AccountRole,
    pub name: String,
    pub name_hi: String,
    pub name_mar: String,
    pub profile: Profile,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub avatar: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subjects: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub title_hi: String,
    pub title_mar: String,
    pub message: String,
    pub message_hi: String,
    pub message_mar: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    pub read: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveClass {
    pub id: String,
    pub title: String,
    pub title_hi: String,
    pub title_mar: String,
    pub instructor: String,
    #[serde(with = "time::serde::rfc3339")]
    pub start_time: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub end_time: OffsetDateTime,
    pub status: LiveClassStatus,
    pub participants: u32,
    pub max_participants: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recording_url: Option<String>,
    pub chat_messages: Vec<ChatMessage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: String,
    pub sender: String,
    pub message: String,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}
