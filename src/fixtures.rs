//! Bundled seed data. Collections fall back to these when no snapshot has been
//! persisted yet; a mock-data reset brings everything back to this state.

use time::Duration;

use crate::core::time::now_utc;
use crate::models::types::{LiveClassStatus, NotificationKind};
use crate::models::{Account, Assignment, Course, Lesson, LiveClass, Notification, Student};

const COURSES_JSON: &str = include_str!("../fixtures/courses.json");
const LESSONS_JSON: &str = include_str!("../fixtures/lessons.json");
const ASSIGNMENTS_JSON: &str = include_str!("../fixtures/assignments.json");
const STUDENTS_JSON: &str = include_str!("../fixtures/students.json");
const ACCOUNTS_JSON: &str = include_str!("../fixtures/accounts.json");

pub fn courses() -> Result<Vec<Course>, serde_json::Error> {
    serde_json::from_str(COURSES_JSON)
}

pub fn lessons() -> Result<Vec<Lesson>, serde_json::Error> {
    serde_json::from_str(LESSONS_JSON)
}

pub fn assignments() -> Result<Vec<Assignment>, serde_json::Error> {
    serde_json::from_str(ASSIGNMENTS_JSON)
}

pub fn students() -> Result<Vec<Student>, serde_json::Error> {
    serde_json::from_str(STUDENTS_JSON)
}

pub fn accounts() -> Result<Vec<Account>, serde_json::Error> {
    serde_json::from_str(ACCOUNTS_JSON)
}

/// Notification defaults are synthesized with timestamps relative to now so the
/// demo inbox always looks recent.
pub fn default_notifications() -> Vec<Notification> {
    let now = now_utc();
    vec![
        Notification {
            id: "notif-1".to_string(),
            title: "New Assignment Posted".to_string(),
            title_hi: "नया असाइनमेंट पोस्ट किया गया".to_string(),
            title_mar: "नवीन असाइनमेंट पोस्ट केले".to_string(),
            message: "CSS Styling assignment is now available".to_string(),
            message_hi: "CSS स्टाइलिंग असाइनमेंट अब उपलब्ध है".to_string(),
            message_mar: "CSS स्टाइलिंग असाइनमेंट आता उपलब्ध आहे".to_string(),
            kind: NotificationKind::Info,
            timestamp: now - Duration::hours(2),
            read: false,
            action_url: Some("/assignments".to_string()),
        },
        Notification {
            id: "notif-2".to_string(),
            title: "Grade Received".to_string(),
            title_hi: "ग्रेड प्राप्त हुआ".to_string(),
            title_mar: "ग्रेड मिळाले".to_string(),
            message: "You received an A grade on your HTML assignment".to_string(),
            message_hi: "आपको अपने HTML असाइनमेंट पर A ग्रेड मिला".to_string(),
            message_mar: "तुम्हाला तुमच्या HTML असाइनमेंटवर A ग्रेड मिळाले".to_string(),
            kind: NotificationKind::Success,
            timestamp: now - Duration::hours(4),
            read: false,
            action_url: Some("/assignments".to_string()),
        },
    ]
}

/// One class about to start and one already running, relative to now.
pub fn default_live_classes() -> Vec<LiveClass> {
    let now = now_utc();
    vec![
        LiveClass {
            id: "live-1".to_string(),
            title: "Advanced CSS Techniques".to_string(),
            title_hi: "उन्नत CSS तकनीकें".to_string(),
            title_mar: "प्रगत CSS तंत्रे".to_string(),
            instructor: "Dr. Priya Sharma".to_string(),
            start_time: now + Duration::minutes(30),
            end_time: now + Duration::minutes(90),
            status: LiveClassStatus::Scheduled,
            participants: 0,
            max_participants: 50,
            recording_url: None,
            chat_messages: Vec::new(),
        },
        LiveClass {
            id: "live-2".to_string(),
            title: "JavaScript Fundamentals".to_string(),
            title_hi: "JavaScript की बुनियादी बातें".to_string(),
            title_mar: "JavaScript मूलभूत गोष्टी".to_string(),
            instructor: "Prof. Rajesh Kumar".to_string(),
            start_time: now - Duration::minutes(30),
            end_time: now + Duration::minutes(30),
            status: LiveClassStatus::Live,
            participants: 23,
            max_participants: 50,
            recording_url: None,
            chat_messages: Vec::new(),
        },
    ]
}
