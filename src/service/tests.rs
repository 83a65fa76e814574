use std::sync::Arc;
use std::time::Instant;

use crate::core::config::Settings;
use crate::fixtures;
use crate::models::types::{AssignmentStatus, LiveClassStatus, NotificationKind};
use crate::service::assignments::UploadFile;
use crate::service::errors::ServiceError;
use crate::service::notifications::NotificationDraft;
use crate::service::students::StudentPatch;
use crate::service::MockService;
use crate::store::{MemoryStore, SnapshotStore};
use crate::test_support;

#[tokio::test]
async fn zero_failure_rate_never_rejects() {
    let service = test_support::instant_service().await;
    for _ in 0..50 {
        service.get_courses().await.expect("call with failure rate 0");
    }
}

#[tokio::test]
async fn full_failure_rate_always_rejects() {
    let service = test_support::instant_service().await;
    service.set_failure_rate(1.0);
    for _ in 0..10 {
        let err = service.get_courses().await.expect_err("failure rate 1");
        assert!(matches!(err, ServiceError::RequestFailed));
    }
}

#[tokio::test]
async fn offline_rejects_immediately_without_latency() {
    let service = test_support::instant_service().await;
    service.set_latency(5_000, 5_000);
    service.simulate_offline(true).await.expect("toggle offline");

    let started = Instant::now();
    let err = service.get_courses().await.expect_err("offline call");
    assert!(matches!(err, ServiceError::Offline));
    assert!(started.elapsed().as_millis() < 1_000, "offline must skip the latency wait");

    // failure rate is irrelevant while offline
    service.set_failure_rate(0.0);
    let err = service.get_lessons(None).await.expect_err("still offline");
    assert!(matches!(err, ServiceError::Offline));
}

#[tokio::test]
async fn offline_flag_survives_reopen_on_same_store() {
    let store: Arc<dyn SnapshotStore> = Arc::new(MemoryStore::new());
    let service = MockService::open(store.clone(), &Settings::default()).await.expect("service");
    service.simulate_offline(true).await.expect("toggle offline");
    drop(service);

    let reopened = MockService::open(store, &Settings::default()).await.expect("service");
    assert!(reopened.is_offline());
}

#[tokio::test]
async fn first_read_returns_bundled_courses_unmodified() {
    let service = test_support::instant_service().await;
    let courses = service.get_courses().await.expect("courses");

    let bundled = fixtures::courses().expect("fixture");
    assert_eq!(
        serde_json::to_value(&courses).unwrap(),
        serde_json::to_value(&bundled).unwrap(),
        "first read must equal the bundled fixture exactly"
    );
}

#[tokio::test]
async fn update_then_read_returns_updated_fields() {
    let service = test_support::instant_service().await;
    service.update_lesson_progress("lesson-2", 80, 500).await.expect("update");

    let lesson = service.get_lesson("lesson-2").await.expect("read").expect("lesson-2 exists");
    assert_eq!(lesson.progress, 80);
    assert_eq!(lesson.watch_time, 500);
    assert!(!lesson.completed);
    assert!(lesson.last_watched.is_some());
}

#[tokio::test]
async fn full_progress_marks_lesson_completed() {
    let service = test_support::instant_service().await;
    service.update_lesson_progress("lesson-2", 100, 300).await.expect("update");

    let lesson = service.get_lesson("lesson-2").await.expect("read").expect("lesson-2 exists");
    assert_eq!(lesson.progress, 100);
    assert_eq!(lesson.watch_time, 300);
    assert!(lesson.completed);
}

#[tokio::test]
async fn updating_unknown_lesson_is_a_silent_noop() {
    let service = test_support::instant_service().await;
    service.update_lesson_progress("lesson-x", 100, 300).await.expect("no-op update");

    let lessons = service.get_lessons(None).await.expect("lessons");
    let bundled = fixtures::lessons().expect("fixture");
    assert_eq!(
        serde_json::to_value(&lessons).unwrap(),
        serde_json::to_value(&bundled).unwrap(),
        "collection must be unchanged after a no-op update"
    );
}

#[tokio::test]
async fn lessons_filter_by_course() {
    let service = test_support::instant_service().await;
    let lessons = service.get_lessons(Some("course-2")).await.expect("lessons");
    assert!(!lessons.is_empty());
    assert!(lessons.iter().all(|lesson| lesson.course_id == "course-2"));
}

#[tokio::test]
async fn download_lesson_sets_flag() {
    let service = test_support::instant_service().await;
    service.download_lesson("lesson-3").await.expect("download");
    let lesson = service.get_lesson("lesson-3").await.expect("read").expect("lesson-3 exists");
    assert!(lesson.downloaded);
}

#[tokio::test]
async fn reset_mock_data_is_idempotent() {
    let service = test_support::instant_service().await;
    service.update_lesson_progress("lesson-2", 90, 100).await.expect("mutate");
    service.download_lesson("lesson-4").await.expect("mutate");

    service.reset_mock_data().await.expect("first reset");
    let after_once = service.get_lessons(None).await.expect("lessons");
    let bundled = serde_json::to_value(fixtures::lessons().expect("fixture")).unwrap();
    assert_eq!(serde_json::to_value(&after_once).unwrap(), bundled);

    service.reset_mock_data().await.expect("second reset");
    let after_twice = service.get_lessons(None).await.expect("lessons");
    assert_eq!(serde_json::to_value(&after_twice).unwrap(), bundled);
}

#[tokio::test]
async fn reset_preserves_session_and_offline_flag() {
    let service = test_support::instant_service().await;
    let account = service
        .authenticate("student1", "demo123")
        .await
        .expect("authenticate")
        .expect("demo account");
    service.remember_session(&account).await.expect("remember");
    service.simulate_offline(true).await.expect("offline");

    service.reset_mock_data().await.expect("reset");
    assert!(service.current_user().await.expect("session read").is_some());
    assert!(service.is_offline());
}

#[tokio::test]
async fn mark_notification_read_round_trip() {
    let service = test_support::instant_service().await;
    service.mark_notification_read("notif-1").await.expect("mark read");

    let notifications = service.get_notifications().await.expect("notifications");
    let target = notifications
        .iter()
        .find(|notification| notification.id == "notif-1")
        .expect("notif-1 present");
    assert!(target.read);

    // second mark is an idempotent no-op
    service.mark_notification_read("notif-1").await.expect("mark read again");
    assert_eq!(service.unread_notifications().await.expect("count"), 1);
}

#[tokio::test]
async fn add_notification_prepends_unread_entry() {
    let service = test_support::instant_service().await;
    let id = service
        .add_notification(NotificationDraft {
            title: "Class Rescheduled".to_string(),
            title_hi: "कक्षा पुनर्निर्धारित".to_string(),
            title_mar: "वर्ग पुनर्नियोजित".to_string(),
            message: "Tomorrow's live class moves to 5 pm".to_string(),
            message_hi: "कल की लाइव कक्षा शाम 5 बजे होगी".to_string(),
            message_mar: "उद्याचा लाइव्ह वर्ग संध्याकाळी 5 वाजता होईल".to_string(),
            kind: NotificationKind::Warning,
            action_url: None,
        })
        .await
        .expect("add notification");

    let notifications = service.get_notifications().await.expect("notifications");
    assert_eq!(notifications[0].id, id);
    assert!(!notifications[0].read);
    assert_eq!(notifications.len(), 3);
}

#[tokio::test]
async fn submit_assignment_advances_pending_only() {
    let service = test_support::instant_service().await;
    let files = vec![UploadFile {
        name: "style.css".to_string(),
        size_bytes: 2_048,
        file_type: "text/css".to_string(),
    }];
    service.submit_assignment("assignment-2", &files).await.expect("submit");

    let assignment =
        service.get_assignment("assignment-2").await.expect("read").expect("assignment-2");
    assert_eq!(assignment.status, AssignmentStatus::Submitted);
    assert!(assignment.submission_date.is_some());
    assert_eq!(assignment.submitted_files.len(), 1);
    assert_eq!(assignment.submitted_files[0].size, "2.0 KB");
    assert_eq!(assignment.submitted_files[0].url, "/mock-files/style.css");

    // already submitted: a second submission must not replace the files
    let other = vec![UploadFile {
        name: "other.css".to_string(),
        size_bytes: 10,
        file_type: "text/css".to_string(),
    }];
    service.submit_assignment("assignment-2", &other).await.expect("resubmit no-op");
    let assignment =
        service.get_assignment("assignment-2").await.expect("read").expect("assignment-2");
    assert_eq!(assignment.submitted_files[0].name, "style.css");
}

#[tokio::test]
async fn grade_assignment_records_result() {
    let service = test_support::instant_service().await;
    service.grade_assignment("assignment-3", "B+", 41.0, "Show more working").await.expect("grade");

    let assignment =
        service.get_assignment("assignment-3").await.expect("read").expect("assignment-3");
    assert_eq!(assignment.status, AssignmentStatus::Graded);
    assert_eq!(assignment.grade.as_deref(), Some("B+"));
    assert_eq!(assignment.score, Some(41.0));
    assert_eq!(assignment.feedback.as_deref(), Some("Show more working"));
}

#[tokio::test]
async fn grading_never_moves_status_backward() {
    let service = test_support::instant_service().await;
    // grading a pending assignment jumps forward to graded
    service.grade_assignment("assignment-2", "C", 55.0, "Late review").await.expect("grade");
    let assignment =
        service.get_assignment("assignment-2").await.expect("read").expect("assignment-2");
    assert_eq!(assignment.status, AssignmentStatus::Graded);

    // submitting a graded assignment is a no-op
    service.submit_assignment("assignment-2", &[]).await.expect("submit no-op");
    let assignment =
        service.get_assignment("assignment-2").await.expect("read").expect("assignment-2");
    assert_eq!(assignment.status, AssignmentStatus::Graded);
}

#[tokio::test]
async fn authenticate_matches_demo_credentials() {
    let service = test_support::instant_service().await;
    let account = service
        .authenticate("student1", "demo123")
        .await
        .expect("authenticate")
        .expect("valid credentials");
    assert_eq!(account.id, "student-1");

    let missing = service.authenticate("student1", "wrong").await.expect("authenticate");
    assert!(missing.is_none(), "wrong password is a successful None");
}

#[tokio::test]
async fn authenticate_goes_through_offline_gate() {
    let service = test_support::instant_service().await;
    service.simulate_offline(true).await.expect("offline");
    let err = service.authenticate("student1", "demo123").await.expect_err("offline login");
    assert!(matches!(err, ServiceError::Offline));
}

#[tokio::test]
async fn session_round_trip_and_logout() {
    let service = test_support::instant_service().await;
    assert!(service.current_user().await.expect("empty session").is_none());

    let account = service
        .authenticate("teacher1", "demo123")
        .await
        .expect("authenticate")
        .expect("teacher account");
    service.remember_session(&account).await.expect("remember");

    // session reads stay available while offline
    service.simulate_offline(true).await.expect("offline");
    let current = service.current_user().await.expect("session read").expect("saved session");
    assert_eq!(current.id, "teacher-1");

    service.logout().await.expect("logout");
    assert!(service.current_user().await.expect("after logout").is_none());
}

#[tokio::test]
async fn join_live_class_advances_scheduled_to_live() {
    let service = test_support::instant_service().await;
    service.join_live_class("live-1").await.expect("join");

    let classes = service.get_live_classes().await.expect("classes");
    let class = classes.iter().find(|class| class.id == "live-1").expect("live-1");
    assert_eq!(class.status, LiveClassStatus::Live);
    assert_eq!(class.participants, 1);

    // joining again never reverts the status
    service.join_live_class("live-1").await.expect("join again");
    let classes = service.get_live_classes().await.expect("classes");
    let class = classes.iter().find(|class| class.id == "live-1").expect("live-1");
    assert_eq!(class.status, LiveClassStatus::Live);
    assert_eq!(class.participants, 2);
}

#[tokio::test]
async fn award_badge_is_idempotent() {
    let service = test_support::instant_service().await;
    service.award_badge("student-1", "badge-week-streak").await.expect("award");

    let student = service.get_student("student-1").await.expect("read").expect("student-1");
    let badge =
        student.badges.iter().find(|badge| badge.id == "badge-week-streak").expect("badge");
    assert!(badge.earned);
    let first_date = badge.earned_date.expect("earned date set");

    service.award_badge("student-1", "badge-week-streak").await.expect("award again");
    let student = service.get_student("student-1").await.expect("read").expect("student-1");
    let badge =
        student.badges.iter().find(|badge| badge.id == "badge-week-streak").expect("badge");
    assert_eq!(badge.earned_date, Some(first_date), "badges are never re-earned");
}

#[tokio::test]
async fn update_student_merges_only_set_fields() {
    let service = test_support::instant_service().await;
    service
        .update_student(
            "student-1",
            StudentPatch {
                learning_streak: Some(7),
                attendance_rate: Some(90.0),
                ..StudentPatch::default()
            },
        )
        .await
        .expect("patch");

    let student = service.get_student("student-1").await.expect("read").expect("student-1");
    assert_eq!(student.learning_streak, 7);
    assert_eq!(student.attendance_rate, 90.0);
    assert_eq!(student.name, "Arjun Patil");
    assert_eq!(student.completed_lessons, 14);
}

#[tokio::test]
async fn upload_recording_creates_retrievable_lesson() {
    let service = test_support::instant_service().await;
    let id = service
        .upload_recording(
            "Revision: HTML Tags",
            "Quick revision before the test",
            "/media/recordings/revision.webm",
            2 * 1024 * 1024,
        )
        .await
        .expect("upload");

    let lesson = service.get_lesson(&id).await.expect("read").expect("new lesson");
    assert_eq!(lesson.course_id, "course-1");
    assert_eq!(lesson.file_size, "2.0 MB");
    assert_eq!(lesson.estimated_size_2g, "0.6 MB");
    assert_eq!(lesson.progress, 0);
    assert!(!lesson.completed);
}

#[tokio::test]
async fn cache_size_reports_namespaced_usage() {
    let service = test_support::instant_service().await;
    assert_eq!(service.cache_size().await.expect("empty cache"), "0.0 KB");

    service.get_courses().await.expect("seed courses");
    let size = service.cache_size().await.expect("cache size");
    let kilobytes: f64 =
        size.strip_suffix(" KB").expect("KB suffix").parse().expect("numeric size");
    assert!(kilobytes > 0.0);
}
