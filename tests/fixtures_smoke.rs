use std::collections::HashSet;

use eduindia_rust::fixtures;
use eduindia_rust::models::types::AssignmentStatus;

#[test]
fn bundled_fixtures_cross_link() -> anyhow::Result<()> {
    let courses = fixtures::courses()?;
    let lessons = fixtures::lessons()?;
    let assignments = fixtures::assignments()?;
    let students = fixtures::students()?;
    let accounts = fixtures::accounts()?;

    let course_ids: HashSet<&str> = courses.iter().map(|course| course.id.as_str()).collect();
    assert_eq!(course_ids.len(), courses.len(), "course ids are unique");

    for lesson in &lessons {
        assert!(
            course_ids.contains(lesson.course_id.as_str()),
            "lesson {} references unknown course {}",
            lesson.id,
            lesson.course_id
        );
    }

    for assignment in &assignments {
        assert!(
            course_ids.contains(assignment.course_id.as_str()),
            "assignment {} references unknown course {}",
            assignment.id,
            assignment.course_id
        );
        match assignment.status {
            AssignmentStatus::Pending => {
                assert!(assignment.submission_date.is_none());
                assert!(assignment.grade.is_none() && assignment.score.is_none());
            }
            AssignmentStatus::Submitted => {
                assert!(assignment.submission_date.is_some());
                assert!(assignment.grade.is_none() && assignment.score.is_none());
            }
            AssignmentStatus::Graded => {
                assert!(assignment.submission_date.is_some());
                assert!(assignment.grade.is_some() && assignment.score.is_some());
            }
        }
    }

    for student in &students {
        for course in &student.enrolled_courses {
            assert!(course_ids.contains(course.as_str()));
        }
        assert!(student.completed_lessons <= student.total_lessons);
        assert!(student.assignments_submitted <= student.total_assignments);
    }

    let account_ids: HashSet<&str> = accounts.iter().map(|account| account.id.as_str()).collect();
    for student in &students {
        assert!(
            account_ids.contains(student.id.as_str()),
            "student {} has no login account",
            student.id
        );
    }

    Ok(())
}

#[test]
fn progress_values_stay_in_range() -> anyhow::Result<()> {
    for course in fixtures::courses()? {
        assert!(course.progress <= 100, "course {} progress out of range", course.id);
    }
    for lesson in fixtures::lessons()? {
        assert!(lesson.progress <= 100, "lesson {} progress out of range", lesson.id);
    }
    Ok(())
}
