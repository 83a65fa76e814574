pub(crate) const COURSES: &str = "courses";
pub(crate) const LESSONS: &str = "lessons";
pub(crate) const ASSIGNMENTS: &str = "assignments";
pub(crate) const STUDENTS: &str = "students";
pub(crate) const NOTIFICATIONS: &str = "notifications";
pub(crate) const LIVE_CLASSES: &str = "liveClasses";

pub(crate) const USER: &str = "user";
pub(crate) const OFFLINE_MODE: &str = "offlineMode";

/// Collection keys cleared by a mock-data reset. Session, theme, language and
/// the offline flag survive a reset.
pub(crate) const RESETTABLE: &[&str] =
    &[COURSES, LESSONS, ASSIGNMENTS, STUDENTS, NOTIFICATIONS, LIVE_CLASSES];

pub(crate) fn namespaced(namespace: &str, name: &str) -> String {
    format!("{namespace}_{name}")
}
