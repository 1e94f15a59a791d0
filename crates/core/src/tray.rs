//! Whether the notification tray should be shown to a learner.

/// True when notifications are enabled in at least one of the user's active
/// enrollments. Stops at the first enabled course.
pub fn show_notifications_tray<I, S, F>(enrolled_course_ids: I, mut is_enabled: F) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    F: FnMut(&str) -> bool,
{
    enrolled_course_ids
        .into_iter()
        .any(|course_id| is_enabled(course_id.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_enrollments_hides_tray() {
        assert!(!show_notifications_tray(Vec::<String>::new(), |_| true));
    }

    #[test]
    fn any_enabled_course_shows_tray() {
        let courses = ["course-a", "course-b"];
        assert!(show_notifications_tray(courses, |id| id == "course-b"));
    }

    #[test]
    fn stops_at_first_enabled_course() {
        let mut checked = Vec::new();
        let shown = show_notifications_tray(["a", "b", "c"], |id| {
            checked.push(id.to_string());
            id == "a"
        });
        assert!(shown);
        assert_eq!(checked, vec!["a"]);
    }
}
