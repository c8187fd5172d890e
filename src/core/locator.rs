use crate::domain::model::SessionLocator;

/// Scans the page path for the course and session identifiers.
///
/// The segment immediately following `course`/`courses` is the course id and
/// the segment following `session`/`sessions` is the session id. Later
/// occurrences override earlier ones. An empty trailing segment counts as
/// missing.
pub fn locate_session(page_path: &str) -> Option<SessionLocator> {
    let segments: Vec<&str> = page_path.split('/').collect();

    let mut course_id: Option<&str> = None;
    let mut session_id: Option<&str> = None;

    for (i, segment) in segments.iter().enumerate() {
        match *segment {
            "course" | "courses" => {
                course_id = segments.get(i + 1).copied().filter(|s| !s.is_empty());
            }
            "session" | "sessions" => {
                session_id = segments.get(i + 1).copied().filter(|s| !s.is_empty());
            }
            _ => {}
        }
    }

    match (course_id, session_id) {
        (Some(course), Some(session)) => Some(SessionLocator::new(course, session)),
        _ => None,
    }
}
