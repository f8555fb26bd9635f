/// Join a root-relative parent path and a child name with `/`.
///
/// The root itself is the empty string.
#[must_use]
pub fn join_relative(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{parent}/{name}")
    }
}
