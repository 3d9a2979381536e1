use super::PlayerHandle;

/// Whether `name` contains every fragment, in the given order.
///
/// Equivalent to the pattern `.*f1.*f2.*` with each fragment taken literally.
/// Matching is case-sensitive; an empty fragment list matches everything.
pub fn matches_fragments<S: AsRef<str>>(name: &str, fragments: &[S]) -> bool {
    let mut rest = name;
    for fragment in fragments {
        let fragment = fragment.as_ref();
        match rest.find(fragment) {
            Some(index) => rest = &rest[index + fragment.len()..],
            None => return false,
        }
    }
    true
}

/// Picks the first bus name, in bus order, that matches the fragments.
pub fn find_player<S: AsRef<str>>(names: &[String], fragments: &[S]) -> Option<PlayerHandle> {
    names
        .iter()
        .find(|name| matches_fragments(name, fragments))
        .map(|name| PlayerHandle::from_bus_name(name))
}
