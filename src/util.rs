/// What a recursive delete reports to the caller one level up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DeleteResult {
    /// The key wasn't found so nothing was deleted.
    NotFound,
    /// The key was deleted and the node returning this is now empty. Its parent should drop it.
    Prune,
    /// The key was deleted but the node returning this is still in use.
    Keep,
}
