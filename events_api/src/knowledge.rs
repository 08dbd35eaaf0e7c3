use dashmap::DashMap;

/// Returned by [`KnowledgeCache::recall`] for a location that has not been
/// surveyed yet.
pub const NO_PRIOR_KNOWLEDGE: &str = "No previous information available";

/// The most recent survey reply per location, handed to the model as
/// context when a later request drills into that location.
///
/// Keys are used verbatim, so "Paris" and "paris" are separate entries.
/// Entries are never evicted.
///
/// Each read or write of a single key is atomic, but nothing orders a survey
/// against a concurrent drilldown for the same location: the drilldown may
/// see the previous reply, and of two concurrent surveys the last one to
/// finish wins. The cache is only prompt context, so this is accepted.
#[derive(Debug, Default)]
pub struct KnowledgeCache {
    replies: DashMap<String, String>,
}

impl KnowledgeCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `reply` as the latest knowledge about `location`, replacing
    /// whatever was there.
    pub fn remember(&self, location: &str, reply: &str) {
        self.replies.insert(location.to_string(), reply.to_string());
    }

    pub fn recall(&self, location: &str) -> String {
        self.replies
            .get(location)
            .map_or_else(|| NO_PRIOR_KNOWLEDGE.to_string(), |reply| reply.clone())
    }

    /// Number of locations with a remembered survey.
    pub fn len(&self) -> usize {
        self.replies.len()
    }
}
