//! Social Dome feed.

use dshield_shared::Post;
use tracing::debug;

/// Immutable list of posts served most recent first.
pub struct FeedStore {
    posts: Vec<Post>,
}

impl FeedStore {
    pub fn new(posts: Vec<Post>) -> Self {
        Self { posts }
    }

    /// Posts sorted by `created_at` descending, truncated to `limit`.
    ///
    /// The sort is stable, so posts with equal timestamps keep their
    /// fixture order.
    pub fn get_feed(&self, limit: usize) -> Vec<Post> {
        let mut posts = self.posts.clone();
        posts.sort_by(|a, b| b.created_at.total_cmp(&a.created_at));
        posts.truncate(limit);

        debug!(limit, returned = posts.len(), "Served feed");
        posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}
