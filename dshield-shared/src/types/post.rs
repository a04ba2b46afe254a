//! Social Dome feed types.

use serde::{Deserialize, Serialize};

/// Operational signal level assigned to a post.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Score {
    Green,
    Yellow,
    Red,
}

/// Coordinates attached to a geotagged post.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// A single post in the Social Dome feed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Post {
    pub id: String,
    pub author: String,
    pub text: String,
    pub score: Score,
    /// Seconds since the Unix epoch, with sub-second precision.
    pub created_at: f64,
    #[serde(default)]
    pub geo: Option<GeoPoint>,
}

/// Query parameters of `GET /api/social-dome/feed`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FeedParams {
    #[serde(default = "default_limit")]
    pub limit: usize,
}

impl Default for FeedParams {
    fn default() -> Self {
        Self {
            limit: default_limit(),
        }
    }
}

fn default_limit() -> usize {
    20
}
