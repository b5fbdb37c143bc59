//! Tweet Feed HTTP Routes

use std::sync::Arc;

use axum::{body::Bytes, extract::State, routing::get, Json, Router};
use serde::Deserialize;

use crate::feed::{FeedResult, Post};
use crate::observability::Logger;

use super::errors::{ApiError, ApiResult};
use super::state::AppState;
use super::support::parse_json;

#[derive(Debug, Deserialize)]
pub struct PostTweetRequest {
    #[serde(rename = "tweetText", default)]
    pub tweet_text: String,
}

pub fn feed_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/tweets", get(list_tweets_handler).post(post_tweet_handler))
        .route("/randTweet", get(random_tweet_handler))
        .with_state(state)
}

async fn list_tweets_handler(State(state): State<Arc<AppState>>) -> Json<Vec<Post>> {
    Json(state.feed.list())
}

async fn post_tweet_handler(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> ApiResult<Json<Post>> {
    let request: PostTweetRequest = parse_json(&body, "tweet")?;

    let length = request.tweet_text.chars().count();
    if length < 1 || length > state.max_post_length {
        state.metrics.increment_posts_rejected();
        return Err(ApiError::PostLength {
            max: state.max_post_length,
        });
    }

    add_post(&state, || state.feed.add(request.tweet_text))
}

async fn random_tweet_handler(State(state): State<Arc<AppState>>) -> ApiResult<Json<Post>> {
    add_post(&state, || state.feed.add_random())
}

fn add_post<F>(state: &AppState, add: F) -> ApiResult<Json<Post>>
where
    F: FnOnce() -> FeedResult<Post>,
{
    match add() {
        Ok(post) => {
            state.metrics.increment_posts_added();
            Logger::trace("POST_ADDED", &[("id", post.id.to_string().as_str())]);
            Ok(Json(post))
        }
        Err(e) => {
            state.metrics.increment_posts_rejected();
            Err(e.into())
        }
    }
}
