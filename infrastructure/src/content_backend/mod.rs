//! Content backend adapter.
//!
//! [`HttpPublishingClient`] implements the
//! [`PublishingClient`](qna_application::PublishingClient) port over the
//! backend's JSON API: `POST /posts` and `POST /posts/{id}/comments`.

mod client;
mod types;

pub use client::HttpPublishingClient;
