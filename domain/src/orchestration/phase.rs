//! Phases of a conversation turn.

use serde::{Deserialize, Serialize};

/// Phase of a single orchestrated turn.
///
/// ```text
/// Start → Generated                      (cached answer reused)
/// Start → Generating → GenerationFailed
///                    → Generated → Done
///                    → Generated → Publishing → PublishFailed
///                                             → Published → CommentAttaching → CommentOk     → Done
///                                                                            → CommentFailed → Done
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrchestrationPhase {
    Start,
    Generating,
    GenerationFailed,
    Generated,
    Publishing,
    Published,
    PublishFailed,
    CommentAttaching,
    CommentOk,
    CommentFailed,
    Done,
}

impl OrchestrationPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrchestrationPhase::Start => "start",
            OrchestrationPhase::Generating => "generating",
            OrchestrationPhase::GenerationFailed => "generation_failed",
            OrchestrationPhase::Generated => "generated",
            OrchestrationPhase::Publishing => "publishing",
            OrchestrationPhase::Published => "published",
            OrchestrationPhase::PublishFailed => "publish_failed",
            OrchestrationPhase::CommentAttaching => "comment_attaching",
            OrchestrationPhase::CommentOk => "comment_ok",
            OrchestrationPhase::CommentFailed => "comment_failed",
            OrchestrationPhase::Done => "done",
        }
    }

    /// Whether moving from `self` to `next` is a legal step.
    pub fn can_advance_to(&self, next: OrchestrationPhase) -> bool {
        use OrchestrationPhase::*;
        matches!(
            (self, next),
            (Start, Generating)
                | (Start, Generated)
                | (Generating, GenerationFailed)
                | (Generating, Generated)
                | (Generated, Publishing)
                | (Generated, Done)
                | (Publishing, Published)
                | (Publishing, PublishFailed)
                | (Published, CommentAttaching)
                | (CommentAttaching, CommentOk)
                | (CommentAttaching, CommentFailed)
                | (CommentOk, Done)
                | (CommentFailed, Done)
        )
    }

    /// Terminal phases end the turn; nothing follows them.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            OrchestrationPhase::Done
                | OrchestrationPhase::GenerationFailed
                | OrchestrationPhase::PublishFailed
        )
    }
}

impl std::fmt::Display for OrchestrationPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
