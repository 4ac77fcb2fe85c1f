//! Fixed conversational strings for the story-brewing assistant
//!
//! Everything user-visible that is not generated by the backend lives here:
//! the seeded opening prompt, the degraded-mode fallback, and the offline
//! mock question pool.

use rand::seq::SliceRandom;

/// Assistant turn seeded into every new conversation.
pub const STARTER_PROMPT: &str =
    "嗨，朋友！今天有啥可以唠唠的？是开心还是烦恼，先来聊个五块钱的！";

/// Appended as the assistant turn when follow-up generation fails, so the
/// conversation keeps moving instead of stalling on a transport error.
pub const FALLBACK_PROMPT: &str =
    "嗯，听起来很有意思！不过咱们再深入一点，这件事的转折点是什么？（系统 API 暂时故障，请稍后再试或继续打字）";

/// Used when the backend reports success but omits the follow-up field.
pub const DEFAULT_FOLLOW_UP: &str = "请多说一些细节。";

/// Staged in place of transcription output when audio was captured but no
/// text came back, so the user can edit it before confirming.
pub const TRANSCRIPTION_FAILED_PLACEHOLDER: &str =
    "⚠️ 语音转录失败，请手动编辑或输入文本。";

/// Generic playful follow-up questions, usable without a backend.
pub const MOCK_QUESTIONS: &[&str] = &[
    "咱们再聊点细节！这件事里，最让你印象深刻的画面或感受是什么？",
    "太有故事性了！有没有一个瞬间，你觉得是这件事的‘高光时刻’或‘最低谷’？",
    "这事儿对你最大的启发是什么？换句话说，你现在对这件事有什么新的理解？",
    "如果用三个关键词来总结你的心情，会是哪三个？",
    "这完全可以拍成电影了！如果给这个故事起个副标题，会是什么？",
];

/// Pick a random question from the mock pool.
pub fn pick_mock_question() -> &'static str {
    MOCK_QUESTIONS
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(DEFAULT_FOLLOW_UP)
}
