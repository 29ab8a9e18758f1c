/// Keyword replies, checked in order against the lowercased message.
const REPLIES: &[(&str, &str)] = &[
    ("ai", "AI needs Python, ML, and projects."),
    ("data", "Data science mixes stats, Python, and SQL."),
    ("web", "Web dev = frontend + backend + deployment."),
];

pub const DEFAULT_REPLY: &str = "Ask me about AI, Data Science, or Web Dev.";

pub fn reply_to(message: &str) -> &'static str {
    let msg = message.to_lowercase();
    REPLIES
        .iter()
        .find(|(keyword, _)| msg.contains(keyword))
        .map(|(_, reply)| *reply)
        .unwrap_or(DEFAULT_REPLY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_replies() {
        assert_eq!(reply_to("Tell me about AI"), "AI needs Python, ML, and projects.");
        assert_eq!(reply_to("DATA jobs?"), "Data science mixes stats, Python, and SQL.");
        assert_eq!(reply_to("web stuff"), "Web dev = frontend + backend + deployment.");
    }

    #[test]
    fn ai_is_checked_first() {
        assert_eq!(reply_to("ai or data?"), "AI needs Python, ML, and projects.");
        // "email" contains "ai"
        assert_eq!(reply_to("my email"), "AI needs Python, ML, and projects.");
    }

    #[test]
    fn anything_else_gets_the_prompt() {
        assert_eq!(reply_to(""), DEFAULT_REPLY);
        assert_eq!(reply_to("hello"), DEFAULT_REPLY);
    }
}
