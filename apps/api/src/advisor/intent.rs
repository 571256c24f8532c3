/// Words that mark a message as a request for guild advice.
const GUILD_INTENT_KEYWORDS: &[&str] = &["guild", "community", "join", "create"];

pub fn is_guild_request(text: &str) -> bool {
    let content = text.to_lowercase();
    GUILD_INTENT_KEYWORDS.iter().any(|k| content.contains(k))
}
