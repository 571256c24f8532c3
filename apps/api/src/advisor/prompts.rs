// Prompt constants for the guild advisor.

/// System prompt for the advisor reply. `JSON_ONLY_INSTRUCTION` is appended at call time.
pub const ADVISOR_SYSTEM: &str = "You are a guild advisor helping users find the right \
    community or decide if they should create their own guild. \
    Be encouraging and give actionable advice. \
    Only recommend guilds that appear in the provided analysis.";

/// Advisor prompt template. Replace `{analysis}` before sending.
pub const ADVISOR_PROMPT_TEMPLATE: &str = r#"Current user context:
{analysis}

Based on this information, provide personalized recommendations about:
1. Whether they should create their own guild
2. Which existing guilds would be a good fit
3. Specific reasons for each recommendation

Return a JSON object with this EXACT schema:
{
  "recommendation": "Conversational reply shown to the user",
  "should_create_guild": false,
  "recommended_guilds": ["Guild name from the analysis"],
  "reasoning": "Why these guilds fit"
}"#;

/// Sent when reply generation fails for any reason.
pub const FALLBACK_REPLY: &str = "I'm having trouble analyzing your guild preferences right now. \
    Could you tell me more about your interests and experience level?";

/// Sent for chat messages that are not about guilds.
pub const NOT_A_GUILD_REQUEST_REPLY: &str = "I can help you find a guild to join or tell you \
    whether you should create your own. Tell me about your level, skills, experience and \
    how active you are!";
