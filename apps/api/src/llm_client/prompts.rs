// Cross-cutting prompt fragments. Feature prompts live next to their feature (advisor/prompts.rs).

/// Appended to any system prompt whose reply is parsed as JSON.
pub const JSON_ONLY_INSTRUCTION: &str = "You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";
