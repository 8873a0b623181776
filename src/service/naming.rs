//! Channel name rendering.

/// Longest channel name Discord accepts, in characters.
pub const MAX_CHANNEL_NAME_LEN: usize = 100;

/// Values substituted into a name template.
#[derive(Debug, Clone, Copy)]
pub struct NameTokens<'a> {
    /// Replaces `{user_name}`.
    pub user_name: &'a str,
    /// Replaces `{count}`.
    pub count: i64,
}

/// Renders a channel name from a template.
///
/// Only `{user_name}` and `{count}` are substituted; any other braces are kept as
/// written. The result is cut to `MAX_CHANNEL_NAME_LEN` characters, never splitting
/// a character.
///
/// # Arguments
/// - `template` - Template text, such as `"{user_name}'s channel"`
/// - `tokens` - Values for the placeholders
///
/// # Returns
/// - `String` - The rendered and clamped name
pub fn render(template: &str, tokens: NameTokens<'_>) -> String {
    template
        .replace("{user_name}", tokens.user_name)
        .replace("{count}", &tokens.count.to_string())
        .chars()
        .take(MAX_CHANNEL_NAME_LEN)
        .collect()
}

/// Cuts free text to the channel name length limit.
pub fn clamp(text: &str) -> String {
    text.chars().take(MAX_CHANNEL_NAME_LEN).collect()
}
