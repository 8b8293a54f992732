//! Post-processing for engagement: promotional TradeUp mention

/// Appended to generated posts that do not already mention the platform.
/// The leading `!` doubles as the sentence terminator of the original text.
const TRADEUP_MENTION: &str = "! Trade safely on TradeUp!";

/// Append the TradeUp mention unless the text already carries one
/// (case-insensitive). A trailing `!` or `.` is replaced so the result
/// never ends up with doubled punctuation. Idempotent.
pub fn optimize_for_engagement(content: &str) -> String {
    if content.to_lowercase().contains("tradeup") {
        return content.to_string();
    }

    let mut out = content.to_string();
    if out.ends_with('!') || out.ends_with('.') {
        out.pop();
    }
    out.push_str(TRADEUP_MENTION);
    out
}
