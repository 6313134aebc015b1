//! Outbound message chunking for the Telegram length limit.

/// Telegram's hard limit on message length, in characters.
pub const TELEGRAM_MESSAGE_LIMIT: usize = 4096;

/// Splits `text` into ordered chunks of at most [`TELEGRAM_MESSAGE_LIMIT`]
/// characters that concatenate back to the original.
///
/// Counting is per character, not per byte, so multi-byte text splits on valid
/// UTF-8 boundaries. Text at or under the limit comes back as a single chunk;
/// empty input yields one empty chunk so the send loop always sends exactly
/// what it was given.
pub fn split_message(text: &str) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut rest = text;
    loop {
        match rest.char_indices().nth(TELEGRAM_MESSAGE_LIMIT) {
            Some((boundary, _)) => {
                let (chunk, tail) = rest.split_at(boundary);
                chunks.push(chunk);
                rest = tail;
            }
            None => {
                chunks.push(rest);
                break;
            }
        }
    }
    chunks
}
