//! Discord embed size limits.
//!
//! Discord rejects a whole webhook request (`400`) when any part of an embed
//! is too long, so oversized text is cut here before sending. Clamped text
//! ends with [`ELLIPSIS`] and stays within the limit including the marker.

use translation::OutboundMessage;

pub const TITLE_MAX_CHARS: usize = 256;
pub const DESCRIPTION_MAX_CHARS: usize = 4096;
pub const FIELD_NAME_MAX_CHARS: usize = 256;
pub const FIELD_VALUE_MAX_CHARS: usize = 1024;
pub const FIELDS_MAX: usize = 25;
/// Combined characters of title, description, and all field names and values.
pub const EMBED_TOTAL_MAX_CHARS: usize = 6000;

pub const ELLIPSIS: &str = "…";

/// Returns `message` cut down to fit Discord's embed limits.
pub fn clamp(message: &OutboundMessage) -> OutboundMessage {
    let mut message = message.clone();

    clamp_text(&mut message.title, TITLE_MAX_CHARS);
    clamp_text(&mut message.description, DESCRIPTION_MAX_CHARS);
    message.fields.truncate(FIELDS_MAX);
    for field in &mut message.fields {
        clamp_text(&mut field.name, FIELD_NAME_MAX_CHARS);
        clamp_text(&mut field.value, FIELD_VALUE_MAX_CHARS);
    }

    // Whatever is still over the combined budget comes out of the description.
    let overflow = total_chars(&message).saturating_sub(EMBED_TOTAL_MAX_CHARS);
    if overflow > 0 {
        let keep = message.description.chars().count().saturating_sub(overflow);
        clamp_text(&mut message.description, keep);
    }

    message
}

fn total_chars(message: &OutboundMessage) -> usize {
    message.title.chars().count()
        + message.description.chars().count()
        + message
            .fields
            .iter()
            .map(|f| f.name.chars().count() + f.value.chars().count())
            .sum::<usize>()
}

fn clamp_text(text: &mut String, max: usize) {
    if text.chars().count() <= max {
        return;
    }
    let keep = max.saturating_sub(ELLIPSIS.chars().count());
    let cut = text.char_indices().nth(keep).map_or(text.len(), |(idx, _)| idx);
    text.truncate(cut);
    if max > 0 {
        text.push_str(ELLIPSIS);
    }
}
