pub const NUM_CLASSES: usize = 26;

pub const UNKNOWN_LABEL: &str = "Unknown";

/// Index 0 is `A`, 25 is `Z`.
pub fn label_for_index(index: usize) -> Option<String> {
    if index < NUM_CLASSES {
        char::from_u32('A' as u32 + index as u32).map(|c| c.to_string())
    } else {
        None
    }
}

/// Like `label_for_index`, but an index outside the table reads "Unknown".
pub fn resolve_label(index: usize) -> String {
    label_for_index(index).unwrap_or_else(|| UNKNOWN_LABEL.to_string())
}

#[cfg(test)]
pub fn index_for_label(label: &str) -> Option<usize> {
    let mut chars = label.chars();
    match (chars.next(), chars.next()) {
        (Some(c @ 'A'..='Z'), None) => Some(c as usize - 'A' as usize),
        _ => None,
    }
}

/// Position and value of the largest score. Ties keep the lowest index.
pub fn argmax(scores: &[f32]) -> Option<(usize, f32)> {
    scores
        .iter()
        .copied()
        .enumerate()
        .fold(None, |best, (index, score)| match best {
            Some((_, best_score)) if score <= best_score => best,
            _ => Some((index, score)),
        })
}
