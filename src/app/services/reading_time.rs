//! Reading-time estimate shown in the post header.
//!
//! The word count is taken over the post body (front matter excluded) and
//! converted with two fixed constants. Word counts are `u32`, so a negative
//! input is unrepresentable rather than clamped.

pub const WORDS_PER_MINUTE: u32 = 200;
pub const MINUTES_PER_COFFEE: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadingStats {
    pub minutes: u32,
    pub coffees: u32,
}

/// Convert a word count into minutes-to-read and coffee units.
/// Both round up; a zero word count yields zero of each.
pub fn estimate(word_count: u32) -> ReadingStats {
    let minutes = word_count.div_ceil(WORDS_PER_MINUTE);
    let coffees = minutes.div_ceil(MINUTES_PER_COFFEE);
    ReadingStats { minutes, coffees }
}

/// Count whitespace-separated words in a post body.
pub fn count_words(text: &str) -> u32 {
    text.split_whitespace().count() as u32
}

/// Header label for a post: one cup per coffee, then "N min read".
/// The coffee run only appears once the estimate earns at least one cup.
pub fn format_stats(stats: &ReadingStats) -> String {
    if stats.coffees == 0 {
        return String::new();
    }
    let cups = "\u{2615}".repeat(stats.coffees as usize);
    format!("{} \u{00b7} {} min read", cups, stats.minutes)
}
