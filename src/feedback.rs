use serde::Serialize;

/// Ordered `(exclusive upper bound, message)` pairs, lowest bound first.
pub const DEFAULT_TIERS: &[(f64, &str)] = &[
    (20.0, "Just give up, man."),
    (30.0, "What are you even doing?"),
    (40.0, "Just pass."),
    (50.0, "Try again."),
    (60.0, "You can do better."),
    (70.0, "You are doing well."),
    (80.0, "Well done! Almost at the top."),
    (90.0, "So close to being a GOAT!"),
];

pub const DEFAULT_TOP_MESSAGE: &str = "You are the GOAT!";

pub const NEW_HIGH_SCORE_MESSAGE: &str = "Congratulations! New High Score!";

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "message")]
pub enum Feedback {
    NewHighScore,
    Tier(&'static str),
}

impl Feedback {
    pub fn message(&self) -> &'static str {
        match self {
            Self::NewHighScore => NEW_HIGH_SCORE_MESSAGE,
            Self::Tier(msg) => msg,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FeedbackTable {
    tiers: Vec<(f64, &'static str)>,
    top: &'static str,
}

impl FeedbackTable {
    /// Tiers are sorted by bound so lookup order never depends on input order.
    pub fn new(mut tiers: Vec<(f64, &'static str)>, top: &'static str) -> Self {
        tiers.sort_by(|a, b| a.0.total_cmp(&b.0));
        Self { tiers, top }
    }

    /// First tier whose bound strictly exceeds `score`, else the top message.
    pub fn lookup(&self, score: f64) -> &'static str {
        self.tiers
            .iter()
            .find(|(bound, _)| score < *bound)
            .map(|(_, msg)| *msg)
            .unwrap_or(self.top)
    }

    pub fn tiers(&self) -> &[(f64, &'static str)] {
        &self.tiers
    }
}

impl Default for FeedbackTable {
    fn default() -> Self {
        Self::new(DEFAULT_TIERS.to_vec(), DEFAULT_TOP_MESSAGE)
    }
}

/// Text shared to challenge someone else to beat `best`.
pub fn challenge_text(best: f64, decimals: usize, url: &str) -> String {
    let text = format!(
        "My circle is {:.*}% perfect, can you beat that?",
        decimals, best
    );
    if url.is_empty() {
        text
    } else {
        format!("{} {}", text, url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries_are_exclusive() {
        let table = FeedbackTable::default();
        assert_eq!(table.lookup(19.99), "Just give up, man.");
        assert_eq!(table.lookup(20.0), "What are you even doing?");
        assert_eq!(table.lookup(89.99), "So close to being a GOAT!");
        assert_eq!(table.lookup(90.0), DEFAULT_TOP_MESSAGE);
        assert_eq!(table.lookup(100.0), DEFAULT_TOP_MESSAGE);
    }

    #[test]
    fn test_unsorted_tiers() {
        let table = FeedbackTable::new(vec![(80.0, "decent"), (50.0, "needs practice")], "excellent");
        assert_eq!(table.tiers()[0].0, 50.0);
        assert_eq!(table.lookup(10.0), "needs practice");
        assert_eq!(table.lookup(60.0), "decent");
        assert_eq!(table.lookup(95.0), "excellent");
    }

    #[test]
    fn test_challenge_text() {
        assert_eq!(
            challenge_text(87.456, 2, "https://example.com"),
            "My circle is 87.46% perfect, can you beat that? https://example.com"
        );
        assert_eq!(
            challenge_text(0.0, 0, ""),
            "My circle is 0% perfect, can you beat that?"
        );
    }
}
