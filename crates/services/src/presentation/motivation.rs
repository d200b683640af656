/// Motivational tier shown on the quiz-finished screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motivation {
    Perfect,
    Strong,
    Encouragement,
}

impl Motivation {
    /// Tier for a score out of `total` questions.
    ///
    /// A zero-question quiz cannot be aced; it lands on `Encouragement`
    /// rather than dividing by zero.
    #[must_use]
    pub fn for_score(score: usize, total: usize) -> Self {
        if total == 0 {
            return Motivation::Encouragement;
        }
        if score >= total {
            Motivation::Perfect
        } else if score * 10 >= total * 7 {
            // 70% threshold, kept in integer arithmetic
            Motivation::Strong
        } else {
            Motivation::Encouragement
        }
    }

    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            Motivation::Perfect => "Perfect! You mastered this topic!",
            Motivation::Strong => "Excellent! You learned a lot.",
            Motivation::Encouragement => "Good effort! How about revisiting the slides?",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_score_is_perfect() {
        assert_eq!(Motivation::for_score(2, 2), Motivation::Perfect);
    }

    #[test]
    fn seventy_percent_is_strong() {
        assert_eq!(Motivation::for_score(7, 10), Motivation::Strong);
        assert_eq!(Motivation::for_score(9, 10), Motivation::Strong);
    }

    #[test]
    fn below_seventy_percent_encourages() {
        assert_eq!(Motivation::for_score(3, 10), Motivation::Encouragement);
        assert_eq!(Motivation::for_score(0, 1), Motivation::Encouragement);
    }

    #[test]
    fn zero_total_is_guarded() {
        assert_eq!(Motivation::for_score(0, 0), Motivation::Encouragement);
    }
}
