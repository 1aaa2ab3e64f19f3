//! Streak-based scoring and end-of-round rating.

use serde::{Deserialize, Serialize};

/// Points for any correct answer.
pub const BASE_POINTS: u32 = 10;
/// Extra points once the streak (including the current answer) reaches [`BONUS_STREAK`].
pub const STREAK_BONUS: u32 = 5;
pub const BONUS_STREAK: u32 = 3;

/// Running score of one round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub score: u32,
    pub streak: u32,
    pub best_streak: u32,
}

impl Tally {
    /// Apply one answer and return the points it earned.
    pub fn apply(&mut self, correct: bool) -> u32 {
        if !correct {
            self.streak = 0;
            return 0;
        }
        self.streak += 1;
        let bonus = if self.streak >= BONUS_STREAK { STREAK_BONUS } else { 0 };
        let award = BASE_POINTS + bonus;
        self.score += award;
        self.best_streak = self.best_streak.max(self.streak);
        award
    }

    /// Replay a sequence of answers from a zero tally.
    pub fn replay(answers: impl IntoIterator<Item = bool>) -> Self {
        let mut tally = Tally::default();
        for correct in answers {
            tally.apply(correct);
        }
        tally
    }
}

/// Zero to three stars, relative to the unbonused maximum of `total * BASE_POINTS`.
pub fn star_rating(score: u32, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let pct = f64::from(score) / (total as f64 * f64::from(BASE_POINTS));
    if pct >= 0.9 {
        3
    } else if pct >= 0.6 {
        2
    } else if pct >= 0.3 {
        1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn streak_progression_and_bonus() {
        let mut tally = Tally::default();
        let mut streaks = Vec::new();
        let mut awards = Vec::new();
        for correct in [true, true, true, false, true] {
            awards.push(tally.apply(correct));
            streaks.push(tally.streak);
        }
        assert_eq!(streaks, vec![1, 2, 3, 0, 1]);
        assert_eq!(awards, vec![10, 10, 15, 0, 10]);
        assert_eq!(tally.score, 45);
        assert_eq!(tally.best_streak, 3);
    }

    #[test]
    fn perfect_round_of_ten() {
        let tally = Tally::replay([true; 10]);
        assert_eq!(tally.score, 10 * 10 + 5 * 8);
        assert_eq!(tally.streak, 10);
        assert_eq!(tally.best_streak, 10);
    }

    #[test]
    fn wrong_answers_never_lower_score_or_best_streak() {
        let mut tally = Tally::replay([true, true, true, true]);
        let before = tally;
        tally.apply(false);
        assert_eq!(tally.score, before.score);
        assert_eq!(tally.best_streak, before.best_streak);
        assert_eq!(tally.streak, 0);
    }

    #[test]
    fn replay_is_a_pure_fold() {
        let answers = [false, true, true, false, true, true, true, true];
        assert_eq!(Tally::replay(answers), Tally::replay(answers));
        assert_eq!(Tally::replay(answers).score, 10 + 10 + 10 + 10 + 15 + 15);
    }

    #[test]
    fn star_thresholds() {
        assert_eq!(star_rating(140, 10), 3);
        assert_eq!(star_rating(90, 10), 3);
        assert_eq!(star_rating(89, 10), 2);
        assert_eq!(star_rating(60, 10), 2);
        assert_eq!(star_rating(30, 10), 1);
        assert_eq!(star_rating(29, 10), 0);
        assert_eq!(star_rating(0, 0), 0);
    }
}
