//! The chorus generator: a counter, a roster of players, and the fizzbuzz rule.
//!
//! Everything here is pure. The worker drives a [`Generator`] and hands each
//! [`Line`] to a sink.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Players used when no roster is configured.
pub const DEFAULT_PLAYERS: [&str; 4] = ["Abdul", "Bart", "Claudia", "Divya"];

/// What a player says for a given counter value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Neither a multiple of 3 nor of 5.
    Number(u64),
    /// Multiple of 3 only.
    Fizz,
    /// Multiple of 5 only.
    Buzz,
    /// Multiple of 15.
    FizzBuzz,
}

impl Verdict {
    /// Classify `n`.
    #[must_use]
    pub fn of(n: u64) -> Self {
        match (n % 3, n % 5) {
            (0, 0) => Self::FizzBuzz,
            (0, _) => Self::Fizz,
            (_, 0) => Self::Buzz,
            _ => Self::Number(n),
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Fizz => f.write_str("fizz"),
            Self::Buzz => f.write_str("buzz"),
            Self::FizzBuzz => f.write_str("fizzbuzz"),
        }
    }
}

/// Ordered, non-empty list of players taking turns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Roster(Vec<String>);

impl TryFrom<Vec<String>> for Roster {
    type Error = ConfigError;

    fn try_from(players: Vec<String>) -> Result<Self, ConfigError> {
        Self::new(players)
    }
}

impl From<Roster> for Vec<String> {
    fn from(roster: Roster) -> Self {
        roster.0
    }
}

impl Roster {
    /// Build a roster, trimming each name.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyRoster`] for an empty list and
    /// [`ConfigError::EmptyPlayer`] when a name is blank.
    pub fn new<I, S>(players: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut names = Vec::new();
        for (index, raw) in players.into_iter().enumerate() {
            let name = raw.as_ref().trim();
            if name.is_empty() {
                return Err(ConfigError::EmptyPlayer(index));
            }
            names.push(name.to_string());
        }
        if names.is_empty() {
            return Err(ConfigError::EmptyRoster);
        }
        Ok(Self(names))
    }

    /// Parse a comma-separated list such as `"Ann, Bo,Cy"`.
    ///
    /// # Errors
    ///
    /// Same as [`Roster::new`].
    pub fn parse(list: &str) -> Result<Self, ConfigError> {
        if list.trim().is_empty() {
            return Err(ConfigError::EmptyRoster);
        }
        Self::new(list.split(','))
    }

    /// The player whose turn it is at counter `n` (1-based).
    #[must_use]
    pub fn player_for(&self, n: u64) -> &str {
        // len fits in u64 on every supported target
        let len = self.0.len() as u64;
        let index = usize::try_from((n.saturating_sub(1)) % len).unwrap_or(0);
        &self.0[index]
    }

    /// Number of players in the cycle.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the roster has no players.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Player names in turn order.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.0
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self(DEFAULT_PLAYERS.iter().map(|p| (*p).to_string()).collect())
    }
}

/// One emitted line of the chorus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// 1-based counter value.
    pub seq: u64,
    /// Player speaking this line.
    pub player: String,
    /// What they say.
    pub verdict: Verdict,
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} says {}", self.player, self.verdict)
    }
}

/// Infinite iterator over chorus lines, starting at `n = 1`.
///
/// Ends only if the counter would overflow `u64`.
#[derive(Debug, Clone)]
pub struct Generator {
    roster: Roster,
    next: Option<u64>,
}

impl Generator {
    /// Start a fresh generator over `roster`.
    #[must_use]
    pub fn new(roster: Roster) -> Self {
        Self { roster, next: Some(1) }
    }

    /// The roster this generator cycles through.
    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }
}

impl Iterator for Generator {
    type Item = Line;

    fn next(&mut self) -> Option<Line> {
        let n = self.next?;
        self.next = n.checked_add(1);
        Some(Line { seq: n, player: self.roster.player_for(n).to_string(), verdict: Verdict::of(n) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiples_of_fifteen_are_fizzbuzz() {
        assert_eq!(Verdict::of(15), Verdict::FizzBuzz);
        assert_eq!(Verdict::of(30), Verdict::FizzBuzz);
    }

    #[test]
    fn multiples_of_three_only_are_fizz() {
        assert_eq!(Verdict::of(3), Verdict::Fizz);
        assert_eq!(Verdict::of(9), Verdict::Fizz);
    }

    #[test]
    fn multiples_of_five_only_are_buzz() {
        assert_eq!(Verdict::of(5), Verdict::Buzz);
        assert_eq!(Verdict::of(10), Verdict::Buzz);
    }

    #[test]
    fn other_numbers_are_spoken_literally() {
        assert_eq!(Verdict::of(1).to_string(), "1");
        assert_eq!(Verdict::of(7).to_string(), "7");
    }

    #[test]
    fn labels_cycle_every_four_turns() {
        let labels: Vec<String> = Generator::new(Roster::default()).take(8).map(|l| l.player).collect();
        assert_eq!(
            labels,
            ["Abdul", "Bart", "Claudia", "Divya", "Abdul", "Bart", "Claudia", "Divya"]
        );
    }

    #[test]
    fn first_fifteen_lines() {
        let lines: Vec<String> =
            Generator::new(Roster::default()).take(15).map(|l| l.to_string()).collect();
        assert_eq!(
            lines,
            [
                "Abdul says 1",
                "Bart says 2",
                "Claudia says fizz",
                "Divya says 4",
                "Abdul says buzz",
                "Bart says fizz",
                "Claudia says 7",
                "Divya says 8",
                "Abdul says fizz",
                "Bart says buzz",
                "Claudia says 11",
                "Divya says fizz",
                "Abdul says 13",
                "Bart says 14",
                "Claudia says fizzbuzz",
            ]
        );
    }

    #[test]
    fn counter_is_strictly_increasing() {
        let seqs: Vec<u64> = Generator::new(Roster::default()).take(100).map(|l| l.seq).collect();
        assert!(seqs.windows(2).all(|w| w[1] == w[0] + 1));
        assert_eq!(seqs[0], 1);
    }

    #[test]
    fn generator_ends_instead_of_wrapping() {
        let mut generator = Generator { roster: Roster::default(), next: Some(u64::MAX) };
        assert_eq!(generator.next().map(|l| l.seq), Some(u64::MAX));
        assert!(generator.next().is_none());
    }

    #[test]
    fn deserializing_validates_players() {
        assert!(serde_json::from_str::<Roster>("[]").is_err());
        assert!(serde_json::from_str::<Roster>(r#"["Ann", " "]"#).is_err());

        let roster: Roster = serde_json::from_str(r#"[" Ann ", "Bo"]"#).unwrap();
        assert_eq!(roster.names(), ["Ann", "Bo"]);
        assert_eq!(roster.player_for(3), "Ann");
        assert_eq!(serde_json::to_string(&roster).unwrap(), r#"["Ann","Bo"]"#);
    }

    #[test]
    fn custom_roster_sets_cycle_length() {
        let roster = Roster::parse(" Ann, Bo ").unwrap();
        assert_eq!(roster.len(), 2);
        assert_eq!(roster.player_for(1), "Ann");
        assert_eq!(roster.player_for(2), "Bo");
        assert_eq!(roster.player_for(3), "Ann");
    }

    #[test]
    fn rejects_empty_roster_and_blank_names() {
        assert!(matches!(Roster::parse(""), Err(ConfigError::EmptyRoster)));
        assert!(matches!(Roster::parse("Ann,,Bo"), Err(ConfigError::EmptyPlayer(1))));
        assert!(matches!(Roster::new(Vec::<String>::new()), Err(ConfigError::EmptyRoster)));
    }
}
