use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const GRADE_A_MIN: u32 = 75;
pub const GRADE_B_MIN: u32 = 50;
pub const GRADE_C_MIN: u32 = 25;

/// Lead quality letter. A is best, D is worst.
/// Deserializes through `FromStr`, so config files accept the same spellings as the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(try_from = "String")]
pub enum Grade {
    A,
    B,
    C,
    D,
}

impl Grade {
    pub const ALL: [Grade; 4] = [Grade::A, Grade::B, Grade::C, Grade::D];

    /// Apply the threshold ladder to a final score.
    pub fn from_score(score: u32) -> Self {
        if score >= GRADE_A_MIN {
            Grade::A
        } else if score >= GRADE_B_MIN {
            Grade::B
        } else if score >= GRADE_C_MIN {
            Grade::C
        } else {
            Grade::D
        }
    }

    /// Ordinal rank, higher is better (A = 3, D = 0)
    pub fn rank(self) -> u8 {
        match self {
            Grade::A => 3,
            Grade::B => 2,
            Grade::C => 1,
            Grade::D => 0,
        }
    }

    /// True when this grade is at least as good as `min`.
    pub fn meets(self, min: Grade) -> bool {
        self.rank() >= min.rank()
    }

    /// Inclusive score range covered by this grade, for legends.
    pub fn score_range(self) -> (u32, u32) {
        match self {
            Grade::A => (GRADE_A_MIN, 100),
            Grade::B => (GRADE_B_MIN, GRADE_A_MIN - 1),
            Grade::C => (GRADE_C_MIN, GRADE_B_MIN - 1),
            Grade::D => (0, GRADE_C_MIN - 1),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Grade {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "A" | "a" => Ok(Grade::A),
            "B" | "b" => Ok(Grade::B),
            "C" | "c" => Ok(Grade::C),
            "D" | "d" => Ok(Grade::D),
            other => bail!("Grade must be one of A, B, C, D: {}", other),
        }
    }
}

impl TryFrom<String> for Grade {
    type Error = anyhow::Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ladder_boundaries() {
        assert_eq!(Grade::from_score(100), Grade::A);
        assert_eq!(Grade::from_score(75), Grade::A);
        assert_eq!(Grade::from_score(74), Grade::B);
        assert_eq!(Grade::from_score(50), Grade::B);
        assert_eq!(Grade::from_score(49), Grade::C);
        assert_eq!(Grade::from_score(25), Grade::C);
        assert_eq!(Grade::from_score(24), Grade::D);
        assert_eq!(Grade::from_score(0), Grade::D);
    }

    #[test]
    fn test_ladder_is_monotonic() {
        let mut previous = Grade::from_score(0);
        for score in 1..=100 {
            let grade = Grade::from_score(score);
            assert!(grade.rank() >= previous.rank(), "score {} went down", score);
            previous = grade;
        }
    }

    #[test]
    fn test_score_ranges_cover_ladder() {
        for grade in Grade::ALL {
            let (low, high) = grade.score_range();
            assert_eq!(Grade::from_score(low), grade);
            assert_eq!(Grade::from_score(high), grade);
        }
    }

    #[test]
    fn test_meets() {
        assert!(Grade::A.meets(Grade::B));
        assert!(Grade::B.meets(Grade::B));
        assert!(!Grade::C.meets(Grade::B));
        assert!(Grade::D.meets(Grade::D));
    }

    #[test]
    fn test_parse() {
        assert_eq!("A".parse::<Grade>().unwrap(), Grade::A);
        assert_eq!(" c ".parse::<Grade>().unwrap(), Grade::C);
        assert!("E".parse::<Grade>().is_err());
        assert!("".parse::<Grade>().is_err());
    }

    #[test]
    fn test_serde_uses_letter() {
        assert_eq!(serde_json::to_string(&Grade::B).unwrap(), "\"B\"");
        let parsed: Grade = serde_json::from_str("\"D\"").unwrap();
        assert_eq!(parsed, Grade::D);
        let lower: Grade = serde_json::from_str("\"a\"").unwrap();
        assert_eq!(lower, Grade::A);
        assert!(serde_json::from_str::<Grade>("\"E\"").is_err());
    }
}
