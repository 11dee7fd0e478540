/// Competitive level of a dancer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DancerLevel {
    Mini,
    Junior,
    Teen,
    Senior,
    Elite,
}

impl DancerLevel {
    pub const ALL: [DancerLevel; 5] = [
        DancerLevel::Mini,
        DancerLevel::Junior,
        DancerLevel::Teen,
        DancerLevel::Senior,
        DancerLevel::Elite,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DancerLevel::Mini => "mini",
            DancerLevel::Junior => "junior",
            DancerLevel::Teen => "teen",
            DancerLevel::Senior => "senior",
            DancerLevel::Elite => "elite",
        }
    }

    /// Parses a stored level, ignoring case and surrounding whitespace.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();

        Self::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(raw))
    }

    /// Maps a legacy level value onto the enumeration, falling back to [`DancerLevel::Mini`]
    /// for missing or unrecognized values.
    pub fn normalize(raw: Option<&str>) -> Self {
        raw.and_then(Self::parse).unwrap_or(DancerLevel::Mini)
    }
}

/// The columns of a `dancers` row profile normalization reads.
#[derive(Debug, Clone, PartialEq)]
pub struct DancerProfile {
    pub id: i32,
    /// Null in hand-made legacy tables; treated as 0.
    pub age: Option<i32>,
    pub level: Option<String>,
    pub birthdate: Option<chrono::NaiveDate>,
}
