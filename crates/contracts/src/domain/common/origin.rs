use serde::{Deserialize, Serialize};

/// Data source of an aggregate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Origin {
    /// Seed fixtures shipped with the product
    #[serde(rename = "fixture")]
    Fixture,
    /// Upstream vendor search service
    #[serde(rename = "upstream")]
    Upstream,
    /// Entered in the dashboard
    #[serde(rename = "self")]
    Self_,
}

impl Origin {
    pub fn as_str(&self) -> &'static str {
        match self {
            Origin::Fixture => "fixture",
            Origin::Upstream => "upstream",
            Origin::Self_ => "self",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "fixture" => Origin::Fixture,
            "upstream" => Origin::Upstream,
            _ => Origin::Self_,
        }
    }
}

impl std::fmt::Display for Origin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
