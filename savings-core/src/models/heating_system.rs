use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HeatingSystem {
    Gas,
    Oil,
    DirectElectric,
    #[serde(rename = "district")]
    DistrictHeating,
    OldHeatPump,
}

impl HeatingSystem {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gas => "gas",
            Self::Oil => "oil",
            Self::DirectElectric => "direct-electric",
            Self::DistrictHeating => "district",
            Self::OldHeatPump => "old-heat-pump",
        }
    }

    /// Parses the wire value of the system selector.
    /// Unknown values yield `None`; the estimator then applies the
    /// configured fallback efficiency.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "gas" => Some(Self::Gas),
            "oil" => Some(Self::Oil),
            "direct-electric" => Some(Self::DirectElectric),
            "district" => Some(Self::DistrictHeating),
            "old-heat-pump" => Some(Self::OldHeatPump),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_accepts_all_wire_values() {
        assert_eq!(HeatingSystem::parse("gas"), Some(HeatingSystem::Gas));
        assert_eq!(HeatingSystem::parse("oil"), Some(HeatingSystem::Oil));
        assert_eq!(
            HeatingSystem::parse("direct-electric"),
            Some(HeatingSystem::DirectElectric)
        );
        assert_eq!(
            HeatingSystem::parse("district"),
            Some(HeatingSystem::DistrictHeating)
        );
        assert_eq!(
            HeatingSystem::parse("old-heat-pump"),
            Some(HeatingSystem::OldHeatPump)
        );
    }

    #[test]
    fn parse_rejects_unknown_value() {
        assert_eq!(HeatingSystem::parse("pellet"), None);
        assert_eq!(HeatingSystem::parse(""), None);
    }

    #[test]
    fn as_str_round_trips() {
        for system in [
            HeatingSystem::Gas,
            HeatingSystem::Oil,
            HeatingSystem::DirectElectric,
            HeatingSystem::DistrictHeating,
            HeatingSystem::OldHeatPump,
        ] {
            assert_eq!(HeatingSystem::parse(system.as_str()), Some(system));
        }
    }
}
