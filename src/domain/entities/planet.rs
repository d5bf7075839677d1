//! Domain entity representing a catalogued planet.

/// A persisted planet.
///
/// `name` is unique across the catalog (case-sensitive). All three text
/// fields are non-empty; the store enforces both rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Planet {
    pub id: i64,
    pub name: String,
    pub climate: String,
    pub terrain: String,
}

impl Planet {
    /// Creates a new Planet instance.
    pub fn new(id: i64, name: String, climate: String, terrain: String) -> Self {
        Self {
            id,
            name,
            climate,
            terrain,
        }
    }
}

/// Input data for creating a new planet.
///
/// Has no `id`: the store assigns one on insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPlanet {
    pub name: String,
    pub climate: String,
    pub terrain: String,
}

impl NewPlanet {
    pub fn new(
        name: impl Into<String>,
        climate: impl Into<String>,
        terrain: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            climate: climate.into(),
            terrain: terrain.into(),
        }
    }
}

/// Query-by-example template.
///
/// Each `None` field is a wildcard. Set fields must all match exactly
/// (conjunctive, case-sensitive). The default probe matches every planet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanetProbe {
    pub name: Option<String>,
    pub climate: Option<String>,
    pub terrain: Option<String>,
}

impl PlanetProbe {
    pub fn with_name(mut self, name: Option<String>) -> Self {
        self.name = name;
        self
    }

    pub fn with_climate(mut self, climate: Option<String>) -> Self {
        self.climate = climate;
        self
    }

    pub fn with_terrain(mut self, terrain: Option<String>) -> Self {
        self.terrain = terrain;
        self
    }

    /// Returns true when the probe carries no predicate at all.
    pub fn is_wildcard(&self) -> bool {
        self.name.is_none() && self.climate.is_none() && self.terrain.is_none()
    }

    /// Evaluates the probe against a planet. `id` is never compared.
    pub fn matches(&self, planet: &Planet) -> bool {
        fn field_matches(probe: &Option<String>, value: &str) -> bool {
            probe.as_deref().is_none_or(|expected| expected == value)
        }

        field_matches(&self.name, &planet.name)
            && field_matches(&self.climate, &planet.climate)
            && field_matches(&self.terrain, &planet.terrain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tatooine() -> Planet {
        Planet::new(
            1,
            "Tatooine".to_string(),
            "arid".to_string(),
            "desert".to_string(),
        )
    }

    #[test]
    fn test_planet_structural_equality() {
        assert_eq!(tatooine(), tatooine());

        let mut other = tatooine();
        other.id = 2;
        assert_ne!(tatooine(), other);
    }

    #[test]
    fn test_new_planet_creation() {
        let new_planet = NewPlanet::new("Alderaan", "temperate", "grasslands, mountains");

        assert_eq!(new_planet.name, "Alderaan");
        assert_eq!(new_planet.climate, "temperate");
        assert_eq!(new_planet.terrain, "grasslands, mountains");
    }

    #[test]
    fn test_default_probe_is_wildcard_and_matches_everything() {
        let probe = PlanetProbe::default();

        assert!(probe.is_wildcard());
        assert!(probe.matches(&tatooine()));
    }

    #[test]
    fn test_probe_is_conjunctive() {
        let both = PlanetProbe::default()
            .with_climate(Some("arid".to_string()))
            .with_terrain(Some("desert".to_string()));
        assert!(both.matches(&tatooine()));

        let one_wrong = PlanetProbe::default()
            .with_climate(Some("arid".to_string()))
            .with_terrain(Some("jungle".to_string()));
        assert!(!one_wrong.matches(&tatooine()));
    }

    #[test]
    fn test_probe_is_case_sensitive_exact_match() {
        let upper = PlanetProbe::default().with_climate(Some("Arid".to_string()));
        assert!(!upper.matches(&tatooine()));

        let substring = PlanetProbe::default().with_terrain(Some("des".to_string()));
        assert!(!substring.matches(&tatooine()));
    }

    #[test]
    fn test_probe_single_field() {
        let terrain_only = PlanetProbe::default().with_terrain(Some("desert".to_string()));

        assert!(!terrain_only.is_wildcard());
        assert!(terrain_only.matches(&tatooine()));
    }
}
