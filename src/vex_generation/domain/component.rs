use super::ProjectId;
use crate::shared::Result;
use std::str::FromStr;
use uuid::Uuid;

/// NewType wrapper for a component identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentId(Uuid);

impl ComponentId {
    pub fn new(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl FromStr for ComponentId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let uuid = Uuid::parse_str(s.trim())
            .map_err(|e| anyhow::anyhow!("Invalid component UUID '{}': {}", s, e))?;
        Ok(Self(uuid))
    }
}

impl std::fmt::Display for ComponentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Component entity: one node of a project's dependency graph
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    id: ComponentId,
    project: ProjectId,
    name: String,
    version: Option<String>,
    direct_dependencies: Vec<ComponentId>,
}

impl Component {
    pub fn new(
        id: ComponentId,
        project: ProjectId,
        name: String,
        version: Option<String>,
        direct_dependencies: Vec<ComponentId>,
    ) -> Self {
        Self {
            id,
            project,
            name,
            version,
            direct_dependencies,
        }
    }

    pub fn id(&self) -> ComponentId {
        self.id
    }

    pub fn project(&self) -> ProjectId {
        self.project
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn direct_dependencies(&self) -> &[ComponentId] {
        &self.direct_dependencies
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_accessors() {
        let project = ProjectId::new(Uuid::new_v4());
        let dep = ComponentId::new(Uuid::new_v4());
        let id = ComponentId::new(Uuid::new_v4());
        let component = Component::new(
            id,
            project,
            "acme-lib-a".to_string(),
            Some("1.0.0".to_string()),
            vec![dep],
        );

        assert_eq!(component.id(), id);
        assert_eq!(component.project(), project);
        assert_eq!(component.name(), "acme-lib-a");
        assert_eq!(component.version(), Some("1.0.0"));
        assert_eq!(component.direct_dependencies(), &[dep]);
    }

    #[test]
    fn test_component_id_round_trips_through_display() {
        let id = ComponentId::new(Uuid::new_v4());
        let parsed: ComponentId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_component_id_rejects_garbage() {
        assert!("acme-lib-a".parse::<ComponentId>().is_err());
    }
}
