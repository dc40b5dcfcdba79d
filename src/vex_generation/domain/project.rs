use super::ComponentId;
use crate::shared::Result;
use std::str::FromStr;
use uuid::Uuid;

/// NewType wrapper for a project identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProjectId(Uuid);

impl ProjectId {
    pub fn new(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Document-internal reference for the project (its UUID)
    pub fn bom_ref(&self) -> String {
        self.0.to_string()
    }
}

impl FromStr for ProjectId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let uuid = Uuid::parse_str(s.trim())
            .map_err(|e| anyhow::anyhow!("Invalid project UUID '{}': {}", s, e))?;
        Ok(Self(uuid))
    }
}

impl std::fmt::Display for ProjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How a collection project derives its contents from child projects.
///
/// `NONE` in external data is represented as the absence of a logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionLogic {
    AggregateDirectChildren,
    AggregateDirectChildrenWithTag,
    AggregateLatestVersionChildren,
}

impl CollectionLogic {
    /// Parses an external collection logic name; `NONE` yields `Ok(None)`
    pub fn parse_optional(value: &str) -> Result<Option<Self>> {
        match value.trim().to_uppercase().as_str() {
            "" | "NONE" => Ok(None),
            "AGGREGATE_DIRECT_CHILDREN" => Ok(Some(Self::AggregateDirectChildren)),
            "AGGREGATE_DIRECT_CHILDREN_WITH_TAG" => Ok(Some(Self::AggregateDirectChildrenWithTag)),
            "AGGREGATE_LATEST_VERSION_CHILDREN" => Ok(Some(Self::AggregateLatestVersionChildren)),
            other => anyhow::bail!("Unknown collection logic: {}", other),
        }
    }
}

/// Project aggregate root: the delivered artifact a VEX document describes
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    id: ProjectId,
    name: String,
    version: Option<String>,
    collection_logic: Option<CollectionLogic>,
    tags: Vec<String>,
    direct_dependencies: Vec<ComponentId>,
}

impl Project {
    pub fn new(id: ProjectId, name: String, version: Option<String>) -> Result<Self> {
        if name.trim().is_empty() {
            anyhow::bail!("Project name cannot be empty");
        }

        Ok(Self {
            id,
            name,
            version,
            collection_logic: None,
            tags: Vec::new(),
            direct_dependencies: Vec::new(),
        })
    }

    pub fn with_collection_logic(mut self, logic: Option<CollectionLogic>) -> Self {
        self.collection_logic = logic;
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    pub fn with_direct_dependencies(mut self, dependencies: Vec<ComponentId>) -> Self {
        self.direct_dependencies = dependencies;
        self
    }

    pub fn id(&self) -> ProjectId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn collection_logic(&self) -> Option<CollectionLogic> {
        self.collection_logic
    }

    /// A collection project aggregates other projects and is never a leaf artifact
    pub fn is_collection(&self) -> bool {
        self.collection_logic.is_some()
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn direct_dependencies(&self) -> &[ComponentId] {
        &self.direct_dependencies
    }

    /// Human-readable `name@version` label used in messages
    pub fn label(&self) -> String {
        match &self.version {
            Some(version) => format!("{}@{}", self.name, version),
            None => self.name.clone(),
        }
    }
}
