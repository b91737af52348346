use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use scene::World;
use scene::components::{ComponentProperties, PropertyValue, ScreenFootprint};
use serde::Deserialize;
use swath::{ConfigError, EngineConfig, ScheduleItem};
use tracing::debug;

#[derive(Debug)]
pub enum FixtureError {
    Io { path: PathBuf, source: std::io::Error },
    Parse { what: &'static str, source: serde_json::Error },
    Config { path: PathBuf, source: ConfigError },
}

impl std::fmt::Display for FixtureError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FixtureError::Io { path, source } => write!(f, "read {path:?}: {source}"),
            FixtureError::Parse { what, source } => write!(f, "parse {what}: {source}"),
            FixtureError::Config { path, source } => write!(f, "config {path:?}: {source}"),
        }
    }
}

impl std::error::Error for FixtureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FixtureError::Io { source, .. } => Some(source),
            FixtureError::Parse { source, .. } => Some(source),
            FixtureError::Config { source, .. } => Some(source),
        }
    }
}

/// Scene content as JSON: property bags with optional screen footprints,
/// plus bare primitives that pick but carry no entity.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SceneFixture {
    #[serde(default)]
    pub objects: Vec<ObjectFixture>,
    #[serde(default)]
    pub primitives: Vec<ScreenFootprint>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ObjectFixture {
    #[serde(default)]
    pub properties: BTreeMap<String, PropertyValue>,
    #[serde(default)]
    pub footprint: Option<ScreenFootprint>,
}

impl SceneFixture {
    pub fn from_json_str(json: &str) -> Result<Self, FixtureError> {
        serde_json::from_str(json).map_err(|source| FixtureError::Parse {
            what: "scene fixture",
            source,
        })
    }

    /// Spawns objects in file order, so entity indices follow the fixture.
    pub fn into_world(self) -> World {
        let mut world = World::new();
        for object in self.objects {
            let props = ComponentProperties::new(object.properties.into_iter().collect());
            let entity = world.spawn_with_properties(props);
            if let Some(footprint) = object.footprint {
                world.set_footprint(entity, footprint);
            }
        }
        for primitive in self.primitives {
            world.add_primitive(primitive);
        }
        world
    }
}

fn read(path: &Path) -> Result<String, FixtureError> {
    fs::read_to_string(path).map_err(|source| FixtureError::Io {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_scene(path: &Path) -> Result<World, FixtureError> {
    let fixture = SceneFixture::from_json_str(&read(path)?)?;
    debug!(
        objects = fixture.objects.len(),
        primitives = fixture.primitives.len(),
        "scene fixture loaded"
    );
    Ok(fixture.into_world())
}

pub fn load_config(path: Option<&Path>) -> Result<EngineConfig, FixtureError> {
    let Some(path) = path else {
        return Ok(EngineConfig::default());
    };
    EngineConfig::from_json_str(&read(path)?).map_err(|source| FixtureError::Config {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_schedule(path: &Path) -> Result<Vec<ScheduleItem>, FixtureError> {
    serde_json::from_str(&read(path)?).map_err(|source| FixtureError::Parse {
        what: "schedule",
        source,
    })
}
