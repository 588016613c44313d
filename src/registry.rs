use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub(crate) const REGISTRY_FILE: &str = "api-registry.yaml";

/// Metadata record for one RPC: its name and one human-readable hint per
/// parameter. The form only reads descriptors, it never mutates them.
#[derive(Debug, Deserialize, Clone)]
pub struct MethodDescriptor {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub hints: Vec<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Registry {
    #[serde(default)]
    pub methods: Vec<MethodDescriptor>,
}

impl Registry {
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(REGISTRY_FILE);
        let s =
            fs::read_to_string(&path).with_context(|| format!("reading registry: {path:?}"))?;
        let reg: Registry =
            serde_yaml::from_str(&s).with_context(|| format!("parsing registry: {path:?}"))?;
        validate_registry(&reg).map_err(|e| anyhow!("invalid registry {path:?}: {e}"))?;
        Ok(reg)
    }

    pub fn lookup(&self, name: &str) -> Option<&MethodDescriptor> {
        self.methods.iter().find(|m| m.name == name)
    }
}

pub(crate) fn validate_registry(reg: &Registry) -> Result<(), String> {
    use std::collections::HashSet;
    let mut names = HashSet::new();
    for (i, m) in reg.methods.iter().enumerate() {
        if m.name.is_empty() {
            return Err(format!("method at index {i} has an empty name"));
        }
        if !names.insert(&m.name) {
            return Err(format!("duplicate method name: '{}' at index {}", m.name, i));
        }
    }
    Ok(())
}
