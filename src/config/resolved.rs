//! Resource catalog: validated definitions indexed for routing and schema bootstrap.

use crate::config::{validate, ResourceDef};
use crate::error::ConfigError;
use std::collections::HashMap;

#[derive(Debug)]
pub struct ResourceCatalog {
    resources: Vec<&'static ResourceDef>,
    by_route: HashMap<String, &'static ResourceDef>,
}

impl ResourceCatalog {
    /// Validate and index resource definitions.
    pub fn new(resources: &[&'static ResourceDef]) -> Result<Self, ConfigError> {
        validate(resources)?;
        let by_route = resources.iter().map(|r| (r.route_key(), *r)).collect();
        Ok(ResourceCatalog {
            resources: resources.to_vec(),
            by_route,
        })
    }

    pub fn get(&self, family: &str, path: &str) -> Option<&'static ResourceDef> {
        self.by_route.get(&format!("{}/{}", family, path)).copied()
    }

    pub fn resources(&self) -> &[&'static ResourceDef] {
        &self.resources
    }

    /// Families in declaration order, without duplicates.
    pub fn families(&self) -> Vec<&'static str> {
        let mut out: Vec<&'static str> = Vec::new();
        for r in &self.resources {
            if !out.contains(&r.family) {
                out.push(r.family);
            }
        }
        out
    }

    pub fn family(&self, family: &str) -> impl Iterator<Item = &'static ResourceDef> + '_ {
        let family = family.to_string();
        self.resources.iter().copied().filter(move |r| r.family == family)
    }
}
