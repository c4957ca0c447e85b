//! Provider registry
//!
//! A provider is one supported assistant tool. Each contributes the units
//! that scaffold its artifacts; several tools legitimately contribute the
//! same unit (every `AGENTS.md` reader, for instance) and the resolve
//! engine collapses those to the first contribution.
//!
//! The registry is an explicit value constructed once at startup and
//! passed down. Nothing registers itself through global state, so tests
//! can build registries of their own.

pub mod claude;
pub mod codex;
pub mod cursor;
pub mod render;
pub mod simple;

use crate::config::Config;
use crate::initializer::{EnsureDir, Initializer, Renderer, Scope, SeedFile, SyncMarkerFile};

/// One supported tool.
pub trait Provider: Send + Sync {
    /// Stable lowercase identifier used in configs and CLI flags.
    fn name(&self) -> &'static str;

    /// Human-facing tool name for listings.
    fn display_name(&self) -> &'static str;

    /// The units this tool needs, in contribution order.
    fn initializers(&self, config: &Config) -> Vec<Box<dyn Initializer>>;
}

/// The shared instruction-pointer renderer.
pub(crate) fn pointer() -> Renderer {
    Box::new(|config: &Config| Ok(render::instruction_pointer(config)))
}

/// Explicit provider registry.
pub struct Registry {
    providers: Vec<Box<dyn Provider>>,
}

impl Registry {
    /// All built-in providers.
    ///
    /// Registration order is the priority order for duplicate artifacts:
    /// when two providers contribute the same unit, the one registered
    /// earlier wins.
    pub fn builtin() -> Self {
        let mut registry = Self {
            providers: Vec::new(),
        };
        registry.register(Box::new(claude::Claude));
        registry.register(Box::new(codex::Codex));
        registry.register(Box::new(cursor::Cursor));
        for provider in simple::pointer_providers() {
            registry.register(Box::new(provider));
        }
        registry
    }

    pub fn register(&mut self, provider: Box<dyn Provider>) {
        self.providers.push(provider);
    }

    /// Providers in registration order.
    pub fn all(&self) -> impl Iterator<Item = &dyn Provider> {
        self.providers.iter().map(|p| p.as_ref())
    }

    /// Provider names in registration order.
    pub fn names(&self) -> Vec<&'static str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    /// Look a provider up by its identifier.
    pub fn get(&self, name: &str) -> Option<&dyn Provider> {
        self.providers
            .iter()
            .find(|p| p.name() == name)
            .map(|p| p.as_ref())
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

/// Units every run contributes ahead of any provider: the spectr
/// workspace itself.
pub fn base_initializers(config: &Config) -> Vec<Box<dyn Initializer>> {
    vec![
        Box::new(EnsureDir::new(Scope::Project, config.workspace_dir())),
        Box::new(EnsureDir::new(Scope::Project, config.specs_dir())),
        Box::new(EnsureDir::new(Scope::Project, config.changes_dir())),
        Box::new(SyncMarkerFile::new(
            Scope::Project,
            config.agents_doc(),
            Box::new(|config: &Config| Ok(render::workflow_doc(config))),
        )),
        Box::new(SeedFile::new(
            Scope::Project,
            config.project_doc(),
            Box::new(|config: &Config| Ok(render::project_stub(config))),
        )),
    ]
}
