//! Hosted module content
//!
//! A module is a self-contained view created for a category. It never sees
//! window geometry; it fills whatever body the page gives it and owns its
//! own state and keyboard shortcuts.

use evi_desktop::Category;

use crate::error::{ShellError, ShellResult};

/// A mounted business module view
pub trait ContentView: std::fmt::Debug {
    /// Category this view was created for
    fn category(&self) -> &str;

    /// Called once when the hosting window closes or the session ends
    fn unmount(&mut self) {}
}

/// Creates a fresh view for a category
pub type ContentFactory = Box<dyn Fn() -> Box<dyn ContentView>>;

/// A registered module as the navigation shows it
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModuleEntry {
    pub category: Category,
    pub title: String,
}

/// Modules the shell can open, in navigation order
#[derive(Default)]
pub struct ContentRegistry {
    modules: Vec<(ModuleEntry, ContentFactory)>,
}

impl std::fmt::Debug for ContentRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.entries()).finish()
    }
}

impl ContentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a module; a second registration for a category replaces the first
    pub fn register<F>(&mut self, category: &str, title: &str, factory: F)
    where
        F: Fn() -> Box<dyn ContentView> + 'static,
    {
        let entry = ModuleEntry {
            category: Category::new(category),
            title: title.to_string(),
        };
        match self
            .modules
            .iter_mut()
            .find(|(e, _)| e.category.as_str() == category)
        {
            Some(slot) => *slot = (entry, Box::new(factory)),
            None => self.modules.push((entry, Box::new(factory))),
        }
    }

    /// Builder-style [`register`](Self::register)
    pub fn with_module<F>(mut self, category: &str, title: &str, factory: F) -> Self
    where
        F: Fn() -> Box<dyn ContentView> + 'static,
    {
        self.register(category, title, factory);
        self
    }

    /// Registered modules in navigation order
    pub fn entries(&self) -> impl Iterator<Item = &ModuleEntry> {
        self.modules.iter().map(|(entry, _)| entry)
    }

    /// Entry for a category
    pub fn entry(&self, category: &str) -> ShellResult<&ModuleEntry> {
        self.entries()
            .find(|e| e.category.as_str() == category)
            .ok_or_else(|| ShellError::UnknownModule(category.to_string()))
    }

    /// Create a fresh view for a category
    pub fn instantiate(&self, category: &str) -> ShellResult<Box<dyn ContentView>> {
        self.modules
            .iter()
            .find(|(e, _)| e.category.as_str() == category)
            .map(|(_, factory)| factory())
            .ok_or_else(|| ShellError::UnknownModule(category.to_string()))
    }
}
