//! The page surface views render into.

use std::collections::{BTreeSet, HashMap};

use thiserror::Error;

use crate::fragment::{html_escape, Fragment, Part};

/// Errors raised by a page surface.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    /// No container or node matches the selector.
    #[error("Target not found: {0}")]
    TargetMissing(String),
}

/// Selector-addressed operations a page performs on its document.
///
/// Containers are fixed regions of the page (`.payment-summary`); nodes are
/// addressable parts of a fragment written into a container.
pub trait PageSurface {
    /// Whether a container or node matches the selector.
    fn contains(&self, selector: &str) -> bool;

    /// Replace the content of a container, or the markup of a node.
    fn set_html(&mut self, selector: &str, fragment: Fragment) -> Result<(), SurfaceError>;

    /// Replace the content of a target with escaped text.
    fn set_text(&mut self, selector: &str, text: &str) -> Result<(), SurfaceError> {
        self.set_html(selector, Fragment::markup(html_escape(text)))
    }

    /// Remove a node, or a whole container.
    fn remove(&mut self, selector: &str) -> Result<(), SurfaceError>;

    /// Add a class to a target.
    fn add_class(&mut self, selector: &str, class: &str) -> Result<(), SurfaceError>;

    /// Leave the page.
    fn navigate(&mut self, href: &str);
}

impl<T: PageSurface + ?Sized> PageSurface for &mut T {
    fn contains(&self, selector: &str) -> bool {
        (**self).contains(selector)
    }

    fn set_html(&mut self, selector: &str, fragment: Fragment) -> Result<(), SurfaceError> {
        (**self).set_html(selector, fragment)
    }

    fn set_text(&mut self, selector: &str, text: &str) -> Result<(), SurfaceError> {
        (**self).set_text(selector, text)
    }

    fn remove(&mut self, selector: &str) -> Result<(), SurfaceError> {
        (**self).remove(selector)
    }

    fn add_class(&mut self, selector: &str, class: &str) -> Result<(), SurfaceError> {
        (**self).add_class(selector, class)
    }

    fn navigate(&mut self, href: &str) {
        (**self).navigate(href)
    }
}

#[derive(Debug, Clone)]
struct Container {
    selector: String,
    parts: Vec<Part>,
}

impl Container {
    fn position(&self, selector: &str) -> Option<usize> {
        self.parts.iter().position(|p| p.selector() == Some(selector))
    }
}

/// In-memory page surface.
///
/// Containers must be declared up front; writes to anything else fail with
/// [`SurfaceError::TargetMissing`], like a `querySelector` returning nothing.
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    containers: Vec<Container>,
    classes: HashMap<String, BTreeSet<String>>,
    location: Option<String>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Surface with the given empty containers.
    pub fn with_targets(selectors: &[&str]) -> Self {
        let mut surface = Self::new();
        for selector in selectors {
            surface.add_target(*selector);
        }
        surface
    }

    /// Declare an empty container. Existing containers are left untouched.
    pub fn add_target(&mut self, selector: impl Into<String>) {
        let selector = selector.into();
        if self.container(&selector).is_none() {
            self.containers.push(Container {
                selector,
                parts: Vec::new(),
            });
        }
    }

    /// Current HTML of a container or node.
    pub fn html(&self, selector: &str) -> Option<String> {
        if let Some(container) = self.container(selector) {
            return Some(container.parts.iter().map(Part::html).collect());
        }
        self.containers.iter().find_map(|c| {
            c.position(selector)
                .map(|i| c.parts[i].html().to_string())
        })
    }

    pub fn has_class(&self, selector: &str, class: &str) -> bool {
        self.classes
            .get(selector)
            .is_some_and(|classes| classes.contains(class))
    }

    /// Classes added to a target, sorted.
    pub fn classes(&self, selector: &str) -> Vec<&str> {
        self.classes
            .get(selector)
            .map(|classes| classes.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Where the page navigated to, if anywhere.
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    fn container(&self, selector: &str) -> Option<&Container> {
        self.containers.iter().find(|c| c.selector == selector)
    }

    fn forget_classes(&mut self, parts: &[Part]) {
        for selector in parts.iter().filter_map(Part::selector) {
            self.classes.remove(selector);
        }
    }
}

impl PageSurface for MemorySurface {
    fn contains(&self, selector: &str) -> bool {
        self.containers
            .iter()
            .any(|c| c.selector == selector || c.position(selector).is_some())
    }

    fn set_html(&mut self, selector: &str, fragment: Fragment) -> Result<(), SurfaceError> {
        if let Some(index) = self.containers.iter().position(|c| c.selector == selector) {
            let old = std::mem::replace(&mut self.containers[index].parts, fragment.into_parts());
            self.forget_classes(&old);
            return Ok(());
        }

        for container in &mut self.containers {
            if let Some(i) = container.position(selector) {
                container.parts[i] = Part::Node {
                    selector: selector.to_string(),
                    html: fragment.to_html(),
                };
                return Ok(());
            }
        }

        tracing::trace!(selector, "set_html target missing");
        Err(SurfaceError::TargetMissing(selector.to_string()))
    }

    fn remove(&mut self, selector: &str) -> Result<(), SurfaceError> {
        if let Some(index) = self.containers.iter().position(|c| c.selector == selector) {
            let container = self.containers.remove(index);
            self.forget_classes(&container.parts);
            self.classes.remove(selector);
            return Ok(());
        }

        for container in &mut self.containers {
            if let Some(i) = container.position(selector) {
                container.parts.remove(i);
                self.classes.remove(selector);
                return Ok(());
            }
        }

        Err(SurfaceError::TargetMissing(selector.to_string()))
    }

    fn add_class(&mut self, selector: &str, class: &str) -> Result<(), SurfaceError> {
        if !self.contains(selector) {
            return Err(SurfaceError::TargetMissing(selector.to_string()));
        }
        self.classes
            .entry(selector.to_string())
            .or_default()
            .insert(class.to_string());
        Ok(())
    }

    fn navigate(&mut self, href: &str) {
        tracing::debug!(href, "navigating");
        self.location = Some(href.to_string());
    }
}
