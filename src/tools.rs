//! Tool coordination: suspending interactive map tools while the globe is up.
//!
//! 3D navigation gestures conflict with 2D drawing and measuring tools, so
//! the globe toggle suspends every other interactive tool while the globe is
//! active. The coordination surface is deliberately tiny: a capability with
//! two methods, injected into the control instead of reached through global
//! state, so tests can observe calls without a real tool stack.

/// Capability for suspending and resuming whatever interactive tools the
/// hosting application currently has.
pub trait ToolCoordinator {
    /// Disables every currently registered tool.
    fn disable_all_tools(&mut self);

    /// Re-enables every currently registered tool.
    fn enable_all_tools(&mut self);
}

/// A tool known to the [`ToolRegistry`].
#[derive(Debug, Clone)]
pub struct ToolEntry {
    /// Display name of the tool.
    pub name: String,
    /// Whether the tool currently accepts input.
    pub enabled: bool,
}

/// Reference [`ToolCoordinator`] implementation tracking named tools.
///
/// Tools may be registered at any time; a disable-all or enable-all call
/// flips whichever tools exist at that moment.
#[derive(Debug, Default)]
pub struct ToolRegistry {
    tools: Vec<ToolEntry>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a tool, enabled by default.
    pub fn register(&mut self, name: impl Into<String>) {
        self.tools.push(ToolEntry {
            name: name.into(),
            enabled: true,
        });
    }

    /// Currently registered tools.
    pub fn tools(&self) -> &[ToolEntry] {
        &self.tools
    }

    /// Mutable access for host UI (e.g. per-tool checkboxes).
    pub fn tools_mut(&mut self) -> &mut [ToolEntry] {
        &mut self.tools
    }
}

impl ToolCoordinator for ToolRegistry {
    fn disable_all_tools(&mut self) {
        for tool in &mut self.tools {
            tool.enabled = false;
        }
        log::info!("suspended {} interactive tools", self.tools.len());
    }

    fn enable_all_tools(&mut self) {
        for tool in &mut self.tools {
            tool.enabled = true;
        }
        log::info!("resumed {} interactive tools", self.tools.len());
    }
}
