//! Emission options.

/// Default maximum tree depth before a subtree is replaced by a placeholder.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Output markup dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarkupFlavor {
    /// `class="..."` and `style="prop:value;"`
    #[default]
    Html,
    /// `className="..."` and `style={{ prop: "value" }}`
    Jsx,
}

/// How instance nodes are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InstanceMode {
    /// Look the component up in the registry and emit a self-closing
    /// component tag. Children are not visited.
    #[default]
    Registry,
    /// Emit a dashed placeholder sized like the instance.
    Placeholder,
    /// Render the instance as if it were a frame, visiting its children.
    Traverse,
}

/// Options controlling markup emission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmitOptions {
    pub flavor: MarkupFlavor,
    pub instances: InstanceMode,
    /// Nodes at this depth or deeper are replaced by a placeholder
    pub max_depth: usize,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            flavor: MarkupFlavor::Html,
            instances: InstanceMode::Registry,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl EmitOptions {
    pub fn jsx() -> Self {
        Self {
            flavor: MarkupFlavor::Jsx,
            ..Self::default()
        }
    }

    pub fn with_instances(mut self, instances: InstanceMode) -> Self {
        self.instances = instances;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
