//! Named transformations and pass definitions.

use serde::{Deserialize, Serialize};

/// A single named structural transformation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Plugin {
    /// Drop XML comments.
    RemoveComments,
    /// Drop the DOCTYPE declaration.
    RemoveDoctype,
    /// Drop `<metadata>` subtrees.
    RemoveMetadata,
    /// Drop editor-specific elements and attributes (Inkscape, Sodipodi,
    /// `data-*`).
    RemoveEditorData,
    /// Drop `<g>` wrappers that carry no attributes.
    CollapseGroups,
    /// Round numeric attribute values to the pass precision.
    CleanupNumericValues,
    /// Merge adjacent self-closing `<path>` elements with identical styling.
    MergePaths,
    /// Sort attributes (xmlns first, then alphabetically).
    SortAttrs,
    /// Drop `width`/`height` from the root `<svg>` element.
    RemoveDimensions,
    /// Drop `viewBox` from the root `<svg>` element.
    RemoveViewBox,
}

/// An ordered list of transformations plus shared numeric precision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptimizePass {
    /// The transformations to apply, in order.
    pub plugins: Vec<Plugin>,
    /// Decimal places kept by [`Plugin::CleanupNumericValues`].
    pub precision: u8,
}

impl OptimizePass {
    /// Create a pass from an explicit plugin list.
    pub fn new(plugins: Vec<Plugin>) -> Self {
        Self {
            plugins,
            precision: 3,
        }
    }

    /// The structure-cleanup pass.
    ///
    /// Removes comments, doctype, metadata, and editor-specific data,
    /// collapses redundant groups, normalizes numeric precision, merges
    /// paths, and sorts attributes. This pass never removes the `viewBox`,
    /// so bounds remain extractable from its output.
    pub fn cleanup() -> Self {
        Self::new(vec![
            Plugin::RemoveComments,
            Plugin::RemoveDoctype,
            Plugin::RemoveMetadata,
            Plugin::RemoveEditorData,
            Plugin::CollapseGroups,
            Plugin::CleanupNumericValues,
            Plugin::MergePaths,
            Plugin::SortAttrs,
        ])
    }

    /// The responsive-embedding pass.
    ///
    /// Strips fixed `width`/`height` and the `viewBox` from the root element.
    /// Must only run after bounds have been captured, since it destroys the
    /// information the refit step reads.
    pub fn responsive() -> Self {
        Self::new(vec![Plugin::RemoveDimensions, Plugin::RemoveViewBox])
    }

    /// Set the numeric precision.
    pub fn with_precision(mut self, precision: u8) -> Self {
        self.precision = precision;
        self
    }

    /// Whether the pass enables the given plugin.
    pub fn enables(&self, plugin: Plugin) -> bool {
        self.plugins.contains(&plugin)
    }

    /// Whether the pass destroys the root `viewBox`.
    pub fn strips_view_box(&self) -> bool {
        self.enables(Plugin::RemoveViewBox)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cleanup_preserves_view_box() {
        let pass = OptimizePass::cleanup();
        assert!(!pass.strips_view_box());
        assert!(!pass.enables(Plugin::RemoveDimensions));
        assert!(pass.enables(Plugin::RemoveComments));
        assert!(pass.enables(Plugin::MergePaths));
    }

    #[test]
    fn test_responsive_strips_sizing() {
        let pass = OptimizePass::responsive();
        assert!(pass.strips_view_box());
        assert!(pass.enables(Plugin::RemoveDimensions));
        assert!(!pass.enables(Plugin::RemoveComments));
    }

    #[test]
    fn test_with_precision() {
        let pass = OptimizePass::cleanup().with_precision(1);
        assert_eq!(pass.precision, 1);
    }
}
