//! Reduced model of the component's host element.
//!
//! The bridge only ever touches three things in the host markup: the stable
//! element identifier (which remote messages target), the child node the
//! rich-text editor binds to, and the plain-text mirror field submitted with
//! the enclosing form.

/// The node the rich-text editor binds to.
///
/// Carries whatever serialized content the markup shipped with, so a freshly
/// instantiated editor starts from the server-rendered state.
#[derive(Debug, Clone, Default)]
pub struct EditorNode {
    initial_markdown: String,
}

impl EditorNode {
    /// An empty mount node.
    pub fn new() -> Self {
        Self::default()
    }

    /// A mount node pre-seeded with serialized content.
    pub fn with_markdown(markdown: impl Into<String>) -> Self {
        Self {
            initial_markdown: markdown.into(),
        }
    }

    /// The serialized content present at mount time.
    pub fn initial_markdown(&self) -> &str {
        &self.initial_markdown
    }
}

/// Plain-text shadow of the editor content.
///
/// Read by out-of-band form submission; written only by the sync bridge that
/// owns it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MirrorField {
    value: String,
}

impl MirrorField {
    /// The current field value.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub(crate) fn set_value(&mut self, value: &str) {
        value.clone_into(&mut self.value);
    }
}

/// One mounted editing component's host element.
#[derive(Debug, Clone)]
pub struct HostElement {
    id: String,
    editor_node: Option<EditorNode>,
    mirror: MirrorField,
}

impl HostElement {
    /// A well-formed host subtree: an empty editor mount node plus a mirror
    /// field, under the given identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            editor_node: Some(EditorNode::new()),
            mirror: MirrorField::default(),
        }
    }

    /// A host whose subtree is missing the expected child nodes, as served by
    /// malformed markup. Mounting against it fails.
    pub fn bare(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            editor_node: None,
            mirror: MirrorField::default(),
        }
    }

    /// Seed the editor mount node with serialized content.
    #[must_use]
    pub fn with_initial_markdown(mut self, markdown: impl Into<String>) -> Self {
        self.editor_node = Some(EditorNode::with_markdown(markdown));
        self
    }

    /// The stable identifier remote messages target.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub(crate) fn into_parts(self) -> (String, Option<EditorNode>, MirrorField) {
        (self.id, self.editor_node, self.mirror)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_host_has_empty_editor_node() {
        let host = HostElement::new("doc-1");
        let (id, node, mirror) = host.into_parts();
        assert_eq!(id, "doc-1");
        assert_eq!(node.unwrap().initial_markdown(), "");
        assert_eq!(mirror.value(), "");
    }

    #[test]
    fn test_with_initial_markdown_seeds_node() {
        let host = HostElement::new("doc-1").with_initial_markdown("# Title");
        let (_, node, _) = host.into_parts();
        assert_eq!(node.unwrap().initial_markdown(), "# Title");
    }

    #[test]
    fn test_bare_host_has_no_editor_node() {
        let (_, node, _) = HostElement::bare("doc-1").into_parts();
        assert!(node.is_none());
    }

    #[test]
    fn test_mirror_set_value_replaces_content() {
        let mut mirror = MirrorField::default();
        mirror.set_value("hello");
        assert_eq!(mirror.value(), "hello");
        mirror.set_value("");
        assert_eq!(mirror.value(), "");
    }
}
