/// The operations the table of contents builder needs from a document.
///
/// Handles are cheap copies that stay valid for the lifetime of the
/// document. Queries only see nodes connected to the document tree;
/// an element returned by [`Document::create_element`] stays invisible
/// to them until it is appended somewhere under the root.
pub trait Document {
    type Handle: Copy + Eq + std::fmt::Debug;

    /// First connected element, in tree order, whose `id` equals `id`
    fn element_by_id(&self, id: &str) -> Option<Self::Handle>;

    /// First connected element, in tree order, with the given tag name
    fn first_element_by_tag(&self, tag: &str) -> Option<Self::Handle>;

    /// All elements whose tag is one of `tags`, in pre-order.
    ///
    /// With `scope` set, only descendants of that node are considered
    /// (the node itself excluded); otherwise the whole document.
    fn query_all(&self, scope: Option<Self::Handle>, tags: &[&str]) -> Vec<Self::Handle>;

    /// Lowercase tag name, `None` for non-element nodes
    fn tag_name(&self, node: Self::Handle) -> Option<&str>;

    fn attribute(&self, node: Self::Handle, name: &str) -> Option<&str>;

    fn set_attribute(&mut self, node: Self::Handle, name: &str, value: &str);

    /// Concatenated text of all descendant text nodes
    fn text_content(&self, node: Self::Handle) -> String;

    /// Create a detached element
    fn create_element(&mut self, tag: &str) -> Self::Handle;

    /// Replace all children of `node` with a single text node
    fn set_text_content(&mut self, node: Self::Handle, text: &str);

    /// Append `child` as the last child of `parent`, detaching it first
    fn append_child(&mut self, parent: Self::Handle, child: Self::Handle);
}
