use crate::element::Element;

/// Check whether `target_id` names `root` itself or any element in its
/// subtree. This is the "did the click land inside the widget" primitive
/// used for outside-click dismissal.
pub fn contains(root: &Element, target_id: &str) -> bool {
    if root.id() == target_id {
        return true;
    }
    root.child_elements()
        .iter()
        .any(|child| contains(child, target_id))
}
