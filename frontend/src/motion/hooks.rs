use web_sys::Element;
use yew::prelude::*;

use super::controller::MotionSpec;
use super::dom::{self, DomTarget};

/// Bind a section's animations while it is mounted.
///
/// `build` runs after the first render with the section's root element and
/// returns the specs to bind. When `deps` changes (a filter swapped the
/// rendered cards, say) the old bindings are torn down and `build` runs
/// again; on unmount everything the section registered is released.
#[hook]
pub fn use_section_motion<D, F>(name: &'static str, node: NodeRef, deps: D, build: F)
where
    D: PartialEq + 'static,
    F: FnOnce(&Element) -> Vec<MotionSpec<DomTarget>> + 'static,
{
    use_effect_with_deps(
        move |(node, _): &(NodeRef, D)| {
            let key = node
                .cast::<Element>()
                .map(|root| dom::mount_section(name, build(&root)));
            if key.is_none() {
                log::debug!("section {}: root not rendered, nothing to animate", name);
            }
            move || {
                if let Some(key) = key {
                    dom::unmount_section(key);
                }
            }
        },
        (node, deps),
    );
}
