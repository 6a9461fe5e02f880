//! Text rendering of a resource tree.

use std::fmt::Write;

use resmod_wiienv::ResourceNode;

const INDENT: &str = "  ";

/// Render `node` and everything below it as an indented outline.
///
/// Each record prints as `name [kind] 0xSIZE`; a record with an empty name
/// prints its kind alone. Child groups print as their label.
///
/// ```
/// use resmod::tree;
/// use resmod_wiienv::{Bfog, FogElement};
///
/// let mut fog = Bfog::new();
/// fog.add_element(FogElement::new());
/// assert_eq!(
///     tree::render(&fog),
///     "[Wii Fog] 0x44\n  Elements\n    Element 0 [Wii Fog Element] 0x30\n"
/// );
/// ```
pub fn render(node: &dyn ResourceNode) -> String {
    let mut out = String::new();
    render_node(&mut out, node, 0);
    out
}

fn render_node(out: &mut String, node: &dyn ResourceNode, depth: usize) {
    let pad = INDENT.repeat(depth);
    let name = node.name();
    if name.is_empty() {
        let _ = writeln!(out, "{}[{}] {:#X}", pad, node.kind(), node.size());
    } else {
        let _ = writeln!(out, "{}{} [{}] {:#X}", pad, name, node.kind(), node.size());
    }

    for group in node.child_groups() {
        if group.nodes.is_empty() {
            continue;
        }
        let _ = writeln!(out, "{}{}{}", pad, INDENT, group.label);
        for child in group.nodes {
            render_node(out, child, depth + 2);
        }
    }
}

/// Count every record in the tree, `node` included.
pub fn count_nodes(node: &dyn ResourceNode) -> usize {
    1 + node
        .children()
        .into_iter()
        .map(count_nodes)
        .sum::<usize>()
}

/// Depth of the deepest record, counting `node` as 1.
pub fn depth(node: &dyn ResourceNode) -> usize {
    1 + node.children().into_iter().map(depth).max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use resmod_wiienv::{AmbientLight, Blight, Blmap, LightObject, LightTexture, LightTextureEntry};

    #[test]
    fn test_render_light_groups() {
        let mut light = Blight::new();
        light.set_name("course");
        light.add_light_object(LightObject::new());
        light.add_ambient_light(AmbientLight::default());

        let text = render(&light);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "course [Wii Light Data] 0x80");
        assert_eq!(lines[1], "  Light Objects");
        assert_eq!(lines[2], "    Light 0 [Wii Light Object] 0x50");
        assert_eq!(lines[3], "  Ambient Lights");
        assert_eq!(lines[4], "    Ambient Light 0 [Wii Ambient Light] 0x8");
    }

    #[test]
    fn test_empty_groups_hidden() {
        let text = render(&Blmap::new());
        assert_eq!(text, "[Wii Light Map] 0x20\n");
    }

    #[test]
    fn test_counts_and_depth() {
        let mut texture = LightTexture::new("tex");
        for _ in 0..3 {
            texture.add_entry(LightTextureEntry::new());
        }
        let mut map = Blmap::new();
        map.add_light_texture(texture);

        assert_eq!(count_nodes(&map), 5);
        assert_eq!(depth(&map), 3);
    }
}
