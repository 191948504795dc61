#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]
#![allow(clippy::indexing_slicing)]

use proptest::{collection::hash_map, collection::vec, prelude::*};

use kmlwrite::test_utils::*;

fn tag_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9]{0,11}"
}

fn text_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ,._-]{0,30}"
}

// Random trees of bounded depth and width
fn node_strategy() -> impl Strategy<Value = Node> {
    let leaf = (tag_strategy(), text_strategy()).prop_map(|(tag, text)| Node::text(tag, text));
    leaf.prop_recursive(4, 32, 5, |inner| {
        (
            tag_strategy(),
            hash_map("[a-z]{1,8}", text_strategy(), 0..4),
            vec(inner, 0..5),
        )
            .prop_map(|(tag, attrs, children)| {
                let mut node = Node::new(tag);
                for (key, value) in attrs {
                    node.set_attribute(key, value);
                }
                for child in children {
                    node.push(child);
                }
                node
            })
    })
}

proptest! {
    // Serializing the same tree twice yields byte-identical text
    #[test]
    fn rendering_is_deterministic(node in node_strategy()) {
        let writer = KmlWriter::new();
        prop_assert_eq!(writer.render(&node), writer.render(&node));
    }

    // Attribute set order never shows in the output
    #[test]
    fn attribute_insertion_order_is_invisible(
        tag in tag_strategy(),
        attrs in hash_map("[a-z]{1,8}", text_strategy(), 0..8)
    ) {
        let entries: Vec<_> = attrs.into_iter().collect();

        let mut forward = Node::new(tag.clone());
        for (key, value) in &entries {
            forward.set_attribute(key.clone(), value.clone());
        }

        let mut reversed = Node::new(tag);
        for (key, value) in entries.iter().rev() {
            reversed.set_attribute(key.clone(), value.clone());
        }

        let writer = KmlWriter::new();
        prop_assert_eq!(writer.render(&forward), writer.render(&reversed));
    }

    // Sole-text-child elements stay on one line
    #[test]
    fn sole_text_child_renders_without_inner_newline(
        tag in tag_strategy(),
        text in text_strategy()
    ) {
        let node = Node::text(tag, text);
        let rendered = KmlWriter::new().render(&node);
        prop_assert!(!rendered.trim_end_matches('\n').contains('\n'));
    }

    // Coordinate text is always "lon, lat, 0" for points
    #[test]
    fn point_coordinate_order_is_lon_lat_alt(
        lat in -90.0..90.0f64,
        lon in -180.0..180.0f64
    ) {
        let fragment = Point::new(lat, lon).render();
        let nodes = fragment.nodes();
        prop_assert_eq!(nodes.len(), 1);

        let point = nodes[0]
            .children()
            .iter()
            .find_map(|child| match child {
                NodeChild::Element(n) if n.tag() == "Point" => Some(n),
                _ => None,
            })
            .unwrap();
        let coordinates = point.child_text("coordinates").unwrap();
        prop_assert_eq!(coordinates, format!("{}, {}, 0", lon, lat));
    }

    // Indent and newline configuration never change the rendered structure
    #[test]
    fn formatting_config_is_structure_preserving(node in node_strategy()) {
        let default_render = KmlWriter::new().render(&node);
        let custom = KmlWriter::new().with_config(WriteConfig {
            indent: "    ".to_string(),
            newline: "\n".to_string(),
        });
        let custom_render = custom.render(&node);

        let strip = |text: &str| -> Vec<String> {
            text.lines().map(|line| line.trim_start().to_string()).collect()
        };
        prop_assert_eq!(strip(&default_render), strip(&custom_render));
    }
}
