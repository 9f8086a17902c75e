//! The two world transformations: uniform scaling and static-body extraction.

use crate::error::PipelineError;
use phykit_world::World;

/// Bodies carrying this label are never extracted, even when static.
const KEEP_LABEL: &str = "item";

/// Parse the raw `-scale` value as a decimal factor.
///
/// No range validation: zero, negative, and fractional factors all pass
/// through to the world's scale operation as given.
pub fn parse_scale_factor(raw: &str) -> Result<f32, PipelineError> {
    raw.trim()
        .parse::<f32>()
        .map_err(|_| PipelineError::InvalidScaleFactor(raw.to_owned()))
}

/// Remove decorative bodies and fold their identity into the world text.
///
/// A body qualifies when it is not dynamic, not interacting, and its label
/// is not `"item"`. Indices are walked from highest to lowest so each
/// removal only invalidates indices already visited. Every removal commits
/// its `,label,x,y` fragment to the world's attribute text immediately;
/// nothing is trimmed or deduplicated. Returns the number of bodies removed.
pub fn extract_static_bodies(world: &mut World) -> usize {
    let mut removed = 0;
    for index in (0..world.body_count()).rev() {
        let qualifies = world
            .body(index)
            .is_some_and(|b| !b.dynamic && !b.interacting && b.user_data() != KEEP_LABEL);
        if !qualifies {
            continue;
        }
        let Some(body) = world.remove_body(index) else {
            continue;
        };
        let fragment = format!(",{},{},{}", body.user_data(), body.position.x, body.position.y);
        let combined = format!("{}{fragment}", world.user_data());
        world.set_user_data(combined);
        removed += 1;
    }
    removed
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use phykit_world::Body;

    fn decoration(label: &str, x: f32, y: f32) -> Body {
        Body {
            position: Vec2::new(x, y),
            dynamic: false,
            interacting: false,
            user_data: label.into(),
            ..Body::default()
        }
    }

    #[test]
    fn parse_scale_factor_accepts_decimals() {
        assert_eq!(parse_scale_factor("2.0").unwrap(), 2.0);
        assert_eq!(parse_scale_factor("0.5").unwrap(), 0.5);
        assert_eq!(parse_scale_factor("-1").unwrap(), -1.0);
        assert_eq!(parse_scale_factor(" 3 ").unwrap(), 3.0);
        assert_eq!(parse_scale_factor("0").unwrap(), 0.0);
    }

    #[test]
    fn parse_scale_factor_rejects_garbage() {
        assert!(matches!(
            parse_scale_factor("big"),
            Err(PipelineError::InvalidScaleFactor(s)) if s == "big"
        ));
        assert!(parse_scale_factor("").is_err());
        assert!(parse_scale_factor("2.0x").is_err());
    }

    #[test]
    fn extracts_single_decoration() {
        let mut world = World::new();
        world.add_body(decoration("tree", 10.0, 20.0));

        assert_eq!(extract_static_bodies(&mut world), 1);
        assert_eq!(world.body_count(), 0);
        assert_eq!(world.user_data(), ",tree,10,20");
    }

    #[test]
    fn dynamic_and_interacting_bodies_are_kept() {
        let mut world = World::new();
        world.add_body(Body {
            dynamic: true,
            interacting: false,
            user_data: "crate".into(),
            ..Body::default()
        });
        world.add_body(Body {
            dynamic: false,
            interacting: true,
            user_data: "wall".into(),
            ..Body::default()
        });

        assert_eq!(extract_static_bodies(&mut world), 0);
        assert_eq!(world.body_count(), 2);
        assert_eq!(world.user_data(), "");
    }

    #[test]
    fn item_label_is_exempt() {
        let mut world = World::new();
        world.add_body(decoration("item", 1.0, 2.0));
        world.add_body(decoration("bush", 3.0, 4.0));

        assert_eq!(extract_static_bodies(&mut world), 1);
        assert_eq!(world.body_count(), 1);
        assert_eq!(world.body(0).unwrap().user_data(), "item");
        assert_eq!(world.user_data(), ",bush,3,4");
    }

    #[test]
    fn fragments_append_in_descending_index_order() {
        let mut world = World::new();
        world.add_body(decoration("a", 0.0, 0.0));
        world.add_body(Body::default()); // dynamic, stays
        world.add_body(decoration("b", 1.0, 1.0));
        world.add_body(decoration("c", 2.0, 2.0));

        assert_eq!(extract_static_bodies(&mut world), 3);
        assert_eq!(world.body_count(), 1);
        assert_eq!(world.user_data(), ",c,2,2,b,1,1,a,0,0");
    }

    #[test]
    fn appends_to_existing_world_text() {
        let mut world = World::new();
        world.set_user_data("level-3");
        world.add_body(decoration("rock", 5.0, -5.0));

        extract_static_bodies(&mut world);
        assert_eq!(world.user_data(), "level-3,rock,5,-5");
    }

    #[test]
    fn empty_label_still_qualifies() {
        let mut world = World::new();
        world.add_body(decoration("", 1.0, 1.0));

        assert_eq!(extract_static_bodies(&mut world), 1);
        assert_eq!(world.user_data(), ",,1,1");
    }

    #[test]
    fn fractional_positions_keep_their_digits() {
        let mut world = World::new();
        world.add_body(decoration("post", 1.5, -0.25));

        extract_static_bodies(&mut world);
        assert_eq!(world.user_data(), ",post,1.5,-0.25");
    }
}
