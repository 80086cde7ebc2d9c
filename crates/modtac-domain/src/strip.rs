//! Horizontal photo strips: the hover-expand row and the angled marquee.

use serde::Serialize;

const NEAR_PUSH_PX: f64 = 14.0;
const FAR_PUSH_PX: f64 = 6.0;
const ACTIVE_SCALE: f64 = 2.18;
const MARQUEE_Z_CYCLE: usize = 40;

/// Target motion of one tile in the hover-expand row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TileMotion {
    /// Horizontal push away from the active tile.
    pub push_x: f64,
    pub scale: f64,
    pub z_index: u32,
    pub highlighted: bool,
}

/// Motion for the tile at `index` while `active` is hovered.
pub fn hover_motion(index: usize, active: Option<usize>) -> TileMotion {
    let Some(active) = active else {
        return TileMotion {
            push_x: 0.0,
            scale: 1.0,
            z_index: 1,
            highlighted: false,
        };
    };

    let push = match index.abs_diff(active) {
        1 => NEAR_PUSH_PX,
        2 => FAR_PUSH_PX,
        _ => 0.0,
    };
    let is_active = index == active;
    TileMotion {
        push_x: if index > active { push } else { -push },
        scale: if is_active { ACTIVE_SCALE } else { 1.0 },
        z_index: if is_active { 20 } else { 1 },
        highlighted: is_active,
    }
}

/// One card of the marquee strip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarqueeCard<T> {
    pub index: usize,
    pub image: T,
    pub z_index: usize,
    /// Every card but the first slides under its predecessor.
    pub overlaps_previous: bool,
}

/// The marquee renders the sequence twice so the scroll animation can wrap
/// without a visible jump.
pub fn marquee_cards<T: Clone>(images: &[T]) -> Vec<MarqueeCard<T>> {
    images
        .iter()
        .chain(images.iter())
        .cloned()
        .enumerate()
        .map(|(index, image)| MarqueeCard {
            index,
            image,
            z_index: 1 + index % MARQUEE_Z_CYCLE,
            overlaps_previous: index != 0,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_row_is_flat() {
        for i in 0..5 {
            let m = hover_motion(i, None);
            assert_eq!(m.push_x, 0.0);
            assert_eq!(m.scale, 1.0);
            assert!(!m.highlighted);
        }
    }

    #[test]
    fn test_neighbours_are_pushed_away() {
        let active = Some(3);
        assert_eq!(hover_motion(2, active).push_x, -14.0);
        assert_eq!(hover_motion(4, active).push_x, 14.0);
        assert_eq!(hover_motion(1, active).push_x, -6.0);
        assert_eq!(hover_motion(5, active).push_x, 6.0);
        assert_eq!(hover_motion(0, active).push_x, 0.0);
        assert_eq!(hover_motion(6, active).push_x, 0.0);
    }

    #[test]
    fn test_active_tile_expands_on_top() {
        let m = hover_motion(3, Some(3));
        assert_eq!(m.scale, 2.18);
        assert_eq!(m.z_index, 20);
        assert_eq!(m.push_x, 0.0);
        assert!(m.highlighted);
    }

    #[test]
    fn test_marquee_doubles_sequence() {
        let cards = marquee_cards(&["a", "b", "c"]);
        let order: Vec<_> = cards.iter().map(|c| c.image).collect();
        assert_eq!(order, ["a", "b", "c", "a", "b", "c"]);
        assert!(!cards[0].overlaps_previous);
        assert!(cards[1..].iter().all(|c| c.overlaps_previous));
    }

    #[test]
    fn test_marquee_z_index_cycles() {
        let images: Vec<usize> = (0..25).collect();
        let cards = marquee_cards(&images);
        assert_eq!(cards[0].z_index, 1);
        assert_eq!(cards[39].z_index, 40);
        assert_eq!(cards[40].z_index, 1);
    }

    #[test]
    fn test_marquee_empty() {
        assert!(marquee_cards::<&str>(&[]).is_empty());
    }
}
