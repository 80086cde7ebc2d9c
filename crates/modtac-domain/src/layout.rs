//! Scattered image field layout.
//!
//! Items are spread evenly through one loop span, each jittered inside the
//! region of its lane. The loop span is the vertical distance after which the
//! scrolling field repeats, so every placement lives in `[0, loop_span)` and
//! [`tile_layout`] appends a shifted copy to hide the seam.

use crate::item::{Item, Lane, PlacedItem, Viewport};
use crate::rng::Mulberry32;

/// Horizontal and vertical margin kept between a placement and the viewport edge.
pub const EDGE_MARGIN: f64 = 16.0;
pub const MIN_WIDTH: f64 = 180.0;
pub const MAX_WIDTH: f64 = 480.0;
pub const MIN_HEIGHT: f64 = 130.0;
pub const MAX_HEIGHT: f64 = 360.0;

const TILE_SUFFIX: &str = "__b";

/// Normalized placement region of a lane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Zone {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
    pub w_min: f64,
    pub w_max: f64,
    pub aspect_min: f64,
    pub aspect_max: f64,
}

impl Zone {
    pub const fn for_lane(lane: Lane) -> Zone {
        match lane {
            Lane::LeftMid => Zone {
                x_min: 0.06,
                x_max: 0.22,
                y_min: 0.12,
                y_max: 0.58,
                w_min: 0.12,
                w_max: 0.17,
                aspect_min: 0.95,
                aspect_max: 1.3,
            },
            // Kept down and left of the contact button.
            Lane::TopRight => Zone {
                x_min: 0.50,
                x_max: 0.80,
                y_min: 0.11,
                y_max: 0.30,
                w_min: 0.18,
                w_max: 0.26,
                aspect_min: 1.6,
                aspect_max: 2.3,
            },
            Lane::BottomLeft => Zone {
                x_min: 0.18,
                x_max: 0.36,
                y_min: 0.70,
                y_max: 0.92,
                w_min: 0.11,
                w_max: 0.16,
                aspect_min: 1.0,
                aspect_max: 1.5,
            },
            Lane::BottomRight => Zone {
                x_min: 0.70,
                x_max: 0.90,
                y_min: 0.58,
                y_max: 0.88,
                w_min: 0.11,
                w_max: 0.17,
                aspect_min: 0.95,
                aspect_max: 1.4,
            },
        }
    }
}

/// Clamp that favours the lower bound when the range is inverted, so narrow
/// viewports pin items to the margin instead of panicking.
pub(crate) fn clamp(value: f64, min: f64, max: f64) -> f64 {
    min.max(max.min(value))
}

/// Repeat period of the field for a viewport of the given height.
///
/// The base canvas is `height_vh` percent of the viewport, but never shorter
/// than `min_canvas_viewports` viewports. The result is at least 1.
pub fn loop_span_for(viewport_height: f64, height_vh: f64, min_canvas_viewports: f64) -> f64 {
    let base_canvas = (viewport_height * (height_vh / 100.0))
        .max(viewport_height * min_canvas_viewports);
    let span = base_canvas - viewport_height;
    if span.is_finite() {
        span.max(1.0)
    } else {
        1.0
    }
}

/// Places every item inside one loop span.
///
/// Returns an empty set when there is nothing to place or the viewport is unusable.
pub fn generate_layout(
    items: &[Item],
    viewport: Viewport,
    seed: u32,
    loop_span: f64,
) -> Vec<PlacedItem> {
    if items.is_empty() || !viewport.is_usable() {
        return Vec::new();
    }
    let loop_span = if loop_span.is_finite() {
        loop_span.max(1.0)
    } else {
        1.0
    };

    let mut rng = Mulberry32::new(seed);
    let spacing = loop_span / items.len() as f64;
    let Viewport {
        width: vw,
        height: vh,
    } = viewport;

    let placed: Vec<PlacedItem> = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let lane = Lane::for_index(index);
            let zone = Zone::for_lane(lane);

            let width = clamp(vw * rng.range(zone.w_min, zone.w_max), MIN_WIDTH, MAX_WIDTH);
            let aspect = rng.range(zone.aspect_min, zone.aspect_max);
            let height = clamp(width / aspect, MIN_HEIGHT, MAX_HEIGHT);

            let x_norm = rng.range(zone.x_min, zone.x_max);
            let y_norm = rng.range(zone.y_min, zone.y_max);

            let x = clamp(
                vw * x_norm - width / 2.0,
                EDGE_MARGIN,
                vw - width - EDGE_MARGIN,
            );
            let jitter = clamp(
                vh * y_norm - height / 2.0,
                EDGE_MARGIN,
                vh - height - EDGE_MARGIN,
            );
            let y = (index as f64 * spacing + jitter).rem_euclid(loop_span);

            PlacedItem {
                id: format!("{}-{}", index, item.source_ref),
                item: item.clone(),
                x,
                y,
                width,
                height,
                lane,
            }
        })
        .collect();

    tracing::debug!(
        count = placed.len(),
        seed,
        loop_span,
        "generated image field layout"
    );
    placed
}

/// Appends a copy of every placement shifted down by one loop span.
pub fn tile_layout(placed: &[PlacedItem], loop_span: f64) -> Vec<PlacedItem> {
    let shifted = placed.iter().map(|p| PlacedItem {
        id: format!("{}{}", p.id, TILE_SUFFIX),
        y: p.y + loop_span,
        ..p.clone()
    });
    placed.iter().cloned().chain(shifted).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(n: usize) -> Vec<Item> {
        (0..n)
            .map(|i| Item::new(format!("/media/shot-{i}.jpg"), format!("Shot {i}")))
            .collect()
    }

    fn desktop() -> Viewport {
        Viewport::new(1200.0, 800.0)
    }

    #[test]
    fn test_layout_is_deterministic() {
        let first = generate_layout(&items(12), desktop(), 1337, 4000.0);
        let second = generate_layout(&items(12), desktop(), 1337, 4000.0);
        assert_eq!(first, second);
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.x.to_bits(), b.x.to_bits());
            assert_eq!(a.y.to_bits(), b.y.to_bits());
        }
    }

    #[test]
    fn test_different_seed_moves_items() {
        let a = generate_layout(&items(8), desktop(), 1337, 4000.0);
        let b = generate_layout(&items(8), desktop(), 1338, 4000.0);
        assert_ne!(a, b);
    }

    #[test]
    fn test_first_placement_matches_reference_values() {
        let placed = generate_layout(&items(8), desktop(), 1337, 4000.0);
        let first = &placed[0];
        assert_eq!(first.lane, Lane::LeftMid);
        assert_eq!(first.width, 180.0);
        assert!((first.x - 137.610622510314).abs() < 1e-9);
        assert!((first.y - 244.36013410022446).abs() < 1e-9);
        assert!((first.height - 177.07886490661724).abs() < 1e-9);

        let last = &placed[7];
        assert_eq!(last.lane, Lane::BottomRight);
        assert!((last.y - 70.87019406894433).abs() < 1e-9);
    }

    #[test]
    fn test_bounds_hold_for_every_item() {
        for &(w, h) in &[(1200.0, 800.0), (1920.0, 1080.0), (800.0, 900.0)] {
            let viewport = Viewport::new(w, h);
            let span = loop_span_for(h, 600.0, 4.0);
            for seed in [1, 1337, 99_999] {
                for p in generate_layout(&items(20), viewport, seed, span) {
                    assert!(p.x >= EDGE_MARGIN, "x {} below margin", p.x);
                    assert!(p.x <= w - p.width - EDGE_MARGIN, "x {} past edge", p.x);
                    assert!(p.y >= 0.0 && p.y < span, "y {} outside span", p.y);
                    assert!((MIN_WIDTH..=MAX_WIDTH).contains(&p.width));
                    assert!((MIN_HEIGHT..=MAX_HEIGHT).contains(&p.height));
                }
            }
        }
    }

    #[test]
    fn test_lanes_follow_index() {
        let placed = generate_layout(&items(9), desktop(), 5, 3000.0);
        for (i, p) in placed.iter().enumerate() {
            assert_eq!(p.lane.index() as usize, i % 4);
            assert_eq!(p.id, format!("{}-/media/shot-{}.jpg", i, i));
        }
    }

    #[test]
    fn test_empty_inputs_yield_nothing() {
        assert!(generate_layout(&[], desktop(), 1, 4000.0).is_empty());
        assert!(generate_layout(&items(3), Viewport::new(0.0, 800.0), 1, 4000.0).is_empty());
        assert!(generate_layout(&items(3), Viewport::new(1200.0, 0.0), 1, 4000.0).is_empty());
    }

    #[test]
    fn test_narrow_viewport_pins_to_margin() {
        let placed = generate_layout(&items(4), Viewport::new(150.0, 120.0), 3, 500.0);
        for p in placed {
            assert_eq!(p.x, EDGE_MARGIN);
            assert!(p.y >= 0.0 && p.y < 500.0);
        }
    }

    #[test]
    fn test_tiled_copy_is_shifted_by_span() {
        let span = 4000.0;
        let placed = generate_layout(&items(6), desktop(), 1337, span);
        let tiled = tile_layout(&placed, span);

        assert_eq!(tiled.len(), placed.len() * 2);
        let (head, tail) = tiled.split_at(placed.len());
        assert_eq!(head, placed.as_slice());
        for (orig, copy) in placed.iter().zip(tail) {
            assert_eq!(copy.y, orig.y + span);
            assert_eq!(copy.x, orig.x);
            assert_eq!(copy.width, orig.width);
            assert_eq!(copy.height, orig.height);
            assert_eq!(copy.lane, orig.lane);
            assert_eq!(copy.item, orig.item);
            assert_ne!(copy.id, orig.id);
        }
    }

    #[test]
    fn test_loop_span_uses_larger_canvas() {
        // 600vh of an 800px viewport is 4800px, minus one viewport.
        assert_eq!(loop_span_for(800.0, 600.0, 4.0), 4000.0);
        // A short configured height falls back to four viewports.
        assert_eq!(loop_span_for(800.0, 200.0, 4.0), 2400.0);
        assert_eq!(loop_span_for(0.0, 600.0, 4.0), 1.0);
    }
}
