use serde::{Deserialize, Serialize};

/// A displayable image and its caption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub source_ref: String,
    pub label: String,
}

impl Item {
    pub fn new(source_ref: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            source_ref: source_ref.into(),
            label: label.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Zero, negative and non-finite dimensions produce no layout.
    pub fn is_usable(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// One of the four fixed placement regions of the image field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lane {
    LeftMid,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Lane {
    pub const ALL: [Lane; 4] = [
        Lane::LeftMid,
        Lane::TopRight,
        Lane::BottomLeft,
        Lane::BottomRight,
    ];

    pub fn for_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    pub fn index(self) -> u8 {
        match self {
            Lane::LeftMid => 0,
            Lane::TopRight => 1,
            Lane::BottomLeft => 2,
            Lane::BottomRight => 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedItem {
    pub id: String,
    #[serde(flatten)]
    pub item: Item,
    /// Viewport pixels.
    pub x: f64,
    /// Loop-span pixels.
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub lane: Lane,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lane_cycles_by_index() {
        assert_eq!(Lane::for_index(0), Lane::LeftMid);
        assert_eq!(Lane::for_index(3), Lane::BottomRight);
        assert_eq!(Lane::for_index(4), Lane::LeftMid);
        assert_eq!(Lane::for_index(9).index(), 1);
    }

    #[test]
    fn test_viewport_usability() {
        assert!(Viewport::new(1200.0, 800.0).is_usable());
        assert!(!Viewport::new(0.0, 800.0).is_usable());
        assert!(!Viewport::new(1200.0, f64::NAN).is_usable());
        assert!(!Viewport::new(-5.0, 800.0).is_usable());
    }

    #[test]
    fn test_placed_item_serializes_flat() {
        let placed = PlacedItem {
            id: "0-a.jpg".to_string(),
            item: Item::new("a.jpg", "A"),
            x: 16.0,
            y: 0.0,
            width: 180.0,
            height: 130.0,
            lane: Lane::TopRight,
        };
        let json = serde_json::to_value(&placed).unwrap();
        assert_eq!(json["source_ref"], "a.jpg");
        assert_eq!(json["label"], "A");
        assert_eq!(json["lane"], "top_right");
    }
}
