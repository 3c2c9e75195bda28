use crate::foundation::error::{SceneError, SceneResult};

pub use kurbo::{Point, Vec2};

/// Unit duration (seconds) of an animated action whose runtime was never customized.
pub const DEFAULT_RUNTIME: f64 = 1.0;

/// Identity of a scene object, allocated by the recorder.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct ObjectId(pub u32);

/// Stable identity of a recorded action pair.
///
/// Unlike the sequence index, a `PairId` never changes when pairs are inserted or removed.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct PairId(pub u64);

/// Straight (non-premultiplied) RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// Alpha (255 = opaque).
    pub a: u8,
}

#[allow(missing_docs)]
impl Rgba8 {
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const YELLOW: Self = Self::rgb(255, 214, 10);
    pub const RED: Self = Self::rgb(230, 57, 70);
    pub const GREEN: Self = Self::rgb(42, 157, 143);
    pub const BLUE: Self = Self::rgb(69, 123, 157);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parse `#rrggbb` or `#rrggbbaa` (the leading `#` is optional).
    pub fn from_hex(s: &str) -> SceneResult<Self> {
        let hex = s.trim().trim_start_matches('#');
        if !matches!(hex.len(), 6 | 8) || !hex.is_ascii() {
            return Err(SceneError::validation(format!(
                "color '{s}' must be #rrggbb or #rrggbbaa"
            )));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| SceneError::validation(format!("color '{s}' is not valid hex")))
        };
        let a = if hex.len() == 8 { channel(6)? } else { 255 };
        Ok(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
            a,
        })
    }

    /// Lowercase `#rrggbb`, or `#rrggbbaa` when not opaque.
    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

/// Seconds to whole milliseconds, as shown on the scrub bar.
pub fn secs_to_ms(secs: f64) -> u64 {
    (secs * 1000.0).round().max(0.0) as u64
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
