use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::blend::{Add, BlendRule, DstIn, DstOut, Multiply, Src, SrcOver};
use crate::foundation::error::SpriteCompError;

/// Runtime selector for a [`BlendRule`].
///
/// Dispatch happens once per draw call; the span loops themselves are monomorphized per rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlendMode {
    /// Source over destination.
    #[default]
    #[serde(alias = "normal")]
    SrcOver,
    /// Source replaces destination.
    Src,
    /// Destination kept where the source is covered.
    DstIn,
    /// Destination erased where the source is covered.
    DstOut,
    /// Saturating addition.
    Add,
    /// Multiply, composited source-over.
    Multiply,
}

impl BlendMode {
    /// Every mode, in declaration order.
    pub const ALL: [BlendMode; 6] = [
        BlendMode::SrcOver,
        BlendMode::Src,
        BlendMode::DstIn,
        BlendMode::DstOut,
        BlendMode::Add,
        BlendMode::Multiply,
    ];

    /// The snake_case name, matching the serialized form.
    pub fn name(self) -> &'static str {
        match self {
            BlendMode::SrcOver => SrcOver::NAME,
            BlendMode::Src => Src::NAME,
            BlendMode::DstIn => DstIn::NAME,
            BlendMode::DstOut => DstOut::NAME,
            BlendMode::Add => Add::NAME,
            BlendMode::Multiply => Multiply::NAME,
        }
    }

    /// Whether the selected rule can change the destination under a zero-alpha source pixel.
    pub fn blends_transparent(self) -> bool {
        match self {
            BlendMode::SrcOver => SrcOver::BLEND_TRANSPARENT,
            BlendMode::Src => Src::BLEND_TRANSPARENT,
            BlendMode::DstIn => DstIn::BLEND_TRANSPARENT,
            BlendMode::DstOut => DstOut::BLEND_TRANSPARENT,
            BlendMode::Add => Add::BLEND_TRANSPARENT,
            BlendMode::Multiply => Multiply::BLEND_TRANSPARENT,
        }
    }
}

impl fmt::Display for BlendMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BlendMode {
    type Err = SpriteCompError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("normal") {
            return Ok(BlendMode::SrcOver);
        }
        BlendMode::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| SpriteCompError::validation(format!("unknown blend mode '{s}'")))
    }
}
