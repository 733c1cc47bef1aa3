//! Total score to competency level.

use serde::{Serialize, Serializer};
use std::fmt;

/// Level reached by a quiz total.
///
/// The bands are a literal rubric: the bottom band is open (`<= 1`) and so is
/// the top one (`>= 6`). They are not derived from a formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LevelBand {
    L0L1,
    L2,
    L3,
    L4,
    L5,
    L6,
}

impl LevelBand {
    pub fn from_total(total: u32) -> Self {
        match total {
            0..=1 => LevelBand::L0L1,
            2 => LevelBand::L2,
            3 => LevelBand::L3,
            4 => LevelBand::L4,
            5 => LevelBand::L5,
            _ => LevelBand::L6,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LevelBand::L0L1 => "L0-L1",
            LevelBand::L2 => "L2",
            LevelBand::L3 => "L3",
            LevelBand::L4 => "L4",
            LevelBand::L5 => "L5",
            LevelBand::L6 => "L6",
        }
    }

    /// Short description shown next to the level in the result panel.
    pub fn title(&self) -> &'static str {
        match self {
            LevelBand::L0L1 => "Người tiêu thụ / Vận hành prompt cơ bản",
            LevelBand::L2 => "Vibe Coder - Lập trình cảm tính",
            LevelBand::L3 => "Người xây dựng có hỗ trợ",
            LevelBand::L4 => "Nhà thiết kế quy trình chủ động",
            LevelBand::L5 => "Người vận hành hệ thống",
            LevelBand::L6 => "Kiến trúc sư hệ thống AI",
        }
    }
}

impl fmt::Display for LevelBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for LevelBand {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}
