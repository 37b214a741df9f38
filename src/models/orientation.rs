// Layout configuration model - 패널 방향과 레이아웃 구성 값

use serde::{Deserialize, Serialize};

/// 사이드 패널이 붙는 방향
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Left,
    Right,
}

impl Orientation {
    /// 반대 방향
    pub fn mirrored(self) -> Self {
        match self {
            Orientation::Left => Orientation::Right,
            Orientation::Right => Orientation::Left,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Orientation::Left => "left",
            Orientation::Right => "right",
        }
    }
}

/// 브로드캐스트되는 레이아웃 구성 (불변 값)
///
/// `effective_position`은 현재 항상 `position`과 같다. 방향 인식 레이아웃
/// (RTL 등)이 소비자 계약을 깨지 않고 따로 바꿀 수 있도록 분리해 둔다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutConfiguration {
    pub position: Orientation,
    pub effective_position: Orientation,
}

impl LayoutConfiguration {
    pub fn new(position: Orientation) -> Self {
        Self {
            position,
            effective_position: position,
        }
    }
}
