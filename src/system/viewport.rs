// Viewport signal source - 뷰포트 너비 신호
//
// 터미널 열 수를 너비 단위로 환산한다. 터미널이 없는 환경(헤드리스)에서는
// 신호가 없음(None)을 보고한다.

use crossterm::terminal;

/// 열 하나당 기본 너비 단위 (768 단위 = 96열)
pub const DEFAULT_CELL_WIDTH: u32 = 8;

/// 열 수를 너비 단위로 환산
pub fn columns_to_width(columns: u16, cell_width: u32) -> u32 {
    u32::from(columns).saturating_mul(cell_width)
}

/// 뷰포트 너비 신호 공급원
pub trait ViewportSource {
    /// 현재 너비 (단위). 신호가 없으면 `None`
    fn current_width(&self) -> Option<u32>;
}

/// 터미널 크기 기반 신호
#[derive(Debug, Clone, Copy)]
pub struct TerminalViewport {
    cell_width: u32,
}

impl TerminalViewport {
    pub fn new(cell_width: u32) -> Self {
        Self { cell_width }
    }

    pub fn columns_to_width(&self, columns: u16) -> u32 {
        columns_to_width(columns, self.cell_width)
    }
}

impl Default for TerminalViewport {
    fn default() -> Self {
        Self::new(DEFAULT_CELL_WIDTH)
    }
}

impl ViewportSource for TerminalViewport {
    fn current_width(&self) -> Option<u32> {
        terminal::size()
            .ok()
            .map(|(columns, _rows)| self.columns_to_width(columns))
    }
}

/// 고정 너비 신호 (테스트/헤드리스)
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedViewport(pub Option<u32>);

impl ViewportSource for FixedViewport {
    fn current_width(&self) -> Option<u32> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_to_width() {
        let viewport = TerminalViewport::default();
        assert_eq!(viewport.columns_to_width(96), 768);
        assert_eq!(viewport.columns_to_width(80), 640);

        let wide_cells = TerminalViewport::new(10);
        assert_eq!(wide_cells.columns_to_width(120), 1200);
        assert_eq!(columns_to_width(u16::MAX, u32::MAX), u32::MAX);
    }

    #[test]
    fn test_fixed_viewport() {
        assert_eq!(FixedViewport(Some(500)).current_width(), Some(500));
        assert_eq!(FixedViewport(None).current_width(), None);
    }
}
