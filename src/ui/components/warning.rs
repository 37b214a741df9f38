// Resize notice - 작업 공간을 그릴 수 없을 때의 안내 화면
//
// 부족한 방향(열/행)만 표시하고, 패널 상태는 유지된다는 점을 알린다

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::ui::layout::{MIN_HEIGHT, MIN_WIDTH};

/// 최소 크기 대비 부족분 (열, 행)
pub fn shortfall(width: u16, height: u16) -> (u16, u16) {
    (
        MIN_WIDTH.saturating_sub(width),
        MIN_HEIGHT.saturating_sub(height),
    )
}

/// 크기 부족 안내 화면
pub struct WarningScreen {
    size: (u16, u16),
    accent_color: Color,
    dim_color: Color,
}

impl Default for WarningScreen {
    fn default() -> Self {
        Self {
            size: (0, 0),
            accent_color: Color::Rgb(0, 120, 212),
            dim_color: Color::Rgb(110, 110, 110),
        }
    }
}

impl WarningScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_size(mut self, width: u16, height: u16) -> Self {
        self.size = (width, height);
        self
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let (width, height) = self.size;
        let (missing_cols, missing_rows) = shortfall(width, height);
        let dim = Style::default().fg(self.dim_color);

        let mut lines = vec![
            Line::from(Span::styled(
                "paneldeck needs more room",
                Style::default()
                    .fg(self.accent_color)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("window {}×{}, minimum {}×{}", width, height, MIN_WIDTH, MIN_HEIGHT),
                dim,
            )),
        ];
        if missing_cols > 0 {
            lines.push(Line::from(format!("+{} columns", missing_cols)));
        }
        if missing_rows > 0 {
            lines.push(Line::from(format!("+{} rows", missing_rows)));
        }
        lines.push(Line::from(Span::styled("panel state is kept", dim)));
        lines
    }
}

impl Widget for WarningScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = self.lines();
        // 세로 가운데 정렬
        let top = area
            .height
            .saturating_sub(lines.len() as u16)
            / 2;
        let body = Rect {
            y: area.y + top,
            height: area.height - top,
            ..area
        };
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(body, buf);
    }
}
