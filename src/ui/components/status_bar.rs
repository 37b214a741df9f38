// Status bar component - 상태바 컴포넌트
//
// 왼쪽: 토스트 메시지, 오른쪽: 레이아웃 모드 / 패널 상태 / 데모 표시

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::models::{MessageKind, OutboundMessage};

/// 상태바 컴포넌트
pub struct StatusBar<'a> {
    /// 표시 중인 토스트
    toast: Option<&'a OutboundMessage>,
    /// 레이아웃 모드 표시
    layout_mode: &'a str,
    /// 패널 상태 표시 (expanded/collapsed)
    panel_state: &'a str,
    /// 패널 위치 표시 (left/right)
    position: &'a str,
    demo_mode: bool,
    bg_color: Color,
    fg_color: Color,
}

impl Default for StatusBar<'_> {
    fn default() -> Self {
        Self {
            toast: None,
            layout_mode: "REGULAR",
            panel_state: "expanded",
            position: "left",
            demo_mode: false,
            bg_color: Color::Rgb(30, 30, 30),
            fg_color: Color::Rgb(212, 212, 212),
        }
    }
}

impl<'a> StatusBar<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toast(mut self, toast: Option<&'a OutboundMessage>) -> Self {
        self.toast = toast;
        self
    }

    pub fn layout_mode(mut self, mode: &'a str) -> Self {
        self.layout_mode = mode;
        self
    }

    pub fn panel_state(mut self, state: &'a str) -> Self {
        self.panel_state = state;
        self
    }

    pub fn position(mut self, position: &'a str) -> Self {
        self.position = position;
        self
    }

    pub fn demo_mode(mut self, demo_mode: bool) -> Self {
        self.demo_mode = demo_mode;
        self
    }

    fn right_info(&self) -> String {
        let demo = if self.demo_mode { "DEMO | " } else { "" };
        format!(
            "{}{} | panel:{} ({}) ",
            demo, self.layout_mode, self.panel_state, self.position
        )
    }
}

fn kind_color(kind: MessageKind) -> Color {
    match kind {
        MessageKind::Success => Color::Green,
        MessageKind::Error => Color::Red,
        MessageKind::Warning => Color::Yellow,
        MessageKind::Info | MessageKind::Progress => Color::Cyan,
    }
}

/// 표시 폭 기준으로 자르기 (넘치면 말줄임표)
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let cw = c.width().unwrap_or(0);
        if used + cw + 1 > max_width {
            break;
        }
        out.push(c);
        used += cw;
    }
    out.push('…');
    out
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // 배경 채우기
        buf.set_style(area, Style::default().bg(self.bg_color));

        let right_info = self.right_info();
        let right_len = right_info.width();
        let available = (area.width as usize).saturating_sub(right_len + 1);

        let (left_text, left_style) = match self.toast {
            Some(message) => (
                format!(" {}", truncate_to_width(&message.text, available.saturating_sub(1))),
                Style::default()
                    .fg(kind_color(message.kind))
                    .add_modifier(Modifier::BOLD),
            ),
            None => (String::from(" "), Style::default().fg(self.fg_color)),
        };

        let padding_len = (area.width as usize).saturating_sub(left_text.width() + right_len);
        let spans = vec![
            Span::styled(left_text, left_style),
            Span::raw(" ".repeat(padding_len)),
            Span::styled(right_info, Style::default().fg(Color::Rgb(100, 100, 100))),
        ];

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
