// Command bar component - 하단 커맨드 바 컴포넌트
//
// 액션 레지스트리의 단축키 표시

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// 커맨드 항목
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandItem {
    /// 단축키
    pub key: String,
    /// 레이블
    pub label: String,
}

impl CommandItem {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

/// 커맨드 바 컴포넌트
pub struct CommandBar {
    commands: Vec<CommandItem>,
    bg_color: Color,
    key_fg_color: Color,
    label_fg_color: Color,
}

impl Default for CommandBar {
    fn default() -> Self {
        Self {
            commands: Vec::new(),
            bg_color: Color::Rgb(30, 30, 30),
            key_fg_color: Color::Rgb(0, 120, 212),
            label_fg_color: Color::Rgb(212, 212, 212),
        }
    }
}

impl CommandBar {
    pub fn new() -> Self {
        Self::default()
    }

    /// 커맨드 목록 설정
    pub fn commands(mut self, commands: Vec<CommandItem>) -> Self {
        self.commands = commands;
        self
    }
}

impl Widget for CommandBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.bg_color));

        let key_style = Style::default()
            .fg(self.key_fg_color)
            .add_modifier(Modifier::BOLD);
        let label_style = Style::default().fg(self.label_fg_color);

        let mut spans = vec![Span::raw(" ")];
        for (i, cmd) in self.commands.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(cmd.key, key_style));
            spans.push(Span::styled(":", label_style));
            spans.push(Span::styled(cmd.label, label_style));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
