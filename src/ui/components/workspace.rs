// Workspace component - 메인 영역
//
// 현재 뷰포트 분류와 패널 상태, 최근 전달된 메시지를 보여준다.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::models::OutboundMessage;

/// 메인 영역 컴포넌트
pub struct Workspace<'a> {
    width: Option<u32>,
    breakpoint: u32,
    is_compact: bool,
    panel_state: &'a str,
    position: &'a str,
    demo_mode: bool,
    recent: &'a [OutboundMessage],
    fg_color: Color,
    dim_color: Color,
}

impl Default for Workspace<'_> {
    fn default() -> Self {
        Self {
            width: None,
            breakpoint: 0,
            is_compact: false,
            panel_state: "expanded",
            position: "left",
            demo_mode: false,
            recent: &[],
            fg_color: Color::Rgb(212, 212, 212),
            dim_color: Color::Rgb(110, 110, 110),
        }
    }
}

impl<'a> Workspace<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn viewport(mut self, width: Option<u32>, breakpoint: u32, is_compact: bool) -> Self {
        self.width = width;
        self.breakpoint = breakpoint;
        self.is_compact = is_compact;
        self
    }

    pub fn panel(mut self, state: &'a str, position: &'a str) -> Self {
        self.panel_state = state;
        self.position = position;
        self
    }

    pub fn demo_mode(mut self, demo_mode: bool) -> Self {
        self.demo_mode = demo_mode;
        self
    }

    pub fn recent(mut self, recent: &'a [OutboundMessage]) -> Self {
        self.recent = recent;
        self
    }

    fn field(&self, name: &'static str, value: String) -> Line<'a> {
        Line::from(vec![
            Span::styled(format!("{name:<12}"), Style::default().fg(self.dim_color)),
            Span::styled(value, Style::default().fg(self.fg_color)),
        ])
    }
}

impl Widget for Workspace<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = match self.width {
            Some(width) => format!("{width} (breakpoint {})", self.breakpoint),
            None => "no signal".to_string(),
        };
        let class = if self.is_compact { "compact" } else { "regular" };

        let mut lines = vec![
            self.field("viewport", width),
            self.field("class", class.to_string()),
            self.field("panel", format!("{} ({})", self.panel_state, self.position)),
            self.field("demo mode", if self.demo_mode { "on" } else { "off" }.to_string()),
            Line::from(""),
            Line::from(Span::styled(
                "Recent messages",
                Style::default().add_modifier(Modifier::BOLD),
            )),
        ];
        // 최신 메시지가 위로
        lines.extend(self.recent.iter().rev().map(|message| {
            Line::from(vec![
                Span::styled(
                    format!("{:<9}", message.kind.as_str()),
                    Style::default().fg(self.dim_color),
                ),
                Span::raw(message.text.clone()),
            ])
        }));

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" paneldeck ")
            .border_style(Style::default().fg(Color::Rgb(70, 70, 70)));

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
