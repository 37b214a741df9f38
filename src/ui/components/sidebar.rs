// Sidebar component - 사이드 패널
//
// 펼침: 아이콘 + 이름, 접힘: 아이콘만

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::models::Orientation;

/// 사이드 패널 항목
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidebarItem {
    pub icon: &'static str,
    pub label: &'static str,
}

pub const DEFAULT_ITEMS: &[SidebarItem] = &[
    SidebarItem {
        icon: "◆",
        label: "Dashboard",
    },
    SidebarItem {
        icon: "▤",
        label: "Reports",
    },
    SidebarItem {
        icon: "▦",
        label: "Records",
    },
    SidebarItem {
        icon: "⚙",
        label: "Settings",
    },
];

/// 사이드 패널 컴포넌트
pub struct Sidebar<'a> {
    items: &'a [SidebarItem],
    expanded: bool,
    position: Orientation,
    /// 오버레이로 그릴 때는 아래 내용을 지운다
    overlay: bool,
    selected: usize,
    bg_color: Color,
    fg_color: Color,
    accent_color: Color,
}

impl Default for Sidebar<'_> {
    fn default() -> Self {
        Self {
            items: DEFAULT_ITEMS,
            expanded: true,
            position: Orientation::Left,
            overlay: false,
            selected: 0,
            bg_color: Color::Rgb(37, 37, 38),
            fg_color: Color::Rgb(212, 212, 212),
            accent_color: Color::Rgb(0, 120, 212),
        }
    }
}

impl<'a> Sidebar<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expanded(mut self, expanded: bool) -> Self {
        self.expanded = expanded;
        self
    }

    pub fn position(mut self, position: Orientation) -> Self {
        self.position = position;
        self
    }

    pub fn overlay(mut self, overlay: bool) -> Self {
        self.overlay = overlay;
        self
    }

    fn item_line(&self, index: usize, item: &SidebarItem) -> Line<'a> {
        let style = if index == self.selected {
            Style::default()
                .fg(self.accent_color)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.fg_color)
        };
        if self.expanded {
            Line::from(vec![
                Span::styled(format!(" {} ", item.icon), style),
                Span::styled(item.label, style),
            ])
        } else {
            Line::from(Span::styled(format!(" {}", item.icon), style))
        }
    }
}

impl Widget for Sidebar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        if self.overlay {
            Clear.render(area, buf);
        }
        buf.set_style(area, Style::default().bg(self.bg_color));

        // 메인 영역과 맞닿는 쪽에만 경계선
        let border = match self.position {
            Orientation::Left => Borders::RIGHT,
            Orientation::Right => Borders::LEFT,
        };
        let block = Block::default()
            .borders(border)
            .border_style(Style::default().fg(Color::Rgb(70, 70, 70)));

        let lines: Vec<Line> = self
            .items
            .iter()
            .enumerate()
            .map(|(index, item)| self.item_line(index, item))
            .collect();

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
