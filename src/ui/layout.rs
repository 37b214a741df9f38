// Layout system - 반응형 레이아웃 시스템
//
// 터미널 크기와 패널 상태에 따른 레이아웃:
// - regular: 사이드 패널(펼침/접힘) + 메인 영역
// - compact: 메인 영역 전체, 사이드 패널은 오버레이로만 표시
// - 최소 크기 미만: 경고 메시지 표시

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::models::Orientation;
use crate::ui::layout_state::PanelState;

/// 최소 터미널 크기 상수
pub const MIN_WIDTH: u16 = 40;
pub const MIN_HEIGHT: u16 = 10;
/// 펼친 사이드 패널 너비
pub const SIDEBAR_EXPANDED_WIDTH: u16 = 26;
/// 접힌 사이드 패널 너비 (아이콘 열)
pub const SIDEBAR_COLLAPSED_WIDTH: u16 = 5;

/// 레이아웃 모드
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// 넓은 뷰포트
    Regular,
    /// 좁은 뷰포트
    Compact,
    /// 경고 모드 (터미널이 너무 작음)
    TooSmall,
}

impl LayoutMode {
    pub fn as_str(self) -> &'static str {
        match self {
            LayoutMode::Regular => "REGULAR",
            LayoutMode::Compact => "COMPACT",
            LayoutMode::TooSmall => "WARN",
        }
    }
}

/// 레이아웃 계산 입력
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutInputs {
    pub is_compact: bool,
    pub panel: PanelState,
    pub position: Orientation,
}

/// 레이아웃 영역
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutAreas {
    /// 사이드 패널 영역 (숨김이면 기본값)
    pub sidebar: Rect,
    /// 메인 영역
    pub main: Rect,
    /// 상태바 영역
    pub status_bar: Rect,
    /// 하단 커맨드 바 영역
    pub command_bar: Rect,
    /// 경고 메시지 영역 (TooSmall 모드에서 사용)
    pub warning: Rect,
    /// 사이드 패널이 메인 영역 위에 겹쳐 그려지는지
    pub sidebar_overlay: bool,
}

/// 레이아웃 매니저
#[derive(Debug)]
pub struct LayoutManager {
    mode: LayoutMode,
    terminal_size: (u16, u16),
    areas: LayoutAreas,
}

impl Default for LayoutManager {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutManager {
    pub fn new() -> Self {
        Self {
            mode: LayoutMode::Regular,
            terminal_size: (80, 24),
            areas: LayoutAreas::default(),
        }
    }

    /// 터미널 크기와 분류에 따라 레이아웃 모드 결정
    fn determine_mode(width: u16, height: u16, is_compact: bool) -> LayoutMode {
        if width < MIN_WIDTH || height < MIN_HEIGHT {
            LayoutMode::TooSmall
        } else if is_compact {
            LayoutMode::Compact
        } else {
            LayoutMode::Regular
        }
    }

    /// 터미널 크기 업데이트 및 레이아웃 재계산
    pub fn update(&mut self, area: Rect, inputs: LayoutInputs) {
        self.terminal_size = (area.width, area.height);
        self.mode = Self::determine_mode(area.width, area.height, inputs.is_compact);
        self.areas = self.calculate_areas(area, inputs);
    }

    fn calculate_areas(&self, area: Rect, inputs: LayoutInputs) -> LayoutAreas {
        if self.mode == LayoutMode::TooSmall {
            return LayoutAreas {
                warning: area,
                ..Default::default()
            };
        }

        // 메인 수직 레이아웃: 본문 | 상태바 | 커맨드바
        let vertical_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // 본문
                Constraint::Length(1), // 상태바
                Constraint::Length(1), // 커맨드바
            ])
            .split(area);
        let body = vertical_chunks[0];

        let (sidebar, main, sidebar_overlay) = match self.mode {
            LayoutMode::Compact => Self::split_compact(body, inputs),
            _ => Self::split_regular(body, inputs),
        };

        LayoutAreas {
            sidebar,
            main,
            status_bar: vertical_chunks[1],
            command_bar: vertical_chunks[2],
            warning: Rect::default(),
            sidebar_overlay,
        }
    }

    /// regular: 패널 너비만큼 본문을 좌우로 분할
    fn split_regular(body: Rect, inputs: LayoutInputs) -> (Rect, Rect, bool) {
        let width = if inputs.panel.expanded {
            SIDEBAR_EXPANDED_WIDTH
        } else {
            SIDEBAR_COLLAPSED_WIDTH
        };
        let constraints = match inputs.position {
            Orientation::Left => [Constraint::Length(width), Constraint::Min(1)],
            Orientation::Right => [Constraint::Min(1), Constraint::Length(width)],
        };
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(body);

        match inputs.position {
            Orientation::Left => (chunks[0], chunks[1], false),
            Orientation::Right => (chunks[1], chunks[0], false),
        }
    }

    /// compact: 메인이 본문 전체, 오버레이가 열려 있으면 한쪽 끝에 겹침
    fn split_compact(body: Rect, inputs: LayoutInputs) -> (Rect, Rect, bool) {
        if !inputs.panel.overlay_open {
            return (Rect::default(), body, false);
        }
        let width = SIDEBAR_EXPANDED_WIDTH.min(body.width);
        let x = match inputs.position {
            Orientation::Left => body.x,
            Orientation::Right => body.x + body.width - width,
        };
        let sidebar = Rect {
            x,
            y: body.y,
            width,
            height: body.height,
        };
        (sidebar, body, true)
    }

    /// 현재 레이아웃 모드 반환
    pub fn mode(&self) -> LayoutMode {
        self.mode
    }

    /// 레이아웃 영역 반환
    pub fn areas(&self) -> &LayoutAreas {
        &self.areas
    }

    /// 터미널 크기 반환
    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }

    /// 터미널이 너무 작은지 확인
    pub fn is_too_small(&self) -> bool {
        matches!(self.mode, LayoutMode::TooSmall)
    }

    /// 사이드 패널이 보이는지
    pub fn sidebar_visible(&self) -> bool {
        self.areas.sidebar.width > 0
    }
}
