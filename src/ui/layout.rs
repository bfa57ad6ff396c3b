use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub header_area: Rect,
    pub body_area: Rect,
    pub footer_area: Rect,
}

pub struct WritingLayout {
    pub status_area: Rect,
    pub ideas_area: Rect,
    pub notes_area: Rect,
}

pub fn calculate_app_chunks(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(2),
        ])
        .split(area);

    AppLayout {
        header_area: chunks[0],
        body_area: chunks[1],
        footer_area: chunks[2],
    }
}

/// Status strip on top, brainstorming ideas left, the user's notes right.
pub fn calculate_writing_chunks(area: Rect) -> WritingLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(4)])
        .split(area);

    let columns = two_columns(chunks[1], 45);

    WritingLayout {
        status_area: chunks[0],
        ideas_area: columns[0],
        notes_area: columns[1],
    }
}

pub fn two_columns(area: Rect, left_percent: u16) -> [Rect; 2] {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(left_percent),
            Constraint::Percentage(100 - left_percent.min(100)),
        ])
        .split(area);
    [chunks[0], chunks[1]]
}

pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_layout() {
        let layout = calculate_app_chunks(Rect::new(0, 0, 100, 40));
        assert_eq!(layout.header_area.height, 3);
        assert_eq!(layout.footer_area.height, 2);
        assert_eq!(layout.body_area.height, 35);
        assert_eq!(layout.body_area.y, 3);
    }

    #[test]
    fn test_writing_layout() {
        let layout = calculate_writing_chunks(Rect::new(0, 0, 100, 30));
        assert_eq!(layout.status_area.height, 3);
        assert_eq!(layout.ideas_area.height, 27);
        assert_eq!(layout.ideas_area.width + layout.notes_area.width, 100);
        assert!(layout.notes_area.x > layout.ideas_area.x);
    }

    #[test]
    fn test_centered_rect_inside_area() {
        let area = Rect::new(0, 0, 100, 50);
        let popup = centered_rect(60, 40, area);
        assert_eq!(popup.width, 60);
        assert_eq!(popup.height, 20);
        assert_eq!(popup.x, 20);
        assert_eq!(popup.y, 15);
    }
}
