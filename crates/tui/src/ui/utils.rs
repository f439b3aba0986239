//! Layout helpers shared by the UI components.

use ratatui::prelude::*;

/// Creates a centered rectangle sized as a percentage of `r`.
///
/// # Examples
///
/// ```rust,ignore
/// let parent = Rect::new(0, 0, 100, 50);
/// let centered = centered_rect(80, 70, parent);
/// // 80% wide and 70% tall, centered in parent
/// ```
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);
    let area = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1]);
    area[1]
}

/// Like [`centered_rect`], but never smaller than `min_width` x `min_height`
/// (unless `r` itself is smaller).
pub fn centered_rect_with_min(percent_x: u16, percent_y: u16, min_width: u16, min_height: u16, r: Rect) -> Rect {
    let proposed = centered_rect(percent_x, percent_y, r);
    let width = proposed.width.max(min_width).min(r.width);
    let height = proposed.height.max(min_height).min(r.height);
    Rect {
        x: r.x + (r.width - width) / 2,
        y: r.y + (r.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_is_inside_parent() {
        let parent = Rect::new(0, 0, 100, 40);
        let centered = centered_rect(80, 70, parent);
        assert_eq!(centered.width, 80);
        assert_eq!(centered.height, 28);
        assert_eq!(parent.intersection(centered), centered);
    }

    #[test]
    fn minimum_size_is_enforced_and_clamped() {
        let parent = Rect::new(0, 0, 60, 20);
        let dialog = centered_rect_with_min(10, 10, 40, 8, parent);
        assert_eq!((dialog.width, dialog.height), (40, 8));
        assert_eq!((dialog.x, dialog.y), (10, 6));

        let tiny = Rect::new(0, 0, 20, 4);
        let clamped = centered_rect_with_min(10, 10, 40, 8, tiny);
        assert_eq!((clamped.width, clamped.height), (20, 4));
    }
}
