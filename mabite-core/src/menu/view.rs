//! Menu rendering

use crate::state::{GameMode, MenuState};
use crate::traits::{DisplayError, Presenter, TextSize};

/// Title shown above the menu rows
pub const MENU_TITLE: &str = "[MABITE]";

const FIRST_ROW_Y: u8 = 15;
const ROW_PITCH: u8 = 10;
const TEXT_X: u8 = 10;
const BAR_X: u8 = 5;
const BAR_WIDTH: u8 = 118;
const BAR_HEIGHT: u8 = 10;

/// Draw the full menu with the selected row highlighted
pub fn render_menu(display: &mut dyn Presenter, menu: &MenuState) -> Result<(), DisplayError> {
    display.clear()?;
    display.draw_text(15, 2, TextSize::Small, MENU_TITLE)?;

    for (i, mode) in GameMode::ALL.into_iter().enumerate() {
        let y = FIRST_ROW_Y + i as u8 * ROW_PITCH;
        if mode.option() == menu.selected_option {
            display.draw_highlighted_row(BAR_X, y - 1, BAR_WIDTH, BAR_HEIGHT, mode.label())?;
        } else {
            display.draw_text(TEXT_X, y, TextSize::Small, mode.label())?;
        }
    }
    display.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingDisplay;

    #[test]
    fn test_menu_layout() {
        let mut display = RecordingDisplay::default();
        let menu = MenuState {
            selected_option: 3,
            in_menu: true,
        };
        render_menu(&mut display, &menu).unwrap();

        assert!(display.showing(MENU_TITLE));
        assert_eq!(display.highlighted(), Some("3. REFLEX CHALLENGE"));

        let rows: Vec<_> = display.frame.iter().skip(1).map(|t| (t.x, t.y)).collect();
        assert_eq!(rows, [(10, 15), (10, 25), (10, 35), (10, 45), (10, 55)]);
    }

    #[test]
    fn test_exactly_one_highlight() {
        for option in 1..=5 {
            let mut display = RecordingDisplay::default();
            let menu = MenuState {
                selected_option: option,
                in_menu: true,
            };
            render_menu(&mut display, &menu).unwrap();
            assert_eq!(display.frame.iter().filter(|t| t.highlighted).count(), 1);
        }
    }
}
