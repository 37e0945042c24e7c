//! Terminal projection of the editor (pure).
//!
//! Chips flow left to right in entry order, wrapping onto new rows; the
//! input control always comes after the last chip. Drawing returns the
//! geometry of everything it placed so the mouse handler can route
//! clicks. The projection is recomputed from the model on every frame and
//! holds no state of its own.

use ratatui::layout::{Position, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::state::ChipEditor;
use crate::view::nodes::REMOVE_GLYPH;
use crate::view::styles::ChipStyles;

/// Columns a chip occupies beyond its value: one pad each side, the
/// remove glyph, and the pad between value and glyph.
const CHIP_DECORATION_WIDTH: u16 = 4;

/// Minimum columns reserved for the input control before it wraps to a
/// fresh row.
const MIN_INPUT_WIDTH: u16 = 12;

/// Geometry of one rendered chip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChipRegion {
    /// The entry value this chip displays.
    pub value: String,
    /// Full chip rectangle, remove glyph included.
    pub area: Rect,
    /// Hit box of the remove glyph.
    pub remove_area: Rect,
}

/// Geometry of the last projection, consumed by click routing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorLayout {
    /// The widget's whole area (the container hit box).
    pub area: Rect,
    /// One region per visible chip, in entry order.
    pub chips: Vec<ChipRegion>,
    /// The input control's rectangle. Zero-sized when there is no room.
    pub input_area: Rect,
}

fn display_width(text: &str) -> u16 {
    text.width().min(u16::MAX as usize) as u16
}

/// Compute chip and input geometry for `area` without drawing anything.
///
/// Chips that do not fit vertically are clipped and get no region, so they
/// cannot be clicked.
pub fn compute_layout(area: Rect, editor: &ChipEditor) -> EditorLayout {
    let mut chips = Vec::new();
    if area.width == 0 || area.height == 0 {
        return EditorLayout {
            area,
            chips,
            input_area: Rect::default(),
        };
    }

    let right = area.x + area.width;
    let bottom = area.y + area.height;
    let mut x = area.x;
    let mut y = area.y;

    for entry in editor.entries() {
        let chip_width = display_width(entry.value())
            .saturating_add(CHIP_DECORATION_WIDTH)
            .min(area.width);
        if x + chip_width > right && x > area.x {
            x = area.x;
            y += 1;
        }
        if y >= bottom {
            break;
        }
        let chip_area = Rect::new(x, y, chip_width, 1);
        // the glyph sits just before the trailing pad cell
        let remove_area = Rect::new((x + chip_width).saturating_sub(2), y, 1, 1);
        chips.push(ChipRegion {
            value: entry.value().to_string(),
            area: chip_area,
            remove_area,
        });
        x += chip_width;
    }

    let remaining = right.saturating_sub(x);
    let (input_x, input_y) = if remaining >= MIN_INPUT_WIDTH.min(area.width) {
        (x, y)
    } else {
        (area.x, y + 1)
    };
    let input_area = if input_y < bottom {
        Rect::new(input_x, input_y, right - input_x, 1)
    } else {
        Rect::default()
    };

    EditorLayout {
        area,
        chips,
        input_area,
    }
}

/// Draw the editor into `area` and return the geometry that was placed.
///
/// The host should hand the returned layout back to the editor via
/// [`ChipEditor::note_layout`] so subsequent clicks route correctly.
pub fn render_editor(
    frame: &mut Frame,
    area: Rect,
    editor: &ChipEditor,
    styles: &ChipStyles,
) -> EditorLayout {
    let layout = compute_layout(area, editor);

    for (chip, entry) in layout.chips.iter().zip(editor.entries()) {
        let chip_style = styles.chip_style(entry.is_valid());
        let line = Line::from(vec![
            Span::styled(format!(" {} ", entry.value()), chip_style),
            Span::styled(REMOVE_GLYPH, styles.remove_style(entry.is_valid())),
            Span::styled(" ", chip_style),
        ]);
        frame.render_widget(Paragraph::new(line), chip.area);
    }

    if layout.input_area.width > 0 {
        let text = editor.input_text();
        let paragraph = if text.is_empty() {
            Paragraph::new(editor.placeholder()).style(styles.placeholder_style())
        } else {
            Paragraph::new(text).style(styles.input_style())
        };
        frame.render_widget(paragraph, layout.input_area);

        if editor.is_focused() {
            let cursor_x = layout
                .input_area
                .x
                .saturating_add(display_width(&text[..editor.input_cursor()]))
                .min(layout.input_area.x + layout.input_area.width.saturating_sub(1));
            frame.set_cursor_position(Position::new(cursor_x, layout.input_area.y));
        }
    }

    layout
}

// ===== Tests =====

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{EditorOptions, Notify};
    use crate::surface::Surface;
    use crate::view::styles::ColorConfig;
    use ratatui::backend::TestBackend;
    use ratatui::style::Modifier;
    use ratatui::Terminal;

    fn editor_with(values: &[&str]) -> ChipEditor {
        let mut editor = ChipEditor::new(EditorOptions::new().surface(Surface::new()))
            .expect("empty surface attaches");
        for value in values {
            editor.add_entry(value, Notify::Silent);
        }
        editor
    }

    // Env-independent styles: the flag short-circuits NO_COLOR.
    fn plain_styles() -> ChipStyles {
        ChipStyles::with_color_config(ColorConfig::from_env_and_args(true))
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn renders_values_with_remove_glyphs() {
        let editor = editor_with(&["a@b.com", "c@d.com"]);
        let mut terminal = Terminal::new(TestBackend::new(60, 4)).unwrap();

        terminal
            .draw(|frame| {
                render_editor(frame, frame.area(), &editor, &plain_styles());
            })
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("a@b.com ×"));
        assert!(text.contains("c@d.com ×"));
    }

    #[test]
    fn renders_placeholder_when_input_empty() {
        let editor = editor_with(&[]);
        let mut terminal = Terminal::new(TestBackend::new(60, 4)).unwrap();

        terminal
            .draw(|frame| {
                render_editor(frame, frame.area(), &editor, &plain_styles());
            })
            .unwrap();

        assert!(buffer_text(&terminal).contains("add more people..."));
    }

    #[test]
    fn invalid_chip_is_visually_marked_without_colors() {
        let editor = editor_with(&["bad"]);
        let mut terminal = Terminal::new(TestBackend::new(30, 2)).unwrap();

        terminal
            .draw(|frame| {
                render_editor(frame, frame.area(), &editor, &plain_styles());
            })
            .unwrap();

        let underlined = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .any(|cell| cell.modifier.contains(Modifier::UNDERLINED));
        assert!(underlined, "invalid chip should be marked even with colors off");
    }

    #[test]
    fn layout_places_chips_in_entry_order_before_input() {
        let editor = editor_with(&["a@b.com", "c@d.com"]);
        let layout = compute_layout(Rect::new(0, 0, 60, 4), &editor);

        assert_eq!(layout.chips.len(), 2);
        assert_eq!(layout.chips[0].value, "a@b.com");
        assert_eq!(layout.chips[1].value, "c@d.com");
        assert!(layout.chips[0].area.x < layout.chips[1].area.x);
        assert!(layout.input_area.x >= layout.chips[1].area.x + layout.chips[1].area.width);
    }

    #[test]
    fn layout_wraps_chips_onto_next_row() {
        let editor = editor_with(&["first@x.com", "second@x.com"]);
        // Too narrow for both chips on one row.
        let layout = compute_layout(Rect::new(0, 0, 20, 4), &editor);

        assert_eq!(layout.chips[0].area.y, 0);
        assert_eq!(layout.chips[1].area.y, 1);
        assert_eq!(layout.chips[1].area.x, 0);
    }

    #[test]
    fn layout_wraps_input_when_row_is_crowded() {
        let editor = editor_with(&["long-address@example.com"]);
        let layout = compute_layout(Rect::new(0, 0, 32, 4), &editor);

        // Fewer than MIN_INPUT_WIDTH columns remain after the chip.
        assert_eq!(layout.input_area.y, 1);
        assert_eq!(layout.input_area.x, 0);
        assert_eq!(layout.input_area.width, 32);
    }

    #[test]
    fn remove_area_sits_inside_its_chip() {
        let editor = editor_with(&["a@b.com"]);
        let layout = compute_layout(Rect::new(3, 2, 60, 2), &editor);

        let chip = &layout.chips[0];
        assert_eq!(chip.remove_area.y, chip.area.y);
        assert!(chip.remove_area.x >= chip.area.x);
        assert!(chip.remove_area.x < chip.area.x + chip.area.width);
    }

    #[test]
    fn zero_sized_area_yields_empty_layout() {
        let editor = editor_with(&["a@b.com"]);
        let layout = compute_layout(Rect::new(0, 0, 0, 0), &editor);
        assert!(layout.chips.is_empty());
        assert_eq!(layout.input_area, Rect::default());
    }

    #[test]
    fn clipped_chips_get_no_region() {
        let editor = editor_with(&["aaaa@x.com", "bbbb@x.com", "cccc@x.com"]);
        // One row only; chips past it are clipped.
        let layout = compute_layout(Rect::new(0, 0, 16, 1), &editor);
        assert!(layout.chips.len() < 3);
    }
}
