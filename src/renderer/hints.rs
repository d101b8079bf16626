use crate::types::Style;

use super::canvas::Canvas;

/// Print a key hint, bolding any text inside `[...]` brackets and dimming
/// the rest. Returns the column after the last printed character.
pub fn draw_hint(canvas: &mut Canvas, x: i32, y: i32, item: &str, base: Style) -> i32 {
    let dim = Style { dim: true, ..base };
    let bold = Style { bold: true, ..base };
    let mut cursor = x;
    let mut rest = item;
    let mut put = |canvas: &mut Canvas, text: &str, style: Style| {
        canvas.print(cursor, y, text, style);
        cursor += text.chars().count() as i32;
    };

    while !rest.is_empty() {
        let Some(open) = rest.find('[') else {
            put(canvas, rest, dim);
            break;
        };
        if open > 0 {
            put(canvas, &rest[..open], dim);
        }
        rest = &rest[open..];
        match rest.find(']') {
            Some(close) => {
                put(canvas, &rest[..=close], bold);
                rest = &rest[close + 1..];
            }
            None => {
                put(canvas, rest, dim);
                break;
            }
        }
    }
    cursor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brackets_are_bold_and_text_dim() {
        let mut canvas = Canvas::new(12, 1);
        let end = draw_hint(&mut canvas, 0, 0, "[i] edit", Style::default());
        assert_eq!(end, 8);
        assert_eq!(canvas.row_text(0), "[i] edit    ");
        assert!(canvas.get(1, 0).is_some_and(|c| c.style.bold));
        assert!(canvas.get(5, 0).is_some_and(|c| c.style.dim && !c.style.bold));
    }
}
