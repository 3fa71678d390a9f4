use gpui::*;

use crate::scene::{HighlightRect, Scene};
use crate::theme::Theme;

/// Paints a scene into `bounds`, the whole panel including axis gutters.
pub fn paint_scene(
    scene: &Scene,
    highlights: &[HighlightRect],
    theme: &Theme,
    bounds: Bounds<Pixels>,
    window: &mut Window,
    cx: &mut App,
) {
    let padding = scene.layout.padding;
    let origin = bounds.origin + point(px(padding.left as f32), px(padding.top as f32));

    for cell in &scene.rects {
        let rect = Bounds::new(
            origin + point(px(cell.rect.x), px(cell.rect.y)),
            size(px(cell.rect.width), px(cell.rect.height)),
        );
        let quad = fill(rect, cell.fill);
        match cell.stroke {
            Some(stroke) => window.paint_quad(
                quad.border_widths(px(stroke.width))
                    .border_color(stroke.color),
            ),
            None => window.paint_quad(quad),
        }
    }

    for h in highlights {
        let rect = Bounds::new(
            origin + point(px(h.x as f32), px(h.y as f32)),
            size(px(h.width as f32), px(h.height as f32)),
        );
        window.paint_quad(fill(rect, h.fill));
        window.paint_quad(outline(rect, h.stroke, BorderStyle::Dashed));
    }

    paint_x_axis(scene, theme, origin, window, cx);
    paint_y_axis(scene, theme, bounds.origin, window, cx);
}

fn paint_label(
    text: &str,
    anchor: Point<Pixels>,
    centered: bool,
    theme: &Theme,
    window: &mut Window,
    cx: &mut App,
) {
    let font_size = px(theme.axis_font_size as f32);
    let run = TextRun {
        len: text.len(),
        font: TextStyle::default().font(),
        color: theme.text.into(),
        background_color: None,
        underline: None,
        strikethrough: None,
    };
    let Ok(lines) = window.text_system().shape_text(
        SharedString::from(text.to_string()),
        font_size,
        &[run],
        None,
        None,
    ) else {
        return;
    };
    for line in lines {
        let origin = if centered {
            anchor - point(line.width() / 2.0, px(0.0))
        } else {
            anchor - point(line.width(), font_size / 2.0)
        };
        let _ = line.paint(origin, font_size, TextAlign::Left, None, window, cx);
    }
}

/// Day labels below the cell area, centered on local noon.
fn paint_x_axis(
    scene: &Scene,
    theme: &Theme,
    origin: Point<Pixels>,
    window: &mut Window,
    cx: &mut App,
) {
    let baseline = px(scene.layout.inner_height as f32);
    for tick in &scene.x_ticks {
        let x = px(tick.x as f32);
        let mark = Bounds::new(origin + point(x, baseline), size(px(1.0), px(4.0)));
        window.paint_quad(fill(mark, theme.grid_line));
        paint_label(&tick.label, origin + point(x, baseline + px(4.0)), true, theme, window, cx);
    }
}

/// Hour labels right-aligned in the left gutter.
fn paint_y_axis(
    scene: &Scene,
    theme: &Theme,
    panel_origin: Point<Pixels>,
    window: &mut Window,
    cx: &mut App,
) {
    let padding = scene.layout.padding;
    let gutter_right = px(padding.left as f32 - 4.0);
    for tick in &scene.y_ticks {
        let y = px((padding.top + tick.y) as f32);
        let mark = Bounds::new(panel_origin + point(gutter_right, y), size(px(4.0), px(1.0)));
        window.paint_quad(fill(mark, theme.grid_line));
        if let Some(label) = &tick.label {
            paint_label(label, panel_origin + point(gutter_right - px(2.0), y), false, theme, window, cx);
        }
    }
}
