//! Layout and drawing of pooled objects.
//!
//! Labels size themselves from their text, buttons from their label plus
//! padding. An object sits at its parent's top-left corner unless it was
//! centred.

use embedded_graphics::{
    mono_font::{ascii::FONT_9X15, MonoTextStyle},
    pixelcolor::{Rgb565, Rgb888},
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle, RoundedRectangle},
    text::{Alignment, Baseline, Text, TextStyleBuilder},
};
use heapless::Vec;

use super::object::{ObjKind, Object, ObjectPool};
use super::ObjHandle;

/// Glyph cell of the label font.
const CHAR_WIDTH: u32 = 9;
const CHAR_HEIGHT: u32 = 15;

/// Button padding around its label.
const BUTTON_PAD_H: u32 = 16;
const BUTTON_PAD_V: u32 = 8;
const BUTTON_RADIUS: u32 = 4;

/// Deepest parent chain laid out (screen → button → label).
const MAX_DEPTH: usize = 8;

/// Screen background when none is set.
pub const DEFAULT_BACKGROUND: Rgb888 = Rgb888::WHITE;
/// Button fill when none is set.
pub const DEFAULT_BUTTON: Rgb888 = Rgb888::new(0x21, 0x96, 0xF3);
/// Text colour when no ancestor sets one.
pub const DEFAULT_TEXT: Rgb888 = Rgb888::BLACK;

fn to_i32(v: u32) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX)
}

fn label_size(text: &str) -> Size {
    let chars = u32::try_from(text.chars().count()).unwrap_or(u32::MAX);
    Size::new(chars.saturating_mul(CHAR_WIDTH), CHAR_HEIGHT)
}

/// Natural size of `handle` inside a screen of `screen_size`.
fn object_size(pool: &ObjectPool, handle: ObjHandle, object: &Object, screen_size: Size) -> Size {
    match object.kind {
        ObjKind::Screen => screen_size,
        ObjKind::Label => label_size(object.text),
        ObjKind::Button => {
            let content = pool
                .children(handle)
                .filter(|(_, o)| o.kind == ObjKind::Label)
                .map(|(_, o)| label_size(o.text))
                .fold(Size::zero(), |acc, s| acc.component_max(s));
            Size::new(
                content
                    .width
                    .saturating_add(BUTTON_PAD_H.saturating_mul(2)),
                content
                    .height
                    .saturating_add(BUTTON_PAD_V.saturating_mul(2)),
            )
        }
    }
}

/// Place a child of `size` inside `parent`.
pub fn place(parent: Rectangle, size: Size, centered: bool) -> Rectangle {
    if !centered {
        return Rectangle::new(parent.top_left, size);
    }
    let dx = to_i32(parent.size.width).saturating_sub(to_i32(size.width));
    let dy = to_i32(parent.size.height).saturating_sub(to_i32(size.height));
    Rectangle::new(
        Point::new(
            parent.top_left.x.saturating_add(dx.saturating_div(2)),
            parent.top_left.y.saturating_add(dy.saturating_div(2)),
        ),
        size,
    )
}

/// On-screen area of `handle` when its screen fills `bounds`.
pub fn object_area(pool: &ObjectPool, handle: ObjHandle, bounds: Rectangle) -> Option<Rectangle> {
    let mut chain: Vec<ObjHandle, MAX_DEPTH> = Vec::new();
    let mut current = Some(handle);
    while let Some(h) = current {
        chain.push(h).ok()?;
        current = pool.get(h).ok()?.parent;
    }

    let mut area = bounds;
    for &h in chain.iter().rev() {
        let object = pool.get(h).ok()?;
        if object.kind == ObjKind::Screen {
            area = bounds;
            continue;
        }
        let size = object_size(pool, h, object, bounds.size);
        area = place(area, size, object.centered);
    }
    Some(area)
}

/// Text colour of `handle`, inherited from the nearest ancestor that sets one.
pub fn text_color(pool: &ObjectPool, handle: ObjHandle) -> Rgb888 {
    let mut current = Some(handle);
    for _ in 0..MAX_DEPTH {
        let Some(object) = current.and_then(|h| pool.get(h).ok()) else {
            break;
        };
        if let Some(color) = object.text_color {
            return color;
        }
        current = object.parent;
    }
    DEFAULT_TEXT
}

/// Topmost button under `point` on `screen`.
pub fn button_at(
    pool: &ObjectPool,
    screen: ObjHandle,
    bounds: Rectangle,
    point: Point,
) -> Option<ObjHandle> {
    pool.iter()
        .filter(|(h, o)| o.kind == ObjKind::Button && pool.root_of(*h) == Some(screen))
        .filter(|(h, _)| object_area(pool, *h, bounds).is_some_and(|a| a.contains(point)))
        .map(|(h, _)| h)
        .last()
}

/// Draw `screen` and everything on it.
pub fn draw_screen<D>(
    pool: &ObjectPool,
    screen: ObjHandle,
    bounds: Rectangle,
    display: &mut D,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let background = pool
        .get(screen)
        .ok()
        .and_then(|o| o.background)
        .unwrap_or(DEFAULT_BACKGROUND);
    display.fill_solid(&bounds, Rgb565::from(background))?;
    draw_children(pool, screen, bounds, display, 1)
}

fn draw_children<D>(
    pool: &ObjectPool,
    parent: ObjHandle,
    bounds: Rectangle,
    display: &mut D,
    depth: usize,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    if depth >= MAX_DEPTH {
        return Ok(());
    }
    for (handle, object) in pool.children(parent) {
        let Some(area) = object_area(pool, handle, bounds) else {
            continue;
        };
        match object.kind {
            ObjKind::Button => {
                let fill = Rgb565::from(object.background.unwrap_or(DEFAULT_BUTTON));
                RoundedRectangle::with_equal_corners(area, Size::new(BUTTON_RADIUS, BUTTON_RADIUS))
                    .into_styled(PrimitiveStyle::with_fill(fill))
                    .draw(display)?;
            }
            ObjKind::Label => {
                if let Some(fill) = object.background {
                    display.fill_solid(&area, Rgb565::from(fill))?;
                }
                let style = MonoTextStyle::new(&FONT_9X15, Rgb565::from(text_color(pool, handle)));
                let layout = TextStyleBuilder::new()
                    .alignment(Alignment::Center)
                    .baseline(Baseline::Middle)
                    .build();
                Text::with_text_style(object.text, area.center(), style, layout).draw(display)?;
            }
            ObjKind::Screen => {}
        }
        draw_children(pool, handle, bounds, display, depth.saturating_add(1))?;
    }
    Ok(())
}
