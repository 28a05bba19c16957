//! Button widget - clickable rect with a skin and a label

use crate::action::ResolvedAction;
use crate::foundation::math::{Color, Rect, Vec2};
use crate::graphics::Graphic;
use crate::ui::input::{InputState, MouseButton};
use crate::ui::rendering::DrawList;

use super::core::Align;

/// Default label point size
pub const DEFAULT_FONT_SIZE: u32 = 36;

/// UI button component
///
/// A click completes when the left button is pressed over the button and
/// then released while still over it; `clicked_and_released` is then set
/// for exactly one update.
#[derive(Debug, Clone)]
pub struct Button {
    /// Skin or image drawn behind the label
    pub graphic: Option<Graphic>,

    /// Label text
    pub text: String,

    /// Where the label sits inside the rect
    pub align: Align,

    /// Drawn area
    pub rect: Rect,

    /// Hit-test area; the rect is used while this is empty
    pub hit_rect: Rect,

    /// Label point size
    pub font_size: u32,

    /// Left button went down over the button and is still held
    pub clicked: bool,

    /// Click completed during the last update
    pub clicked_and_released: bool,

    /// Action run when a click completes
    pub action: ResolvedAction,
}

impl Default for Button {
    fn default() -> Self {
        Self {
            graphic: None,
            text: String::new(),
            align: Align::Center,
            rect: Rect::default(),
            hit_rect: Rect::default(),
            font_size: DEFAULT_FONT_SIZE,
            clicked: false,
            clicked_and_released: false,
            action: ResolvedAction::None,
        }
    }
}

impl Button {
    /// Create an empty button
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the skin
    pub fn set_graphic(&mut self, graphic: Graphic) {
        self.graphic = Some(graphic);
    }

    /// Replace the label
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Label alignment
    pub fn set_align(&mut self, align: Align) {
        self.align = align;
    }

    /// Move and resize; a non-empty hit rect stays centred on the new rect
    pub fn set_rect(&mut self, rect: (i32, i32, i32, i32)) {
        self.rect = Rect::from_tuple(rect);
        if !self.hit_rect.is_empty() {
            self.hit_rect = self.hit_rect.with_center(self.rect.center());
        }
    }

    /// Set the hit area size; only width and height are kept, it is centred on the rect
    pub fn set_hit_rect(&mut self, hit_rect: (i32, i32, i32, i32)) {
        self.hit_rect = Rect::from_tuple(hit_rect).with_center(self.rect.center());
    }

    /// Set the action run on click
    pub fn set_action(&mut self, action: ResolvedAction) {
        self.action = action;
    }

    /// Area used for hover tests
    pub const fn hit_area(&self) -> Rect {
        if self.hit_rect.is_empty() {
            self.rect
        } else {
            self.hit_rect
        }
    }

    /// Whether `position` lies in the hit area
    pub fn is_hovered(&self, position: Vec2) -> bool {
        self.hit_area().collide_point(position)
    }

    /// Advance an animated graphic by `dt` seconds
    pub fn animate(&mut self, dt: f32) {
        if let Some(graphic) = &mut self.graphic {
            graphic.update(dt);
        }
    }

    /// Track click state from this frame's input
    pub fn update(&mut self, input: &InputState) {
        let hovered = self.is_hovered(input.mouse_position);

        if hovered {
            if input.is_pressed(MouseButton::Left) {
                self.clicked = true;
                self.clicked_and_released = false;
            } else {
                if self.clicked {
                    self.clicked_and_released = true;
                } else if self.clicked_and_released {
                    self.clicked_and_released = false;
                }
                self.clicked = false;
            }
        } else {
            self.clicked = false;
            self.clicked_and_released = false;
        }

        if let Some(skin) = self.graphic.as_mut().and_then(Graphic::as_button_skin_mut) {
            skin.set_highlighted(hovered);
        }
    }

    /// Anchor point of the label for the current alignment
    pub fn label_anchor(&self) -> Vec2 {
        let (nx, ny) = self.align.to_normalized();
        Vec2::new(
            self.rect.x as f32 + self.rect.width as f32 * nx,
            self.rect.y as f32 + self.rect.height as f32 * ny,
        )
    }

    /// Emit the skin, then the label in black
    pub fn draw(&self, draw_list: &mut DrawList) {
        if let Some(graphic) = &self.graphic {
            graphic.draw(draw_list, Some(self.rect));
        }
        if !self.text.is_empty() {
            draw_list.push_text(
                self.text.clone(),
                None,
                self.font_size,
                Color::BLACK.to_vec4(),
                self.label_anchor(),
                self.align,
            );
        }
    }
}
