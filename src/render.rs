//! Canvas 2D scene drawing
//!
//! Draws each frame onto the game canvas: toys as radial-gradient circles
//! and the diver sprite, mirrored horizontally when facing left.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use crate::consts::*;
use crate::sim::{Direction, Diver, RoundState};

pub struct CanvasRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    diver_image: HtmlImageElement,
}

impl CanvasRenderer {
    pub fn new(
        canvas: HtmlCanvasElement,
        diver_image: HtmlImageElement,
    ) -> Result<Self, JsValue> {
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("no 2d context"))?
            .dyn_into()?;
        Ok(Self {
            canvas,
            ctx,
            diver_image,
        })
    }

    /// Redraw the whole scene for the current state
    pub fn render(&self, state: &RoundState) -> Result<(), JsValue> {
        self.ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
        self.draw_toys(state)?;
        self.draw_diver(&state.diver)?;
        Ok(())
    }

    fn draw_toys(&self, state: &RoundState) -> Result<(), JsValue> {
        for toy in &state.toys {
            let (x, y, r) = (toy.pos.x as f64, toy.pos.y as f64, toy.radius as f64);
            let gradient = self
                .ctx
                .create_radial_gradient(x, y, r * 0.5, x, y, r)?;
            gradient.add_color_stop(0.0, "yellow")?;
            gradient.add_color_stop(1.0, "orange")?;
            self.ctx.set_fill_style_canvas_gradient(&gradient);
            self.ctx.begin_path();
            self.ctx.arc(x, y, r, 0.0, std::f64::consts::TAU)?;
            self.ctx.fill();
        }
        Ok(())
    }

    fn draw_diver(&self, diver: &Diver) -> Result<(), JsValue> {
        let (x, y) = (diver.pos.x as f64, diver.pos.y as f64);
        let (w, h) = (DIVER_WIDTH as f64, DIVER_HEIGHT as f64);

        self.ctx.save();
        let result = if diver.facing == Direction::Left {
            // Flip horizontally around the sprite's own box
            self.ctx.translate(x + w, y).and_then(|_| {
                self.ctx.scale(-1.0, 1.0)?;
                self.ctx
                    .draw_image_with_html_image_element_and_dw_and_dh(
                        &self.diver_image,
                        0.0,
                        0.0,
                        w,
                        h,
                    )
            })
        } else {
            self.ctx
                .draw_image_with_html_image_element_and_dw_and_dh(&self.diver_image, x, y, w, h)
        };
        self.ctx.restore();
        result
    }
}
