//! Canvas 2D presentation boundary
//!
//! Stateless draws of the current frame: clear, bird and pipe image blits,
//! score and high-score text. Image decoding is the browser's job; we only
//! hold element references.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use crate::config::GameConfig;
use crate::sim::{GameState, PipeKind};

const BIRD_SRC: &str = "imgs/flappybird.png";
const TOP_PIPE_SRC: &str = "imgs/toppipe.png";
const BOTTOM_PIPE_SRC: &str = "imgs/bottompipe.png";

/// Holds the 2D context and sprite references for one board canvas
pub struct CanvasRenderer {
    context: CanvasRenderingContext2d,
    bird: HtmlImageElement,
    top_pipe: HtmlImageElement,
    bottom_pipe: HtmlImageElement,
}

impl CanvasRenderer {
    /// Size the canvas to the board and grab its 2D context
    pub fn new(canvas: &HtmlCanvasElement, config: &GameConfig) -> Result<Self, JsValue> {
        canvas.set_width(config.board_width as u32);
        canvas.set_height(config.board_height as u32);

        let context = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        Ok(Self {
            context,
            bird: load_image(BIRD_SRC)?,
            top_pipe: load_image(TOP_PIPE_SRC)?,
            bottom_pipe: load_image(BOTTOM_PIPE_SRC)?,
        })
    }

    /// Draw one frame from the given state snapshot. No game state changes.
    pub fn render(&self, state: &GameState, high_score: f32, config: &GameConfig) {
        let ctx = &self.context;
        ctx.clear_rect(
            0.0,
            0.0,
            config.board_width as f64,
            config.board_height as f64,
        );

        let bird = &state.bird;
        let _ = ctx.draw_image_with_html_image_element_and_dw_and_dh(
            &self.bird,
            bird.pos.x as f64,
            bird.pos.y as f64,
            bird.width as f64,
            bird.height as f64,
        );

        for pipe in &state.pipes {
            let sprite = match pipe.kind {
                PipeKind::Top => &self.top_pipe,
                PipeKind::Bottom => &self.bottom_pipe,
            };
            let _ = ctx.draw_image_with_html_image_element_and_dw_and_dh(
                sprite,
                pipe.pos.x as f64,
                pipe.pos.y as f64,
                pipe.width as f64,
                pipe.height as f64,
            );
        }

        ctx.set_fill_style_str("white");
        ctx.set_font("25px Arial");
        let _ = ctx.fill_text(&format!("Score: {}", state.score), 10.0, 30.0);
        ctx.set_font("20px Arial");
        let _ = ctx.fill_text(&format!("High Score: {high_score}"), 215.0, 30.0);
    }
}

fn load_image(src: &str) -> Result<HtmlImageElement, JsValue> {
    let image = HtmlImageElement::new()?;
    image.set_src(src);
    Ok(image)
}
