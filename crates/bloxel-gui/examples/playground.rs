//! Headless playground.
//!
//! Builds a small menu (two buttons and a tab control with a name field),
//! then replays a scripted session of clicks and typing against it, logging
//! every control event and a tally of the draw calls of the final frame.
//!
//! Run with `RUST_LOG=debug cargo run -p bloxel-gui --example playground` to
//! see focus changes as they happen.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use bloxel_core::logging;
use bloxel_gui::{
    Button, Color, ContentHandles, ContentLibrary, Control, ControlEvent, FontId, FrameTime,
    GuiConfig, GuiManager, GuiResult, IRect, IVec2, MouseButton, Panel, Renderer, TabControl,
    Textbox, TextureId, Vec2, ivec2,
};

#[derive(Debug, Default)]
struct Tally {
    rects: usize,
    sprites: usize,
    texts: Vec<String>,
}

/// Renderer that only counts what it is asked to draw.
struct TallyRenderer {
    tally: Rc<RefCell<Tally>>,
}

impl Renderer for TallyRenderer {
    fn draw_texture(&mut self, _: TextureId, _: IRect, _: Color, _: Option<IRect>) {
        self.tally.borrow_mut().rects += 1;
    }

    fn draw_sprite(&mut self, _: TextureId, _: IVec2, _: Color) {
        self.tally.borrow_mut().sprites += 1;
    }

    fn draw_text(&mut self, _: FontId, text: &str, _: Vec2, _: Color, _: Option<IRect>) {
        self.tally.borrow_mut().texts.push(text.to_string());
    }

    fn measure_text(&self, font: FontId, text: &str) -> Vec2 {
        let glyph = if font == FontId(1) { 6.0 } else { 8.0 };
        Vec2::new(text.chars().count() as f32 * glyph, 12.0)
    }

    fn line_spacing(&self, _: FontId) -> f32 {
        12.0
    }
}

enum Step {
    Click(IVec2),
    Type(&'static str),
    Idle(u32),
}

struct Session {
    gui: GuiManager,
    tally: Rc<RefCell<Tally>>,
    now: Duration,
}

impl Session {
    fn frame(&mut self) -> GuiResult<()> {
        let delta = Duration::from_millis(16);
        self.now += delta;
        self.gui.update(FrameTime::new(self.now, delta))?;
        *self.tally.borrow_mut() = Tally::default();
        self.gui.draw()?;
        for event in self.gui.pop_events() {
            match event {
                ControlEvent::Click(id) => {
                    let name = &self.gui.control(id)?.name;
                    tracing::info!("Clicked {} ({})", id, name);
                }
                ControlEvent::TextSubmitted(id) => {
                    let text = self.gui.tree().textbox(id)?.text();
                    tracing::info!("Submitted '{}'", text);
                }
                other => tracing::debug!("{:?}", other),
            }
        }
        Ok(())
    }

    fn run(&mut self, step: &Step) -> GuiResult<()> {
        match step {
            Step::Click(position) => {
                self.gui.input_mut().mouse.set_position(*position);
                self.gui.input_mut().mouse.set_button(MouseButton::Left, true);
                self.frame()?;
                self.gui.input_mut().mouse.set_button(MouseButton::Left, false);
                self.frame()
            }
            Step::Type(text) => {
                self.gui.input_mut().keyboard.push_str(text);
                self.frame()
            }
            Step::Idle(frames) => {
                for _ in 0..*frames {
                    self.frame()?;
                }
                Ok(())
            }
        }
    }
}

fn build(gui: &mut GuiManager) -> GuiResult<()> {
    gui.add_control(
        Control::new(Button::new("Play").on_click(|_| tracing::info!("Starting world")))
            .with_name("play")
            .with_position(ivec2(20, 20))
            .with_size(ivec2(120, 30)),
    )?;
    gui.add_control(
        Control::new(Button::new("Quit"))
            .with_name("quit")
            .with_position(ivec2(20, 60))
            .with_size(ivec2(120, 30)),
    )?;

    let tabs = gui.add_control(
        Control::new(TabControl::new())
            .with_name("options")
            .with_position(ivec2(200, 20))
            .with_size(ivec2(400, 300)),
    )?;
    let player = gui.add_tab_page(tabs, "Player", Panel::new())?;
    gui.add_tab_page(tabs, "Video", Panel::new())?;
    gui.add_child(
        player.panel,
        Control::new(Textbox::new().on_change(|_, text| tracing::debug!("Name is now '{}'", text)))
            .with_name("player_name")
            .with_position(ivec2(10, 10))
            .with_size(ivec2(150, 20)),
    )?;
    Ok(())
}

fn main() -> GuiResult<()> {
    logging::init();

    let content = ContentLibrary::new(ContentHandles {
        dummy_texture: TextureId(0),
        mouse_cursor: TextureId(1),
        ui_font_small: FontId(0),
        ui_font_smaller: FontId(1),
    });
    let tally = Rc::new(RefCell::new(Tally::default()));
    let renderer = TallyRenderer {
        tally: tally.clone(),
    };
    let mut gui = GuiManager::new(GuiConfig::default(), content, Box::new(renderer))?;
    build(&mut gui)?;

    // Name field client area is (214, 59, 150, 20); the Video header starts at x 253.
    let script = [
        Step::Click(ivec2(60, 30)),
        Step::Click(ivec2(225, 70)),
        Step::Type("Steve"),
        Step::Type("\u{8}\u{8}"),
        Step::Type("ve\r"),
        Step::Idle(40),
        Step::Click(ivec2(270, 30)),
        Step::Click(ivec2(60, 70)),
    ];

    let mut session = Session {
        gui,
        tally,
        now: Duration::ZERO,
    };
    for step in &script {
        session.run(step)?;
    }

    let tally = session.tally.borrow();
    tracing::info!(
        "Last frame: {} rects, {} sprites, text {:?}",
        tally.rects,
        tally.sprites,
        tally.texts
    );
    tracing::info!("Focus path at exit: {:?}", session.gui.tree().focus_path());
    Ok(())
}
