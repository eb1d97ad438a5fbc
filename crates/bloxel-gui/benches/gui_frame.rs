//! Benchmarks for a full GUI frame: input latch, focus routing, update and draw.

use bloxel_gui::{
    Button, Color, Control, FontId, FrameTime, GuiConfig, GuiManager, IRect, IVec2, Panel,
    Renderer, TabControl, Textbox, TextureId, Vec2, ivec2,
};
use bloxel_test_utils::mock_content;
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

/// Counts calls so the draw pass cannot be optimised away.
#[derive(Default)]
struct CountingRenderer {
    calls: usize,
}

impl Renderer for CountingRenderer {
    fn draw_texture(&mut self, _: TextureId, _: IRect, _: Color, _: Option<IRect>) {
        self.calls += 1;
    }

    fn draw_sprite(&mut self, _: TextureId, _: IVec2, _: Color) {
        self.calls += 1;
    }

    fn draw_text(&mut self, _: FontId, _: &str, _: Vec2, _: Color, _: Option<IRect>) {
        self.calls += 1;
    }

    fn measure_text(&self, _: FontId, text: &str) -> Vec2 {
        Vec2::new(text.chars().count() as f32 * 8.0, 12.0)
    }

    fn line_spacing(&self, _: FontId) -> f32 {
        12.0
    }
}

fn setup(buttons: usize) -> GuiManager {
    let mut gui = GuiManager::new(
        GuiConfig::default(),
        mock_content(),
        Box::new(CountingRenderer::default()),
    )
    .unwrap();

    let panel = gui
        .add_control(
            Control::new(Panel::new())
                .with_position(ivec2(0, 0))
                .with_size(ivec2(780, 400)),
        )
        .unwrap();
    for i in 0..buttons {
        let (x, y) = ((i % 10) as i32 * 75, (i / 10) as i32 * 25);
        gui.add_child(
            panel,
            Control::new(Button::new(format!("Button {}", i)))
                .with_position(ivec2(x, y))
                .with_size(ivec2(70, 20)),
        )
        .unwrap();
    }

    let tabs = gui
        .add_control(
            Control::new(TabControl::new())
                .with_position(ivec2(0, 420))
                .with_size(ivec2(780, 170)),
        )
        .unwrap();
    for page in 0..4 {
        let tab = gui
            .add_tab_page(tabs, &format!("Page {}", page), Panel::new())
            .unwrap();
        gui.add_child(
            tab.panel,
            Control::new(Textbox::new().with_text("The quick brown fox"))
                .with_position(ivec2(10, 10))
                .with_size(ivec2(200, 20)),
        )
        .unwrap();
    }
    gui
}

fn bench_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("gui_frame");

    for buttons in [10, 50, 100] {
        group.throughput(Throughput::Elements(buttons as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(buttons),
            &buttons,
            |b, &buttons| {
                let mut gui = setup(buttons);
                let mut frame = 0u32;
                b.iter(|| {
                    // Alternate press and release over the first button.
                    frame = frame.wrapping_add(1);
                    let input = gui.input_mut();
                    input.mouse.set_position(ivec2(10, 10));
                    input
                        .mouse
                        .set_button(bloxel_gui::MouseButton::Left, frame % 2 == 0);
                    gui.update(FrameTime::default()).unwrap();
                    gui.draw().unwrap();
                    black_box(gui.pop_events())
                });
            },
        );
    }

    group.finish();
}

fn bench_typing(c: &mut Criterion) {
    c.bench_function("textbox_typing", |b| {
        let mut gui = setup(0);
        // Focus the first page's textbox: tab client starts at (1, 421), panel below the headers.
        let input = gui.input_mut();
        input.mouse.set_position(ivec2(20, 462));
        input.mouse.set_button(bloxel_gui::MouseButton::Left, true);
        gui.update(FrameTime::default()).unwrap();
        gui.input_mut()
            .mouse
            .set_button(bloxel_gui::MouseButton::Left, false);
        gui.update(FrameTime::default()).unwrap();

        b.iter(|| {
            gui.input_mut().keyboard.push_str("a\u{8}");
            gui.update(FrameTime::default()).unwrap();
            black_box(gui.pop_events())
        });
    });
}

criterion_group!(benches, bench_frame, bench_typing);
criterion_main!(benches);
