use bloxel_core::math::IVec2;
use bloxel_core::profiling::{profile_function, profile_scope};
use bloxel_input::Input;

use crate::color::Color;
use crate::config::GuiConfig;
use crate::content::ContentLibrary;
use crate::context::UpdateContext;
use crate::control::{Control, ControlId};
use crate::error::{GuiError, GuiResult};
use crate::event::{ControlEvent, EventQueue};
use crate::render::{Renderer, ShapeRenderer};
use crate::time::FrameTime;
use crate::tree::ControlTree;
use crate::widgets::{Button, Panel, RootControl, TabControl, TabPage, Textbox, tab_control};

/// Composition root of the GUI.
///
/// Owns the control tree, the input state, the renderer and the content
/// library, and drives one update and one draw pass per host frame.
///
/// ```
/// # use bloxel_gui::*;
/// # struct NullRenderer;
/// # impl Renderer for NullRenderer {
/// #     fn draw_texture(&mut self, _: TextureId, _: IRect, _: Color, _: Option<IRect>) {}
/// #     fn draw_sprite(&mut self, _: TextureId, _: IVec2, _: Color) {}
/// #     fn draw_text(&mut self, _: FontId, _: &str, _: Vec2, _: Color, _: Option<IRect>) {}
/// #     fn measure_text(&self, _: FontId, text: &str) -> Vec2 { Vec2::new(text.len() as f32 * 8.0, 12.0) }
/// #     fn line_spacing(&self, _: FontId) -> f32 { 12.0 }
/// # }
/// # let content = ContentLibrary::new(ContentHandles {
/// #     dummy_texture: TextureId(0),
/// #     mouse_cursor: TextureId(1),
/// #     ui_font_small: FontId(0),
/// #     ui_font_smaller: FontId(1),
/// # });
/// let mut gui = GuiManager::new(GuiConfig::default(), content, Box::new(NullRenderer))?;
/// let play = gui.add_control(
///     Control::new(Button::new("Play"))
///         .with_position(ivec2(20, 20))
///         .with_size(ivec2(120, 30)),
/// )?;
///
/// let mut clock = FrameClock::new();
/// gui.update(clock.tick())?;
/// gui.draw()?;
/// for event in gui.pop_events() {
///     if event == ControlEvent::Click(play) {
///         println!("play!");
///     }
/// }
/// # Ok::<(), GuiError>(())
/// ```
pub struct GuiManager {
    tree: ControlTree,
    input: Input,
    events: EventQueue,
    renderer: Box<dyn Renderer>,
    content: ContentLibrary,
    config: GuiConfig,
}

impl GuiManager {
    /// Create a manager with an empty, focused root.
    pub fn new(
        config: GuiConfig,
        content: ContentLibrary,
        renderer: Box<dyn Renderer>,
    ) -> GuiResult<Self> {
        let root = RootControl {
            overlay_unfocused: config.root_overlay_unfocused,
            overlay_focused: config.root_overlay_focused,
        };
        let mut tree = ControlTree::new(root, config.viewport);
        let mut input = Input::new();
        let mut events = EventQueue::new();

        tree.set_focused(tree.root(), true, &mut input.keyboard, &mut events)?;
        events.pop_events();

        tracing::info!(
            "GUI manager created for a {}x{} viewport",
            config.viewport.x,
            config.viewport.y
        );
        Ok(Self {
            tree,
            input,
            events,
            renderer,
            content,
            config,
        })
    }

    pub fn root(&self) -> ControlId {
        self.tree.root()
    }

    pub fn tree(&self) -> &ControlTree {
        &self.tree
    }

    /// Attach a control to the root.
    pub fn add_control(&mut self, control: impl Into<Control>) -> GuiResult<ControlId> {
        let root = self.tree.root();
        self.add_child(root, control)
    }

    /// Attach a control to `parent`, which must be the root or a panel.
    pub fn add_child(
        &mut self,
        parent: ControlId,
        control: impl Into<Control>,
    ) -> GuiResult<ControlId> {
        self.tree.attach(parent, control.into(), &self.content)
    }

    /// Add a page to a tab control. `panel` must be a [`Panel`](crate::Panel).
    pub fn add_tab_page(
        &mut self,
        tab_control: ControlId,
        name: &str,
        panel: impl Into<Control>,
    ) -> GuiResult<TabPage> {
        tab_control::add_page(
            &mut self.tree,
            tab_control,
            name,
            panel.into(),
            &self.content,
            &self.config,
        )
    }

    /// Select a page of a tab control, clamped to the last page.
    pub fn select_tab(&mut self, tab_control: ControlId, index: usize) -> GuiResult<usize> {
        tab_control::select(
            &mut self.tree,
            tab_control,
            index,
            &mut self.input.keyboard,
            &mut self.events,
        )
    }

    /// Remove a control and everything below it.
    pub fn remove_control(&mut self, id: ControlId) -> GuiResult<()> {
        let result = self
            .tree
            .remove(id, &mut self.input.keyboard, &mut self.events);
        if let Err(GuiError::UnknownControl(_)) = result {
            tracing::warn!("Tried to remove unknown control {}", id);
        }
        result
    }

    /// Remove every direct child of the root named `name`.
    pub fn remove_all_controls_named(&mut self, name: &str) -> GuiResult<usize> {
        let root = self.tree.root();
        let removed =
            self.tree
                .remove_all_named(root, name, &mut self.input.keyboard, &mut self.events)?;
        if removed == 0 {
            tracing::warn!("No controls named '{}' to remove", name);
        }
        Ok(removed)
    }

    pub fn control(&self, id: ControlId) -> GuiResult<&Control> {
        self.tree.get(id)
    }

    pub fn control_mut(&mut self, id: ControlId) -> GuiResult<&mut Control> {
        self.tree.get_mut(id)
    }

    pub fn button(&self, id: ControlId) -> GuiResult<&Button> {
        self.tree.button(id)
    }

    pub fn button_mut(&mut self, id: ControlId) -> GuiResult<&mut Button> {
        self.tree.button_mut(id)
    }

    pub fn panel(&self, id: ControlId) -> GuiResult<&Panel> {
        self.tree.panel(id)
    }

    pub fn panel_mut(&mut self, id: ControlId) -> GuiResult<&mut Panel> {
        self.tree.panel_mut(id)
    }

    /// Read-only; pages change through [`add_tab_page`](Self::add_tab_page)
    /// and [`select_tab`](Self::select_tab).
    pub fn tab_control(&self, id: ControlId) -> GuiResult<&TabControl> {
        self.tree.tab_control(id)
    }

    pub fn textbox(&self, id: ControlId) -> GuiResult<&Textbox> {
        self.tree.textbox(id)
    }

    pub fn textbox_mut(&mut self, id: ControlId) -> GuiResult<&mut Textbox> {
        self.tree.textbox_mut(id)
    }

    pub fn is_focused(&self, id: ControlId) -> GuiResult<bool> {
        self.tree.is_focused(id)
    }

    pub fn input(&self) -> &Input {
        &self.input
    }

    /// Feed mouse and keyboard state here between frames.
    pub fn input_mut(&mut self) -> &mut Input {
        &mut self.input
    }

    pub fn content(&self) -> &ContentLibrary {
        &self.content
    }

    pub fn content_mut(&mut self) -> &mut ContentLibrary {
        &mut self.content
    }

    pub fn config(&self) -> &GuiConfig {
        &self.config
    }

    pub fn viewport(&self) -> IVec2 {
        self.config.viewport
    }

    /// Resize the rendering surface. The root follows.
    pub fn set_viewport(&mut self, viewport: IVec2) {
        tracing::debug!("Viewport resized to {}x{}", viewport.x, viewport.y);
        self.config.viewport = viewport;
        self.tree.set_viewport(viewport);
    }

    /// Run one update pass: latch input, route focus, update every control.
    pub fn update(&mut self, time: FrameTime) -> GuiResult<()> {
        profile_function!();
        self.input.poll();

        let Self {
            tree,
            input,
            events,
            renderer,
            content,
            config,
        } = self;
        let mut ctx = UpdateContext {
            mouse: &input.mouse,
            keyboard: &mut input.keyboard,
            events,
            renderer: &**renderer,
            content,
            config,
            time,
        };
        let root = tree.root();
        tree.update_control(root, &mut ctx)
    }

    /// Draw the tree back to front, then the mouse cursor on top.
    pub fn draw(&mut self) -> GuiResult<()> {
        profile_function!();
        let Self {
            tree,
            input,
            renderer,
            content,
            ..
        } = self;
        let mut shapes = ShapeRenderer::new(&mut **renderer, content);
        {
            profile_scope!("controls");
            tree.draw_control(tree.root(), &mut shapes)?;
        }
        shapes.draw_sprite(content.mouse_cursor(), input.mouse.position(), Color::WHITE);
        Ok(())
    }

    /// Take the notifications produced since the last call.
    pub fn pop_events(&mut self) -> Vec<ControlEvent> {
        self.events.pop_events()
    }
}
