//! Tabbed container.
//!
//! A [`TabControl`] owns one header [`Button`] and one [`Panel`] per page.
//! Headers are laid out left to right along the top of the client area and
//! always update and draw; only the current page's panel does, unless
//! [`TabControl::update_inactive_pages`] is set.
//!
//! Page parts are stored in the tree with the tab control as their parent but
//! are not ordinary children: the tab control routes focus among them itself
//! instead of going through the container scan.

use bloxel_core::math::{IVec2, ivec2};
use bloxel_input::KeyboardBuffer;

use crate::color::Color;
use crate::config::GuiConfig;
use crate::content::{ContentLibrary, FontSize, TextureId};
use crate::context::UpdateContext;
use crate::control::{Control, ControlId};
use crate::error::{GuiError, GuiResult};
use crate::event::{ControlEvent, EventQueue};
use crate::render::ShapeRenderer;
use crate::tree::ControlTree;
use crate::widgets::button::{self, Button};

/// One page: the header button and the panel it reveals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TabPage {
    pub header: ControlId,
    pub panel: ControlId,
}

#[derive(Debug, Clone)]
pub struct TabControl {
    pages: Vec<TabPage>,
    current_index: usize,
    /// Update every page each frame instead of just the current one.
    /// Header buttons always update.
    pub update_inactive_pages: bool,

    pub background_unfocused: Color,
    pub background_focused: Color,
    pub border_color_unfocused: Color,
    pub border_color_focused: Color,
    pub background_texture_unfocused: Option<TextureId>,
    pub background_texture_focused: Option<TextureId>,
}

impl TabControl {
    pub fn new() -> Self {
        Self {
            pages: Vec::new(),
            current_index: 0,
            update_inactive_pages: false,
            background_unfocused: Color::LIGHT_GRAY,
            background_focused: Color::WHITE,
            border_color_unfocused: Color::LIGHT_GRAY,
            border_color_focused: Color::BLACK,
            background_texture_unfocused: None,
            background_texture_focused: None,
        }
    }

    pub fn update_inactive_pages(mut self, enabled: bool) -> Self {
        self.update_inactive_pages = enabled;
        self
    }

    pub fn pages(&self) -> &[TabPage] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_page(&self) -> Option<TabPage> {
        self.pages.get(self.current_index).copied()
    }

    /// Select a page, clamping to the last one. Stays at 0 with no pages.
    pub fn set_current_index(&mut self, index: usize) {
        self.current_index = index.min(self.pages.len().saturating_sub(1));
    }

    pub(crate) fn on_loaded(&mut self, content: &ContentLibrary) {
        let dummy = content.dummy_texture();
        self.background_texture_unfocused.get_or_insert(dummy);
        self.background_texture_focused.get_or_insert(dummy);
    }
}

impl Default for TabControl {
    fn default() -> Self {
        Self::new()
    }
}

/// Append a page to the tab control `id`.
///
/// The header is generated from `name` and tagged with the page index. The
/// panel is moved below the header row and sized to fill the rest of the
/// client area.
pub(crate) fn add_page(
    tree: &mut ControlTree,
    id: ControlId,
    name: &str,
    panel: Control,
    content: &ContentLibrary,
    config: &GuiConfig,
) -> GuiResult<TabPage> {
    let owner = tree.get(id)?;
    let Some(tabs) = owner.as_tab_control() else {
        return Err(GuiError::NotATabControl(id));
    };
    if panel.as_panel().is_none() {
        return Err(GuiError::NotAPanel {
            found: panel.kind().name(),
        });
    }

    let index = tabs.page_count();
    let client_size = owner.size();
    let header_size = config.tab_header_size;
    let border = panel.border_width();

    let header = Control::new(Button::new(name).font_size(FontSize::Smaller))
        .with_name(name)
        .with_tag(index)
        .with_position(ivec2(index as i32 * config.tab_header_pitch, 0))
        .with_size(header_size);
    let panel = panel.with_position(ivec2(0, header_size.y)).with_size(
        (client_size - ivec2(2 * border, header_size.y + 2 * border)).max(IVec2::ZERO),
    );

    let page = TabPage {
        header: tree.insert_detached(id, header, content),
        panel: tree.insert_detached(id, panel, content),
    };
    tree.tab_control_mut(id)?.pages.push(page);
    tracing::debug!("Added tab page '{}' ({}) to {}", name, index, id);
    Ok(page)
}

/// Make `index` (clamped) the current page. Returns the resulting index.
///
/// The page being hidden loses focus.
pub(crate) fn select(
    tree: &mut ControlTree,
    id: ControlId,
    index: usize,
    keyboard: &mut KeyboardBuffer,
    events: &mut EventQueue,
) -> GuiResult<usize> {
    let tabs = tree.tab_control_mut(id)?;
    let previous = tabs.current_page();
    let previous_index = tabs.current_index();
    tabs.set_current_index(index);
    let current_index = tabs.current_index();

    if current_index != previous_index {
        if let Some(previous) = previous {
            tree.set_focused(previous.panel, false, keyboard, events)?;
        }
        tracing::debug!("Current tab of {} set to {}", id, current_index);
        events.push(ControlEvent::TabChanged {
            tab_control: id,
            index: current_index,
        });
    }
    Ok(current_index)
}

pub(crate) fn update(
    tree: &mut ControlTree,
    id: ControlId,
    ctx: &mut UpdateContext<'_>,
) -> GuiResult<()> {
    let tabs = tree.tab_control(id)?;
    let pages = tabs.pages.clone();
    let update_inactive = tabs.update_inactive_pages;
    let current = tabs.current_page();
    let mouse = ctx.mouse_position();

    if tree.is_focused(id)? {
        if ctx.focus_click() {
            if let Some(page) = current {
                let inside = tree.client_rect(page.panel)?.contains(mouse);
                tree.set_focused(page.panel, inside, ctx.keyboard, ctx.events)?;
            }

            let mut hit = None;
            for page in &pages {
                if tree.outer_rect(page.header)?.contains(mouse) {
                    hit = Some(page.header);
                    break;
                }
            }
            for page in &pages {
                if Some(page.header) != hit {
                    tree.set_focused(page.header, false, ctx.keyboard, ctx.events)?;
                }
            }
            if let Some(header) = hit {
                tree.set_focused(header, true, ctx.keyboard, ctx.events)?;
            }
        }
    } else if let Some(page) = current {
        tree.set_focused(page.panel, false, ctx.keyboard, ctx.events)?;
        tree.set_focused(page.header, false, ctx.keyboard, ctx.events)?;
    }

    for (i, page) in pages.iter().enumerate() {
        if button::update_button(tree, page.header, ctx)? {
            let index = tree.get(page.header)?.tag.unwrap_or(i);
            select(tree, id, index, ctx.keyboard, ctx.events)?;
        }
        if update_inactive || tree.tab_control(id)?.current_index() == i {
            tree.update_control(page.panel, ctx)?;
        }
    }
    Ok(())
}

pub(crate) fn draw(
    tree: &ControlTree,
    id: ControlId,
    tabs: &TabControl,
    shapes: &mut ShapeRenderer<'_>,
) -> GuiResult<()> {
    let client = tree.client_rect(id)?;
    let (texture, background, border) = if tree.is_focused(id)? {
        (
            tabs.background_texture_focused,
            tabs.background_focused,
            tabs.border_color_focused,
        )
    } else {
        (
            tabs.background_texture_unfocused,
            tabs.background_unfocused,
            tabs.border_color_unfocused,
        )
    };

    if let Some(texture) = texture {
        shapes.draw_texture(texture, client, background);
    }
    for page in &tabs.pages {
        tree.draw_control(page.header, shapes)?;
    }
    if let Some(page) = tabs.current_page() {
        tree.draw_control(page.panel, shapes)?;
    }
    shapes.draw_border(border, client, 1);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_clamps_to_last_page() {
        let mut tabs = TabControl::new();
        tabs.set_current_index(5);
        assert_eq!(tabs.current_index(), 0);
        assert!(tabs.current_page().is_none());

        for _ in 0..3 {
            tabs.pages.push(TabPage {
                header: ControlId(bloxel_core::alloc::SlotId::new(0, 0)),
                panel: ControlId(bloxel_core::alloc::SlotId::new(0, 1)),
            });
        }
        tabs.set_current_index(10);
        assert_eq!(tabs.current_index(), 2);
        tabs.set_current_index(1);
        assert_eq!(tabs.current_index(), 1);
    }
}
