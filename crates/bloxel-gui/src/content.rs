//! Shared content handles.
//!
//! Loading textures and fonts is the host's business. The library only keeps
//! the opaque handles the renderer understands, plus a keyed store for
//! anything else the host wants to share with its controls.

use std::any::Any;

use bloxel_core::alloc::HashMap;

use crate::error::{GuiError, GuiResult};

/// Opaque texture handle understood by the [`Renderer`](crate::Renderer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(pub u32);

/// Opaque font handle understood by the [`Renderer`](crate::Renderer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FontId(pub u32);

/// UI font selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontSize {
    #[default]
    Small,
    Smaller,
}

/// Handles the host loaded before creating the GUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentHandles {
    /// 1×1 opaque white texture, tinted for flat fills.
    pub dummy_texture: TextureId,
    pub mouse_cursor: TextureId,
    pub ui_font_small: FontId,
    pub ui_font_smaller: FontId,
}

pub struct ContentLibrary {
    handles: ContentHandles,
    custom_assets: HashMap<String, Box<dyn Any>>,
}

impl ContentLibrary {
    pub fn new(handles: ContentHandles) -> Self {
        Self {
            handles,
            custom_assets: HashMap::new(),
        }
    }

    pub fn handles(&self) -> ContentHandles {
        self.handles
    }

    pub fn dummy_texture(&self) -> TextureId {
        self.handles.dummy_texture
    }

    pub fn mouse_cursor(&self) -> TextureId {
        self.handles.mouse_cursor
    }

    pub fn font(&self, size: FontSize) -> FontId {
        match size {
            FontSize::Small => self.handles.ui_font_small,
            FontSize::Smaller => self.handles.ui_font_smaller,
        }
    }

    pub fn store_custom_asset<T: Any>(&mut self, id: impl Into<String>, asset: T) -> GuiResult<()> {
        let id = id.into();
        if self.custom_assets.contains_key(&id) {
            return Err(GuiError::DuplicateAsset(id));
        }
        self.custom_assets.insert(id, Box::new(asset));
        Ok(())
    }

    pub fn custom_asset<T: Any>(&self, id: &str) -> GuiResult<&T> {
        let asset = self
            .custom_assets
            .get(id)
            .ok_or_else(|| GuiError::AssetNotFound(id.to_string()))?;
        asset
            .downcast_ref::<T>()
            .ok_or_else(|| GuiError::AssetTypeMismatch {
                id: id.to_string(),
                expected: std::any::type_name::<T>(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn library() -> ContentLibrary {
        ContentLibrary::new(ContentHandles {
            dummy_texture: TextureId(0),
            mouse_cursor: TextureId(1),
            ui_font_small: FontId(0),
            ui_font_smaller: FontId(1),
        })
    }

    #[test]
    fn test_font_lookup() {
        let content = library();
        assert_eq!(content.font(FontSize::Small), FontId(0));
        assert_eq!(content.font(FontSize::Smaller), FontId(1));
    }

    #[test]
    fn test_custom_assets() {
        let mut content = library();
        content.store_custom_asset("tab_icon", TextureId(7)).unwrap();

        assert_eq!(content.custom_asset::<TextureId>("tab_icon"), Ok(&TextureId(7)));
        assert_eq!(
            content.custom_asset::<TextureId>("missing"),
            Err(GuiError::AssetNotFound("missing".into()))
        );
        assert!(matches!(
            content.custom_asset::<FontId>("tab_icon"),
            Err(GuiError::AssetTypeMismatch { .. })
        ));
        assert_eq!(
            content.store_custom_asset("tab_icon", TextureId(8)),
            Err(GuiError::DuplicateAsset("tab_icon".into()))
        );
    }
}
