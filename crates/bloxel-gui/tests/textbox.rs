//! Textbox editing driven through the keyboard buffer.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use bloxel_gui::{Control, ControlEvent, ControlId, IRect, Textbox, ivec2, vec2};
use bloxel_input::EditKeys;
use bloxel_test_utils::{DrawCall, GuiHarness};

/// Textbox with client rect `(12, 12, width, 20)`.
fn textbox(harness: &mut GuiHarness, textbox: Textbox, width: i32) -> ControlId {
    harness
        .gui
        .add_control(
            Control::new(textbox)
                .with_position(ivec2(10, 10))
                .with_size(ivec2(width, 20)),
        )
        .unwrap()
}

fn text(harness: &GuiHarness, id: ControlId) -> String {
    harness.gui.tree().textbox(id).unwrap().text().to_string()
}

#[test]
fn test_typing_editing_and_submitting() {
    let mut harness = GuiHarness::new();
    let id = textbox(&mut harness, Textbox::new(), 100);

    let events = harness.click_at(ivec2(20, 20));
    assert_eq!(events, vec![ControlEvent::FocusGained(id)]);
    assert!(harness.gui.input().keyboard.is_enabled());

    assert_eq!(harness.type_text("hi"), vec![ControlEvent::TextChanged(id)]);
    assert_eq!(text(&harness, id), "hi");

    harness.type_text("\u{8}");
    assert_eq!(text(&harness, id), "h");

    harness.press_keys(EditKeys::LEFT);
    harness.type_text("a");
    assert_eq!(text(&harness, id), "ah");
    assert_eq!(harness.gui.tree().textbox(id).unwrap().caret(), 1);

    assert_eq!(harness.type_text("\r"), vec![ControlEvent::TextSubmitted(id)]);
    assert_eq!(harness.type_text("\u{1b}"), vec![ControlEvent::EditCancelled(id)]);
}

#[test]
fn test_typing_without_focus_is_ignored() {
    let mut harness = GuiHarness::new();
    let id = textbox(&mut harness, Textbox::new(), 100);

    assert!(harness.type_text("nope").is_empty());
    assert_eq!(text(&harness, id), "");
}

#[test]
fn test_backspace_on_empty_text_reports_no_change() {
    let mut harness = GuiHarness::new();
    let id = textbox(&mut harness, Textbox::new(), 100);
    harness.click_at(ivec2(20, 20));

    assert!(harness.type_text("\u{8}").is_empty());
    assert_eq!(text(&harness, id), "");
}

#[test]
fn test_click_places_caret() {
    let mut harness = GuiHarness::new();
    let id = textbox(&mut harness, Textbox::new().with_text("abcd"), 100);

    // Text starts at client x 12 + padding 2; 12px in lands after 'a'.
    harness.click_at(ivec2(26, 20));
    assert_eq!(harness.gui.tree().textbox(id).unwrap().caret(), 1);

    harness.click_at(ivec2(100, 20));
    assert_eq!(harness.gui.tree().textbox(id).unwrap().caret(), 4);
}

#[test]
fn test_long_text_scrolls_and_is_clipped() {
    let mut harness = GuiHarness::new();
    let id = textbox(&mut harness, Textbox::new(), 40);
    harness.click_at(ivec2(20, 20));
    harness.type_text("0123456789");

    let state = harness.gui.tree().textbox(id).unwrap();
    assert_eq!(state.scroll_offset(), 47.0);
    assert_eq!(state.caret_position(), vec2(12.0 + 84.0 - 47.0, 16.0));

    let calls = harness.draw();
    let drawn = calls.iter().find_map(|call| match call {
        DrawCall::Text {
            text,
            position,
            clip,
            ..
        } if text == "0123456789" => Some((*position, *clip)),
        _ => None,
    });
    assert_eq!(
        drawn,
        Some((vec2(12.0 + 2.0 - 47.0, 16.0), Some(IRect::new(12, 12, 40, 20))))
    );
}

#[test]
fn test_clip_is_clamped_to_viewport() {
    let mut harness = GuiHarness::new();
    let id = harness
        .gui
        .add_control(
            Control::new(Textbox::new().with_text("edge"))
                .with_position(ivec2(760, 10))
                .with_size(ivec2(100, 20)),
        )
        .unwrap();
    harness.frame();

    let clip = harness.gui.tree().textbox(id).unwrap().clip_rect();
    assert_eq!(clip, IRect::new(762, 12, 38, 20));
}

#[test]
fn test_caret_blinks_and_hides_on_blur() {
    let mut harness = GuiHarness::new();
    let id = textbox(&mut harness, Textbox::new(), 100);
    harness.click_at(ivec2(20, 20));
    harness.type_text("x");
    assert!(harness.gui.tree().textbox(id).unwrap().is_caret_visible());

    harness.advance(Duration::from_millis(600));
    harness.frame();
    assert!(!harness.gui.tree().textbox(id).unwrap().is_caret_visible());

    harness.advance(Duration::from_millis(600));
    harness.frame();
    assert!(harness.gui.tree().textbox(id).unwrap().is_caret_visible());

    harness.click_at(ivec2(500, 500));
    assert!(!harness.gui.tree().textbox(id).unwrap().is_caret_visible());
    assert!(!harness.gui.input().keyboard.is_enabled());
}

#[test]
fn test_on_change_sees_new_text() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut harness = GuiHarness::new();
    let callback = {
        let seen = seen.clone();
        move |_: ControlId, text: &str| seen.borrow_mut().push(text.to_string())
    };
    textbox(&mut harness, Textbox::new().on_change(callback), 100);

    harness.click_at(ivec2(20, 20));
    harness.type_text("ab");
    harness.type_text("\u{8}");
    harness.type_text("\r");

    assert_eq!(*seen.borrow(), vec!["ab".to_string(), "a".to_string()]);
}
