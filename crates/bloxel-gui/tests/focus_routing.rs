//! Focus routing through the manager, one simulated frame at a time.

use bloxel_gui::{Control, ControlEvent, ControlId, GuiError, Panel, Textbox, ivec2};
use bloxel_test_utils::GuiHarness;

/// Panel whose outer rectangle is exactly `(x, y, w, h)`.
fn panel(harness: &mut GuiHarness, x: i32, y: i32, w: i32, h: i32) -> ControlId {
    harness
        .gui
        .add_control(
            Control::new(Panel::new())
                .with_position(ivec2(x, y))
                .with_size(ivec2(w - 2, h - 2)),
        )
        .unwrap()
}

#[test]
fn test_root_starts_focused() {
    let mut harness = GuiHarness::new();
    let root = harness.gui.root();
    assert!(harness.gui.is_focused(root).unwrap());
    assert!(harness.frame().is_empty());
}

#[test]
fn test_overlapping_children_first_attached_wins() {
    let mut harness = GuiHarness::new();
    let a = panel(&mut harness, 0, 0, 10, 10);
    let b = panel(&mut harness, 5, 5, 10, 10);

    let events = harness.click_at(ivec2(7, 7));
    assert_eq!(events, vec![ControlEvent::FocusGained(a)]);
    assert!(harness.gui.is_focused(a).unwrap());
    assert!(!harness.gui.is_focused(b).unwrap());

    let events = harness.click_at(ivec2(12, 12));
    assert_eq!(
        events,
        vec![ControlEvent::FocusLost(a), ControlEvent::FocusGained(b)]
    );
}

#[test]
fn test_hover_alone_does_not_move_focus() {
    let mut harness = GuiHarness::new();
    let a = panel(&mut harness, 0, 0, 10, 10);

    harness.move_mouse(ivec2(3, 3));
    harness.frames(3);
    assert!(!harness.gui.is_focused(a).unwrap());
}

#[test]
fn test_click_on_empty_space_clears_focus() {
    let mut harness = GuiHarness::new();
    let a = panel(&mut harness, 0, 0, 10, 10);

    harness.click_at(ivec2(2, 2));
    assert!(harness.gui.is_focused(a).unwrap());

    let events = harness.click_at(ivec2(400, 400));
    assert_eq!(events, vec![ControlEvent::FocusLost(a)]);
    assert!(harness.gui.tree().focus_path().is_empty());
}

#[test]
fn test_nested_focus_path() {
    let mut harness = GuiHarness::new();
    let outer = panel(&mut harness, 100, 100, 200, 200);
    let inner = harness
        .gui
        .add_child(
            outer,
            Control::new(Panel::new())
                .with_position(ivec2(10, 10))
                .with_size(ivec2(50, 50)),
        )
        .unwrap();

    // Inner outer rect starts at 100 + 1 + 10.
    harness.click_at(ivec2(115, 115));
    assert_eq!(harness.gui.tree().focus_path(), vec![outer, inner]);

    // Clicking the outer panel's own area keeps it focused but drops the child.
    harness.click_at(ivec2(250, 250));
    assert_eq!(harness.gui.tree().focus_path(), vec![outer]);
    assert!(!harness.gui.is_focused(inner).unwrap());
}

#[test]
fn test_child_outside_parent_rect_cannot_take_focus() {
    let mut harness = GuiHarness::new();
    let outer = panel(&mut harness, 100, 100, 50, 50);
    // Outer rect (141, 141, 32, 32) sticks out past (150, 150).
    let child = harness
        .gui
        .add_child(
            outer,
            Control::new(Panel::new())
                .with_position(ivec2(40, 40))
                .with_size(ivec2(30, 30)),
        )
        .unwrap();

    assert!(harness.click_at(ivec2(160, 160)).is_empty());
    assert!(!harness.gui.is_focused(outer).unwrap());
    assert!(!harness.gui.is_focused(child).unwrap());

    harness.click_at(ivec2(145, 145));
    assert_eq!(harness.gui.tree().focus_path(), vec![outer, child]);
}

#[test]
fn test_focus_moves_keyboard_capture_between_textboxes() {
    let mut harness = GuiHarness::new();
    let first = harness
        .gui
        .add_control(
            Control::new(Textbox::new())
                .with_position(ivec2(0, 0))
                .with_size(ivec2(100, 20)),
        )
        .unwrap();
    let second = harness
        .gui
        .add_control(
            Control::new(Textbox::new())
                .with_position(ivec2(0, 50))
                .with_size(ivec2(100, 20)),
        )
        .unwrap();

    harness.click_at(ivec2(10, 10));
    assert!(harness.gui.input().keyboard.is_enabled());

    // Release of the old owner happens before the new one captures.
    harness.click_at(ivec2(10, 60));
    assert!(harness.gui.is_focused(second).unwrap());
    assert!(!harness.gui.is_focused(first).unwrap());
    assert!(harness.gui.input().keyboard.is_enabled());

    harness.click_at(ivec2(500, 500));
    assert!(!harness.gui.input().keyboard.is_enabled());
}

#[test]
fn test_focusing_a_textbox_while_capture_is_taken_fails() {
    let mut harness = GuiHarness::new();
    harness
        .gui
        .add_control(
            Control::new(Textbox::new())
                .with_position(ivec2(0, 0))
                .with_size(ivec2(100, 20)),
        )
        .unwrap();
    harness.gui.input_mut().keyboard.enable().unwrap();

    let input = harness.gui.input_mut();
    input.mouse.set_position(ivec2(10, 10));
    input.mouse.set_button(bloxel_gui::MouseButton::Left, true);
    let result = harness.gui.update(Default::default());
    assert!(matches!(result, Err(GuiError::Input(_))));
}

#[test]
fn test_failed_focus_can_be_retried() {
    let mut harness = GuiHarness::new();
    let textbox = harness
        .gui
        .add_control(
            Control::new(Textbox::new())
                .with_position(ivec2(0, 0))
                .with_size(ivec2(100, 20)),
        )
        .unwrap();
    harness.gui.input_mut().keyboard.enable().unwrap();

    let input = harness.gui.input_mut();
    input.mouse.set_position(ivec2(10, 10));
    input.mouse.set_button(bloxel_gui::MouseButton::Left, true);
    assert!(harness.gui.update(Default::default()).is_err());
    let root = harness.gui.root();
    assert_eq!(harness.gui.tree().focused_child(root).unwrap(), None);

    // Whoever held capture lets go; the next click must land.
    harness.gui.input_mut().keyboard.disable();
    harness.release_left();
    let events = harness.click_at(ivec2(10, 10));
    assert_eq!(events, vec![ControlEvent::FocusGained(textbox)]);
    assert!(harness.gui.is_focused(textbox).unwrap());
    assert_eq!(harness.gui.tree().focused_child(root).unwrap(), Some(textbox));
    assert!(harness.gui.input().keyboard.is_enabled());
}

#[test]
fn test_removing_focused_textbox_releases_keyboard() {
    let mut harness = GuiHarness::new();
    let textbox = harness
        .gui
        .add_control(
            Control::new(Textbox::new())
                .with_position(ivec2(0, 0))
                .with_size(ivec2(100, 20)),
        )
        .unwrap();
    harness.click_at(ivec2(10, 10));
    harness.gui.pop_events();

    harness.gui.remove_control(textbox).unwrap();
    assert!(!harness.gui.input().keyboard.is_enabled());
    assert_eq!(harness.gui.pop_events(), vec![ControlEvent::FocusLost(textbox)]);
    assert_eq!(
        harness.gui.control(textbox).unwrap_err(),
        GuiError::UnknownControl(textbox)
    );

    // The next frame routes nothing to the stale id.
    assert!(harness.click_at(ivec2(10, 10)).is_empty());
}
