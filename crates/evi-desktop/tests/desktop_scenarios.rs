//! Desktop Scenario Integration Tests
//!
//! End-to-end pointer sequences driven through the public engine API.

use evi_desktop::{
    DesktopEngine, InputResult, Rect, ResizeDirection, SnapLayout, WindowId,
};

fn desktop() -> DesktopEngine {
    let mut engine = DesktopEngine::new();
    engine.set_surface(0.0, 0.0, 1440.0, 900.0);
    engine
}

fn rect_of(engine: &DesktopEngine, id: WindowId) -> Rect {
    engine.windows.get(id).unwrap().rect
}

/// Reopening an open category focuses it instead of creating a duplicate.
#[test]
fn test_reopen_category_focuses_existing() {
    let mut engine = desktop();

    let sales = engine.open_window("sales", "Sales");
    let inventory = engine.open_window("inventory", "Inv");
    let again = engine.open_window("sales", "Sales");

    assert_eq!(engine.windows.count(), 2);
    assert_eq!(again, sales);
    assert_eq!(engine.windows.focused_id(), Some(sales));

    let sales_z = engine.windows.get(sales).unwrap().z_index;
    let inventory_z = engine.windows.get(inventory).unwrap().z_index;
    assert!(sales_z > inventory_z);
    assert_eq!(sales_z, engine.windows.z_counter());
}

/// A move may carry a window past the left edge of the surface.
#[test]
fn test_move_off_surface_is_not_clamped() {
    let mut engine = desktop();
    let id = engine.open_window("sales", "Sales");
    assert_eq!(rect_of(&engine, id), Rect::new(50.0, 50.0, 700.0, 550.0));

    // Grab near the right end of the title bar so the pointer stays
    // away from the left snap margin
    assert!(engine.start_move_drag(id, 600.0, 60.0));
    engine.handle_pointer_move(-50.0, 60.0);
    assert_eq!(rect_of(&engine, id).x, -600.0);

    // The pointer left the surface on the left, so the release snaps; the
    // intermediate geometry was unclamped
    engine.handle_pointer_up();
    assert_eq!(rect_of(&engine, id), Rect::new(0.0, 0.0, 720.0, 900.0));
}

/// A move released away from every edge keeps its free-form position.
#[test]
fn test_move_release_in_interior_keeps_position() {
    let mut engine = desktop();
    let id = engine.open_window("sales", "Sales");

    engine.start_move_drag(id, 100.0, 60.0);
    for step in 1..=10 {
        engine.handle_pointer_move(100.0 + step as f32 * 40.0, 60.0 + step as f32 * 20.0);
    }
    assert_eq!(engine.handle_pointer_up(), InputResult::Handled);

    assert_eq!(rect_of(&engine, id), Rect::new(450.0, 250.0, 700.0, 550.0));
    assert!(!engine.windows.get(id).unwrap().maximized);
}

/// Shrinking from the west handle past the minimum pins the window in place.
#[test]
fn test_west_resize_past_minimum() {
    let mut engine = desktop();
    let id = engine.open_window("sales", "Sales");

    // First bring the window down to exactly the minimum width
    engine.start_resize_drag(id, ResizeDirection::E, 750.0, 300.0);
    engine.handle_pointer_move(350.0, 300.0);
    engine.handle_pointer_up();
    assert_eq!(rect_of(&engine, id), Rect::new(50.0, 50.0, 300.0, 550.0));

    let start_x = rect_of(&engine, id).x;
    engine.start_resize_drag(id, ResizeDirection::W, 50.0, 300.0);
    engine.handle_pointer_move(100.0, 300.0);
    engine.handle_pointer_up();

    let rect = rect_of(&engine, id);
    assert_eq!(rect.width, 300.0);
    assert_eq!(rect.x, start_x);
}

/// The far edge stays fixed for the whole of a north resize that overshoots.
#[test]
fn test_north_resize_far_edge_invariant() {
    let mut engine = desktop();
    let id = engine.open_window("sales", "Sales");
    let bottom = rect_of(&engine, id).bottom();

    engine.start_resize_drag(id, ResizeDirection::N, 300.0, 50.0);
    for y in (50..900).step_by(50) {
        engine.handle_pointer_move(300.0, y as f32);
        let rect = rect_of(&engine, id);
        assert!(rect.height >= 200.0);
        assert_eq!(rect.bottom(), bottom);
    }
    engine.handle_pointer_up();
}

/// Every resize handle honours the minimum size at every tick.
#[test]
fn test_all_handles_honour_minimum() {
    for direction in ResizeDirection::ALL {
        let mut engine = desktop();
        let id = engine.open_window("sales", "Sales");

        engine.start_resize_drag(id, direction, 400.0, 300.0);
        for (x, y) in [(0.0, 0.0), (1400.0, 900.0), (-800.0, 1200.0), (400.0, 300.0), (2000.0, -500.0)] {
            engine.handle_pointer_move(x, y);
            let rect = rect_of(&engine, id);
            assert!(rect.width >= 300.0, "{:?} width {}", direction, rect.width);
            assert!(rect.height >= 200.0, "{:?} height {}", direction, rect.height);
        }
        engine.handle_pointer_up();
    }
}

/// Dragging into the top-left corner previews and commits the quadrant.
#[test]
fn test_corner_beats_edges() {
    let mut engine = desktop();
    let id = engine.open_window("sales", "Sales");

    engine.start_move_drag(id, 100.0, 60.0);
    engine.handle_pointer_move(10.0, 10.0);
    assert_eq!(engine.preview().map(|p| p.layout), Some(SnapLayout::TopLeft));

    let overlay = engine.frame().overlay.unwrap();
    assert_eq!(overlay.rect, Rect::new(0.0, 0.0, 720.0, 450.0));

    engine.handle_pointer_up();
    assert_eq!(rect_of(&engine, id), Rect::new(0.0, 0.0, 720.0, 450.0));
    assert!(engine.frame().overlay.is_none());
}

/// The snap menu path works without any drag in progress.
#[test]
fn test_menu_snap_to_columns() {
    let mut engine = desktop();
    let home = engine.open_window("home", "Home");
    let sales = engine.open_window("sales", "Sales");
    let inventory = engine.open_window("inventory", "Inventory");

    for (id, layout) in [
        (home, SnapLayout::Column1),
        (sales, SnapLayout::Column2),
        (inventory, SnapLayout::Column3),
    ] {
        engine.menu_enter(id);
        engine.menu_select(layout);
    }

    assert_eq!(rect_of(&engine, home), Rect::new(0.0, 0.0, 480.0, 900.0));
    assert_eq!(rect_of(&engine, sales), Rect::new(480.0, 0.0, 480.0, 900.0));
    assert_eq!(rect_of(&engine, inventory), Rect::new(960.0, 0.0, 480.0, 900.0));
    assert_eq!(engine.windows.focused_id(), Some(inventory));
}

/// Closing twice and focusing a missing window leave the desktop untouched.
#[test]
fn test_idempotent_operations() {
    let mut engine = desktop();
    let sales = engine.open_window("sales", "Sales");
    engine.open_window("home", "Home");

    engine.close_window(sales);
    let frame = engine.frame();
    let counter = engine.windows.z_counter();

    engine.close_window(sales);
    engine.focus_window(sales);
    engine.toggle_maximize(sales);
    engine.apply_snap(sales, SnapLayout::Left);

    assert_eq!(engine.frame(), frame);
    assert_eq!(engine.windows.z_counter(), counter);
}

/// The sidebar-style query reflects opens and closes.
#[test]
fn test_is_open_tracks_collection() {
    let mut engine = desktop();
    assert!(!engine.is_open("profile"));

    let id = engine.open_window("profile", "Profile");
    assert!(engine.is_open("profile"));

    engine.close_window(id);
    assert!(!engine.is_open("profile"));
}
