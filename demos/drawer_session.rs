//! Scripted drawer session: both delete flows plus a few spawns.
//!
//! Run with `RUST_LOG=sticker_drawer=debug` to see every transition.

use sticker_drawer::{logging, Design, DrawerConfig, DrawerIntent, DrawerState, StickerDrawer};

fn print_state(label: &str, state: &DrawerState) {
    let catalog: Vec<&str> = state.catalog().iter().map(|s| s.as_str()).collect();
    println!("{label}");
    println!("   catalog:  {catalog:?}");
    println!(
        "   design:   {:?}, select mode: {}, selected: {:?}",
        state.design(),
        state.select_mode(),
        state.selection().iter().collect::<Vec<_>>()
    );
    for sticker in state.spawned() {
        println!(
            "   spawned #{} {} at ({:.1}%, {:.1}%)",
            sticker.id, sticker.artwork, sticker.x, sticker.y
        );
    }
    if let Some(prompt) = state.confirmation_prompt() {
        println!(
            "   dialog:   {} [{} | {}]",
            prompt.title, prompt.cancel_label, prompt.confirm_label
        );
    }
    if let Some(message) = state.empty_catalog_message() {
        println!("   {message}");
    }
}

fn main() -> sticker_drawer::Result<()> {
    logging::init();

    println!("=== Sticker Drawer Session ===\n");

    let drawer = StickerDrawer::from_config(&DrawerConfig::default())?;
    drawer.subscribe(|state| {
        println!(
            "   [render] {} stickers, {} on canvas",
            state.catalog().len(),
            state.spawned().len()
        );
    });

    print_state("1. Seeded drawer", &drawer.snapshot());

    println!("\n2. Tapping two stickers");
    drawer.dispatch(DrawerIntent::StickerTapped { index: 0 });
    let state = drawer.dispatch(DrawerIntent::StickerTapped { index: 4 });
    print_state("   after taps", &state);

    println!("\n3. Deleting one sticker with its glyph");
    let state = drawer.dispatch(DrawerIntent::DeleteGlyphTapped { index: 1 });
    print_state("   confirmation pending", &state);
    let state = drawer.dispatch(DrawerIntent::DeleteConfirmed);
    print_state("   confirmed", &state);

    println!("\n4. Bulk deleting three stickers");
    drawer.dispatch(DrawerIntent::DesignSwitched {
        design: Design::BulkSelect,
    });
    drawer.dispatch(DrawerIntent::SelectModeToggled);
    for index in [0, 2, 5] {
        drawer.dispatch(DrawerIntent::StickerTapped { index });
    }
    let state = drawer.dispatch(DrawerIntent::BulkDeleteRequested);
    print_state(&format!("   {} pending", state.bulk_delete_label()), &state);
    let state = drawer.dispatch(DrawerIntent::BulkDeleteConfirmed);
    print_state("   confirmed", &state);

    Ok(())
}
