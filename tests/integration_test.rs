use anyhow::Result;
use rpicker::virtual_catalog::{ALBUM_ALL_MEDIA, ALBUM_VIDEOS};
use rpicker::{
    AssetCatalog, AssetId, DragSelectState, DynCatalog, EdgeProximity, FolderCatalog,
    GestureDecision, PageState, PreviewState, SelectionError, SelectionStore, VirtualCatalog,
};
use std::env;
use std::fs;

/// Drives the pagination state machine against a real catalog until the
/// album is exhausted, returning the loaded ids.
fn load_whole_album(catalog: &DynCatalog, pages: &mut PageState, album: u64) -> Result<Vec<AssetId>> {
    let mut request = Some(pages.open_album(album));
    while let Some(req) = request.take() {
        let assets = catalog.fetch_assets(req.album_id, req.limit)?;
        pages.apply(req.generation, &assets);
        request = pages.near_end();
    }
    Ok(pages.loaded_ids().to_vec())
}

#[test]
fn test_full_pagination_of_a_large_album() -> Result<()> {
    let catalog = DynCatalog::Virtual(VirtualCatalog::with_config(250, 11));
    let mut pages = PageState::new(100);

    let loaded = load_whole_album(&catalog, &mut pages, ALBUM_ALL_MEDIA)?;
    assert_eq!(loaded.len(), 250);
    assert!(pages.is_exhausted());
    assert_eq!(pages.near_end(), None);

    // The loaded order matches a single full fetch exactly.
    let full = catalog.fetch_assets(ALBUM_ALL_MEDIA, 250)?;
    let full_ids: Vec<_> = full.iter().map(|a| a.id).collect();
    assert_eq!(loaded, full_ids);
    Ok(())
}

#[test]
fn test_album_smaller_than_one_batch_exhausts_immediately() -> Result<()> {
    let catalog = DynCatalog::Virtual(VirtualCatalog::with_config(42, 5));
    let mut pages = PageState::new(100);

    let loaded = load_whole_album(&catalog, &mut pages, ALBUM_ALL_MEDIA)?;
    assert_eq!(loaded.len(), 42);
    assert!(pages.is_exhausted());
    Ok(())
}

#[test]
fn test_stale_responses_after_album_switch_are_dropped() -> Result<()> {
    let catalog = DynCatalog::Virtual(VirtualCatalog::with_config(120, 3));
    let mut pages = PageState::new(50);

    let stale = pages.open_album(ALBUM_ALL_MEDIA);
    let stale_assets = catalog.fetch_assets(stale.album_id, stale.limit)?;

    // The user switches albums before the first response lands.
    let fresh = pages.open_album(ALBUM_VIDEOS);
    assert_eq!(pages.apply(stale.generation, &stale_assets), None);
    assert!(pages.is_empty());

    let fresh_assets = catalog.fetch_assets(fresh.album_id, fresh.limit)?;
    pages.apply(fresh.generation, &fresh_assets);
    assert_eq!(pages.len(), fresh_assets.len());
    Ok(())
}

#[test]
fn test_selection_ordinals_stay_dense_through_edits() -> Result<()> {
    let catalog = DynCatalog::Virtual(VirtualCatalog::with_config(30, 9));
    let assets = catalog.fetch_assets(ALBUM_ALL_MEDIA, 10)?;
    let mut store = SelectionStore::new(30);

    // Select C, A, B out of grid order.
    for index in [5usize, 0, 3] {
        store.toggle(assets[index].id).unwrap();
    }
    assert_eq!(
        store.ordered_ids(),
        &[assets[5].id, assets[0].id, assets[3].id]
    );

    // Remove the middle entry; ordinals renumber densely.
    store.toggle(assets[0].id).unwrap();
    assert_eq!(store.ordinal(assets[5].id), Some(1));
    assert_eq!(store.ordinal(assets[3].id), Some(2));
    Ok(())
}

#[test]
fn test_selection_limit_is_a_hard_cap() -> Result<()> {
    let catalog = DynCatalog::Virtual(VirtualCatalog::with_config(60, 2));
    let assets = catalog.fetch_assets(ALBUM_ALL_MEDIA, 40)?;
    let mut store = SelectionStore::new(30);

    for asset in assets.iter().take(30) {
        store.toggle(asset.id).unwrap();
    }
    assert_eq!(
        store.toggle(assets[30].id),
        Err(SelectionError::LimitExceeded { limit: 30 })
    );
    assert_eq!(store.count(), 30);
    Ok(())
}

#[test]
fn test_drag_select_is_independent_of_event_granularity() -> Result<()> {
    let catalog = DynCatalog::Virtual(VirtualCatalog::with_config(60, 8));
    let assets = catalog.fetch_assets(ALBUM_ALL_MEDIA, 60)?;
    let ids: Vec<_> = assets.iter().map(|a| a.id).collect();

    let run = |steps: &[usize]| -> Vec<AssetId> {
        let mut store = SelectionStore::new(30);
        let mut drag = DragSelectState::new();
        drag.begin(Some(10));
        for &index in steps {
            drag.update(
                Some(index),
                GestureDecision::Toggle,
                EdgeProximity::None,
                &ids,
                &mut store,
            );
        }
        drag.end();
        store.ordered_ids().to_vec()
    };

    // One coarse event versus many fine-grained ones over the same path,
    // including a sweep back and forth.
    let coarse = run(&[25]);
    let mut fine: Vec<usize> = (10..=25).collect();
    fine.extend((12..=25).rev());
    fine.push(25);
    assert_eq!(coarse, run(&fine));
    assert_eq!(coarse.len(), 16);
    Ok(())
}

#[test]
fn test_preview_commit_round_trip() -> Result<()> {
    let catalog = DynCatalog::Virtual(VirtualCatalog::with_config(20, 4));
    let assets = catalog.fetch_assets(ALBUM_ALL_MEDIA, 5)?;
    let mut store = SelectionStore::new(30);
    for asset in &assets {
        store.toggle(asset.id).unwrap();
    }

    let mut preview = PreviewState::from_selection(&store);
    preview.set_current(1);
    preview.toggle_current();
    preview.set_current(3);
    preview.toggle_current();
    preview.commit(&mut store);

    assert_eq!(
        store.ordered_ids(),
        &[assets[0].id, assets[2].id, assets[4].id]
    );
    // Survivors keep their relative order and dense ordinals.
    assert_eq!(store.ordinal(assets[2].id), Some(2));
    Ok(())
}

#[test]
fn test_virtual_catalog_thumbnails_decode() -> Result<()> {
    let catalog = VirtualCatalog::with_config(10, 6);
    let assets = catalog.fetch_assets(ALBUM_ALL_MEDIA, 3)?;

    for asset in &assets {
        let pixels = catalog.load_thumbnail(asset.id, 32)?;
        assert_eq!(pixels.width, 32);
        assert_eq!(pixels.height, 32);
        assert_eq!(pixels.rgba.len(), 32 * 32 * 4);
    }
    Ok(())
}

#[test]
fn test_folder_catalog_scan_and_paging() -> Result<()> {
    let root = env::temp_dir().join("picker_it_folder_scan");
    let _ = fs::remove_dir_all(&root);
    let album_dir = root.join("Holiday");
    fs::create_dir_all(&album_dir)?;

    for i in 0..7 {
        let img = image::RgbaImage::from_pixel(8, 8, image::Rgba([i * 30, 100, 200, 255]));
        img.save(album_dir.join(format!("photo_{}.png", i)))?;
    }

    let catalog = DynCatalog::Folder(FolderCatalog::scan(&root)?);
    let albums = catalog.list_albums();
    assert!(albums.iter().any(|a| a.title == "Holiday"));

    let all_media = albums[0].id;
    let mut pages = PageState::new(3);
    let loaded = load_whole_album(&catalog, &mut pages, all_media)?;
    assert_eq!(loaded.len(), 7);
    assert!(pages.is_exhausted());

    let pixels = catalog.load_thumbnail(loaded[0], 16)?;
    assert!(pixels.width <= 16 && pixels.height <= 16);

    fs::remove_dir_all(&root)?;
    Ok(())
}
