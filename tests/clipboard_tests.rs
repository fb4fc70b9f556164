//! Tests for copy, paste and tiling through the clipboard controller.

mod common;

#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]
mod tests {
    use super::common::{self, SpyModels};
    use gridview::clipboard::{
        tile, tile_with, ClipboardController, ClipboardEvent, ClipboardOutcome, PasteOrigin,
    };
    use gridview::config::{ClipboardFormat, EscapeStrategy, TilingMode};
    use gridview::error::GridError;
    use gridview::model::Models;
    use gridview::types::{
        CellData, CellValue, CopyOptions, EditType, FocusedCell, RowKey, Selection,
    };
    use test_case::test_case;

    fn grid(rows: &[&[i32]]) -> Vec<Vec<i32>> {
        rows.iter().map(|r| r.to_vec()).collect()
    }

    fn amount_cell(key: u32) -> CellData {
        let mut cell = CellData::new(RowKey::from(key), "amount", CellValue::Number(1234.0));
        cell.formatted_value = "1,234".into();
        cell
    }

    // ================================================================
    // Tiling
    // ================================================================

    #[test_case(4, 2, &[&[1, 2], &[3, 4], &[1, 2], &[3, 4]] ; "row multiple")]
    #[test_case(2, 4, &[&[1, 2, 1, 2], &[3, 4, 3, 4]] ; "column multiple")]
    #[test_case(4, 4, &[&[1, 2, 1, 2], &[3, 4, 3, 4], &[1, 2, 1, 2], &[3, 4, 3, 4]] ; "both axes")]
    #[test_case(3, 3, &[&[1, 2], &[3, 4]] ; "non multiple is unchanged")]
    #[test_case(1, 1, &[&[1, 2], &[3, 4]] ; "shrink is unchanged")]
    #[test_case(2, 2, &[&[1, 2], &[3, 4]] ; "equal extent is identity")]
    #[test_case(4, 3, &[&[1, 2], &[3, 4], &[1, 2], &[3, 4]] ; "axes are independent")]
    fn test_tile_2x2(rows: usize, cols: usize, expected: &[&[i32]]) {
        let source = grid(&[&[1, 2], &[3, 4]]);
        assert_eq!(tile(&source, rows, cols), grid(expected));
    }

    #[test]
    fn test_tile_never_crops_or_partially_repeats() {
        let source = grid(&[&[1, 2, 3]]);
        for cols in [1, 2, 4, 5, 7, 8] {
            let out = tile(&source, 1, cols);
            assert_eq!(out, source, "cols = {cols}");
        }
        assert_eq!(tile(&source, 1, 9), grid(&[&[1, 2, 3, 1, 2, 3, 1, 2, 3]]));
    }

    #[test]
    fn test_tile_whole_repeats_mode() {
        let source = grid(&[&[1, 2], &[3, 4]]);
        assert_eq!(
            tile_with(&source, 5, 2, TilingMode::WholeRepeats),
            grid(&[&[1, 2], &[3, 4], &[1, 2], &[3, 4]])
        );
        assert_eq!(tile_with(&source, 1, 1, TilingMode::WholeRepeats), source);
    }

    // ================================================================
    // Copy
    // ================================================================

    #[test]
    fn test_copy_with_selection_uses_selection_model_only() {
        let spy = SpyModels::new()
            .with_column("amount", EditType::Normal, CopyOptions::default())
            .with_cell(1, amount_cell(1))
            .focused(1, "amount")
            .selected(Selection::cell_range(0, 0, 1, 1), "a\tb\nc\td");
        let mut controller = ClipboardController::default();

        let text = controller.copy(&Models::uniform(&spy)).unwrap();

        assert_eq!(text, "a\tb\nc\td");
        assert_eq!(spy.selection_text_reads.get(), 1);
        assert_eq!(spy.focus_reads.get(), 0);
        assert_eq!(spy.data_reads.get(), 0);
        assert_eq!(spy.render_reads.get(), 0);
        assert_eq!(controller.text(), "a\tb\nc\td");
    }

    #[test]
    fn test_copy_focused_formatted_value_reads_render_model_only() {
        let options = CopyOptions {
            use_formatted_value: true,
            ..CopyOptions::default()
        };
        let spy = SpyModels::new()
            .with_column("amount", EditType::Normal, options)
            .with_cell(1, amount_cell(1))
            .focused(1, "amount");
        let mut controller = ClipboardController::default();

        assert_eq!(controller.copy(&Models::uniform(&spy)).unwrap(), "1,234");
        assert_eq!(spy.render_reads.get(), 1);
        assert_eq!(spy.data_reads.get(), 0);
        assert_eq!(spy.selection_text_reads.get(), 0);
    }

    #[test]
    fn test_copy_focused_raw_value_reads_data_model_only() {
        let spy = SpyModels::new()
            .with_column("amount", EditType::Normal, CopyOptions::default())
            .with_cell(1, amount_cell(1))
            .focused(1, "amount");
        let mut controller = ClipboardController::default();

        assert_eq!(controller.copy(&Models::uniform(&spy)).unwrap(), "1234");
        assert_eq!(spy.data_reads.get(), 1);
        assert_eq!(spy.render_reads.get(), 0);
    }

    #[test]
    fn test_copy_focused_list_item_text() {
        let options = CopyOptions {
            use_list_item_text: true,
            ..CopyOptions::default()
        };
        let mut cell = CellData::new(RowKey::from(2), "fruit", CellValue::from("b"));
        cell.list_items = common::list_items();
        let spy = SpyModels::new()
            .with_column("fruit", EditType::Select, options)
            .with_cell(2, cell)
            .focused(2, "fruit");
        let mut controller = ClipboardController::default();

        assert_eq!(controller.copy(&Models::uniform(&spy)).unwrap(), "Banana");
    }

    #[test]
    fn test_copy_without_selection_or_focus_fails() {
        let spy = SpyModels::new();
        let mut controller = ClipboardController::default();
        let err = controller.copy(&Models::uniform(&spy)).unwrap_err();
        assert!(matches!(err, GridError::NoFocus));
        assert_eq!(controller.text(), "");
    }

    #[test]
    fn test_copy_unknown_focused_column_fails() {
        let spy = SpyModels::new().focused(1, "missing");
        let mut controller = ClipboardController::default();
        let err = controller.copy(&Models::uniform(&spy)).unwrap_err();
        assert!(matches!(err, GridError::UnknownColumn(ref c) if c == "missing"));
    }

    #[test]
    fn test_copy_selection_from_store() {
        let mut store = common::store();
        store.set_selection(Some(Selection::cell_range(1, 2, 0, 1)));
        let mut controller = ClipboardController::default();
        let text = controller.copy(&Models::uniform(&store)).unwrap();
        assert_eq!(text, "ann\ta\nbob\tb");
    }

    #[test]
    fn test_copy_selection_quotes_embedded_delimiters() {
        let format = ClipboardFormat {
            escape: EscapeStrategy::Quote,
            ..ClipboardFormat::default()
        };
        let config = gridview::config::GridConfig {
            clipboard: format.clone(),
            ..gridview::config::GridConfig::default()
        };
        let mut store = common::store_with(&config);
        store
            .set_value(&RowKey::from(1), "name", CellValue::from("a\tb"))
            .unwrap();
        store.set_selection(Some(Selection::cell_range(0, 1, 0, 2)));
        let mut controller = ClipboardController::new(format);
        let text = controller.copy(&Models::uniform(&store)).unwrap();
        assert_eq!(text, "\"a\tb\"\ta");
    }

    // ================================================================
    // Paste
    // ================================================================

    #[test]
    fn test_paste_tiles_to_selection() {
        let spy = SpyModels::new().selected(Selection::cell_range(2, 1, 5, 4), "");
        let controller = ClipboardController::default();

        let pasted = controller
            .paste("1\t2\n3\t4\n", &Models::uniform(&spy))
            .unwrap();

        assert_eq!(pasted.origin, PasteOrigin::Range { row: 2, col: 1 });
        assert_eq!(pasted.row_count(), 4);
        assert_eq!(pasted.col_count(), 4);
        assert_eq!(pasted.data[3], vec!["3", "4", "3", "4"]);
        assert_eq!(spy.focus_reads.get(), 0);
    }

    #[test]
    fn test_paste_non_multiple_selection_passes_through() {
        let spy = SpyModels::new().selected(Selection::cell_range(0, 0, 2, 2), "");
        let controller = ClipboardController::default();
        let pasted = controller.paste("1\t2\n3\t4", &Models::uniform(&spy)).unwrap();
        assert_eq!(pasted.data, vec![vec!["1", "2"], vec!["3", "4"]]);
    }

    #[test]
    fn test_paste_without_selection_starts_at_focus() {
        let spy = SpyModels::new().focused(7, "name");
        let controller = ClipboardController::default();
        let pasted = controller.paste("x\ty\r\n", &Models::uniform(&spy)).unwrap();
        assert_eq!(
            pasted.origin,
            PasteOrigin::Focus(FocusedCell {
                row_key: RowKey::from(7),
                column_name: "name".into(),
            })
        );
        assert_eq!(pasted.data, vec![vec!["x", "y"]]);
    }

    #[test]
    fn test_paste_without_selection_or_focus_fails() {
        let spy = SpyModels::new();
        let controller = ClipboardController::default();
        let err = controller.paste("x", &Models::uniform(&spy)).unwrap_err();
        assert!(matches!(err, GridError::NoFocus));
    }

    #[test]
    fn test_paste_empty_text_fails() {
        let spy = SpyModels::new().focused(1, "name");
        let controller = ClipboardController::default();
        for text in ["", "\n", "\n\n"] {
            let err = controller.paste(text, &Models::uniform(&spy)).unwrap_err();
            assert!(matches!(err, GridError::EmptyPaste), "text = {text:?}");
        }
    }

    #[test]
    fn test_oversized_selection_is_clipped_to_rows() {
        let mut store = common::store();
        store.set_selection(Some(Selection::cell_range(0, 1, 999, 1)));
        let mut controller = ClipboardController::default();

        let pasted = controller.paste("x", &Models::uniform(&store)).unwrap();
        assert_eq!(pasted.origin, PasteOrigin::Range { row: 0, col: 1 });
        assert_eq!(pasted.data, vec![vec!["x".to_string()]; 3]);

        // copy and paste agree on the extent
        assert_eq!(controller.copy(&Models::uniform(&store)).unwrap(), "ann\nbob\ncid");
    }

    // ================================================================
    // Event dispatch
    // ================================================================

    #[test]
    fn test_handle_dispatches_by_command() {
        let spy = SpyModels::new()
            .focused(1, "name")
            .selected(Selection::cell_range(0, 0, 1, 0), "v");
        let mut controller = ClipboardController::default();
        let models = Models::uniform(&spy);

        let copied = controller.handle(&ClipboardEvent::copy(), &models).unwrap();
        assert_eq!(copied, ClipboardOutcome::Copy { text: "v".into() });

        let pasted = controller
            .handle(&ClipboardEvent::paste("z"), &models)
            .unwrap();
        let ClipboardOutcome::Paste(data) = pasted else {
            panic!("expected paste outcome");
        };
        assert_eq!(data.data, vec![vec!["z"], vec!["z"]]);
    }
}
