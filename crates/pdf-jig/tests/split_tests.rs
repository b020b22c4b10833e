use pdf_jig::layout::*;
use pdf_jig::*;

fn halves(action: &SplitAction) -> [CropRegion; 2] {
    match action {
        SplitAction::Halves { crops, .. } => *crops,
        other => panic!("Expected Halves, got {:?}", other),
    }
}

#[test]
fn test_uniform_spreads_split_in_half() {
    let pages = vec![PageRef::new(800.0, 600.0); 3];
    let plan = plan_split(&pages, &SplitOptions::default()).unwrap();

    assert_eq!(plan.len(), 3);
    for (idx, action) in plan.iter().enumerate() {
        assert_eq!(action.source(), idx);
        assert_eq!(action.output_pages(), 2);
        let [left, right] = halves(action);
        assert_eq!((left.offset_x, left.width, left.height), (0.0, 400.0, 600.0));
        assert_eq!((right.offset_x, right.width), (400.0, 400.0));
    }
}

#[test]
fn test_trim_box_exactly_half_still_splits() {
    let page = PageRef::new(801.0, 600.0).with_trim_box(Rect::new(0.0, 0.0, 400.5, 600.0));
    let plan = plan_split(&[page], &SplitOptions::default()).unwrap();

    let crops = halves(&plan[0]);
    assert_eq!(crops[0].width, 400.0);
    assert_eq!(crops[1].width, 400.0);
    assert_eq!(crops[1].offset_x, 400.0);
}

#[test]
fn test_singled_page_is_cropped_once() {
    let page = PageRef::new(800.0, 600.0).with_trim_box(Rect::new(250.0, 0.0, 300.0, 600.0));
    let plan = plan_split(&[page], &SplitOptions::default()).unwrap();

    assert_eq!(plan[0].output_pages(), 1);
    assert_eq!(
        plan[0],
        SplitAction::Single {
            source: 0,
            crop: CropRegion {
                offset_x: 200.0,
                offset_y: 0.0,
                width: 400.0,
                height: 600.0,
            },
            rotation: 0,
        }
    );
}

#[test]
fn test_singled_page_ignores_opposite() {
    let page = PageRef::new(800.0, 600.0).with_trim_box(Rect::new(0.0, 0.0, 100.0, 600.0));
    let plain = plan_split(&[page], &SplitOptions::default()).unwrap();
    let opposite = plan_split(
        &[page],
        &SplitOptions {
            opposite: true,
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(plain, opposite);
}

#[test]
fn test_minimal_size_pages_pass_through() {
    let pages = [
        PageRef::new(400.0, 600.0),
        PageRef::new(800.0, 600.0),
        PageRef::new(400.0, 600.0),
        PageRef::new(800.0, 600.0),
    ];
    let plan = plan_split(&pages, &SplitOptions::default()).unwrap();

    assert_eq!(plan[0], SplitAction::Keep { source: 0 });
    assert_eq!(plan[2], SplitAction::Keep { source: 2 });
    assert_eq!(plan[1].output_pages(), 2);
    assert_eq!(plan[3].output_pages(), 2);
}

#[test]
fn test_minimal_size_is_measured_along_split_axis() {
    // Heights differ but widths don't, so nothing is minimal when splitting left/right
    let pages = [PageRef::new(800.0, 500.0), PageRef::new(800.0, 600.0)];
    let plan = plan_split(&pages, &SplitOptions::default()).unwrap();
    assert!(plan.iter().all(|action| action.output_pages() == 2));

    let vertical = plan_split(
        &pages,
        &SplitOptions {
            vertical: true,
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(vertical[0], SplitAction::Keep { source: 0 });
}

#[test]
fn test_opposite_reverses_halves() {
    let page = PageRef::new(800.0, 600.0);
    let options = SplitOptions {
        opposite: true,
        ..Default::default()
    };
    let [first, second] = halves(&plan_split(&[page], &options).unwrap()[0]);
    assert_eq!(first.offset_x, 400.0);
    assert_eq!(second.offset_x, 0.0);
}

#[test]
fn test_vertical_split_emits_top_half_first() {
    let page = PageRef::new(600.0, 800.0);
    let options = SplitOptions {
        vertical: true,
        ..Default::default()
    };
    let [first, second] = halves(&plan_split(&[page], &options).unwrap()[0]);
    assert_eq!((first.offset_y, first.height, first.width), (400.0, 400.0, 600.0));
    assert_eq!(second.offset_y, 0.0);
}

#[test]
fn test_quarter_turn_flips_axis_and_order() {
    // Stored portrait, displayed landscape: a left/right split of the display
    // is a bottom/top split of the stored page.
    let page = PageRef::new(600.0, 800.0).with_rotation(90);
    let [first, second] = halves(&plan_split(&[page], &SplitOptions::default()).unwrap()[0]);
    assert_eq!((first.offset_y, first.height), (0.0, 400.0));
    assert_eq!((second.offset_y, second.height), (400.0, 400.0));

    let page = PageRef::new(600.0, 800.0).with_rotation(270);
    let [first, second] = halves(&plan_split(&[page], &SplitOptions::default()).unwrap()[0]);
    assert_eq!(first.offset_y, 400.0);
    assert_eq!(second.offset_y, 0.0);
}

#[test]
fn test_rotation_is_carried_to_output() {
    let page = PageRef::new(600.0, 800.0).with_rotation(-90);
    match &plan_split(&[page], &SplitOptions::default()).unwrap()[0] {
        SplitAction::Halves { rotation, .. } => assert_eq!(*rotation, 270),
        other => panic!("Expected Halves, got {:?}", other),
    }
}

#[test]
fn test_one_rotated_page_flips_whole_document() {
    let pages = [PageRef::new(800.0, 600.0), PageRef::new(800.0, 600.0).with_rotation(90)];
    let plan = plan_split(&pages, &SplitOptions::default()).unwrap();
    let [first, _] = halves(&plan[0]);
    assert_eq!((first.width, first.height), (800.0, 300.0));
}

#[test]
fn test_crops_are_relative_to_media_box_origin() {
    let page = PageRef::new(800.0, 600.0).with_origin(50.0, 20.0);
    let [left, right] = halves(&plan_split(&[page], &SplitOptions::default()).unwrap()[0]);
    assert_eq!(left.on_page(&page), Rect::new(50.0, 20.0, 400.0, 600.0));
    assert_eq!(right.on_page(&page), Rect::new(450.0, 20.0, 400.0, 600.0));
}

#[test]
fn test_degenerate_page_is_rejected() {
    let pages = [PageRef::new(800.0, 600.0), PageRef::new(0.0, 600.0)];
    assert!(matches!(
        plan_split(&pages, &SplitOptions::default()),
        Err(JigError::Geometry(_))
    ));
}

#[test]
fn test_empty_document_has_empty_plan() {
    assert!(plan_split(&[], &SplitOptions::default()).unwrap().is_empty());
}
