use pdf_jig::layout::{MarginRatios, PageRef, plan_split};
use pdf_jig::*;

#[test]
fn test_defaults() {
    assert_eq!(ExtractOptions::default().range, "1--1");
    assert_eq!(PlacementOptions::default().start, 1);

    let rotate = RotateOptions::default();
    assert_eq!(rotate.degrees, 90);
    assert_eq!(rotate.pages, "1,-1");

    assert_eq!(WatermarkOptions::default().start, 1);
    assert!(!SplitOptions::default().vertical);
    assert!(!SpreadOptions::default().single_top);
}

#[test]
fn test_rotate_validation() {
    for degrees in [0, 90, -90, 180, 270, 450] {
        let options = RotateOptions {
            degrees,
            ..Default::default()
        };
        assert!(options.validate().is_ok(), "rejected {}", degrees);
    }

    let options = RotateOptions {
        degrees: 45,
        ..Default::default()
    };
    match options.validate() {
        Err(JigError::Config(msg)) => assert!(msg.contains("90-unit")),
        other => panic!("Expected Config error, got {:?}", other),
    }
}

#[test]
fn test_watermark_label() {
    let options = WatermarkOptions {
        text: "draft".to_string(),
        start: 7,
    };
    assert_eq!(options.label(0), "draft(p.007)  ");
    assert_eq!(options.label(993), "draft(p.1000)  ");
}

#[test]
fn test_watermark_rejects_blank_text() {
    let options = WatermarkOptions {
        text: "  ".to_string(),
        ..Default::default()
    };
    assert!(matches!(options.validate(), Err(JigError::Config(_))));
}

#[test]
fn test_trim_margin_ratios() {
    let options = TrimMarginOptions {
        margin: "10,5".to_string(),
    };
    assert_eq!(
        options.ratios().unwrap(),
        MarginRatios {
            top: 10.0,
            right: 5.0,
            bottom: 10.0,
            left: 5.0,
        }
    );
    assert!(TrimMarginOptions::default().ratios().is_err());
}

#[test]
fn test_plans_serialize_to_json() {
    let pages = [PageRef::new(800.0, 600.0)];
    let plan = plan_split(&pages, &SplitOptions::default()).unwrap();
    let json = serde_json::to_value(&plan).unwrap();
    assert_eq!(json[0]["Halves"]["source"], 0);
    assert_eq!(json[0]["Halves"]["crops"][1]["offset_x"], 400.0);
}
