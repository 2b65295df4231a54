use claimnet_core::errors::*;

#[test]
fn row_rejection_reports_row_index() {
    let rejection = RowRejection::NegativeWeight { row: 7, value: -2.0 };
    assert_eq!(rejection.row(), 7);
    assert_eq!(rejection.to_string(), "row 7: negative weight -2");
}

#[test]
fn ingest_error_message_lists_rejections() {
    let err = IngestError::Rejected {
        rejections: vec![
            RowRejection::MissingField {
                row: 0,
                field: "source",
            },
            RowRejection::NonNumericWeight {
                row: 2,
                value: "heavy".to_string(),
            },
        ],
    };
    let msg = err.to_string();
    assert!(msg.contains("2 malformed row(s)"));
    assert!(msg.contains("row 0: missing source"));
    assert!(msg.contains("row 2: weight \"heavy\" is not numeric"));
    assert_eq!(err.rejections().len(), 2);
}

#[test]
fn ingest_error_message_truncates_long_lists() {
    let rejections = (0..8)
        .map(|row| RowRejection::MissingField {
            row,
            field: "target",
        })
        .collect();
    let msg = IngestError::Rejected { rejections }.to_string();
    assert!(msg.contains("8 malformed row(s)"));
    assert!(msg.contains("row 4: missing target"));
    assert!(!msg.contains("row 5: missing target"));
    assert!(msg.ends_with("and 3 more"));
}

#[test]
fn claimnet_error_wraps_subsystems() {
    let err: ClaimnetError = RenderError::InvalidScaleFactor { value: -1.0 }.into();
    assert!(matches!(err, ClaimnetError::Render(_)));
    assert_eq!(
        err.to_string(),
        "render error: invalid scale factor -1: must be finite and greater than zero"
    );

    let err: ClaimnetError = IngestError::Rejected { rejections: vec![] }.into();
    assert!(matches!(err, ClaimnetError::Ingest(_)));
}
