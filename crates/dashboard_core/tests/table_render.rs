use std::sync::Once;

use dashboard_core::{
    build_render_model, render_table, ActionCell, BadgeStyle, ProcessingEntry, ResultEntry,
    ResultStatus, StatusCell, StatusSnapshot, ACTION_PLACEHOLDER,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(dashboard_logging::initialize_for_tests);
}

fn table_for(snapshot: StatusSnapshot) -> dashboard_core::TableBody {
    render_table(&build_render_model(&snapshot))
}

#[test]
fn completed_result_links_under_static_root() {
    init_logging();
    let table = table_for(StatusSnapshot {
        results: vec![ResultEntry::completed(
            "/data/in/talk.mp4",
            "/srv/app/static/summaries/talk_summary.txt",
        )],
        ..StatusSnapshot::default()
    });

    let row = &table.rows[0];
    assert_eq!(row.index, "0");
    assert_eq!(row.label, "/data/in/talk.mp4");
    assert_eq!(
        row.action,
        ActionCell::Download {
            href: "/static/summaries/talk_summary.txt".to_string()
        }
    );
    assert!(!row.action.text().contains("/srv/app"));
    assert_eq!(
        row.status,
        StatusCell::Badge {
            text: "completed".to_string(),
            style: BadgeStyle::Success,
            detail: None,
        }
    );
}

#[test]
fn non_completed_or_missing_summary_has_no_action() {
    init_logging();
    let table = table_for(StatusSnapshot {
        results: vec![
            ResultEntry {
                file: "a.mp3".to_string(),
                status: ResultStatus::Error,
                summary_file: Some("/srv/static/a.txt".to_string()),
                message: Some("boom".to_string()),
            },
            ResultEntry {
                file: "b.mp3".to_string(),
                status: ResultStatus::Completed,
                summary_file: None,
                message: None,
            },
            ResultEntry {
                file: "c.mp3".to_string(),
                status: ResultStatus::Duplicate,
                summary_file: None,
                message: Some("Already processed, skipping.".to_string()),
            },
        ],
        ..StatusSnapshot::default()
    });

    for row in &table.rows {
        assert_eq!(row.action, ActionCell::Placeholder);
        assert_eq!(row.action.text(), ACTION_PLACEHOLDER);
    }
    assert!(matches!(
        &table.rows[0].status,
        StatusCell::Badge { style: BadgeStyle::Danger, detail: Some(detail), .. } if detail == "boom"
    ));
}

#[test]
fn progress_is_rendered_as_received() {
    init_logging();
    let table = table_for(StatusSnapshot {
        processing: [
            ("a".to_string(), ProcessingEntry::new(Some("a.mp3"), "starting", 0)),
            ("b".to_string(), ProcessingEntry::new(None, "generating_summary", 100)),
        ]
        .into_iter()
        .collect(),
        ..StatusSnapshot::default()
    });

    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.rows[0].index, "...");
    assert_eq!(table.rows[0].label, "a.mp3");
    assert_eq!(
        table.rows[0].status,
        StatusCell::Progress {
            percent: 0,
            stage: "starting".to_string()
        }
    );
    // No file name: the job id stands in.
    assert_eq!(table.rows[1].label, "b");
    assert_eq!(
        table.rows[1].status,
        StatusCell::Progress {
            percent: 100,
            stage: "generating_summary".to_string()
        }
    );
    assert!(table.rows.iter().all(|row| row.action == ActionCell::Placeholder));
}

#[test]
fn processing_error_is_shown_with_stage() {
    init_logging();
    let mut entry = ProcessingEntry::new(Some("a.mp3"), "transcribing", 40);
    entry.error = Some("api quota".to_string());
    let table = table_for(StatusSnapshot {
        processing: [("a".to_string(), entry)].into_iter().collect(),
        ..StatusSnapshot::default()
    });
    assert_eq!(
        table.rows[0].status,
        StatusCell::Progress {
            percent: 40,
            stage: "transcribing (api quota)".to_string()
        }
    );
}

#[test]
fn empty_file_name_falls_back_to_job_id() {
    init_logging();
    let table = table_for(StatusSnapshot {
        processing: [("job-7".to_string(), ProcessingEntry::new(Some(""), "queued", 0))]
            .into_iter()
            .collect(),
        ..StatusSnapshot::default()
    });
    assert_eq!(table.rows[0].label, "job-7");
}
