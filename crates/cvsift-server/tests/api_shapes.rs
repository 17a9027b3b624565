//! API shape tests — validates that upload/list responses keep the field
//! names a table-rendering client expects, and runs the extraction
//! pipeline end to end over fixture documents.

use std::io::Write;

use cvsift_ingest::{Processor, SourceDocument};

fn docx_bytes(paragraphs: &[&str]) -> Vec<u8> {
    let mut body = String::new();
    for p in paragraphs {
        body.push_str(&format!("<w:p><w:r><w:t>{}</w:t></w:r></w:p>", p));
    }
    let xml = format!(
        "<?xml version=\"1.0\"?><w:document><w:body>{}</w:body></w:document>",
        body
    );

    let mut cursor = std::io::Cursor::new(Vec::new());
    let mut writer = zip::ZipWriter::new(&mut cursor);
    writer
        .start_file("word/document.xml", zip::write::SimpleFileOptions::default())
        .unwrap();
    writer.write_all(xml.as_bytes()).unwrap();
    writer.finish().unwrap();
    cursor.into_inner()
}

fn english_fixture() -> Vec<u8> {
    docx_bytes(&[
        "Name: John Smith",
        "Age: 29",
        "I am a software engineer with ten years of experience building web services.",
        "",
        "Education",
        "Bachelor of Science, State University",
        "",
        "Experience",
        "Backend developer at Acme.",
    ])
}

fn spanish_fixture() -> Vec<u8> {
    docx_bytes(&[
        "Nombre",
        "Carlos Gomez",
        "Edad: 34 años",
        "Soy un ingeniero de software con diez años de experiencia en sistemas distribuidos.",
        "",
        "Formación Académica",
        "Licenciatura en Informática, Universidad de Madrid",
    ])
}

/// Verify the upload response shape:
/// { processed: [record...], errors: [{file_name, error}], total }
#[test]
fn test_upload_response_shape() {
    let response = serde_json::json!({
        "processed": [{
            "name": "John Smith",
            "age": "29",
            "education": "Bachelor",
            "language": "English",
            "file_name": "resume.docx",
            "processed_at": "2026-01-01T00:00:00Z",
        }],
        "errors": [{
            "file_name": "notes.txt",
            "error": "Unsupported file type: txt. Please upload a PDF or DOCX file.",
        }],
        "total": 2,
    });

    assert!(response["processed"].is_array());
    assert!(response["processed"][0]["name"].is_string());
    assert!(response["processed"][0]["file_name"].is_string());
    assert!(response["errors"][0]["error"].is_string());
    assert!(response["total"].is_number());
}

/// Verify the results-table shape: rows carry exactly the four displayed
/// columns; file_name stays internal.
#[test]
fn test_table_rows_exclude_file_name() {
    let row = serde_json::json!({
        "name": "John Smith",
        "age": "29",
        "education": "Bachelor",
        "language": "English",
    });

    let obj = row.as_object().unwrap();
    assert_eq!(obj.len(), 4);
    assert!(obj.get("file_name").is_none());
}

/// End-to-end: two fixture documents yield a two-row batch with the right
/// fields per file.
#[test]
fn test_two_document_batch() {
    let docs = vec![
        SourceDocument {
            file_name: "english.docx".into(),
            bytes: english_fixture(),
        },
        SourceDocument {
            file_name: "spanish.docx".into(),
            bytes: spanish_fixture(),
        },
    ];

    let outcome = Processor::new().process_batch(&docs);
    assert_eq!(outcome.records.len(), 2);
    assert!(outcome.errors.is_empty());

    let en = &outcome.records[0];
    assert_eq!(en.name, "John Smith");
    assert_eq!(en.age, "29");
    assert!(en.education.contains("Bachelor"));
    assert_eq!(en.language, "English");
    assert_eq!(en.file_name, "english.docx");

    let es = &outcome.records[1];
    assert_eq!(es.name, "Carlos Gomez");
    assert_eq!(es.age, "34");
    assert!(es.education.contains("Licenciatura"));
    assert_eq!(es.language, "Spanish");
}

/// End-to-end: a batch mixing good and unsupported files reports one
/// error and keeps going.
#[test]
fn test_batch_reports_unsupported_files() {
    let docs = vec![
        SourceDocument {
            file_name: "notes.txt".into(),
            bytes: b"just text".to_vec(),
        },
        SourceDocument {
            file_name: "english.docx".into(),
            bytes: english_fixture(),
        },
    ];

    let outcome = Processor::new().process_batch(&docs);
    assert_eq!(outcome.records.len(), 1);
    assert_eq!(outcome.errors.len(), 1);
    assert_eq!(outcome.errors[0].file_name, "notes.txt");
    assert!(outcome.errors[0].error.contains("Unsupported"));
}

/// CSV export contract: header row name,age,education,language and one
/// row per record in insertion order.
#[test]
fn test_csv_export_contract() {
    let docs = vec![
        SourceDocument {
            file_name: "english.docx".into(),
            bytes: english_fixture(),
        },
        SourceDocument {
            file_name: "spanish.docx".into(),
            bytes: spanish_fixture(),
        },
    ];
    let outcome = Processor::new().process_batch(&docs);

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(["name", "age", "education", "language"])
        .unwrap();
    for r in &outcome.records {
        writer
            .write_record([&r.name, &r.age, &r.education, &r.language])
            .unwrap();
    }
    let csv = String::from_utf8(writer.into_inner().unwrap()).unwrap();

    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "name,age,education,language");
    assert_eq!(lines.len(), 3);
    assert!(lines[1].starts_with("John Smith,29"));
    assert!(lines[2].starts_with("Carlos Gomez,34"));
}
