//! Corpus loading and the built-in sample set.
//!
//! A corpus is a plain JSON array of documents, either in a single file or
//! spread over a directory of `.json` files merged in sorted filename order.
//! The corpus is read once and treated as read-only from then on.

use std::collections::HashSet;
use std::path::Path;

use crate::error::{Error, Result};
use crate::types::{Document, DocumentType};

/// Load a corpus from `path`: a JSON file holding an array of documents,
/// or a directory of such files.
pub fn load(path: &Path) -> Result<Vec<Document>> {
    let docs = if path.is_dir() { load_dir(path)? } else { load_file(path)? };
    check_unique_ids(&docs)?;
    tracing::debug!(count = docs.len(), path = %path.display(), "corpus loaded");
    Ok(docs)
}

fn load_file(path: &Path) -> Result<Vec<Document>> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| Error::CorpusUnavailable(format!("{}: {}", path.display(), e)))?;
    serde_json::from_str(&raw)
        .map_err(|e| Error::CorpusUnavailable(format!("{}: {}", path.display(), e)))
}

fn load_dir(dir: &Path) -> Result<Vec<Document>> {
    let mut files: Vec<_> = walkdir::WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.path().extension().and_then(|s| s.to_str()) == Some("json"))
        .map(walkdir::DirEntry::into_path)
        .collect();
    files.sort();
    let mut docs = Vec::new();
    for file in &files {
        docs.extend(load_file(file)?);
    }
    Ok(docs)
}

fn check_unique_ids(docs: &[Document]) -> Result<()> {
    let mut seen = HashSet::new();
    for doc in docs {
        if !seen.insert(doc.id) {
            return Err(Error::CorpusUnavailable(format!("duplicate document id {}", doc.id)));
        }
    }
    Ok(())
}

fn doc(
    id: u32,
    title: &str,
    content: &str,
    doc_type: DocumentType,
    size: &str,
    date: &str,
    tags: &[&str],
    author: &str,
    category: &str,
) -> Document {
    Document {
        id,
        title: title.to_string(),
        content: content.to_string(),
        doc_type,
        size: size.to_string(),
        date: date.to_string(),
        tags: tags.iter().map(|t| (*t).to_string()).collect(),
        author: author.to_string(),
        category: category.to_string(),
    }
}

/// The demo corpus the front end falls back to when no corpus path is
/// configured. Five Thai business documents.
pub fn sample_documents() -> Vec<Document> {
    vec![
        doc(
            1,
            "การวิเคราะห์ตลาดการเงิน Q4 2024",
            "รายงานการวิเคราะห์ตลาดการเงินไทยในไตรมาสที่ 4 ของปี 2024 พร้อมแนวโน้มการลงทุน",
            DocumentType::Pdf,
            "2.5 MB",
            "2024-12-15",
            &["การเงิน", "ตลาด", "วิเคราะห์"],
            "ทีมวิจัย",
            "รายงานการเงิน",
        ),
        doc(
            2,
            "คู่มือการใช้งานระบบ CRM",
            "เอกสารคู่มือการใช้งานระบบบริหารลูกค้าสำหรับพนักงานใหม่",
            DocumentType::Docx,
            "1.8 MB",
            "2024-11-20",
            &["คู่มือ", "CRM", "ระบบ"],
            "ฝ่าย IT",
            "คู่มือการใช้งาน",
        ),
        doc(
            3,
            "นโยบายความปลอดภัยข้อมูล",
            "นโยบายและแนวปฏิบัติด้านความปลอดภัยข้อมูลของบริษัท",
            DocumentType::Pdf,
            "950 KB",
            "2024-10-05",
            &["นโยบาย", "ความปลอดภัย", "ข้อมูล"],
            "ฝ่ายกฎหมาย",
            "นโยบาย",
        ),
        doc(
            4,
            "แผนกลยุทธ์ดิจิทัล 2025",
            "แผนการดำเนินงานด้านดิจิทัลทรานส์ฟอร์เมชันสำหรับปี 2025",
            DocumentType::Pptx,
            "4.2 MB",
            "2024-12-01",
            &["กลยุทธ์", "ดิจิทัล", "แผน"],
            "ฝ่ายกลยุทธ์",
            "แผนงาน",
        ),
        doc(
            5,
            "รายงานผลการดำเนินงาน Q3 2024",
            "สรุปผลการดำเนินงานและผลประกอบการในไตรมาสที่ 3",
            DocumentType::Xlsx,
            "3.1 MB",
            "2024-09-30",
            &["รายงาน", "ผลงาน", "Q3"],
            "ฝ่ายบัญชี",
            "รายงานการเงิน",
        ),
    ]
}
